//! Index-ready documents built from chunks.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::DOCUMENT_BATCH_SIZE;
use crate::types::Chunk;

/// One entry for a vector index "add documents" call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkDocument {
    /// Stable id within one output set (`doc_{batch_start}_{position}`).
    pub id: String,

    /// Chunk text.
    pub content: String,

    /// Chunk attributes plus `source` and `is_valid`.
    pub metadata: BTreeMap<String, String>,
}

impl ChunkDocument {
    /// Build a document from a chunk. The id is assigned later by
    /// [`assign_document_ids`].
    #[must_use]
    pub fn from_chunk(chunk: &Chunk, source: &str) -> Self {
        let mut metadata = chunk.attributes.clone();
        metadata.insert("source".to_string(), source.to_string());
        metadata.insert(
            "is_valid".to_string(),
            if chunk.is_valid { "True" } else { "False" }.to_string(),
        );

        Self {
            id: String::new(),
            content: chunk.content.clone(),
            metadata,
        }
    }
}

/// Convert the chunks of one source file into documents with ids.
#[must_use]
pub fn documents_from_chunks(chunks: &[Chunk], source: &str) -> Vec<ChunkDocument> {
    let mut documents: Vec<ChunkDocument> = chunks
        .iter()
        .map(|chunk| ChunkDocument::from_chunk(chunk, source))
        .collect();
    assign_document_ids(&mut documents);
    documents
}

/// Number documents in groups of [`DOCUMENT_BATCH_SIZE`].
///
/// The document at position `p` gets `doc_{b}_{j}` where `b` is the offset of
/// its group and `j` its index within the group, so the 52nd document is
/// `doc_50_1`.
pub fn assign_document_ids(documents: &mut [ChunkDocument]) {
    for (batch, group) in documents.chunks_mut(DOCUMENT_BATCH_SIZE).enumerate() {
        let batch_start = batch * DOCUMENT_BATCH_SIZE;
        for (j, document) in group.iter_mut().enumerate() {
            document.id = format!("doc_{batch_start}_{j}");
        }
    }
}
