//! Core data types for the chunker.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Flat string metadata attached to every chunk.
///
/// Never holds empty placeholder values: absent hierarchy levels contribute
/// no keys at all.
pub type Attributes = BTreeMap<String, String>;

/// What a chunk is, not merely what it contains.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChunkType {
    /// Chapter heading (Fəsil).
    Chapter,

    /// Section or part heading (Bölüm, Hissə).
    Section,

    /// Article heading (Maddə, Bənd), usually with its opening text.
    Article,

    /// Body text under the active hierarchy.
    Content,
}

impl ChunkType {
    /// Whether this chunk carries a heading rather than body text.
    #[must_use]
    pub fn is_structural(self) -> bool {
        !matches!(self, Self::Content)
    }
}

/// A unit of chunker output.
///
/// Hierarchy labels are a snapshot of the walk state when the chunk was
/// produced. Chunks are built once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Normalized text body.
    pub content: String,

    /// Code of the source statute, as supplied by the caller.
    pub statute_id: String,

    /// Enclosing chapter label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter: Option<String>,

    /// Enclosing section label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,

    /// Enclosing article label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article: Option<String>,

    /// Dotted article number (e.g. "127.1.1"), only on article chunks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_article: Option<String>,

    /// Chunk classification.
    pub chunk_type: ChunkType,

    /// False when the source marked this text as repealed or struck through.
    pub is_valid: bool,

    /// String-only metadata for a vector index.
    pub attributes: Attributes,
}

impl Chunk {
    /// Length of the content in characters.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }
}
