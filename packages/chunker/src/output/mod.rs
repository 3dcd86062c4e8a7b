//! Serialised chunk output.
//!
//! Chunks become [`ChunkDocument`]s with string-only metadata and are written
//! as JSON or YAML.

mod document;
mod writer;

pub use document::{assign_document_ids, documents_from_chunks, ChunkDocument};
pub use writer::{render_documents, save_documents, OutputFormat};
