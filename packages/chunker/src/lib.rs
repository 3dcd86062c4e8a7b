//! Qanun Chunker - Hierarchy-preserving chunking of Azerbaijani legal codes.
//!
//! This crate turns the raw text extracted from a statute PDF into ordered
//! chunks suitable for a retrieval index. Each chunk records the chapter,
//! section and article it belongs to, and repealed text never reaches the
//! output.
//!
//! # Example
//!
//! ```
//! use qanun_chunker::{ChunkType, LegalChunker};
//!
//! let chunker = LegalChunker::default();
//! let chunks = chunker.chunk("Fəsil I Ümumi müddəalar Maddə 1 Mülki qanunvericilik", "civil");
//!
//! assert_eq!(chunks[0].chunk_type, ChunkType::Chapter);
//! assert_eq!(chunks[1].chapter.as_deref(), Some("Fəsil I"));
//! assert_eq!(chunks[1].sub_article.as_deref(), Some("1"));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Configuration constants and validation
//! - [`types`]: Core data types (Chunk, ChunkType)
//! - [`error`]: Error types and Result alias
//! - [`statute`]: Statute code table
//! - [`normalize`]: Text cleanup and invalidation detection
//! - [`structure`]: Heading patterns and boundary discovery
//! - [`chunking`]: Hierarchical chunker, re-splitter and fallback splitter
//! - [`output`]: Index documents and JSON/YAML writers
//! - [`batch`]: Parallel directory processing
//! - [`cli`]: Command-line interface

pub mod batch;
pub mod chunking;
pub mod cli;
pub mod config;
pub mod error;
pub mod normalize;
pub mod output;
pub mod statute;
pub mod structure;
pub mod types;

// Re-export commonly used items
pub use chunking::LegalChunker;
pub use config::ChunkerConfig;
pub use error::{ChunkerError, Result};
pub use normalize::{normalize, Normalized};
pub use statute::{StatuteInfo, StatuteTable};
pub use types::{Attributes, Chunk, ChunkType};
