//! Hierarchy-aware chunking of statute text.
//!
//! The [`LegalChunker`] cuts a document at heading boundaries, walks the
//! segments while tracking the active chapter, section and article, and
//! emits heading chunks plus merged content chunks bounded by the configured
//! size. Documents without enough headings are cut by [`fallback_split`].

mod context;
mod engine;
mod fallback;
mod metadata;
mod splitter;

pub use context::HierarchyContext;
pub use engine::LegalChunker;
pub use fallback::fallback_split;
pub use metadata::{build_attributes, ARTICLE_KEYWORD};
pub use splitter::{RecursiveSplitter, DEFAULT_SEPARATORS};
