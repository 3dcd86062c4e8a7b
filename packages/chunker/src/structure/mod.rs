//! Recognition of the statute hierarchy in normalized text.
//!
//! Three ordered pattern families (chapter, section, article) locate heading
//! offsets across a document and classify individual segments.

mod matcher;
mod patterns;

pub use matcher::{Heading, StructureMatcher};
