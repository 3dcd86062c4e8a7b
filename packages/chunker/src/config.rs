//! Configuration constants and validation for the chunker.

use crate::error::{ChunkerError, Result};

/// Default target chunk size in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 800;

/// Default overlap between consecutive re-split content chunks, in characters.
pub const DEFAULT_CHUNK_OVERLAP: usize = 100;

/// Minimum length of a merged content chunk.
pub const MIN_CONTENT_CHARS: usize = 50;

/// Minimum length of a plain segment for it to be buffered at all.
pub const MIN_SEGMENT_CHARS: usize = 20;

/// Fallback tiers below this piece count degrade to the next tier.
pub const FALLBACK_MIN_PIECES: usize = 5;

/// Extracted documents shorter than this are treated as failed extractions.
pub const MIN_DOCUMENT_CHARS: usize = 1000;

/// Number of documents per id group in serialised output.
pub const DOCUMENT_BATCH_SIZE: usize = 50;

/// Environment variable overriding the chunk size.
pub const CHUNK_SIZE_ENV: &str = "CHUNK_SIZE";

/// Environment variable overriding the chunk overlap.
pub const CHUNK_OVERLAP_ENV: &str = "CHUNK_OVERLAP";

/// Sizing parameters for [`LegalChunker`](crate::chunking::LegalChunker).
///
/// All lengths are counted in characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkerConfig {
    /// Upper bound for a content chunk before it is re-split.
    pub chunk_size: usize,

    /// Maximum text shared by consecutive re-split chunks.
    pub chunk_overlap: usize,

    /// Merged content shorter than this is discarded.
    pub min_content_chars: usize,

    /// Plain segments shorter than this are never buffered.
    pub min_segment_chars: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            min_content_chars: MIN_CONTENT_CHARS,
            min_segment_chars: MIN_SEGMENT_CHARS,
        }
    }
}

impl ChunkerConfig {
    /// Create a configuration with the given size and overlap.
    #[must_use]
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        Self {
            chunk_size,
            chunk_overlap,
            ..Self::default()
        }
    }

    /// Read `CHUNK_SIZE` / `CHUNK_OVERLAP` from the environment.
    ///
    /// Missing or unparsable values fall back to the defaults. The result is
    /// not validated here; [`LegalChunker::new`](crate::chunking::LegalChunker::new)
    /// rejects it if the sizes are out of range.
    #[must_use]
    pub fn from_env() -> Self {
        let chunk_size = std::env::var(CHUNK_SIZE_ENV)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CHUNK_SIZE);

        let chunk_overlap = std::env::var(CHUNK_OVERLAP_ENV)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CHUNK_OVERLAP);

        Self::new(chunk_size, chunk_overlap)
    }

    /// Set the minimum merged content length.
    #[must_use]
    pub fn with_min_content_chars(mut self, chars: usize) -> Self {
        self.min_content_chars = chars;
        self
    }

    /// Set the minimum plain segment length.
    #[must_use]
    pub fn with_min_segment_chars(mut self, chars: usize) -> Self {
        self.min_segment_chars = chars;
        self
    }

    /// Validate sizes.
    ///
    /// # Returns
    /// * `Ok(())` if both sizes are positive and overlap < chunk size
    /// * `Err(ChunkerError::InvalidConfig)` otherwise
    ///
    /// # Examples
    /// ```
    /// use qanun_chunker::config::ChunkerConfig;
    ///
    /// assert!(ChunkerConfig::new(800, 100).validate().is_ok());
    /// assert!(ChunkerConfig::new(100, 100).validate().is_err());
    /// assert!(ChunkerConfig::new(0, 0).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(ChunkerError::InvalidConfig(
                "chunk size must be positive".to_string(),
            ));
        }
        if self.chunk_overlap == 0 {
            return Err(ChunkerError::InvalidConfig(
                "chunk overlap must be positive".to_string(),
            ));
        }
        if self.chunk_overlap >= self.chunk_size {
            return Err(ChunkerError::InvalidConfig(format!(
                "chunk overlap {} must be smaller than chunk size {}",
                self.chunk_overlap, self.chunk_size
            )));
        }
        Ok(())
    }
}
