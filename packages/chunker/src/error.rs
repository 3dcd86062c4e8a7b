//! Error types for the chunker.
//!
//! The chunking transform itself never fails; the only error it can raise is
//! an invalid configuration, detected once at construction. The remaining
//! variants belong to the output, batch and CLI layers around it.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the chunker library.
#[derive(Debug, Error)]
pub enum ChunkerError {
    /// Chunk size or overlap out of range.
    #[error("Invalid chunker configuration: {0}")]
    InvalidConfig(String),

    /// Batch input path is not a directory.
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Unsupported output format name.
    #[error("Unknown output format: '{0}'. Expected 'json' or 'yaml'")]
    UnknownFormat(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to read an input text file.
    #[error("Failed to read {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

/// Result type alias for chunker operations.
pub type Result<T> = std::result::Result<T, ChunkerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChunkerError::InvalidConfig("overlap 900 >= chunk size 800".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid chunker configuration: overlap 900 >= chunk size 800"
        );
    }

    #[test]
    fn test_unknown_format_display() {
        let err = ChunkerError::UnknownFormat("xml".to_string());
        assert!(err.to_string().contains("'xml'"));
        assert!(err.to_string().contains("json"));
    }

    #[test]
    fn test_read_input_display() {
        let err = ChunkerError::ReadInput {
            path: PathBuf::from("pdfs/civil_law_code.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read pdfs/civil_law_code.txt: missing"
        );
    }
}
