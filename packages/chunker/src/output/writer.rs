//! JSON and YAML writers for chunk documents.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use strum::{AsRefStr, Display, EnumString};

use super::document::ChunkDocument;
use crate::error::{ChunkerError, Result};

/// Serialisation format for output files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    /// Pretty-printed JSON array.
    #[default]
    Json,

    /// YAML sequence with a leading document marker.
    Yaml,
}

impl OutputFormat {
    /// Parse a format name.
    ///
    /// # Errors
    /// Returns `ChunkerError::UnknownFormat` for anything but `json` or `yaml`.
    pub fn parse(name: &str) -> Result<Self> {
        Self::from_str(name).map_err(|_| ChunkerError::UnknownFormat(name.to_string()))
    }

    /// File extension for this format.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// Serialise documents to a string.
pub fn render_documents(documents: &[ChunkDocument], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut content = serde_json::to_string_pretty(documents)?;
            content.push('\n');
            Ok(content)
        }
        OutputFormat::Yaml => {
            let body = serde_yaml_ng::to_string(documents)?;
            Ok(format!("---\n{body}"))
        }
    }
}

/// Write documents to `path`, replacing any existing file.
///
/// Content goes to a hidden temp file next to the target, which is synced and
/// then renamed over it.
pub fn save_documents(documents: &[ChunkDocument], path: &Path, format: OutputFormat) -> Result<()> {
    let content = render_documents(documents, format)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => Path::new(".").to_path_buf(),
    };
    fs::create_dir_all(&dir)?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| format!("chunks.{}", format.extension()));
    let temp_file = dir.join(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_file, path)?;

    tracing::debug!(
        path = %path.display(),
        documents = documents.len(),
        format = %format,
        "Wrote chunk documents"
    );
    Ok(())
}
