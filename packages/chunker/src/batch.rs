//! Parallel chunking of a directory of extracted statute texts.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::chunking::LegalChunker;
use crate::config::MIN_DOCUMENT_CHARS;
use crate::error::{ChunkerError, Result};
use crate::output::{assign_document_ids, ChunkDocument};
use crate::statute::StatuteInfo;
use crate::types::Chunk;

/// What happened to one input file.
#[derive(Debug)]
pub enum FileResult {
    /// The file was chunked.
    Chunked(Vec<Chunk>),

    /// The text was too short to be a successful extraction.
    Skipped { chars: usize },

    /// The file could not be read.
    Failed(ChunkerError),
}

/// Result for one input file.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub statute: StatuteInfo,
    pub result: FileResult,
}

impl FileOutcome {
    /// Chunks produced for this file, empty unless it was chunked.
    #[must_use]
    pub fn chunks(&self) -> &[Chunk] {
        match &self.result {
            FileResult::Chunked(chunks) => chunks,
            FileResult::Skipped { .. } | FileResult::Failed(_) => &[],
        }
    }
}

/// Per-file outcomes of a directory run, in file name order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub files: Vec<FileOutcome>,
}

impl BatchReport {
    /// Total chunks over all files.
    #[must_use]
    pub fn chunk_count(&self) -> usize {
        self.files.iter().map(|f| f.chunks().len()).sum()
    }

    /// Number of files that were chunked.
    #[must_use]
    pub fn chunked_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.result, FileResult::Chunked(_)))
            .count()
    }

    /// Number of files skipped as too short.
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.result, FileResult::Skipped { .. }))
            .count()
    }

    /// Number of files that could not be read.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.result, FileResult::Failed(_)))
            .count()
    }

    /// All chunks as documents, numbered across the whole batch.
    #[must_use]
    pub fn documents(&self) -> Vec<ChunkDocument> {
        let mut documents: Vec<ChunkDocument> = self
            .files
            .iter()
            .flat_map(|file| {
                let source = file.path.display().to_string();
                file.chunks()
                    .iter()
                    .map(move |chunk| ChunkDocument::from_chunk(chunk, &source))
                    .collect::<Vec<_>>()
            })
            .collect();
        assign_document_ids(&mut documents);
        documents
    }
}

/// Read an input text file.
pub fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ChunkerError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

/// List `*.txt` files directly inside `dir`, sorted by path.
pub fn list_text_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ChunkerError::NotADirectory(dir.to_path_buf()));
    }

    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
        })
        .collect();
    files.sort();
    Ok(files)
}

/// Chunk one file, resolving its statute from the file name.
pub fn chunk_file(path: &Path, chunker: &LegalChunker) -> FileOutcome {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let statute = chunker.statutes().resolve_filename(&file_name);

    let result = match read_document(path) {
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "Failed to read input file");
            FileResult::Failed(err)
        }
        Ok(text) => {
            let chars = text.chars().count();
            if chars < MIN_DOCUMENT_CHARS {
                tracing::warn!(
                    path = %path.display(),
                    chars,
                    "Insufficient text extracted, skipping"
                );
                FileResult::Skipped { chars }
            } else {
                FileResult::Chunked(chunker.chunk(&text, &statute.code))
            }
        }
    };

    FileOutcome {
        path: path.to_path_buf(),
        statute,
        result,
    }
}

/// Chunk every text file in a directory in parallel.
///
/// Unreadable and too-short files are recorded in the report without
/// aborting the run.
///
/// # Errors
/// Returns an error only if `dir` is not a readable directory.
pub fn process_directory(dir: &Path, chunker: &LegalChunker) -> Result<BatchReport> {
    let paths = list_text_files(dir)?;
    tracing::info!(dir = %dir.display(), files = paths.len(), "Processing directory");

    let files: Vec<FileOutcome> = paths
        .par_iter()
        .map(|path| chunk_file(path, chunker))
        .collect();

    let report = BatchReport { files };
    tracing::info!(
        chunked = report.chunked_count(),
        skipped = report.skipped_count(),
        failed = report.failed_count(),
        chunks = report.chunk_count(),
        "Directory processed"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn statute_text() -> String {
        let mut text = String::from("Fəsil I Ümumi müddəalar\n");
        for n in 1..=12 {
            text.push_str(&format!(
                "Maddə {n} Mülki hüquq münasibətlərinin iştirakçıları bərabərdirlər və öz \
                 hüquqlarını müstəqil həyata keçirirlər.\n"
            ));
        }
        text
    }

    #[test]
    fn test_list_text_files_sorted_and_filtered() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.TXT"), "a").unwrap();
        fs::write(dir.path().join("c.pdf"), "c").unwrap();
        fs::create_dir(dir.path().join("d.txt")).unwrap();

        let files = list_text_files(dir.path()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.TXT", "b.txt"]);
    }

    #[test]
    fn test_list_text_files_rejects_non_directory() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("x.txt");
        fs::write(&file, "x").unwrap();
        assert!(matches!(
            list_text_files(&file),
            Err(ChunkerError::NotADirectory(_))
        ));
    }

    #[test]
    fn test_process_directory_resolves_statutes_and_skips_short_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("civil_law_code.txt"), statute_text()).unwrap();
        fs::write(dir.path().join("short.txt"), "Maddə 1. Qısa.").unwrap();

        let report = process_directory(dir.path(), &LegalChunker::default()).unwrap();

        assert_eq!(report.files.len(), 2);
        assert_eq!(report.chunked_count(), 1);
        assert_eq!(report.skipped_count(), 1);
        assert_eq!(report.failed_count(), 0);

        let civil = &report.files[0];
        assert_eq!(civil.statute.code, "civil");
        assert_eq!(civil.chunks().len(), 13);
        assert!(civil.chunks().iter().all(|c| c.statute_id == "civil"));

        let short = &report.files[1];
        assert_eq!(short.statute.code, "unknown");
        assert!(matches!(short.result, FileResult::Skipped { chars: 14 }));
    }

    #[test]
    fn test_documents_are_numbered_across_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("civil_law_code.txt"), statute_text()).unwrap();
        fs::write(dir.path().join("labor_law_code.txt"), statute_text()).unwrap();

        let report = process_directory(dir.path(), &LegalChunker::default()).unwrap();
        let documents = report.documents();

        assert_eq!(documents.len(), report.chunk_count());
        assert_eq!(documents[0].id, "doc_0_0");
        assert_eq!(documents[13].id, "doc_0_13");
        assert!(documents[0].metadata["source"].ends_with("civil_law_code.txt"));
        assert!(documents[13].metadata["source"].ends_with("labor_law_code.txt"));
    }
}
