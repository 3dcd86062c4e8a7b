//! Command-line interface for the chunker.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::batch::{process_directory, read_document, FileResult};
use crate::chunking::LegalChunker;
use crate::config::ChunkerConfig;
use crate::error::Result;
use crate::output::{
    documents_from_chunks, render_documents, save_documents, ChunkDocument, OutputFormat,
};
use crate::statute::StatuteTable;

/// Qanun Chunker - Split Azerbaijani legal codes into retrieval chunks.
#[derive(Parser)]
#[command(name = "qanun-chunker")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Chunk size flags shared by the chunking commands.
#[derive(clap::Args, Debug, Clone, Copy, Default)]
pub struct SizeArgs {
    /// Target chunk size in characters (default: $CHUNK_SIZE or 800)
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Overlap between re-split chunks (default: $CHUNK_OVERLAP or 100)
    #[arg(long)]
    pub chunk_overlap: Option<usize>,
}

impl SizeArgs {
    /// Environment configuration with explicit flags applied on top.
    #[must_use]
    pub fn to_config(self) -> ChunkerConfig {
        let mut config = ChunkerConfig::from_env();
        if let Some(size) = self.chunk_size {
            config.chunk_size = size;
        }
        if let Some(overlap) = self.chunk_overlap {
            config.chunk_overlap = overlap;
        }
        config
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Chunk a single extracted text file.
    Chunk {
        /// Path to the extracted text
        input: PathBuf,

        /// Statute code (default: looked up from the file name)
        #[arg(short, long)]
        statute: Option<String>,

        #[command(flatten)]
        sizes: SizeArgs,

        /// Output format: json or yaml
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Chunk every .txt file in a directory.
    Batch {
        /// Directory with extracted texts
        dir: PathBuf,

        #[command(flatten)]
        sizes: SizeArgs,

        /// Output format: json or yaml
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List known statute codes.
    Statutes,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Chunk {
            input,
            statute,
            sizes,
            format,
            output,
        } => chunk_command(
            &input,
            statute.as_deref(),
            sizes,
            &format,
            output.as_deref(),
        ),
        Commands::Batch {
            dir,
            sizes,
            format,
            output,
        } => batch_command(&dir, sizes, &format, output.as_deref()),
        Commands::Statutes => {
            statutes_command();
            Ok(())
        }
    }
}

fn build_chunker(sizes: SizeArgs) -> Result<LegalChunker> {
    LegalChunker::new(
        sizes.to_config(),
        Arc::new(StatuteTable::azerbaijani_codes()),
    )
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Write documents to a file, or to stdout when no path is given.
fn emit_documents(
    documents: &[ChunkDocument],
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    match output {
        Some(path) => {
            save_documents(documents, path, format)?;
            eprintln!("{} {}", style("Saved to:").green().bold(), path.display());
        }
        None => print!("{}", render_documents(documents, format)?),
    }
    Ok(())
}

/// Execute the chunk command.
fn chunk_command(
    input: &Path,
    statute: Option<&str>,
    sizes: SizeArgs,
    format: &str,
    output: Option<&Path>,
) -> Result<()> {
    // Validate arguments before reading anything
    let format = OutputFormat::parse(format)?;
    let chunker = build_chunker(sizes)?;

    let statute = match statute {
        Some(code) => chunker.statutes().resolve(code),
        None => {
            let file_name = input
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            chunker.statutes().resolve_filename(&file_name)
        }
    };

    eprintln!(
        "{} {} as {}",
        style("Chunking").bold(),
        style(input.display()).cyan(),
        style(&statute.name_en).green()
    );

    let text = read_document(input)?;
    let pb = spinner("Chunking...");
    let chunks = chunker.chunk(&text, &statute.code);
    pb.finish_and_clear();

    eprintln!("  Characters: {}", text.chars().count());
    eprintln!("  Chunks: {}", chunks.len());

    let documents = documents_from_chunks(&chunks, &input.display().to_string());
    emit_documents(&documents, format, output)
}

/// Execute the batch command.
fn batch_command(
    dir: &Path,
    sizes: SizeArgs,
    format: &str,
    output: Option<&Path>,
) -> Result<()> {
    let format = OutputFormat::parse(format)?;
    let chunker = build_chunker(sizes)?;

    eprintln!(
        "{} {}",
        style("Processing").bold(),
        style(dir.display()).cyan()
    );

    let pb = spinner("Chunking files...");
    let report = match process_directory(dir, &chunker) {
        Ok(report) => report,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };
    pb.finish_and_clear();

    for file in &report.files {
        let name = file.path.display();
        match &file.result {
            FileResult::Chunked(chunks) => eprintln!(
                "  {} {} ({}): {} chunks",
                style("✓").green(),
                name,
                file.statute.code,
                chunks.len()
            ),
            FileResult::Skipped { chars } => eprintln!(
                "  {} {}: only {} characters, skipped",
                style("!").yellow(),
                name,
                chars
            ),
            FileResult::Failed(err) => eprintln!("  {} {}: {}", style("✗").red(), name, err),
        }
    }

    eprintln!();
    eprintln!(
        "  Files: {} chunked, {} skipped, {} failed",
        report.chunked_count(),
        style(report.skipped_count()).yellow(),
        style(report.failed_count()).red()
    );
    eprintln!("  Chunks: {}", style(report.chunk_count()).bold());

    emit_documents(&report.documents(), format, output)
}

/// Execute the statutes command.
fn statutes_command() {
    let table = StatuteTable::azerbaijani_codes();
    for info in table.iter() {
        println!(
            "{:<14} {:<32} {}",
            style(&info.code).cyan(),
            info.filename,
            info.name_az
        );
    }
}
