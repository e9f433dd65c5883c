//! Build a resume report from a ZIP archive without running the server.
//!
//! ```bash
//! resume-report --input resumes.zip --output resumes_report.xlsx
//! ```

use anyhow::Context;
use clap::Parser;
use extractors::{PipelineConfig, ResumePipeline, DEFAULT_MAX_ENTRY_BYTES, REPORT_FILENAME};
use shared_types::EntryStatus;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Extract emails and phone numbers from a ZIP of resumes")]
struct Args {
    /// ZIP archive holding PDF, DOCX or DOC resumes
    #[arg(long)]
    input: PathBuf,

    #[arg(long, default_value = REPORT_FILENAME)]
    output: PathBuf,

    /// Largest decompressed entry to read, in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_ENTRY_BYTES)]
    max_entry_bytes: u64,
}

fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = Args::parse();

    let archive = std::fs::read(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let pipeline = ResumePipeline::new(PipelineConfig {
        max_entry_bytes: args.max_entry_bytes,
    });
    let output = pipeline
        .run(&archive)
        .with_context(|| format!("Failed to process {}", args.input.display()))?;

    std::fs::write(&args.output, &output.report)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    let summary = &output.outcome.summary;
    println!(
        "{}: {} processed, {} skipped, {} failed",
        args.output.display(),
        summary.processed_count,
        summary.skipped_count,
        summary.failed_count
    );

    for entry in summary
        .entries
        .iter()
        .filter(|e| e.status == EntryStatus::Failed)
    {
        println!(
            "  failed: {} ({})",
            entry.name,
            entry.detail.as_deref().unwrap_or("unknown error")
        );
    }

    Ok(())
}
