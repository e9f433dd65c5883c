//! Archive-to-report pipeline
//!
//! Walks the archive, extracts text from each supported entry, pulls out the
//! canonical email and contact, and assembles the spreadsheet. Only a corrupt
//! container aborts the batch; every entry-level problem is counted in the
//! [`BatchSummary`] and processing moves on to the next entry.

use crate::archive::{ArchiveWalker, WalkItem, DEFAULT_MAX_ENTRY_BYTES};
use crate::contact_patterns::FieldExtractor;
use crate::documents::DocumentTextExtractor;
use crate::report::{build_report, ReportError};
use shared_types::{
    ArchiveEntry, ArchiveError, BatchSummary, DocumentFormat, EntryStatus, ExtractionError,
    ResumeRecord,
};

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Largest decompressed entry the walker will read
    pub max_entry_bytes: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_entry_bytes: DEFAULT_MAX_ENTRY_BYTES,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Archive(#[from] ArchiveError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Records of one batch, in archive order, plus the per-entry accounting.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    pub records: Vec<ResumeRecord>,
    pub summary: BatchSummary,
}

/// A finished spreadsheet together with the batch it was built from.
#[derive(Debug)]
pub struct ReportOutput {
    pub report: Vec<u8>,
    pub outcome: BatchOutcome,
}

pub struct ResumePipeline {
    config: PipelineConfig,
    text_extractor: DocumentTextExtractor,
    field_extractor: FieldExtractor,
}

impl ResumePipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            text_extractor: DocumentTextExtractor::new(),
            field_extractor: FieldExtractor::new(),
        }
    }

    pub fn with_field_extractor(mut self, field_extractor: FieldExtractor) -> Self {
        self.field_extractor = field_extractor;
        self
    }

    /// Run the whole batch and build the spreadsheet.
    pub fn run(&self, archive_bytes: &[u8]) -> Result<ReportOutput, PipelineError> {
        let outcome = self.process_archive(archive_bytes)?;
        let report = build_report(&outcome.records)?;

        Ok(ReportOutput { report, outcome })
    }

    /// Walk the archive and turn every supported entry into a record.
    pub fn process_archive(&self, archive_bytes: &[u8]) -> Result<BatchOutcome, ArchiveError> {
        let walker = ArchiveWalker::from_bytes(archive_bytes)?
            .with_max_entry_bytes(self.config.max_entry_bytes)
            .documents_only();

        tracing::debug!("Processing archive with {} entries", walker.len());

        let mut outcome = BatchOutcome::default();

        for item in walker {
            match item {
                Ok(WalkItem::Entry(entry)) => {
                    let name = entry.name.clone();
                    let format = entry.format();

                    match self.process_entry(format, entry) {
                        Ok(record) => {
                            tracing::debug!("Extracted {} ({})", name, format);
                            outcome.records.push(record);
                            outcome.summary.record(name, EntryStatus::Processed, None);
                        }
                        Err(e) => {
                            tracing::warn!("Skipping {}: {}", name, e);
                            outcome
                                .summary
                                .record(name, EntryStatus::Failed, Some(e.to_string()));
                        }
                    }
                }
                Ok(WalkItem::Skipped { name, reason }) => {
                    tracing::debug!("Ignoring {}: {}", name, reason);
                    outcome
                        .summary
                        .record(name, EntryStatus::Skipped, Some(reason.to_string()));
                }
                Err(e) if e.is_entry_level() => {
                    tracing::warn!("{}", e);
                    let name = match &e {
                        ArchiveError::EntryRead { name, .. }
                        | ArchiveError::EntryTooLarge { name, .. } => name.clone(),
                        ArchiveError::Corrupt(_) => String::new(),
                    };
                    outcome
                        .summary
                        .record(name, EntryStatus::Failed, Some(e.to_string()));
                }
                Err(e) => return Err(e),
            }
        }

        tracing::info!(
            "Batch finished: {} processed, {} skipped, {} failed",
            outcome.summary.processed_count,
            outcome.summary.skipped_count,
            outcome.summary.failed_count
        );

        Ok(outcome)
    }

    /// Text extraction, whitespace collapse and field extraction for one entry.
    pub fn process_entry(
        &self,
        format: DocumentFormat,
        entry: ArchiveEntry,
    ) -> Result<ResumeRecord, ExtractionError> {
        let document = self.text_extractor.extract(format, entry)?;
        let text = collapse_whitespace(&document.raw_text);
        let fields = self.field_extractor.extract(&text);

        Ok(ResumeRecord {
            email: fields.canonical_email(),
            contact: fields.canonical_contact(),
            text,
        })
    }
}

impl Default for ResumePipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

/// Collapse every run of whitespace to a single space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
