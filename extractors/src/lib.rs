//! Extractors Crate
//!
//! Turns a ZIP archive of resumes into a spreadsheet of contact details.
//! The crate has no web or storage concerns so it can be driven from the API
//! server and from the command line alike.
//!
//! # Architecture
//!
//! - **Types**: Records, errors and matcher traits live in the `shared-types` crate
//! - **archive**: Lazy walk over the ZIP container, in storage order
//! - **documents**: PDF / DOCX / DOC text extraction
//! - **contact_patterns**: Email and phone number matching and normalization
//! - **report**: XLSX assembly
//! - **pipeline**: Wires the stages together with per-entry failure isolation
//!
//! # Example
//!
//! ```rust,ignore
//! use extractors::ResumePipeline;
//!
//! let output = ResumePipeline::default().run(&zip_bytes)?;
//! std::fs::write("resumes_report.xlsx", output.report)?;
//! ```

pub mod archive;
pub mod contact_patterns;
pub mod documents;
pub mod pipeline;
pub mod report;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use archive::{ArchiveWalker, WalkItem, DEFAULT_MAX_ENTRY_BYTES};
pub use contact_patterns::{ContactFields, FieldExtractor};
pub use documents::{DocumentError, DocumentTextExtractor, TextExtractor};
pub use pipeline::{
    collapse_whitespace, BatchOutcome, PipelineConfig, PipelineError, ReportOutput,
    ResumePipeline,
};
pub use report::{build_report, ReportError, REPORT_CONTENT_TYPE, REPORT_FILENAME};
