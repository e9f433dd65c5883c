use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Finds email-shaped substrings in flattened text.
///
/// Implementations return candidates in document order; callers pick the
/// canonical value.
pub trait EmailMatcher: Send + Sync {
    fn find_emails(&self, text: &str) -> Vec<String>;
}

/// Finds phone-number-shaped substrings in flattened text, in document order.
pub trait ContactMatcher: Send + Sync {
    fn find_contacts(&self, text: &str) -> Vec<String>;
}

/// Document formats the text extractor understands, keyed by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Doc,
    Unsupported,
}

impl DocumentFormat {
    /// Classify an archive entry by its extension (case-insensitive).
    /// Content is never sniffed.
    pub fn from_name(name: &str) -> Self {
        let extension = Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("pdf") => DocumentFormat::Pdf,
            Some("docx") => DocumentFormat::Docx,
            Some("doc") => DocumentFormat::Doc,
            _ => DocumentFormat::Unsupported,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, DocumentFormat::Unsupported)
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
            DocumentFormat::Doc => "doc",
            DocumentFormat::Unsupported => "unsupported",
        };
        f.write_str(label)
    }
}

/// A named byte payload read out of the submitted archive.
#[derive(Debug, Clone)]
pub struct ArchiveEntry {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl ArchiveEntry {
    pub fn format(&self) -> DocumentFormat {
        DocumentFormat::from_name(&self.name)
    }
}

/// Raw text pulled out of one archive entry, before whitespace collapsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDocument {
    pub source_name: String,
    pub raw_text: String,
}

/// Why an entry produced no record without that being an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    UnsupportedFormat,
    Directory,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnsupportedFormat => f.write_str("unsupported format"),
            SkipReason::Directory => f.write_str("directory entry"),
        }
    }
}

/// Archive-level and entry-level failures of the archive walker.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    /// The container itself cannot be opened or listed. Fatal for the batch.
    #[error("Archive is corrupt: {0}")]
    Corrupt(String),

    #[error("Failed to read entry {name}: {reason}")]
    EntryRead { name: String, reason: String },

    #[error("Entry {name} is {size} bytes, above the {limit} byte limit")]
    EntryTooLarge { name: String, size: u64, limit: u64 },
}

impl ArchiveError {
    /// True when the error only concerns a single entry and the walk can go on.
    pub fn is_entry_level(&self) -> bool {
        !matches!(self, ArchiveError::Corrupt(_))
    }
}

/// Extraction error types
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Unsupported document: {0}")]
    Unsupported(String),

    #[error("Failed to extract text from {name}: {reason}")]
    Failed { name: String, reason: String },
}
