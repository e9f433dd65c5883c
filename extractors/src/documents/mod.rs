//! Format-specific text extraction
//!
//! Dispatch happens once per entry on its [`DocumentFormat`]. PDFs are read
//! page by page with `lopdf`; DOCX and legacy DOC files go through the same
//! `docx-rs` paragraph walk and only differ in how paragraphs are joined.

mod pdf;
mod word;

pub use pdf::PdfTextExtractor;
pub use word::WordTextExtractor;

use shared_types::{ArchiveEntry, DocumentFormat, ExtractedDocument, ExtractionError};
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Errors raised by an individual format parser.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("PDF parse error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("Word document parse error: {0}")]
    Word(#[from] docx_rs::ReaderError),

    #[error("Parser panicked: {0}")]
    Panicked(String),
}

/// Pulls plain text out of one document's bytes.
pub trait TextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, DocumentError>;
}

/// Routes archive entries to the right [`TextExtractor`].
pub struct DocumentTextExtractor {
    pdf: PdfTextExtractor,
    docx: WordTextExtractor,
    doc: WordTextExtractor,
}

impl DocumentTextExtractor {
    pub fn new() -> Self {
        Self {
            pdf: PdfTextExtractor,
            docx: WordTextExtractor::docx(),
            doc: WordTextExtractor::legacy_doc(),
        }
    }

    /// Extract the raw text of `entry`. The entry is consumed so its bytes are
    /// released as soon as extraction finishes.
    pub fn extract(
        &self,
        format: DocumentFormat,
        entry: ArchiveEntry,
    ) -> Result<ExtractedDocument, ExtractionError> {
        let ArchiveEntry { name, bytes } = entry;

        let extractor: &dyn TextExtractor = match format {
            DocumentFormat::Pdf => &self.pdf,
            DocumentFormat::Docx => &self.docx,
            DocumentFormat::Doc => &self.doc,
            DocumentFormat::Unsupported => return Err(ExtractionError::Unsupported(name)),
        };

        // Third-party parsers occasionally panic on malformed input.
        let result = catch_unwind(AssertUnwindSafe(|| extractor.extract_text(&bytes)))
            .unwrap_or_else(|panic| Err(DocumentError::Panicked(panic_message(panic))));

        match result {
            Ok(raw_text) => Ok(ExtractedDocument {
                source_name: name,
                raw_text,
            }),
            Err(e) => Err(ExtractionError::Failed {
                name,
                reason: e.to_string(),
            }),
        }
    }
}

impl Default for DocumentTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn panic_message(panic: Box<dyn std::any::Any + Send>) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{docx_bytes, pdf_bytes};

    fn entry(name: &str, bytes: Vec<u8>) -> ArchiveEntry {
        ArchiveEntry {
            name: name.to_string(),
            bytes,
        }
    }

    #[test]
    fn test_dispatches_pdf() {
        let extractor = DocumentTextExtractor::new();
        let doc = extractor
            .extract(
                DocumentFormat::Pdf,
                entry("cv.pdf", pdf_bytes(&["Jane Doe jane@example.com"])),
            )
            .unwrap();

        assert_eq!(doc.source_name, "cv.pdf");
        assert!(doc.raw_text.contains("jane@example.com"));
    }

    #[test]
    fn test_docx_and_doc_join_paragraphs_differently() {
        let extractor = DocumentTextExtractor::new();
        let bytes = docx_bytes(&["Jane", "Doe"]);

        let docx = extractor
            .extract(DocumentFormat::Docx, entry("cv.docx", bytes.clone()))
            .unwrap();
        let doc = extractor
            .extract(DocumentFormat::Doc, entry("cv.doc", bytes))
            .unwrap();

        assert_eq!(docx.raw_text, "Jane Doe");
        assert_eq!(doc.raw_text, "JaneDoe");
    }

    #[test]
    fn test_unsupported_format_is_rejected() {
        let extractor = DocumentTextExtractor::new();
        let result = extractor.extract(
            DocumentFormat::Unsupported,
            entry("notes.xlsx", b"whatever".to_vec()),
        );

        assert!(matches!(result, Err(ExtractionError::Unsupported(name)) if name == "notes.xlsx"));
    }

    #[test]
    fn test_malformed_bytes_fail_per_entry() {
        let extractor = DocumentTextExtractor::new();

        for (format, name) in [
            (DocumentFormat::Pdf, "broken.pdf"),
            (DocumentFormat::Docx, "broken.docx"),
            (DocumentFormat::Doc, "broken.doc"),
        ] {
            let result = extractor.extract(format, entry(name, b"\xd0\xcf\x11\xe0 garbage".to_vec()));
            match result {
                Err(ExtractionError::Failed { name: failed, .. }) => assert_eq!(failed, name),
                other => panic!("expected failure for {name}, got {:?}", other),
            }
        }
    }
}
