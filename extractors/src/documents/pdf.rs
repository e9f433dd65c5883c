use super::{DocumentError, TextExtractor};
use lopdf::Document;

/// PDF text extractor using lopdf.
///
/// Pages are read in page order and concatenated. A page whose text cannot
/// be decoded contributes nothing instead of failing the document.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, DocumentError> {
        let document = Document::load_mem(bytes)?;

        let mut text = String::new();
        for page_number in document.get_pages().keys() {
            match document.extract_text(&[*page_number]) {
                Ok(page_text) => text.push_str(&page_text),
                Err(e) => {
                    tracing::debug!("No text extracted from PDF page {}: {}", page_number, e);
                }
            }
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::pdf_bytes;

    #[test]
    fn test_extracts_single_page() {
        let text = PdfTextExtractor
            .extract_text(&pdf_bytes(&["Hello World from a resume"]))
            .unwrap();

        assert!(text.contains("Hello World from a resume"), "got: {text}");
    }

    #[test]
    fn test_pages_are_concatenated_in_order() {
        let text = PdfTextExtractor
            .extract_text(&pdf_bytes(&["FirstPage", "SecondPage", "ThirdPage"]))
            .unwrap();

        let first = text.find("FirstPage").unwrap();
        let second = text.find("SecondPage").unwrap();
        let third = text.find("ThirdPage").unwrap();
        assert!(first < second && second < third, "got: {text}");
    }

    #[test]
    fn test_page_without_text_contributes_nothing() {
        let text = PdfTextExtractor
            .extract_text(&pdf_bytes(&["", "Only text"]))
            .unwrap();

        assert_eq!(text.trim(), "Only text");
    }

    #[test]
    fn test_invalid_pdf_returns_error() {
        let result = PdfTextExtractor.extract_text(b"not a pdf");
        assert!(matches!(result, Err(DocumentError::Pdf(_))));
    }
}
