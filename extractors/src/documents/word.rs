use super::{DocumentError, TextExtractor};
use docx_rs::{read_docx, DocumentChild, Paragraph, ParagraphChild, Run, RunChild};

/// Paragraph-level text extractor for Word documents.
///
/// Only top-level body paragraphs are read; tables, headers and footers are
/// not part of the flattened text.
pub struct WordTextExtractor {
    paragraph_separator: &'static str,
}

impl WordTextExtractor {
    /// DOCX: paragraphs joined by a single space.
    pub fn docx() -> Self {
        Self {
            paragraph_separator: " ",
        }
    }

    /// Legacy DOC: same parse, paragraphs joined with no separator.
    pub fn legacy_doc() -> Self {
        Self {
            paragraph_separator: "",
        }
    }
}

impl TextExtractor for WordTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, DocumentError> {
        let docx = read_docx(bytes)?;

        let paragraphs: Vec<String> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
                _ => None,
            })
            .collect();

        Ok(paragraphs.join(self.paragraph_separator))
    }
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        push_paragraph_child(child, &mut text);
    }
    text
}

fn push_paragraph_child(child: &ParagraphChild, text: &mut String) {
    match child {
        ParagraphChild::Run(run) => push_run(run, text),
        // Email addresses in resumes are frequently mailto links
        ParagraphChild::Hyperlink(link) => {
            for nested in &link.children {
                push_paragraph_child(nested, text);
            }
        }
        _ => {}
    }
}

fn push_run(run: &Run, text: &mut String) {
    for child in &run.children {
        match child {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) => text.push('\t'),
            RunChild::Break(_) => text.push('\n'),
            _ => {}
        }
    }
}
