//! Spreadsheet report assembly
//!
//! One worksheet, a fixed header row and one row per [`ResumeRecord`] in the
//! order the records were produced.

use rust_xlsxwriter::{DocProperties, ExcelDateTime, Workbook, XlsxError};
use shared_types::ResumeRecord;

pub const REPORT_HEADER: [&str; 3] = ["emailID", "contact no.", "text"];
pub const REPORT_FILENAME: &str = "resumes_report.xlsx";
pub const REPORT_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Longest string a single XLSX cell may hold.
pub const MAX_CELL_CHARS: usize = 32_767;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to write spreadsheet: {0}")]
    Xlsx(#[from] XlsxError),

    #[error("Too many records for one worksheet: {0}")]
    TooManyRows(usize),
}

/// Serialize `records` into XLSX bytes.
///
/// The document creation time is pinned so the same records always produce
/// the same bytes.
pub fn build_report(records: &[ResumeRecord]) -> Result<Vec<u8>, ReportError> {
    let mut workbook = Workbook::new();
    let properties = DocProperties::new().set_creation_datetime(&ExcelDateTime::from_ymd(2000, 1, 1)?);
    workbook.set_properties(&properties);

    let worksheet = workbook.add_worksheet();

    for (col, header) in REPORT_HEADER.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (index, record) in records.iter().enumerate() {
        let row = u32::try_from(index + 1).map_err(|_| ReportError::TooManyRows(records.len()))?;

        worksheet.write_string(row, 0, cell_text(&record.email))?;
        worksheet.write_string(row, 1, cell_text(&record.contact))?;
        worksheet.write_string(row, 2, cell_text(&record.text))?;
    }

    Ok(workbook.save_to_buffer()?)
}

/// Truncate to the XLSX cell limit on a char boundary.
fn cell_text(value: &str) -> &str {
    match value.char_indices().nth(MAX_CELL_CHARS) {
        Some((byte_index, _)) => &value[..byte_index],
        None => value,
    }
}
