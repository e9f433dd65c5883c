use actix_multipart::Multipart;
use actix_web::http::header;
use actix_web::{web, HttpResponse, Result as ActixResult};
use extractors::{PipelineError, ReportOutput, REPORT_CONTENT_TYPE, REPORT_FILENAME};
use futures::StreamExt;
use shared_types::{ErrorResponse, ResumeRecord};
use std::sync::Arc;

use crate::database::{Database, RecordStore};
use crate::handlers::AppState;

/// Multipart field carrying the archive.
pub const FILE_FIELD: &str = "file";
pub const NO_FILE_MESSAGE: &str = "No file was included in the request.";

pub async fn upload_archive(
    state: web::Data<AppState>,
    db: web::Data<Arc<Database>>,
    payload: Multipart,
) -> ActixResult<HttpResponse> {
    let archive = match read_file_field(payload, state.max_upload_bytes).await? {
        Some(bytes) => bytes,
        None => return Ok(HttpResponse::BadRequest().body(NO_FILE_MESSAGE)),
    };

    tracing::info!("Received archive upload of {} bytes", archive.len());

    let pipeline = state.pipeline.clone();
    let store = state.persist_records.then(|| db.get_ref().clone());

    let result = web::block(move || {
        let output = pipeline.run(&archive)?;
        if let Some(store) = store {
            persist_records(&*store, &output.outcome.records);
        }
        Ok::<_, PipelineError>(output)
    })
    .await
    .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    match result {
        Ok(output) => Ok(report_response(output)),
        Err(PipelineError::Archive(e)) => {
            tracing::warn!("Rejected upload: {}", e);
            Ok(HttpResponse::BadRequest().json(ErrorResponse {
                error: e.to_string(),
            }))
        }
        Err(e) => {
            tracing::error!("Failed to build report: {}", e);
            Err(actix_web::error::ErrorInternalServerError(e.to_string()))
        }
    }
}

/// Drain the multipart stream and keep the first non-empty `file` field.
/// Other fields are read and discarded.
async fn read_file_field(
    mut payload: Multipart,
    max_bytes: usize,
) -> ActixResult<Option<Vec<u8>>> {
    let mut archive = None;

    while let Some(field) = payload.next().await {
        let mut field = field.map_err(|e| actix_web::error::ErrorBadRequest(e.to_string()))?;
        let wanted =
            archive.is_none() && field.content_disposition().get_name() == Some(FILE_FIELD);

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| actix_web::error::ErrorBadRequest(e.to_string()))?;
            if !wanted {
                continue;
            }
            if bytes.len() + chunk.len() > max_bytes {
                return Err(actix_web::error::ErrorPayloadTooLarge(format!(
                    "Upload exceeds the {} byte limit",
                    max_bytes
                )));
            }
            bytes.extend_from_slice(&chunk);
        }

        if wanted && !bytes.is_empty() {
            archive = Some(bytes);
        }
    }

    Ok(archive)
}

/// Save every record; failures are logged and skipped. Returns how many were saved.
pub fn persist_records(store: &dyn RecordStore, records: &[ResumeRecord]) -> usize {
    let mut saved = 0;

    for record in records {
        match store.save(&record.email, &record.contact, &record.text) {
            Ok(_) => saved += 1,
            Err(e) => tracing::warn!("Failed to persist resume record: {}", e),
        }
    }

    tracing::debug!("Persisted {} of {} records", saved, records.len());
    saved
}

fn report_response(output: ReportOutput) -> HttpResponse {
    let summary = &output.outcome.summary;
    let processed = summary.processed_count.to_string();
    let skipped = summary.skipped_count.to_string();
    let failed = summary.failed_count.to_string();

    HttpResponse::Ok()
        .content_type(REPORT_CONTENT_TYPE)
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", REPORT_FILENAME),
        ))
        .insert_header(("X-Resumes-Processed", processed))
        .insert_header(("X-Resumes-Skipped", skipped))
        .insert_header(("X-Resumes-Failed", failed))
        .body(output.report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{app_state, temp_database, test_app};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use docx_rs::{Docx, Paragraph, Run};
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    const BOUNDARY: &str = "resume-extractor-boundary";

    fn docx_bytes(text: &str) -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
            .build()
            .pack(&mut buffer)
            .unwrap();
        buffer.into_inner()
    }

    fn resume_archive() -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();

        writer.start_file("jane.docx", options).unwrap();
        writer
            .write_all(&docx_bytes("Jane Doe jane@example.com +1 (415) 555-2671"))
            .unwrap();
        writer.start_file("notes.xlsx", options).unwrap();
        writer.write_all(b"ignored").unwrap();

        writer.finish().unwrap().into_inner()
    }

    fn multipart_body(field: &str, filename: &str, bytes: &[u8]) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/zip\r\n\r\n");
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn upload_request(body: Vec<u8>) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/upload/")
            .insert_header((
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .set_payload(body)
    }

    #[actix_web::test]
    async fn test_upload_returns_report_attachment() {
        let (_dir, db) = temp_database();
        let app = test::init_service(test_app(app_state(1024 * 1024, false), db.clone())).await;

        let req = upload_request(multipart_body("file", "batch.zip", &resume_archive())).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let headers = resp.headers();
        assert_eq!(
            headers.get(header::CONTENT_TYPE).unwrap(),
            REPORT_CONTENT_TYPE
        );
        assert!(headers
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap()
            .contains("resumes_report.xlsx"));
        assert_eq!(headers.get("X-Resumes-Processed").unwrap(), "1");
        assert_eq!(headers.get("X-Resumes-Skipped").unwrap(), "1");

        let body = test::read_body(resp).await;
        assert!(body.starts_with(b"PK"));

        // persistence disabled
        assert!(db.list(10).unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_missing_file_field_is_bad_request() {
        let (_dir, db) = temp_database();
        let app = test::init_service(test_app(app_state(1024 * 1024, true), db.clone())).await;

        let req =
            upload_request(multipart_body("attachment", "batch.zip", &resume_archive())).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = test::read_body(resp).await;
        assert_eq!(body, NO_FILE_MESSAGE.as_bytes());
        assert!(db.list(10).unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_empty_file_counts_as_missing() {
        let (_dir, db) = temp_database();
        let app = test::init_service(test_app(app_state(1024 * 1024, false), db)).await;

        let resp = test::call_service(&app, upload_request(multipart_body("file", "", b"")).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_corrupt_archive_is_bad_request_with_error_body() {
        let (_dir, db) = temp_database();
        let app = test::init_service(test_app(app_state(1024 * 1024, false), db)).await;

        let req = upload_request(multipart_body("file", "batch.zip", b"not a zip at all")).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert!(body.error.contains("corrupt"));
    }

    #[actix_web::test]
    async fn test_oversized_upload_is_rejected() {
        let (_dir, db) = temp_database();
        let app = test::init_service(test_app(app_state(64, false), db)).await;

        let req = upload_request(multipart_body("file", "batch.zip", &resume_archive())).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[actix_web::test]
    async fn test_processed_records_are_persisted() {
        let (_dir, db) = temp_database();
        let app = test::init_service(test_app(app_state(1024 * 1024, true), db.clone())).await;

        let req = upload_request(multipart_body("file", "batch.zip", &resume_archive())).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let stored = db.list(10).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].email, "jane@example.com");
        assert_eq!(stored[0].contact_number, "14155552671");
    }

    struct FailingStore;

    impl RecordStore for FailingStore {
        fn save(&self, _: &str, _: &str, _: &str) -> anyhow::Result<i64> {
            anyhow::bail!("disk full")
        }

        fn list(&self, _: usize) -> anyhow::Result<Vec<shared_types::StoredResume>> {
            Ok(Vec::new())
        }

        fn get(&self, _: i64) -> anyhow::Result<Option<shared_types::StoredResume>> {
            Ok(None)
        }
    }

    #[::core::prelude::v1::test]
    fn test_store_failures_are_not_fatal() {
        let records = vec![ResumeRecord::default(), ResumeRecord::default()];
        assert_eq!(persist_records(&FailingStore, &records), 0);
    }
}
