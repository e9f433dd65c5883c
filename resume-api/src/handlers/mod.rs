pub mod health;
pub mod pages;
pub mod resumes;
pub mod upload;

use extractors::{PipelineConfig, ResumePipeline};
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::ApiConfig;

/// Shared state for the upload and page handlers.
pub struct AppState {
    pub pipeline: Arc<ResumePipeline>,
    pub templates_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub persist_records: bool,
}

impl AppState {
    pub fn from_config(config: &ApiConfig) -> Self {
        let pipeline = ResumePipeline::new(PipelineConfig {
            max_entry_bytes: config.pipeline.max_entry_bytes,
        });

        Self {
            pipeline: Arc::new(pipeline),
            templates_dir: config.app.templates_path(),
            max_upload_bytes: config.upload.max_upload_bytes,
            persist_records: config.storage.persist_records,
        }
    }
}
