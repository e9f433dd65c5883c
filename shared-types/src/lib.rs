use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub mod batch;
pub mod extraction;
pub mod resume;

pub use batch::{BatchSummary, EntryOutcome, EntryStatus};
pub use resume::{ResumeRecord, ResumesResponse, StoredResume};

// Re-export extraction types
pub use extraction::*;

/// Error response for API endpoints
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response for the health endpoint
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
}
