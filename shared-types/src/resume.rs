use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One report row: the canonical fields pulled out of a single resume.
///
/// `email` has all whitespace removed and `contact` holds digits only.
/// Either may be empty when the document had no matching candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResumeRecord {
    pub email: String,
    pub contact: String,
    pub text: String,
}

/// A record persisted by the record store.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StoredResume {
    pub id: i64,
    pub email: String,
    pub contact_number: String,
    pub text: String,
    pub created_at: i64,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResumesResponse {
    pub resumes: Vec<StoredResume>,
}
