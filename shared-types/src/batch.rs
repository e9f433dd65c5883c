use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// What happened to a single archive entry during a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum EntryStatus {
    Processed,
    Skipped,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EntryOutcome {
    pub name: String,
    pub status: EntryStatus,
    /// Failure or skip reason, absent for processed entries
    pub detail: Option<String>,
}

/// Per-batch accounting, in archive order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BatchSummary {
    pub processed_count: usize,
    pub skipped_count: usize,
    pub failed_count: usize,
    pub entries: Vec<EntryOutcome>,
}

impl BatchSummary {
    pub fn record(&mut self, name: impl Into<String>, status: EntryStatus, detail: Option<String>) {
        match status {
            EntryStatus::Processed => self.processed_count += 1,
            EntryStatus::Skipped => self.skipped_count += 1,
            EntryStatus::Failed => self.failed_count += 1,
        }
        self.entries.push(EntryOutcome {
            name: name.into(),
            status,
            detail,
        });
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_updates_counts() {
        let mut summary = BatchSummary::default();
        summary.record("a.pdf", EntryStatus::Processed, None);
        summary.record("b.txt", EntryStatus::Skipped, Some("unsupported".to_string()));
        summary.record("c.doc", EntryStatus::Failed, Some("bad header".to_string()));
        summary.record("d.docx", EntryStatus::Processed, None);

        assert_eq!(summary.processed_count, 2);
        assert_eq!(summary.skipped_count, 1);
        assert_eq!(summary.failed_count, 1);
        assert_eq!(summary.total(), 4);
        assert_eq!(summary.entries[2].name, "c.doc");
    }

    #[test]
    fn test_status_serializes_kebab_case() {
        let json = serde_json::to_string(&EntryStatus::Processed).unwrap();
        assert_eq!(json, "\"processed\"");
    }
}
