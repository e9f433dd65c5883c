use anyhow::Result;
use rusqlite::{params, OptionalExtension, Row};
use shared_types::StoredResume;

use crate::database::Database;

pub type RecordId = i64;

/// Durable storage for processed resume records.
pub trait RecordStore: Send + Sync {
    fn save(&self, email: &str, contact_number: &str, text: &str) -> Result<RecordId>;

    /// Most recent records first.
    fn list(&self, limit: usize) -> Result<Vec<StoredResume>>;

    fn get(&self, id: RecordId) -> Result<Option<StoredResume>>;
}

fn stored_resume(row: &Row<'_>) -> rusqlite::Result<StoredResume> {
    Ok(StoredResume {
        id: row.get(0)?,
        email: row.get(1)?,
        contact_number: row.get(2)?,
        text: row.get(3)?,
        created_at: row.get(4)?,
    })
}

impl RecordStore for Database {
    fn save(&self, email: &str, contact_number: &str, text: &str) -> Result<RecordId> {
        let conn = self.pool.get()?;
        let now = chrono::Utc::now().timestamp();

        let id: i64 = conn.query_row(
            "INSERT INTO resumes (email, contact_number, text, created_at)
                VALUES (?1, ?2, ?3, ?4) RETURNING id",
            params![email, contact_number, text, now],
            |row| row.get(0),
        )?;

        Ok(id)
    }

    fn list(&self, limit: usize) -> Result<Vec<StoredResume>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, email, contact_number, text, created_at
             FROM resumes
             ORDER BY id DESC
             LIMIT ?",
        )?;

        let resumes = stmt
            .query_map([limit as i64], stored_resume)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(resumes)
    }

    fn get(&self, id: RecordId) -> Result<Option<StoredResume>> {
        let conn = self.pool.get()?;

        let resume = conn
            .query_row(
                "SELECT id, email, contact_number, text, created_at
                 FROM resumes
                 WHERE id = ?",
                [id],
                stored_resume,
            )
            .optional()?;

        Ok(resume)
    }
}
