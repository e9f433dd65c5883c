use rusqlite::Connection;

/// Run all database migrations
pub fn run_migrations(conn: &Connection) -> anyhow::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS resumes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email VARCHAR NOT NULL DEFAULT '',
            contact_number VARCHAR NOT NULL DEFAULT '',
            text TEXT NOT NULL DEFAULT '',
            created_at BIGINT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_resumes_created
            ON resumes(created_at)",
        [],
    )?;

    Ok(())
}
