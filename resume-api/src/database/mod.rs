pub mod migrations;
pub mod resumes;

pub use resumes::{RecordId, RecordStore};

use anyhow::Context;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct DbPool {
    pool: Arc<Pool<SqliteConnectionManager>>,
}

impl DbPool {
    pub fn new(pool: Pool<SqliteConnectionManager>) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    pub fn get(&self) -> anyhow::Result<PooledConnection<SqliteConnectionManager>> {
        self.pool
            .get()
            .context("Failed to get DB connection from pool")
    }
}

pub struct Database {
    pub pool: DbPool,
}

impl Database {
    /// Open (or create) the database file and run migrations
    pub fn new(db_path: &Path) -> anyhow::Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        // Migrate on a plain connection before the pool opens its own
        {
            let conn = Connection::open(db_path)
                .with_context(|| format!("Failed to open {}", db_path.display()))?;
            migrations::run_migrations(&conn)?;
        }

        let manager = SqliteConnectionManager::file(db_path).with_init(|conn| {
            conn.busy_timeout(Duration::from_secs(5))?;
            Ok(())
        });

        let pool = Pool::builder().max_size(8).build(manager)?;

        Ok(Database {
            pool: DbPool::new(pool),
        })
    }

    /// True when a pooled connection can answer a trivial query.
    pub fn is_connected(&self) -> bool {
        match self.pool.get() {
            Ok(conn) => conn
                .query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
                .is_ok(),
            Err(_) => false,
        }
    }
}
