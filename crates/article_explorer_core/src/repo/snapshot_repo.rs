//! Snapshot blob repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist and restore whole-store snapshots under a fixed key.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `save` is a full-document upsert; partial writes do not exist.
//! - `load` returns `None` for a key that has never been written.

use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DbError;

/// Result type for snapshot repository operations.
pub type SnapshotResult<T> = Result<T, DbError>;

/// Key-value blob store used for store snapshot persistence.
pub trait SnapshotRepository {
    /// Stores `value` under `key`, replacing any previous document.
    fn save(&self, key: &str, value: &str) -> SnapshotResult<()>;
    /// Loads the document stored under `key`, if any.
    fn load(&self, key: &str) -> SnapshotResult<Option<String>>;
}

/// SQLite-backed snapshot repository.
///
/// Owns its connection; the composition root decides file vs in-memory via
/// [`crate::db`].
pub struct SqliteSnapshotRepository {
    conn: Connection,
}

impl SqliteSnapshotRepository {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl SnapshotRepository for SqliteSnapshotRepository {
    fn save(&self, key: &str, value: &str) -> SnapshotResult<()> {
        self.conn.execute(
            "INSERT INTO snapshots (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    fn load(&self, key: &str) -> SnapshotResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM snapshots WHERE key = ?1;",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }
}
