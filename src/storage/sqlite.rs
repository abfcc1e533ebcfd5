//! SQLite backend for the key/value store
//!
//! One database file holds every record in a single `kv` table. Writes are
//! upserts, so a key always maps to its most recent value.

use super::KeyValueStore;
use crate::error::{Result, StoreError};
use rusqlite::{Connection, OptionalExtension, params};
use std::fs;
use std::path::Path;

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the database file and its table
    ///
    /// Missing parent directories are created first.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| StoreError::unavailable(&path.display().to_string(), e))?;
        }

        let conn = Connection::open(path)?;
        tracing::info!(path = %path.display(), "opened database");
        Self::init(conn)
    }

    /// Database that lives only as long as the returned value
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value BLOB NOT NULL
            )",
            (),
        )?;

        Ok(Self { conn })
    }
}

impl KeyValueStore for SqliteStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![key],
                |row| row.get::<_, Vec<u8>>(0),
            )
            .optional()
            .map_err(|e| StoreError::unavailable(key, e))
    }

    fn write(&self, key: &str, value: &[u8]) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO kv (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )
            .map_err(|e| StoreError::unavailable(key, e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_reads_none() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.read("folders_1").unwrap(), None);
    }

    #[test]
    fn test_write_overwrites_previous_value() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.write("words_1", b"[]").unwrap();
        store.write("words_1", b"[1]").unwrap();

        assert_eq!(store.read("words_1").unwrap(), Some(b"[1]".to_vec()));
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("vocab.sqlite3");

        {
            let store = SqliteStore::open(&path).unwrap();
            store.write("folders_2", br#"[{"id":"1","name":"x"}]"#).unwrap();
        }

        let reopened = SqliteStore::open(&path).unwrap();
        assert_eq!(
            reopened.read("folders_2").unwrap(),
            Some(br#"[{"id":"1","name":"x"}]"#.to_vec())
        );
    }

    #[test]
    fn test_open_under_a_file_reports_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        std::fs::write(&blocker, b"x").unwrap();

        let result = SqliteStore::open(&blocker.join("vocab.sqlite3"));
        assert!(matches!(result, Err(StoreError::StorageUnavailable { .. })));
    }
}
