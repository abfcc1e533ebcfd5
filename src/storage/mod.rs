//! Key/value persistence facade.
//!
//! Every record the app keeps is a JSON document stored under a namespaced
//! string key. Backends only move bytes; encoding lives in the stores.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::error::{Result, StoreError};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Durable key/value storage.
///
/// A `read` reflects the most recent `write` to the same key on the same
/// backend. Failures are returned, never swallowed.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>>;
    fn write(&self, key: &str, value: &[u8]) -> Result<()>;
}

/// Kinds of records kept in the store. Each kind owns a disjoint key prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    /// Folder list of one section, `folders_<sectionId>`.
    Folders,
    /// Word list of one folder, `words_<folderId>`.
    Words,
}

impl EntityKind {
    pub fn prefix(self) -> &'static str {
        match self {
            EntityKind::Folders => "folders_",
            EntityKind::Words => "words_",
        }
    }
}

pub fn key_for(kind: EntityKind, scope_id: &str) -> String {
    format!("{}{}", kind.prefix(), scope_id)
}

/// Reads and decodes a JSON document. `Ok(None)` when the key was never written.
pub fn read_json<T, S>(store: &S, key: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(bytes) = store.read(key)? else {
        return Ok(None);
    };

    match serde_json::from_slice(&bytes) {
        Ok(value) => Ok(Some(value)),
        Err(source) => {
            tracing::warn!(key, error = %source, "stored data does not parse");
            Err(StoreError::Deserialization {
                key: key.to_string(),
                source,
            })
        }
    }
}

/// Encodes `value` as JSON and writes it under `key`.
pub fn write_json<T, S>(store: &S, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let bytes = serde_json::to_vec(value).map_err(|source| StoreError::Serialization {
        key: key.to_string(),
        source,
    })?;
    store.write(key, &bytes)?;
    tracing::debug!(key, bytes = bytes.len(), "persisted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_for_uses_kind_prefix() {
        assert_eq!(key_for(EntityKind::Folders, "2"), "folders_2");
        assert_eq!(key_for(EntityKind::Words, "99"), "words_99");
    }

    #[test]
    fn test_prefixes_are_disjoint() {
        let folders = EntityKind::Folders.prefix();
        let words = EntityKind::Words.prefix();
        assert!(!folders.starts_with(words));
        assert!(!words.starts_with(folders));
    }

    #[test]
    fn test_read_json_absent_key() {
        let store = MemoryStore::new();
        let value: Option<Vec<String>> = read_json(&store, "words_1").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_read_json_reports_bad_bytes() {
        let store = MemoryStore::new();
        store.write("folders_1", b"not json").unwrap();

        let err = read_json::<Vec<String>, _>(&store, "folders_1").unwrap_err();
        assert!(err.is_corrupt_data());
        // the bad bytes are left where they were
        assert_eq!(store.read("folders_1").unwrap().unwrap(), b"not json");
    }

    #[test]
    fn test_write_json_then_read_json() {
        let store = MemoryStore::new();
        let value = vec!["a".to_string(), "b".to_string()];
        write_json(&store, "words_3", &value).unwrap();

        let loaded: Vec<String> = read_json(&store, "words_3").unwrap().unwrap();
        assert_eq!(loaded, value);
    }
}
