//! Error types shared by the storage adapter and the stores built on it.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// The backend could not read or write the key (quota, disabled storage, I/O).
    #[error("storage unavailable for `{key}`: {reason}")]
    StorageUnavailable { key: String, reason: String },

    /// Persisted bytes under `key` do not match the expected schema.
    #[error("could not parse data stored under `{key}`: {source}")]
    Deserialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not serialize data for `{key}`: {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to open database: {0}")]
    Open(#[from] rusqlite::Error),
}

impl StoreError {
    pub fn unavailable(key: &str, reason: impl ToString) -> Self {
        StoreError::StorageUnavailable {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }

    /// True when the stored data is unreadable rather than the storage itself.
    pub fn is_corrupt_data(&self) -> bool {
        matches!(self, StoreError::Deserialization { .. })
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_message_names_key() {
        let err = StoreError::unavailable("words_7", "quota exceeded");
        assert_eq!(
            err.to_string(),
            "storage unavailable for `words_7`: quota exceeded"
        );
        assert!(!err.is_corrupt_data());
    }

    #[test]
    fn test_deserialization_is_corrupt_data() {
        let source = serde_json::from_str::<Vec<String>>("{oops").unwrap_err();
        let err = StoreError::Deserialization {
            key: "folders_1".to_string(),
            source,
        };
        assert!(err.is_corrupt_data());
        assert!(err.to_string().starts_with("could not parse data stored under `folders_1`"));
    }
}
