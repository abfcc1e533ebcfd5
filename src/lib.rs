pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod storage;
pub mod store;

pub use error::StoreError;
pub use models::{Folder, Section, Selection, TestEntry, WordField, WordItem};
pub use storage::{KeyValueStore, MemoryStore, SqliteStore};
pub use store::{Confirm, FolderRegistry, Outcome, TestSheet, WordListStore};
