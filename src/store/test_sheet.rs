//! Working copy for the self-test view. Reads stored words, never writes.

use crate::error::Result;
use crate::models::test_entry::BLANK_TEST_ROWS;
use crate::models::{TestEntry, WordField, WordItem};
use crate::storage::{EntityKind, KeyValueStore, key_for, read_json};

pub const SUBMITTED_MESSAGE: &str = "제출되었습니다!";

pub struct TestSheet<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> TestSheet<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Stored words of the folder as test rows, or 39 blank rows if there are none.
    pub fn load(&self, folder_id: &str) -> Result<Vec<TestEntry>> {
        let key = key_for(EntityKind::Words, folder_id);

        match read_json::<Vec<WordItem>, _>(self.store, &key)? {
            Some(items) => Ok(items.into_iter().map(TestEntry::from).collect()),
            None => Ok(vec![TestEntry::default(); BLANK_TEST_ROWS]),
        }
    }
}

/// Edits one row of a test sheet's working copy. Nothing is persisted.
pub fn update_entry(
    entries: &[TestEntry],
    index: usize,
    field: WordField,
    value: String,
) -> Vec<TestEntry> {
    let mut updated = entries.to_vec();
    if let Some(entry) = updated.get_mut(index) {
        match field {
            WordField::Word => entry.word = value,
            WordField::Meaning => entry.meaning = value,
        }
    }
    updated
}
