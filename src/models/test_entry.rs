//! Row of the self-test sheet. Same as a word item without the id.
use super::WordItem;
use serde::{Deserialize, Serialize};

/// Rows shown on a test sheet when the folder has no stored words.
pub const BLANK_TEST_ROWS: usize = 39;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestEntry {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub meaning: String,
}

impl From<WordItem> for TestEntry {
    fn from(item: WordItem) -> Self {
        Self {
            word: item.word,
            meaning: item.meaning,
        }
    }
}
