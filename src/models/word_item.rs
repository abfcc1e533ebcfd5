//! WordItem is a pair <word, meaning>, the unit edited in a folder
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordItem {
    // records written by the test view have no id
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub meaning: String,
}

/// Editable text field of a [`WordItem`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordField {
    Word,
    Meaning,
}

impl WordItem {
    pub fn new(id: impl Into<String>, word: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            word: word.into(),
            meaning: meaning.into(),
        }
    }

    pub fn blank(id: impl Into<String>) -> Self {
        Self::new(id, "", "")
    }

    pub fn is_blank(&self) -> bool {
        self.word.is_empty() && self.meaning.is_empty()
    }

    pub fn set(&mut self, field: WordField, value: String) {
        match field {
            WordField::Word => self.word = value,
            WordField::Meaning => self.meaning = value,
        }
    }
}
