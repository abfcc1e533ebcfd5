//! Folder and word-list stores.
//!
//! Stores hold nothing but a reference to the backend. Every operation takes
//! the caller's current list and returns the new one after persisting it, so
//! the caller's copy and the stored copy never drift apart.

pub mod confirm;
pub mod folders;
pub mod test_sheet;
pub mod words;

pub use confirm::Confirm;
pub use folders::FolderRegistry;
pub use test_sheet::TestSheet;
pub use words::WordListStore;

/// Result of an operation gated behind a confirmation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    Applied(T),
    /// The user said no. Nothing was written.
    Declined,
}

impl<T> Outcome<T> {
    pub fn applied(self) -> Option<T> {
        match self {
            Outcome::Applied(value) => Some(value),
            Outcome::Declined => None,
        }
    }

    pub fn is_declined(&self) -> bool {
        matches!(self, Outcome::Declined)
    }
}
