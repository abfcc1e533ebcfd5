pub mod folder;
pub mod ids;
pub mod section;
pub mod selection;
pub mod test_entry;
pub mod word_item;

pub use folder::Folder;
pub use section::{SECTIONS, Section};
pub use selection::Selection;
pub use test_entry::TestEntry;
pub use word_item::{WordField, WordItem};
