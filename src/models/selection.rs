//! Checkbox selection in the folder editor.
//!
//! Selection belongs to one editing session and is never persisted. It moves
//! between nothing selected and some set of ids; `toggle_all` jumps straight
//! between the empty set and every id in the list.
use super::WordItem;
use std::collections::HashSet;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    ids: HashSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    /// Clears the selection when every item is selected, otherwise selects every item.
    pub fn toggle_all(&mut self, items: &[WordItem]) {
        if self.is_all_selected(items) {
            self.ids.clear();
        } else {
            self.ids = items.iter().map(|item| item.id.clone()).collect();
        }
    }

    pub fn is_all_selected(&self, items: &[WordItem]) -> bool {
        !items.is_empty() && self.ids.len() == items.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<WordItem> {
        vec![
            WordItem::new("1", "a", "가"),
            WordItem::new("2", "b", "나"),
            WordItem::new("3", "c", "다"),
        ]
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = Selection::new();
        selection.toggle("2");
        assert!(selection.contains("2"));
        assert_eq!(selection.len(), 1);

        selection.toggle("2");
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_all_from_partial_selects_everything() {
        let items = items();
        let mut selection = Selection::new();
        selection.toggle("1");

        selection.toggle_all(&items);
        assert!(selection.is_all_selected(&items));
        assert_eq!(selection.len(), 3);

        selection.toggle_all(&items);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_empty_list_is_never_all_selected() {
        let selection = Selection::new();
        assert!(!selection.is_all_selected(&[]));
    }
}
