//! Per-folder word lists
//!
//! A folder's words live under `words_<folderId>`. Every edit writes the
//! whole list back immediately; there is no batching. A folder that has
//! never been edited shows one blank item, which is only written once the
//! user changes something.

use super::Outcome;
use super::confirm::{Confirm, DELETE_WORDS_PROMPT, REPLACE_WORDS_PROMPT};
use crate::error::Result;
use crate::models::ids::fresh_id;
use crate::models::{Selection, WordField, WordItem};
use crate::storage::{EntityKind, KeyValueStore, key_for, read_json, write_json};
use std::collections::HashSet;

/// Id of the blank item shown for a folder with no stored words.
pub const FIRST_ITEM_ID: &str = "1";
pub const SAVED_MESSAGE: &str = "저장되었습니다!";

pub struct WordListStore<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> WordListStore<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Loads a folder's words. A folder with nothing (or an empty list) stored
    /// yields one blank item, not persisted.
    pub fn load(&self, folder_id: &str) -> Result<Vec<WordItem>> {
        let key = key_for(EntityKind::Words, folder_id);

        match read_json::<Vec<WordItem>, _>(self.store, &key)? {
            Some(items) if !items.is_empty() => Ok(unique_ids(items)),
            // an empty stored list shows the blank row too
            _ => Ok(vec![WordItem::blank(FIRST_ITEM_ID)]),
        }
    }

    /// Sets one field of the item at `index` and persists the whole list
    ///
    /// An index past the end returns the list unchanged without writing.
    pub fn update_field(
        &self,
        folder_id: &str,
        items: &[WordItem],
        index: usize,
        field: WordField,
        value: String,
    ) -> Result<Vec<WordItem>> {
        if index >= items.len() {
            tracing::debug!(folder_id, index, len = items.len(), "edit past end of list ignored");
            return Ok(items.to_vec());
        }

        let mut updated = items.to_vec();
        updated[index].set(field, value);
        self.save(folder_id, &updated)?;
        Ok(updated)
    }

    /// Explicit save of the current list
    pub fn save(&self, folder_id: &str, items: &[WordItem]) -> Result<()> {
        write_json(self.store, &key_for(EntityKind::Words, folder_id), items)
    }

    /// Appends a blank item with a fresh id
    pub fn add_item(&self, folder_id: &str, items: &[WordItem]) -> Result<Vec<WordItem>> {
        let mut updated = items.to_vec();
        updated.push(WordItem::blank(fresh_id(|candidate| {
            items.iter().any(|item| item.id == candidate)
        })));

        self.save(folder_id, &updated)?;
        Ok(updated)
    }

    /// Deletes every selected item after one confirmation
    ///
    /// If nothing would remain, a single fresh blank item takes the list's
    /// place, and that is what gets persisted. The selection is cleared on
    /// success and kept when the user declines.
    pub fn delete_selected<C: Confirm + ?Sized>(
        &self,
        folder_id: &str,
        items: &[WordItem],
        selection: &mut Selection,
        confirm: &mut C,
    ) -> Result<Outcome<Vec<WordItem>>> {
        if !confirm.confirm(DELETE_WORDS_PROMPT) {
            return Ok(Outcome::Declined);
        }

        let mut updated: Vec<WordItem> = items
            .iter()
            .filter(|item| !selection.contains(&item.id))
            .cloned()
            .collect();

        if updated.is_empty() {
            let id = fresh_id(|candidate| items.iter().any(|item| item.id == candidate));
            updated.push(WordItem::blank(id));
        }

        self.save(folder_id, &updated)?;
        tracing::debug!(
            folder_id,
            removed = items.len().saturating_sub(updated.len()),
            "deleted selected words"
        );
        selection.clear();
        Ok(Outcome::Applied(updated))
    }

    /// Replaces the folder's list with `incoming` after one confirmation
    ///
    /// An empty `incoming` list stores one blank item instead.
    pub fn replace_all<C: Confirm + ?Sized>(
        &self,
        folder_id: &str,
        incoming: Vec<WordItem>,
        confirm: &mut C,
    ) -> Result<Outcome<Vec<WordItem>>> {
        if !confirm.confirm(REPLACE_WORDS_PROMPT) {
            return Ok(Outcome::Declined);
        }

        let mut updated = unique_ids(incoming);
        if updated.is_empty() {
            updated.push(WordItem::blank(FIRST_ITEM_ID));
        }

        self.save(folder_id, &updated)?;
        Ok(Outcome::Applied(updated))
    }

    /// Overwrites whatever is stored for the folder with one blank item
    pub fn reset(&self, folder_id: &str) -> Result<Vec<WordItem>> {
        let fresh = vec![WordItem::blank(FIRST_ITEM_ID)];
        self.save(folder_id, &fresh)?;
        tracing::info!(folder_id, "reset word list");
        Ok(fresh)
    }
}

/// Makes every id in the list unique. The first item carrying an id keeps
/// it; id-less records (the test-view shape) and later duplicates get their
/// 1-based position as id, bumped until no other item uses it.
fn unique_ids(mut items: Vec<WordItem>) -> Vec<WordItem> {
    let mut used: HashSet<String> = HashSet::new();
    let mut needs_id = Vec::new();

    for (index, item) in items.iter().enumerate() {
        if item.id.is_empty() || !used.insert(item.id.clone()) {
            needs_id.push(index);
        }
    }

    for index in needs_id {
        let mut candidate = index + 1;
        while used.contains(&candidate.to_string()) {
            candidate += 1;
        }
        let id = candidate.to_string();
        used.insert(id.clone());
        items[index].id = id;
    }

    items
}
