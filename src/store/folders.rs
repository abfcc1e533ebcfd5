//! Per-section folder lists
//!
//! A section's folders live under `folders_<sectionId>` as a JSON array.
//! The first load of a section seeds and persists eight default folders.

use super::Outcome;
use super::confirm::{Confirm, DELETE_FOLDER_PROMPT, DELETE_FOLDER_RECONSIDER_PROMPT};
use crate::error::Result;
use crate::models::Folder;
use crate::models::folder::{NEW_FOLDER_NAME, seed_folders};
use crate::models::ids::fresh_id;
use crate::storage::{EntityKind, KeyValueStore, key_for, read_json, write_json};

pub struct FolderRegistry<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> FolderRegistry<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Loads a section's folders, seeding and persisting the defaults on first visit
    ///
    /// Unparseable stored data is returned as an error and left untouched.
    pub fn load(&self, section_id: &str) -> Result<Vec<Folder>> {
        let key = key_for(EntityKind::Folders, section_id);

        if let Some(folders) = read_json::<Vec<Folder>, _>(self.store, &key)? {
            return Ok(folders);
        }

        let seed = seed_folders();
        write_json(self.store, &key, &seed)?;
        tracing::info!(section_id, count = seed.len(), "seeded default folders");
        Ok(seed)
    }

    /// Name of one folder, without seeding the section
    pub fn folder_name(&self, section_id: &str, folder_id: &str) -> Result<Option<String>> {
        let key = key_for(EntityKind::Folders, section_id);
        let folders = read_json::<Vec<Folder>, _>(self.store, &key)?.unwrap_or_default();

        Ok(folders
            .into_iter()
            .find(|f| f.id == folder_id)
            .map(|f| f.name))
    }

    /// Appends a folder with a fresh id and the default name
    pub fn add(&self, section_id: &str, folders: &[Folder]) -> Result<Vec<Folder>> {
        let id = fresh_id(|candidate| folders.iter().any(|f| f.id == candidate));

        let mut updated = folders.to_vec();
        updated.push(Folder::new(id, NEW_FOLDER_NAME));
        self.persist(section_id, &updated)?;
        Ok(updated)
    }

    /// Renames the folder with `folder_id`. An unknown id changes nothing but is still persisted.
    pub fn rename(
        &self,
        section_id: &str,
        folders: &[Folder],
        folder_id: &str,
        new_name: &str,
    ) -> Result<Vec<Folder>> {
        let updated: Vec<Folder> = folders
            .iter()
            .map(|f| {
                if f.id == folder_id {
                    Folder::new(f.id.clone(), new_name)
                } else {
                    f.clone()
                }
            })
            .collect();

        self.persist(section_id, &updated)?;
        Ok(updated)
    }

    /// Removes a folder after two confirmations
    ///
    /// Declining either question aborts without writing anything.
    pub fn remove<C: Confirm + ?Sized>(
        &self,
        section_id: &str,
        folders: &[Folder],
        folder_id: &str,
        confirm: &mut C,
    ) -> Result<Outcome<Vec<Folder>>> {
        if !confirm.confirm(DELETE_FOLDER_PROMPT) || !confirm.confirm(DELETE_FOLDER_RECONSIDER_PROMPT)
        {
            tracing::debug!(section_id, folder_id, "folder removal declined");
            return Ok(Outcome::Declined);
        }

        let updated: Vec<Folder> = folders
            .iter()
            .filter(|f| f.id != folder_id)
            .cloned()
            .collect();

        self.persist(section_id, &updated)?;
        Ok(Outcome::Applied(updated))
    }

    /// Overwrites whatever is stored for the section with the default seed
    pub fn reset(&self, section_id: &str) -> Result<Vec<Folder>> {
        let seed = seed_folders();
        self.persist(section_id, &seed)?;
        tracing::info!(section_id, "reset folders to defaults");
        Ok(seed)
    }

    fn persist(&self, section_id: &str, folders: &[Folder]) -> Result<()> {
        write_json(self.store, &key_for(EntityKind::Folders, section_id), folders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::storage::{MemoryStore, SqliteStore};

    fn stored_bytes(store: &MemoryStore, section_id: &str) -> Option<Vec<u8>> {
        store.read(&key_for(EntityKind::Folders, section_id)).unwrap()
    }

    #[test]
    fn test_first_load_seeds_and_persists() {
        let store = MemoryStore::new();
        let registry = FolderRegistry::new(&store);

        let first = registry.load("1").unwrap();
        assert_eq!(first.len(), 8);
        assert!(first.iter().all(|f| f.name == "주어,동사"));

        let mut ids: Vec<&str> = first.iter().map(|f| f.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 8);

        assert!(stored_bytes(&store, "1").is_some());
        assert_eq!(registry.load("1").unwrap(), first);
    }

    #[test]
    fn test_rename_scenario_section_two() {
        let store = SqliteStore::open_in_memory().unwrap();
        let registry = FolderRegistry::new(&store);

        let folders = registry.load("2").unwrap();
        let ids: Vec<&str> = folders.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "7", "8"]);

        let renamed = registry.rename("2", &folders, "3", "가정법").unwrap();
        let reloaded = registry.load("2").unwrap();
        assert_eq!(reloaded, renamed);

        for (before, after) in folders.iter().zip(reloaded.iter()) {
            assert_eq!(before.id, after.id);
            if after.id == "3" {
                assert_eq!(after.name, "가정법");
            } else {
                assert_eq!(after.name, before.name);
            }
        }
    }

    #[test]
    fn test_rename_unknown_id_changes_nothing() {
        let store = MemoryStore::new();
        let registry = FolderRegistry::new(&store);
        let folders = registry.load("4").unwrap();

        let renamed = registry.rename("4", &folders, "missing", "X").unwrap();
        assert_eq!(renamed, folders);
        assert_eq!(registry.load("4").unwrap(), folders);
    }

    #[test]
    fn test_add_appends_default_folder() {
        let store = MemoryStore::new();
        let registry = FolderRegistry::new(&store);
        let folders = registry.load("3").unwrap();

        let once = registry.add("3", &folders).unwrap();
        let twice = registry.add("3", &once).unwrap();

        assert_eq!(twice.len(), 10);
        assert_eq!(twice[8].name, "새 폴더");
        assert_eq!(twice[9].name, "새 폴더");
        assert_ne!(twice[8].id, twice[9].id);
        assert_eq!(&twice[..8], &folders[..]);
        assert_eq!(registry.load("3").unwrap(), twice);
    }

    #[test]
    fn test_remove_needs_both_confirmations() {
        let store = MemoryStore::new();
        let registry = FolderRegistry::new(&store);
        let folders = registry.load("5").unwrap();
        let before = stored_bytes(&store, "5");

        for answers in [[false, true], [true, false], [false, false]] {
            let mut asked = 0;
            let mut confirm = |_: &str| {
                let answer = answers[asked];
                asked += 1;
                answer
            };

            let outcome = registry.remove("5", &folders, "2", &mut confirm).unwrap();
            assert!(outcome.is_declined());
            assert_eq!(stored_bytes(&store, "5"), before);
        }

        assert_eq!(registry.load("5").unwrap(), folders);
    }

    #[test]
    fn test_remove_asks_both_prompts_in_order() {
        let store = MemoryStore::new();
        let registry = FolderRegistry::new(&store);
        let folders = registry.load("6").unwrap();

        let mut prompts = Vec::new();
        let mut confirm = |prompt: &str| {
            prompts.push(prompt.to_string());
            true
        };

        let updated = registry
            .remove("6", &folders, "2", &mut confirm)
            .unwrap()
            .applied()
            .unwrap();

        assert_eq!(
            prompts,
            vec!["정말로 삭제하시겠습니까?", "다시 한번 생각해 보세요"]
        );
        assert_eq!(updated.len(), 7);
        assert!(updated.iter().all(|f| f.id != "2"));
        assert_eq!(registry.load("6").unwrap(), updated);
    }

    #[test]
    fn test_corrupt_data_is_reported_not_replaced() {
        let store = MemoryStore::new();
        store.write("folders_7", b"{broken").unwrap();
        let registry = FolderRegistry::new(&store);

        let err = registry.load("7").unwrap_err();
        assert!(matches!(err, StoreError::Deserialization { .. }));
        assert_eq!(stored_bytes(&store, "7"), Some(b"{broken".to_vec()));

        let reset = registry.reset("7").unwrap();
        assert_eq!(reset.len(), 8);
        assert_eq!(registry.load("7").unwrap(), reset);
    }

    #[test]
    fn test_folder_name_does_not_seed() {
        let store = MemoryStore::new();
        let registry = FolderRegistry::new(&store);

        assert_eq!(registry.folder_name("8", "1").unwrap(), None);
        assert!(store.is_empty());

        let folders = registry.load("8").unwrap();
        registry.rename("8", &folders, "1", "명사").unwrap();
        assert_eq!(registry.folder_name("8", "1").unwrap(), Some("명사".to_string()));
    }

    #[test]
    fn test_write_failure_is_surfaced() {
        let store = MemoryStore::with_quota(16);
        let registry = FolderRegistry::new(&store);

        let err = registry.load("1").unwrap_err();
        assert!(matches!(err, StoreError::StorageUnavailable { .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn test_sections_do_not_share_folders() {
        let store = MemoryStore::new();
        let registry = FolderRegistry::new(&store);
        let one = registry.load("1").unwrap();
        let two = registry.load("2").unwrap();

        registry.rename("1", &one, "1", "only in one").unwrap();
        assert_eq!(registry.load("2").unwrap(), two);
    }
}
