//! Folder is a named group of words inside one section
use serde::{Deserialize, Serialize};

/// Name given to folders created with the add button.
pub const NEW_FOLDER_NAME: &str = "새 폴더";
/// Name of every folder in a section's first-visit seed.
pub const SEED_FOLDER_NAME: &str = "주어,동사";
pub const SEED_FOLDER_COUNT: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: String,
    pub name: String,
}

impl Folder {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Folders a section starts with: ids "1".."8", all with the seed name.
pub fn seed_folders() -> Vec<Folder> {
    (1..=SEED_FOLDER_COUNT)
        .map(|i| Folder::new(i.to_string(), SEED_FOLDER_NAME))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_folders() {
        let seed = seed_folders();
        assert_eq!(seed.len(), 8);
        assert!(seed.iter().all(|f| f.name == "주어,동사"));

        let ids: Vec<&str> = seed.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn test_folder_json_shape() {
        let folder = Folder::new("3", "가정법");
        let json = serde_json::to_string(&folder).unwrap();
        assert_eq!(json, r#"{"id":"3","name":"가정법"}"#);
    }
}
