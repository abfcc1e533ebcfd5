//! JSON import/export of one folder's word list.
//! Lets a folder be backed up to a file and loaded into another folder.

use crate::models::WordItem;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid word list file: {0}")]
    Json(#[from] serde_json::Error),
}

/// File layout of an exported folder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordListExport {
    pub folder_name: String,
    pub words: Vec<WordItem>,
}

/// Writes a folder's words to a JSON file at `path`.
pub fn export_words_to_path(export: &WordListExport, path: &Path) -> Result<(), ExportError> {
    let json_string = serde_json::to_string_pretty(export)?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;
    tracing::info!(
        path = %path.display(),
        words = export.words.len(),
        "exported word list"
    );
    Ok(())
}

/// Reads a word list previously written by [`export_words_to_path`].
pub fn import_words(path: &Path) -> Result<WordListExport, ExportError> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let export: WordListExport = serde_json::from_str(&contents)?;

    tracing::info!(
        path = %path.display(),
        folder = %export.folder_name,
        "imported word list"
    );
    Ok(export)
}
