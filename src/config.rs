//! Runtime settings for the desktop binary, read from the environment.

use std::path::PathBuf;

pub const DATABASE_ENV: &str = "VOCAB_NOTES_DB";
pub const FONT_ENV: &str = "VOCAB_NOTES_FONT";
pub const LOG_ENV: &str = "RUST_LOG";

const APP_DIR: &str = "vocab_notes";
const DATABASE_FILE: &str = "vocab.sqlite3";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub log_filter: String,
    /// Font installed as a fallback so Hangul renders.
    pub font_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            font_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            database_path: get(DATABASE_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),
            log_filter: get(LOG_ENV).unwrap_or(defaults.log_filter),
            font_path: get(FONT_ENV).map(PathBuf::from),
        }
    }
}

/// `<data dir>/vocab_notes/vocab.sqlite3`, or `vocab.sqlite3` in the working
/// directory when the platform has no data dir.
fn default_database_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR).join(DATABASE_FILE))
        .unwrap_or_else(|| PathBuf::from(DATABASE_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_without_variables() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config, AppConfig::default());
        assert!(config.database_path.ends_with(DATABASE_FILE));
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.font_path, None);
    }

    #[test]
    fn test_variables_override_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            (DATABASE_ENV, "/tmp/words.sqlite3"),
            (LOG_ENV, "vocab_notes_app=debug"),
            (FONT_ENV, "/usr/share/fonts/NanumGothic.ttf"),
        ]));

        assert_eq!(config.database_path, PathBuf::from("/tmp/words.sqlite3"));
        assert_eq!(config.log_filter, "vocab_notes_app=debug");
        assert_eq!(
            config.font_path,
            Some(PathBuf::from("/usr/share/fonts/NanumGothic.ttf"))
        );
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = AppConfig::from_lookup(lookup(&[(DATABASE_ENV, "  "), (FONT_ENV, "")]));
        assert_eq!(config.database_path, AppConfig::default().database_path);
        assert_eq!(config.font_path, None);
    }
}
