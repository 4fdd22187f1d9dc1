//! Persisted user preferences.
//!
//! The site keeps exactly one persisted scalar, the language tag under
//! [`LANGUAGE_KEY`]. Storage sits behind [`PreferenceStore`] so the store can
//! run against a file on disk or against memory in tests.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::I18nError;

/// Fixed key under which the active locale is persisted.
pub const LANGUAGE_KEY: &str = "language";

const APP_DIR: &str = "folio";
const PREFS_FILE: &str = "preferences.toml";

/// Key-value storage for user preferences.
pub trait PreferenceStore: Send + Sync {
    /// Read a value. `Ok(None)` when the key was never written.
    fn load(&self, key: &str) -> Result<Option<String>, I18nError>;

    /// Write a value, replacing any previous one.
    fn save(&self, key: &str, value: &str) -> Result<(), I18nError>;
}

impl<P: PreferenceStore + ?Sized> PreferenceStore for Box<P> {
    fn load(&self, key: &str) -> Result<Option<String>, I18nError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), I18nError> {
        (**self).save(key, value)
    }
}

/// In-memory preferences. Clones share the same underlying map, so a test can
/// keep a handle and inspect what a store persisted.
#[derive(Clone, Debug, Default)]
pub struct MemoryPreferences {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preferences pre-populated with one value.
    pub fn with(key: &str, value: &str) -> Self {
        let prefs = Self::new();
        prefs.entries().insert(key.to_string(), value.to_string());
        prefs
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load(&self, key: &str) -> Result<Option<String>, I18nError> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), I18nError> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences stored as a flat TOML table, e.g. `language = "en"`.
#[derive(Clone, Debug)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/folio/preferences.toml`, if the platform has a config dir.
    pub fn default_location() -> Option<Self> {
        dirs::config_dir().map(|mut path| {
            path.push(APP_DIR);
            path.push(PREFS_FILE);
            Self::new(path)
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<Option<toml::Table>, I18nError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(|source| I18nError::PreferenceIo {
            path: self.path.clone(),
            source,
        })?;
        content
            .parse::<toml::Table>()
            .map(Some)
            .map_err(|e| I18nError::PreferenceFormat {
                path: self.path.clone(),
                msg: e.to_string(),
            })
    }
}

impl PreferenceStore for FilePreferences {
    fn load(&self, key: &str) -> Result<Option<String>, I18nError> {
        let Some(table) = self.read_table()? else {
            return Ok(None);
        };
        match table.get(key) {
            None => Ok(None),
            Some(toml::Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(I18nError::PreferenceFormat {
                path: self.path.clone(),
                msg: format!("`{key}` must be a string, found {}", other.type_str()),
            }),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), I18nError> {
        // A corrupt file is overwritten rather than blocking the write.
        let mut table = self.read_table().ok().flatten().unwrap_or_default();
        table.insert(key.to_string(), toml::Value::String(value.to_string()));

        let io_err = |source| I18nError::PreferenceIo {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = toml::to_string(&table).map_err(|e| I18nError::PreferenceFormat {
            path: self.path.clone(),
            msg: e.to_string(),
        })?;
        fs::write(&self.path, content).map_err(io_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn memory_clones_share_values() {
        let a = MemoryPreferences::new();
        let b = a.clone();
        a.save(LANGUAGE_KEY, "en").unwrap();
        assert_eq!(b.load(LANGUAGE_KEY).unwrap(), Some("en".to_string()));
    }

    #[test]
    fn file_missing_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = FilePreferences::new(dir.path().join("nope.toml"));
        assert_eq!(prefs.load(LANGUAGE_KEY).unwrap(), None);
    }

    #[test]
    fn file_round_trip_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(PREFS_FILE);
        let prefs = FilePreferences::new(&path);

        prefs.save(LANGUAGE_KEY, "en").unwrap();
        prefs.save(LANGUAGE_KEY, "pt").unwrap();

        assert_eq!(prefs.load(LANGUAGE_KEY).unwrap(), Some("pt".to_string()));
        let raw = fs::read_to_string(&path).unwrap();
        assert_eq!(raw.trim(), "language = \"pt\"");
    }

    #[test]
    fn file_keeps_unrelated_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFS_FILE);
        fs::write(&path, "other = 1\n").unwrap();

        let prefs = FilePreferences::new(&path);
        prefs.save(LANGUAGE_KEY, "en").unwrap();

        let table: toml::Table = fs::read_to_string(&path).unwrap().parse().unwrap();
        assert_eq!(table.get("other"), Some(&toml::Value::Integer(1)));
        assert_eq!(table.get(LANGUAGE_KEY), Some(&toml::Value::String("en".into())));
    }

    #[test]
    fn corrupt_file_is_an_error_on_load_but_not_on_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFS_FILE);
        fs::write(&path, "language = [unterminated").unwrap();

        let prefs = FilePreferences::new(&path);
        assert!(matches!(
            prefs.load(LANGUAGE_KEY),
            Err(I18nError::PreferenceFormat { .. })
        ));

        prefs.save(LANGUAGE_KEY, "en").unwrap();
        assert_eq!(prefs.load(LANGUAGE_KEY).unwrap(), Some("en".to_string()));
    }
}
