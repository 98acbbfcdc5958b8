//! Persisted language preference.
//!
//! The preference is one string value under the `"language"` key of a small
//! key/value store. Anything unexpected in the store (missing file, corrupt
//! JSON, a code we do not support) means "no preference", never an error.

use crate::i18n::{Language, LanguageRegistry};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Storage key holding the active language code.
pub const LANGUAGE_STORAGE_KEY: &str = "language";

/// Errors raised by preference storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access preferences at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse preferences at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode preferences: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("preference storage lock poisoned")]
    Poisoned,
}

/// Key/value string storage for user preferences.
pub trait PreferenceStorage: Send + Sync {
    /// Read a value. `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

// ==================== In-memory storage ====================

/// Storage kept in memory; used by tests and the preview binary.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one value.
    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::new();
        if let Ok(mut values) = storage.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        storage
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self.values.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.values.lock().map_err(|_| StorageError::Poisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ==================== File storage ====================

/// Storage backed by a JSON object file (`{"language": "es"}`).
///
/// The whole file is rewritten on every `set`; it only ever holds a handful
/// of keys.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&raw).map_err(|source| StorageError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

impl PreferenceStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().map_err(|_| StorageError::Poisoned)?;

        // A corrupt file is replaced rather than blocking every later write.
        let mut values = match self.read_all() {
            Ok(values) => values,
            Err(StorageError::Parse { path, source }) => {
                warn!("Replacing unreadable preferences at {}: {}", path.display(), source);
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let encoded = serde_json::to_string_pretty(&values)?;
        fs::write(&self.path, encoded).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

// ==================== Startup resolution ====================

/// Read the stored language, treating every failure as "no preference".
pub fn stored_language(storage: &dyn PreferenceStorage) -> Option<Language> {
    let raw = match storage.get(LANGUAGE_STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!("Ignoring stored language preference: {}", e);
            return None;
        }
    };

    let language = Language::parse(&raw);
    if language.is_none() {
        debug!("Ignoring unsupported stored language '{}'", raw);
    }
    language
}

/// Match a user-agent language tag (e.g. "es-MX", "de_DE.UTF-8") against the
/// supported languages by its primary subtag, case-insensitively.
///
/// Languages are tried in registry order; the first match wins.
pub fn match_language_tag(tag: &str) -> Option<Language> {
    let tag = tag.trim().to_lowercase();
    if tag.is_empty() {
        return None;
    }

    LanguageRegistry::get()
        .list_all()
        .iter()
        .find(|config| tag.starts_with(config.code))
        .map(|config| config.language)
}

/// Resolve the language to start with.
///
/// Order, first match wins:
/// 1. A supported language stored under `LANGUAGE_STORAGE_KEY`
/// 2. The user-agent language tag, matched by prefix
/// 3. The default language
pub fn resolve_initial_language(
    storage: &dyn PreferenceStorage,
    user_agent_tag: Option<&str>,
) -> Language {
    if let Some(language) = stored_language(storage) {
        info!("Using stored language preference: {}", language);
        return language;
    }

    if let Some(language) = user_agent_tag.and_then(match_language_tag) {
        info!("Using user-agent language: {}", language);
        return language;
    }

    let language = Language::default_language();
    info!("No language preference found, using default: {}", language);
    language
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ==================== Memory Storage Tests ====================

    #[test]
    fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("language").unwrap(), None);

        storage.set("language", "fr").unwrap();
        assert_eq!(storage.get("language").unwrap(), Some("fr".to_string()));
    }

    // ==================== File Storage Tests ====================

    #[test]
    fn test_file_storage_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path().join("prefs.json"));

        assert_eq!(storage.get("language").unwrap(), None);
    }

    #[test]
    fn test_file_storage_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("prefs.json");
        let storage = FileStorage::new(&path);

        storage.set("language", "ja").unwrap();
        assert!(path.exists());
        assert_eq!(storage.get("language").unwrap(), Some("ja".to_string()));
    }

    #[test]
    fn test_file_storage_preserves_other_keys() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prefs.json");
        fs::write(&path, r#"{"theme": "light"}"#).unwrap();
        let storage = FileStorage::new(&path);

        storage.set("language", "de").unwrap();
        assert_eq!(storage.get("theme").unwrap(), Some("light".to_string()));
        assert_eq!(storage.get("language").unwrap(), Some("de".to_string()));
    }

    #[test]
    fn test_file_storage_corrupt_file_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prefs.json");
        fs::write(&path, "{not json").unwrap();
        let storage = FileStorage::new(&path);

        assert!(matches!(storage.get("language"), Err(StorageError::Parse { .. })));
    }

    #[test]
    fn test_file_storage_set_replaces_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prefs.json");
        fs::write(&path, "{not json").unwrap();
        let storage = FileStorage::new(&path);

        storage.set("language", "es").unwrap();
        assert_eq!(storage.get("language").unwrap(), Some("es".to_string()));
    }

    // ==================== Tag Matching Tests ====================

    #[test]
    fn test_match_language_tag_prefixes() {
        assert_eq!(match_language_tag("es-MX"), Some(Language::Spanish));
        assert_eq!(match_language_tag("ja"), Some(Language::Japanese));
        assert_eq!(match_language_tag("de_DE.UTF-8"), Some(Language::German));
        assert_eq!(match_language_tag("FR-ca"), Some(Language::French));
        assert_eq!(match_language_tag("en-GB"), Some(Language::English));
    }

    #[test]
    fn test_match_language_tag_no_match() {
        assert_eq!(match_language_tag("pt-BR"), None);
        assert_eq!(match_language_tag(""), None);
        assert_eq!(match_language_tag("C"), None);
    }

    // ==================== Resolution Tests ====================

    #[test]
    fn test_resolve_prefers_stored_value() {
        let storage = MemoryStorage::with_value(LANGUAGE_STORAGE_KEY, "fr");
        assert_eq!(
            resolve_initial_language(&storage, Some("de-DE")),
            Language::French
        );
    }

    #[test]
    fn test_resolve_ignores_unsupported_stored_value() {
        let storage = MemoryStorage::with_value(LANGUAGE_STORAGE_KEY, "klingon");
        assert_eq!(
            resolve_initial_language(&storage, Some("ja-JP")),
            Language::Japanese
        );
    }

    #[test]
    fn test_resolve_uses_user_agent_tag() {
        let storage = MemoryStorage::new();
        assert_eq!(
            resolve_initial_language(&storage, Some("es-AR")),
            Language::Spanish
        );
    }

    #[test]
    fn test_resolve_defaults_to_english() {
        let storage = MemoryStorage::new();
        assert_eq!(resolve_initial_language(&storage, Some("pt-BR")), Language::English);
        assert_eq!(resolve_initial_language(&storage, None), Language::English);
    }

    #[test]
    fn test_resolve_treats_corrupt_file_as_unset() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prefs.json");
        fs::write(&path, "[1, 2").unwrap();
        let storage = FileStorage::new(&path);

        assert_eq!(resolve_initial_language(&storage, Some("de")), Language::German);
    }
}
