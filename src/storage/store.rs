//! String-valued key-value storage for the persisted session.
//!
//! Values are always strings; numeric fields are parsed back on read.
//! `MemoryStore` lives for the process, `FileStore` survives restarts.

use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::core::GameError;

/// Storage keys.
pub mod keys {
    pub const DECK_ID: &str = "deckId";
    pub const REMAINING_CARDS: &str = "remainingCards";
    pub const PLAYER1_SCORE: &str = "player1Score";
    pub const PLAYER2_SCORE: &str = "player2Score";
    pub const PLAYER1_IMAGE: &str = "player1-image";
    pub const PLAYER2_IMAGE: &str = "player2-image";
}

/// Persistent string key-value store.
pub trait KeyValueStore {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String) -> Result<(), GameError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), GameError>;

    /// Value under `key` parsed as a non-negative integer.
    ///
    /// Returns `None` when absent or unparsable.
    fn get_u32(&self, key: &str) -> Option<u32> {
        self.get(key).and_then(|v| v.trim().parse().ok())
    }
}

/// In-memory store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), GameError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), GameError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store backed by a JSON object file, rewritten after every mutation.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref().to_path_buf();
        let entries = match std::fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text).map_err(|e| {
                GameError::Storage(format!("corrupt state file {}: {}", path.display(), e))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(GameError::Storage(format!(
                    "cannot read {}: {}",
                    path.display(),
                    e
                )))
            }
        };
        Ok(Self { path, entries })
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the next snapshot is staged in before it replaces `path`.
    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Write the whole map to a staging file, then rename it over `path`.
    ///
    /// A crash mid-write leaves the previous snapshot intact.
    fn flush(&self) -> Result<(), GameError> {
        let text = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| GameError::Storage(e.to_string()))?;
        let staging = self.staging_path();
        std::fs::write(&staging, text).map_err(|e| {
            GameError::Storage(format!("cannot write {}: {}", staging.display(), e))
        })?;
        std::fs::rename(&staging, &self.path).map_err(|e| {
            GameError::Storage(format!("cannot replace {}: {}", self.path.display(), e))
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), GameError> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), GameError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("deck-war-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_memory_store_basics() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());

        store.set(keys::DECK_ID, "abc".into()).unwrap();
        assert_eq!(store.get(keys::DECK_ID), Some("abc".into()));
        assert_eq!(store.len(), 1);

        store.remove(keys::DECK_ID).unwrap();
        assert_eq!(store.get(keys::DECK_ID), None);
        store.remove(keys::DECK_ID).unwrap();
    }

    #[test]
    fn test_get_u32() {
        let mut store = MemoryStore::new();
        store.set(keys::REMAINING_CARDS, "52".into()).unwrap();
        store.set(keys::PLAYER1_SCORE, " 3 ".into()).unwrap();
        store.set(keys::PLAYER2_SCORE, "NaN".into()).unwrap();

        assert_eq!(store.get_u32(keys::REMAINING_CARDS), Some(52));
        assert_eq!(store.get_u32(keys::PLAYER1_SCORE), Some(3));
        assert_eq!(store.get_u32(keys::PLAYER2_SCORE), None);
        assert_eq!(store.get_u32(keys::DECK_ID), None);
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let path = temp_path("reopen");
        let _ = std::fs::remove_file(&path);

        {
            let mut store = FileStore::open(&path).unwrap();
            store.set(keys::DECK_ID, "deck42".into()).unwrap();
            store.set(keys::REMAINING_CARDS, "50".into()).unwrap();
            store.remove(keys::REMAINING_CARDS).unwrap();
        }

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get(keys::DECK_ID), Some("deck42".into()));
        assert_eq!(store.get(keys::REMAINING_CARDS), None);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let path = temp_path("missing");
        let _ = std::fs::remove_file(&path);

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get(keys::DECK_ID), None);
        assert!(!path.exists());
    }

    #[test]
    fn test_file_store_corrupt_file() {
        let path = temp_path("corrupt");
        std::fs::write(&path, "{not json").unwrap();

        let err = FileStore::open(&path).unwrap_err();
        assert!(matches!(err, GameError::Storage(_)));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_file_store_replaces_file_whole() {
        let path = temp_path("replace");
        std::fs::write(&path, r#"{"deckId": "old"}"#).unwrap();

        let mut store = FileStore::open(&path).unwrap();
        store.set(keys::DECK_ID, "new".into()).unwrap();
        store.set(keys::REMAINING_CARDS, "50".into()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let entries: BTreeMap<String, String> = serde_json::from_str(&text).unwrap();
        assert_eq!(entries.get(keys::DECK_ID).map(String::as_str), Some("new"));
        assert_eq!(entries.len(), 2);
        assert!(!store.staging_path().exists());
        assert_eq!(
            store.staging_path().file_name().unwrap().to_str().unwrap(),
            format!("{}.tmp", path.file_name().unwrap().to_str().unwrap())
        );

        std::fs::remove_file(&path).unwrap();
    }
}
