//! Key/value persistence and the repositories built on it
//!
//! Every repository stores one JSON document per key, using the same key
//! names and JSON shapes as the browser build so exported data stays
//! interchangeable.

pub mod preferences;
pub mod reset;
pub mod session;
pub mod users;

use crate::error::{Result, SkillSyncError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

pub use preferences::PreferencesRepository;
pub use reset::PasswordResetService;
pub use session::SessionRepository;
pub use users::UserRepository;

/// Storage key names.
pub mod keys {
    pub const CURRENT_USER: &str = "skillsync_user";
    pub const USERS_DB: &str = "skillsync_users_db";
    pub const PREFERENCES: &str = "skillsync_preferences";
    pub const BOOKMARKS: &str = "skillsync_bookmarks";
    pub const NOTIFICATIONS: &str = "skillsync_notifications";
    pub const RECENT_SEARCHES: &str = "skillsync_recent_searches";
    pub const RECENTLY_VIEWED: &str = "skillsync_recently_viewed";
    pub const SETTINGS: &str = "skillsync_settings";
    pub const FEEDBACK: &str = "skillsync_feedback";
    pub const PASSWORD_RESET: &str = "password_reset_token";
}

/// String-valued key/value store.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Shared handle passed to repositories.
pub type SharedStore = Arc<dyn KeyValueStore>;

/// One `<key>.json` file per key under a root directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(SkillSyncError::InvalidInput(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        std::fs::write(path, value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process store, mostly for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| SkillSyncError::Storage("memory store lock poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries()?.remove(key);
        Ok(())
    }
}

/// Read and decode a JSON value. Values that fail to decode are logged and
/// treated as absent.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            log::warn!("Ignoring unreadable value under {}: {}", key, e);
            Ok(None)
        }
    }
}

/// Like [`load_json`], with the type's default for missing or corrupt values.
pub fn load_json_or_default<T: DeserializeOwned + Default>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<T> {
    Ok(load_json(store, key)?.unwrap_or_default())
}

pub fn save_json<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string_pretty(value)?;
    store.set(key, &raw)
}
