//! Session-scoped key/value storage backends for UI state.
//!
//! The feed store talks to storage only through [`SessionStorage`], so it can
//! run against an in-memory map in tests, or a per-session directory on
//! disk in the terminal client.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Environment variable naming the session whose state should be reused.
pub const SESSION_ID_ENV: &str = "TOMODACHI_SESSION_ID";

/// Storage backend failures. These never escape the feed store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("Storage I/O error at {path:?}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// The backend cannot be used at all (no writable location, quota, ...).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Minimal string key/value storage scoped to a browsing session.
pub trait SessionStorage {
    /// Read the value stored under `key`. `Ok(None)` when absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: SessionStorage + ?Sized> SessionStorage for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

/// Process-lifetime storage. Also the fallback when no session directory exists.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    /// Create empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One JSON file per key inside a session directory.
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// crash mid-write leaves either the old value or the new one.
#[derive(Debug, Clone)]
pub struct SessionFileStorage {
    dir: PathBuf,
}

impl SessionFileStorage {
    /// Storage rooted at `dir`. The directory is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage for the current terminal session under `base`
    /// (default: [`default_session_base`]).
    pub fn for_current_session(base: Option<PathBuf>) -> Self {
        let base = base.unwrap_or_else(default_session_base);
        Self::new(base.join(format!("session-{}", current_session_id())))
    }

    /// Directory holding this session's files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{file_name}.json"))
    }
}

impl SessionStorage for SessionFileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|source| StorageError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| StorageError::Io { path, source })
    }
}

/// Open storage for the current session.
///
/// Uses [`SessionFileStorage`] when its directory can be created and falls
/// back to [`MemoryStorage`] otherwise, so the feed always has somewhere to
/// keep its state.
pub fn open_session_storage(base: Option<PathBuf>) -> Box<dyn SessionStorage> {
    let storage = SessionFileStorage::for_current_session(base);
    match fs::create_dir_all(storage.dir()) {
        Ok(()) => {
            debug!(dir = %storage.dir().display(), "Using session file storage");
            Box::new(storage)
        }
        Err(e) => {
            warn!(
                dir = %storage.dir().display(),
                error = %e,
                "Session directory unavailable, keeping feed state in memory"
            );
            Box::new(MemoryStorage::new())
        }
    }
}

/// Root for per-session directories.
///
/// `$XDG_RUNTIME_DIR/tomodachi` where available (cleared at logout), else
/// `<tmp>/tomodachi`.
pub fn default_session_base() -> PathBuf {
    dirs::runtime_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("tomodachi")
}

/// Identifier of the current terminal session.
///
/// `TOMODACHI_SESSION_ID` when set and non-empty; otherwise the parent
/// process (the shell), so relaunching from the same shell restores state.
pub fn current_session_id() -> String {
    match std::env::var(SESSION_ID_ENV) {
        Ok(id) if !id.trim().is_empty() => id
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
            .collect(),
        _ => parent_process_id().to_string(),
    }
}

#[cfg(unix)]
fn parent_process_id() -> u32 {
    std::os::unix::process::parent_id()
}

#[cfg(not(unix))]
fn parent_process_id() -> u32 {
    std::process::id()
}
