//! Persistent feed UI memory: active ranking tab and scroll offset.
//!
//! State lives under a single key as `{"tab": "<mode>", "scrollY": <n>}`.
//! Reading is forgiving: absent, unreadable or malformed data loads as the
//! default state, and missing fields take their defaults so older or newer
//! writers stay compatible. Writing is write-through on every mutation;
//! failures are logged and swallowed, leaving the in-memory state
//! authoritative for the rest of the session.

use super::storage::SessionStorage;
use crate::model::ScoringMode;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

/// Storage key for the feed state record.
pub const FEED_STATE_KEY: &str = "tomodachi_feed_state";

/// What the feed remembers across reloads within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedSessionState {
    /// Active ranking tab.
    #[serde(rename = "tab")]
    pub mode: ScoringMode,
    /// Last scroll offset from the top of the feed.
    #[serde(rename = "scrollY", deserialize_with = "deserialize_scroll_offset")]
    pub scroll_offset: usize,
}

/// Accept any JSON number for `scrollY`: fractional values floor, negatives become zero.
fn deserialize_scroll_offset<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if raw.is_finite() && raw > 0.0 {
        Ok(raw.floor().min(usize::MAX as f64) as usize)
    } else {
        Ok(0)
    }
}

/// Key-scoped store for [`FeedSessionState`] over an injected [`SessionStorage`].
#[derive(Debug)]
pub struct FeedStateStore<S> {
    storage: S,
    key: String,
    state: FeedSessionState,
}

impl<S: SessionStorage> FeedStateStore<S> {
    /// Store over `storage` using [`FEED_STATE_KEY`]. Starts at the default
    /// state; call [`load`](Self::load) to adopt what storage holds.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, FEED_STATE_KEY)
    }

    /// Store over `storage` under a custom key.
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            state: FeedSessionState::default(),
        }
    }

    /// Create and immediately [`load`](Self::load).
    pub fn open(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.load();
        store
    }

    /// Read the persisted state and adopt it. Never fails: any problem
    /// yields [`FeedSessionState::default`].
    pub fn load(&mut self) -> FeedSessionState {
        self.state = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => match serde_json::from_str::<FeedSessionState>(&raw) {
                Ok(state) => {
                    debug!(key = %self.key, ?state, "Restored feed state");
                    state
                }
                Err(e) => {
                    debug!(key = %self.key, error = %e, "Ignoring malformed feed state");
                    FeedSessionState::default()
                }
            },
            Ok(None) => FeedSessionState::default(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "Feed state unreadable, using defaults");
                FeedSessionState::default()
            }
        };
        self.state
    }

    /// Current in-memory state.
    pub fn state(&self) -> FeedSessionState {
        self.state
    }

    /// Change the active ranking tab and persist.
    pub fn set_mode(&mut self, mode: ScoringMode) {
        self.state.mode = mode;
        self.persist();
    }

    /// Change the scroll offset and persist.
    pub fn set_scroll_offset(&mut self, offset: usize) {
        self.state.scroll_offset = offset;
        self.persist();
    }

    /// Borrow the backing storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the backing storage.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) {
        let raw = match serde_json::to_string(&self.state) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Failed to serialize feed state");
                return;
            }
        };
        if let Err(e) = self.storage.set_item(&self.key, &raw) {
            warn!(key = %self.key, error = %e, "Failed to persist feed state");
        }
    }
}

#[cfg(test)]
#[path = "feed_store_tests.rs"]
mod tests;
