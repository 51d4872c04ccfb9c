//! UI state machine and session persistence.
//!
//! State transitions are synchronous and testable without a terminal.

pub mod app_state;
pub mod feed_store;
pub mod mood_handler;
pub mod scroll_handler;
pub mod storage;
pub mod tab_handler;

// Re-export for convenience
pub use app_state::{AppState, DynStorage};
pub use feed_store::{FeedSessionState, FeedStateStore, FEED_STATE_KEY};
pub use mood_handler::handle_mood_action;
pub use scroll_handler::handle_scroll_action;
pub use storage::{
    open_session_storage, MemoryStorage, SessionFileStorage, SessionStorage, StorageError,
};
pub use tab_handler::handle_tab_action;
