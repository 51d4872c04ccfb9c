//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state.
//! Transitions are synchronous methods with no I/O besides the feed store's
//! write-through persistence.

use crate::model::{Mood, Post, ScoringMode};
use crate::ranking::build_feed;
use crate::state::feed_store::{FeedSessionState, FeedStateStore};
use crate::state::storage::SessionStorage;
use crate::view_state::{LayoutParams, VirtualWindow, WindowParams};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// Storage handle used by the running application.
pub type DynStorage = Box<dyn SessionStorage>;

// ===== AppState =====

/// Application state.
///
/// # State Machine
///
/// - **Mode**: one of Hot/New/Top/Rising, persisted through the feed store
/// - **Mood**: optional filter, session-local (not persisted)
/// - **Scroll**: offset into the ranked feed, persisted through the feed store
///
/// # State Transitions
///
/// - Mode change → re-rank at the given instant, clamp offset, persist mode
/// - Mood change → re-filter and re-rank at the given instant, clamp offset
/// - Scroll → clamp into `[0, max_scroll_offset]`, persist offset when it moved
/// - Resize → clamp offset to the new viewport
///
/// The ranked feed is always `build_feed(posts, mood, mode, ranked_at)`.
pub struct AppState {
    /// Posts as supplied by the source, in source order. Never reordered.
    posts: Vec<Post>,

    /// Filtered and ranked view of `posts`.
    feed: Vec<Post>,

    /// Active mood filter.
    mood: Option<Mood>,

    /// Persistent tab + offset.
    store: FeedStateStore<DynStorage>,

    /// Item size and overscan.
    layout: LayoutParams,

    /// Viewport height in rows. Zero until the first draw.
    viewport_height: usize,

    /// Rows moved per ScrollUp/ScrollDown.
    scroll_step: usize,

    /// Instant the current ranking was evaluated at.
    ranked_at: DateTime<Utc>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("posts", &self.posts.len())
            .field("feed", &self.feed.len())
            .field("mood", &self.mood)
            .field("state", &self.store.state())
            .field("layout", &self.layout)
            .field("viewport_height", &self.viewport_height)
            .field("ranked_at", &self.ranked_at)
            .finish()
    }
}

impl AppState {
    /// Build state from posts and an already-loaded store.
    ///
    /// The restored scroll offset is kept as-is until a viewport is known.
    pub fn new(
        posts: Vec<Post>,
        store: FeedStateStore<DynStorage>,
        layout: LayoutParams,
        now: DateTime<Utc>,
    ) -> Self {
        let mut state = Self {
            posts,
            feed: Vec::new(),
            mood: None,
            store,
            layout,
            viewport_height: 0,
            scroll_step: 1,
            ranked_at: now,
        };
        state.rebuild_feed();
        info!(
            posts = state.posts.len(),
            mode = %state.mode(),
            scroll_offset = state.scroll_offset(),
            "Feed state initialized"
        );
        state
    }

    /// Builder: rows per single scroll step (minimum 1).
    pub fn with_scroll_step(mut self, step: usize) -> Self {
        self.scroll_step = step.max(1);
        self
    }

    /// Builder: initial mood filter, ranked at the construction instant.
    pub fn with_mood(mut self, mood: Option<Mood>) -> Self {
        let now = self.ranked_at;
        self.set_mood(mood, now);
        self
    }

    // ===== Accessors =====

    /// Posts in source order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Ranked, filtered feed.
    pub fn feed(&self) -> &[Post] {
        &self.feed
    }

    /// Active ranking mode.
    pub fn mode(&self) -> ScoringMode {
        self.store.state().mode
    }

    /// Active mood filter.
    pub fn mood(&self) -> Option<Mood> {
        self.mood
    }

    /// Current scroll offset.
    pub fn scroll_offset(&self) -> usize {
        self.store.state().scroll_offset
    }

    /// Persisted session state snapshot.
    pub fn session_state(&self) -> FeedSessionState {
        self.store.state()
    }

    /// Layout parameters.
    pub fn layout(&self) -> LayoutParams {
        self.layout
    }

    /// Viewport height in rows.
    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    /// Rows per scroll step.
    pub fn scroll_step(&self) -> usize {
        self.scroll_step
    }

    /// Instant the feed was last ranked at.
    pub fn ranked_at(&self) -> DateTime<Utc> {
        self.ranked_at
    }

    /// Window parameters for the current feed and viewport.
    pub fn window_params(&self) -> WindowParams {
        WindowParams {
            item_count: self.feed.len(),
            estimated_item_size: self.layout.estimated_item_size,
            scroll_offset: self.scroll_offset(),
            viewport_height: self.viewport_height,
            overscan: self.layout.overscan,
        }
    }

    /// Virtual window for the current feed, offset and viewport.
    pub fn window(&self) -> VirtualWindow {
        VirtualWindow::compute(self.window_params())
    }

    /// Largest useful scroll offset.
    pub fn max_scroll_offset(&self) -> usize {
        self.window_params().max_scroll_offset()
    }

    // ===== Transitions =====

    /// Switch ranking mode, re-rank at `now` and persist the mode.
    /// Selecting the active mode is a no-op.
    pub fn set_mode(&mut self, mode: ScoringMode, now: DateTime<Utc>) {
        if mode == self.mode() {
            return;
        }
        debug!(from = %self.mode(), to = %mode, "Switching ranking mode");
        self.store.set_mode(mode);
        self.ranked_at = now;
        self.rebuild_feed();
        self.clamp_scroll();
    }

    /// Switch mood filter and re-rank the survivors at `now`.
    pub fn set_mood(&mut self, mood: Option<Mood>, now: DateTime<Utc>) {
        if mood == self.mood {
            return;
        }
        debug!(from = ?self.mood, to = ?mood, "Switching mood filter");
        self.mood = mood;
        self.ranked_at = now;
        self.rebuild_feed();
        self.clamp_scroll();
    }

    /// Scroll to `offset`, clamped to the scrollable range.
    pub fn scroll_to(&mut self, offset: usize) {
        let clamped = offset.min(self.max_scroll_offset());
        if clamped != self.scroll_offset() {
            self.store.set_scroll_offset(clamped);
        }
    }

    /// Scroll by a signed number of rows.
    pub fn scroll_by(&mut self, delta: isize) {
        let current = self.scroll_offset();
        let target = if delta < 0 {
            current.saturating_sub(delta.unsigned_abs())
        } else {
            current.saturating_add(delta as usize)
        };
        self.scroll_to(target);
    }

    /// Record a new viewport height (resize) and clamp the offset to it.
    pub fn set_viewport_height(&mut self, height: usize) {
        if height != self.viewport_height {
            debug!(from = self.viewport_height, to = height, "Viewport resized");
            self.viewport_height = height;
        }
        self.clamp_scroll();
    }

    /// Re-rank against a new evaluation instant.
    pub fn refresh(&mut self, now: DateTime<Utc>) {
        self.ranked_at = now;
        self.rebuild_feed();
        self.clamp_scroll();
    }

    fn rebuild_feed(&mut self) {
        self.feed = build_feed(&self.posts, self.mood, self.mode(), self.ranked_at);
    }

    fn clamp_scroll(&mut self) {
        // Without a viewport the bound is the content size itself.
        let max = self.max_scroll_offset();
        if self.scroll_offset() > max {
            self.store.set_scroll_offset(max);
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
