//! Domain-level keyboard actions independent of key bindings.

use super::scoring_mode::ScoringMode;

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling
    /// Scroll the feed up by one step. Default: k/↑
    ScrollUp,
    /// Scroll the feed down by one step. Default: j/↓
    ScrollDown,
    /// Scroll up by one viewport height. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down by one viewport height. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the first post. Default: g/Home
    ScrollToTop,
    /// Jump to the last post. Default: G/End
    ScrollToBottom,

    // Ranking tabs
    /// Switch to the next ranking tab. Default: Tab/l/→
    NextMode,
    /// Switch to the previous ranking tab. Default: Shift+Tab/h/←
    PrevMode,
    /// Select a ranking tab directly. Default: 1-4
    SelectMode(ScoringMode),

    // Mood filter
    /// Cycle the mood filter: All → Hype → … → Dark → All. Default: m
    CycleMood,
    /// Clear the mood filter. Default: M
    ClearMood,

    // Application
    /// Re-rank against the current time. Default: r
    Refresh,
    /// Quit. Default: q
    Quit,
}

impl KeyAction {
    /// Whether this action moves the scroll offset.
    pub fn is_scroll(self) -> bool {
        matches!(
            self,
            KeyAction::ScrollUp
                | KeyAction::ScrollDown
                | KeyAction::PageUp
                | KeyAction::PageDown
                | KeyAction::ScrollToTop
                | KeyAction::ScrollToBottom
        )
    }
}
