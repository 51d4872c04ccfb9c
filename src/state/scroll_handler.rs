//! Vertical scrolling keyboard action handler.
//!
//! Translates scroll actions into offset changes on AppState. Every change
//! goes through `AppState::scroll_to`, which clamps and persists.

use crate::model::KeyAction;
use crate::state::AppState;

/// Handle a scroll keyboard action.
///
/// Non-scroll actions are ignored.
pub fn handle_scroll_action(state: &mut AppState, action: KeyAction) {
    let step = state.scroll_step() as isize;
    let page = state.viewport_height().max(1) as isize;

    match action {
        KeyAction::ScrollUp => state.scroll_by(-step),
        KeyAction::ScrollDown => state.scroll_by(step),
        KeyAction::PageUp => state.scroll_by(-page),
        KeyAction::PageDown => state.scroll_by(page),
        KeyAction::ScrollToTop => state.scroll_to(0),
        KeyAction::ScrollToBottom => state.scroll_to(state.max_scroll_offset()),
        _ => {}
    }
}
