//! Ranking tab keyboard action handler.

use crate::model::KeyAction;
use crate::state::AppState;
use chrono::{DateTime, Utc};

/// Handle a ranking tab action (next, previous, or direct selection).
///
/// The new tab is ranked at `now`. Non-tab actions are ignored.
pub fn handle_tab_action(state: &mut AppState, action: KeyAction, now: DateTime<Utc>) {
    let target = match action {
        KeyAction::NextMode => state.mode().next(),
        KeyAction::PrevMode => state.mode().prev(),
        KeyAction::SelectMode(mode) => mode,
        _ => return,
    };
    state.set_mode(target, now);
}

// ===== Tests =====

#[cfg(test)]
#[path = "tab_handler_tests.rs"]
mod tests;
