//! Mood filter keyboard action handler.

use crate::model::{KeyAction, Mood};
use crate::state::AppState;
use chrono::{DateTime, Utc};

/// Handle a mood filter action, re-ranking at `now`. Non-mood actions are ignored.
pub fn handle_mood_action(state: &mut AppState, action: KeyAction, now: DateTime<Utc>) {
    match action {
        KeyAction::CycleMood => {
            let next = Mood::cycle(state.mood());
            state.set_mood(next, now);
        }
        KeyAction::ClearMood => state.set_mood(None, now),
        _ => {}
    }
}
