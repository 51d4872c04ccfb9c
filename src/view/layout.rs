//! Screen layout rendering.
//!
//! Pure layout logic: splits the frame into tab bar, mood bar, feed body and
//! status bar, and renders each from AppState.

use crate::state::AppState;
use crate::view::constants::{CHROME_HEIGHT, MOOD_BAR_HEIGHT, STATUS_BAR_HEIGHT, TAB_BAR_HEIGHT};
use crate::view::mood_bar::{render_mood_bar, ALL_MOODS_LABEL};
use crate::view::{feed_list, tabs, FeedStyles};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Ranking tab bar.
    pub tabs: Rect,
    /// Mood filter bar.
    pub mood: Rect,
    /// Feed body.
    pub feed: Rect,
    /// Status bar.
    pub status: Rect,
}

/// Split `area` into the four screen regions.
pub fn split_screen(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TAB_BAR_HEIGHT),
            Constraint::Length(MOOD_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    ScreenAreas {
        tabs: chunks[0],
        mood: chunks[1],
        feed: chunks[2],
        status: chunks[3],
    }
}

/// Feed viewport height for a terminal of `terminal_height` rows.
pub fn feed_viewport_height(terminal_height: u16) -> usize {
    usize::from(terminal_height.saturating_sub(CHROME_HEIGHT))
}

/// Status bar text: post count, scroll position, mode and mood.
pub fn status_text(state: &AppState) -> String {
    let mood = state.mood().map_or(ALL_MOODS_LABEL, |m| m.label());
    format!(
        " {} posts · offset {}/{} · {} · {} · q quit",
        state.feed().len(),
        state.scroll_offset(),
        state.max_scroll_offset(),
        state.mode().label(),
        mood,
    )
}

/// Render the full screen.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &FeedStyles) {
    let areas = split_screen(frame.area());

    tabs::render_mode_tabs(frame, areas.tabs, state.mode(), styles);
    render_mood_bar(frame, areas.mood, state.mood(), styles);

    let window = state.window();
    feed_list::render_feed(
        frame,
        areas.feed,
        state.feed(),
        &window,
        state.mood().is_some(),
        state.ranked_at(),
        styles,
    );

    frame.render_widget(
        Paragraph::new(Line::from(status_text(state))).style(styles.status),
        areas.status,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_screen_stacks_regions() {
        let areas = split_screen(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.tabs, Rect::new(0, 0, 80, 3));
        assert_eq!(areas.mood, Rect::new(0, 3, 80, 1));
        assert_eq!(areas.feed, Rect::new(0, 4, 80, 19));
        assert_eq!(areas.status, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn feed_viewport_height_matches_split() {
        let areas = split_screen(Rect::new(0, 0, 80, 24));
        assert_eq!(feed_viewport_height(24), usize::from(areas.feed.height));
    }

    #[test]
    fn feed_viewport_height_saturates_on_tiny_terminal() {
        assert_eq!(feed_viewport_height(3), 0);
    }
}
