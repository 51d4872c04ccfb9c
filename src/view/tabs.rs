//! Ranking mode tab bar widget.
//!
//! Displays one tab per scoring mode using ratatui's Tabs widget.
//! Selection state lives in the feed store via AppState::mode.

use crate::model::ScoringMode;
use crate::view::styles::FeedStyles;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Render the ranking tab bar with `active` highlighted.
///
/// Tabs appear in `ScoringMode::ALL` order, labelled with their 1-4 hotkey.
pub fn render_mode_tabs(frame: &mut Frame, area: Rect, active: ScoringMode, styles: &FeedStyles) {
    let titles: Vec<Line> = ScoringMode::ALL
        .iter()
        .enumerate()
        .map(|(i, mode)| Line::from(format!("{} {}", i + 1, mode.label())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title("Feed"))
        .style(styles.inactive)
        .highlight_style(styles.active)
        .select(active.index());

    frame.render_widget(tabs, area);
}
