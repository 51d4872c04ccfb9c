//! Mood filter bar.

use crate::model::Mood;
use crate::view::styles::FeedStyles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Label for the "no filter" chip.
pub const ALL_MOODS_LABEL: &str = "All moods";

/// Build the mood bar line: `All moods` followed by every mood label,
/// with the active chip styled.
pub fn mood_bar_line(active: Option<Mood>, styles: &FeedStyles) -> Line<'static> {
    let chips = std::iter::once((None, ALL_MOODS_LABEL))
        .chain(Mood::ALL.iter().map(|m| (Some(*m), m.label())));

    let mut spans = Vec::new();
    for (i, (mood, label)) in chips.enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if mood == active {
            styles.active
        } else {
            styles.inactive
        };
        spans.push(Span::styled(format!(" {label} "), style));
    }
    Line::from(spans)
}

/// Render the mood bar into `area`.
pub fn render_mood_bar(frame: &mut Frame, area: Rect, active: Option<Mood>, styles: &FeedStyles) {
    frame.render_widget(Paragraph::new(mood_bar_line(active, styles)), area);
}
