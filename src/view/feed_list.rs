//! Windowed feed body.
//!
//! Only posts inside the virtual window are turned into card lines. Rows
//! are placed at the offsets the window assigns, then clipped to the
//! viewport, so drawing cost is bounded by the viewport rather than the feed.

use crate::model::Post;
use crate::view::card::card_lines;
use crate::view::styles::FeedStyles;
use crate::view_state::VirtualWindow;
use chrono::{DateTime, Utc};
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Build exactly the rows visible in the viewport.
///
/// Returns at most `viewport_height` lines, starting at the window's
/// clamped scroll offset. Cards that straddle the top edge are clipped.
pub fn visible_rows(
    feed: &[Post],
    window: &VirtualWindow,
    width: usize,
    now: DateTime<Utc>,
    styles: &FeedStyles,
) -> Vec<Line<'static>> {
    let top = window.scroll_offset();
    let height = window.params().viewport_height;
    let bottom = top.saturating_add(height);
    let mut rows = Vec::with_capacity(height);

    for item in window.items() {
        if item.end() <= top {
            continue;
        }
        if item.start >= bottom {
            break;
        }
        let Some(post) = feed.get(item.index) else {
            break;
        };
        let lines = card_lines(post, item.size, width, now, styles);
        for (row, line) in lines.into_iter().enumerate() {
            let y = item.start + row;
            if y >= top && y < bottom {
                rows.push(line);
            }
        }
    }
    rows
}

/// Message shown when the feed has no posts.
pub fn empty_message(filtered: bool) -> &'static str {
    if filtered {
        "No posts match this mood. Press M to show all."
    } else {
        "No posts yet."
    }
}

/// Render the feed body.
pub fn render_feed(
    frame: &mut Frame,
    area: Rect,
    feed: &[Post],
    window: &VirtualWindow,
    filtered: bool,
    now: DateTime<Utc>,
    styles: &FeedStyles,
) {
    if feed.is_empty() {
        frame.render_widget(Paragraph::new(Line::styled(empty_message(filtered), styles.meta)), area);
        return;
    }
    let rows = visible_rows(feed, window, usize::from(area.width), now, styles);
    frame.render_widget(Paragraph::new(rows), area);
}
