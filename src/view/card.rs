//! Fixed-height post cards.
//!
//! Every card is exactly `size` rows so that row positions computed by the
//! virtual window line up with what is drawn. Layout top to bottom: meta
//! line, title, content excerpt (as many rows as fit), one blank spacer.

use crate::model::{MediaType, Post};
use crate::view::styles::FeedStyles;
use chrono::{DateTime, Utc};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';
const LIKED_MARK: char = '♥';
const SAVED_MARK: char = '★';

/// Truncate `text` to at most `width` display columns, ending in `…` when cut.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }
    cut_with_ellipsis(text, width)
}

/// Keep the longest prefix that fits `width - 1` columns and append `…`.
fn cut_with_ellipsis(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push(ELLIPSIS);
    out
}

/// Lay styled segments out left to right within `width` columns.
///
/// The first segment that does not fit is cut with `…` and the rest are
/// dropped.
fn fit_segments(segments: Vec<(String, Style)>, width: usize) -> Line<'static> {
    let total: usize = segments
        .iter()
        .map(|(text, _)| UnicodeWidthStr::width(text.as_str()))
        .sum();
    if total <= width {
        return Line::from(
            segments
                .into_iter()
                .map(|(text, style)| Span::styled(text, style))
                .collect::<Vec<_>>(),
        );
    }

    let mut spans = Vec::with_capacity(segments.len());
    let mut remaining = width;
    for (text, style) in segments {
        let w = UnicodeWidthStr::width(text.as_str());
        if w < remaining {
            remaining -= w;
            spans.push(Span::styled(text, style));
            continue;
        }
        spans.push(Span::styled(cut_with_ellipsis(&text, remaining), style));
        break;
    }
    Line::from(spans)
}

/// Compact relative age: `now`, `5m`, `3h`, `2d`, `6w`.
///
/// Future timestamps read as `now`.
pub fn format_age(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - created_at).num_minutes();
    match minutes {
        m if m < 1 => "now".to_string(),
        m if m < 60 => format!("{m}m"),
        m if m < 60 * 24 => format!("{}h", m / 60),
        m if m < 60 * 24 * 7 => format!("{}d", m / (60 * 24)),
        m => format!("{}w", m / (60 * 24 * 7)),
    }
}

/// Split content into at most `rows` display rows of `width` columns.
///
/// Newlines are flattened first. The last row is truncated with `…` if
/// content remains.
fn content_rows(content: &str, width: usize, rows: usize) -> Vec<String> {
    if rows == 0 || width == 0 {
        return Vec::new();
    }
    let flat = content.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut out = Vec::with_capacity(rows);
    let mut rest = flat.as_str();

    while !rest.is_empty() && out.len() < rows {
        if out.len() + 1 == rows {
            out.push(truncate_to_width(rest, width));
            break;
        }
        let mut used = 0;
        let mut split = rest.len();
        for (idx, ch) in rest.char_indices() {
            let w = UnicodeWidthChar::width(ch).unwrap_or(0);
            if used + w > width {
                split = idx;
                break;
            }
            used += w;
        }
        // Prefer breaking at the last space before the cut.
        if split < rest.len() && !rest[split..].starts_with(' ') {
            if let Some(space) = rest[..split].rfind(' ').filter(|&s| s > 0) {
                split = space;
            }
        }
        if split == 0 {
            break;
        }
        out.push(rest[..split].trim_end().to_string());
        rest = rest[split..].trim_start();
    }
    out
}

/// Badges first (mood, media, liked, saved), then author, community, age
/// and counts.
fn meta_line(post: &Post, now: DateTime<Utc>, width: usize, styles: &FeedStyles) -> Line<'static> {
    let mut segments = Vec::with_capacity(5);
    if let Some(mood) = post.mood {
        segments.push((format!("[{}] ", mood.label()), styles.mood_badge(mood)));
    }
    if post.media_type != MediaType::Text {
        segments.push((format!("[{}] ", post.media_type.as_str()), styles.media));
    }
    if post.is_liked {
        segments.push((format!("{LIKED_MARK} "), styles.liked));
    }
    if post.is_saved {
        segments.push((format!("{SAVED_MARK} "), styles.saved));
    }

    let mut text = String::new();
    if !post.author.username.is_empty() {
        text.push('@');
        text.push_str(&post.author.username);
        text.push_str(" · ");
    }
    if !post.community.name.is_empty() {
        text.push_str(&post.community.name);
        text.push_str(" · ");
    }
    text.push_str(&format_age(post.created_at, now));
    text.push_str(&format!(
        " · {} likes · {} comments",
        post.likes, post.comment_count
    ));
    segments.push((text, styles.meta));

    fit_segments(segments, width)
}

/// Render one post as exactly `size` lines at `width` columns.
pub fn card_lines(
    post: &Post,
    size: usize,
    width: usize,
    now: DateTime<Utc>,
    styles: &FeedStyles,
) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(size);
    if size == 0 {
        return lines;
    }

    lines.push(meta_line(post, now, width, styles));

    let title = if post.title.is_empty() {
        post.id.as_str()
    } else {
        post.title.as_str()
    };
    lines.push(Line::styled(truncate_to_width(title, width), styles.title));

    // Everything between the title and the spacer row is content.
    // Media-only posts show their attachment location instead.
    let content_budget = size.saturating_sub(3);
    let body = match post.media_url.as_deref() {
        Some(url) if post.content.trim().is_empty() => url,
        _ => post.content.as_str(),
    };
    for row in content_rows(body, width, content_budget) {
        lines.push(Line::styled(row, styles.content));
    }

    lines.truncate(size);
    while lines.len() < size {
        lines.push(Line::default());
    }
    lines
}
