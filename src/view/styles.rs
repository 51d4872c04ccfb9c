//! Feed styling configuration.

use crate::model::Mood;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Colors are disabled when the `NO_COLOR` environment variable is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Read color preference from the environment.
    pub fn from_env() -> Self {
        Self::new(std::env::var_os("NO_COLOR").is_none())
    }

    /// Explicitly enable or disable colors.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== FeedStyles =====

/// Styles for every feed widget.
///
/// With colors disabled, emphasis falls back to bold/reversed modifiers so
/// the active tab and mood stay distinguishable.
#[derive(Debug, Clone, Copy)]
pub struct FeedStyles {
    /// Inactive tab / mood label.
    pub inactive: Style,
    /// Active tab / mood label.
    pub active: Style,
    /// Card meta line (author, community, age, counts).
    pub meta: Style,
    /// Card title.
    pub title: Style,
    /// Card content excerpt.
    pub content: Style,
    /// Status bar.
    pub status: Style,
    /// Media attachment badge.
    pub media: Style,
    /// Marker for posts the viewer liked.
    pub liked: Style,
    /// Marker for posts the viewer saved.
    pub saved: Style,
    colors: bool,
}

impl FeedStyles {
    /// Styles honoring `NO_COLOR`.
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env())
    }

    /// Styles for an explicit color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                inactive: Style::default().fg(Color::Gray),
                active: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                meta: Style::default().fg(Color::DarkGray),
                title: Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
                content: Style::default(),
                status: Style::default().fg(Color::Black).bg(Color::Cyan),
                media: Style::default().fg(Color::Cyan),
                liked: Style::default().fg(Color::LightRed),
                saved: Style::default().fg(Color::Yellow),
                colors: true,
            }
        } else {
            Self {
                inactive: Style::default(),
                active: Style::default().add_modifier(Modifier::REVERSED),
                meta: Style::default(),
                title: Style::default().add_modifier(Modifier::BOLD),
                content: Style::default(),
                status: Style::default().add_modifier(Modifier::REVERSED),
                media: Style::default(),
                liked: Style::default(),
                saved: Style::default(),
                colors: false,
            }
        }
    }

    /// Badge style for a post's mood tag.
    pub fn mood_badge(&self, mood: Mood) -> Style {
        if !self.colors {
            return Style::default();
        }
        let color = match mood {
            Mood::Hype => Color::LightRed,
            Mood::Emotional => Color::LightBlue,
            Mood::PlotTwist => Color::LightMagenta,
            Mood::Dark => Color::DarkGray,
        };
        Style::default().fg(color)
    }
}

impl Default for FeedStyles {
    fn default() -> Self {
        Self::new()
    }
}
