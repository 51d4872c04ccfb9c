//! Mood tags: coarse content-tone classifiers attached to posts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Content-tone tag carried by a post and used for pre-ranking filtering.
///
/// Serialized in snake_case (`"plot_twist"`), matching the post feed format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    /// High-energy, celebratory content.
    Hype,
    /// Tear-jerkers.
    Emotional,
    /// Surprising turns.
    PlotTwist,
    /// Bleak or grim content.
    Dark,
}

impl Mood {
    /// All moods in filter-bar order.
    pub const ALL: [Mood; 4] = [Mood::Hype, Mood::Emotional, Mood::PlotTwist, Mood::Dark];

    /// Human-readable label for the filter bar.
    pub fn label(self) -> &'static str {
        match self {
            Mood::Hype => "Hype",
            Mood::Emotional => "Emotional",
            Mood::PlotTwist => "Plot Twist",
            Mood::Dark => "Dark",
        }
    }

    /// Wire name, as used in post records and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Hype => "hype",
            Mood::Emotional => "emotional",
            Mood::PlotTwist => "plot_twist",
            Mood::Dark => "dark",
        }
    }

    /// Advance a mood filter: All → Hype → Emotional → Plot Twist → Dark → All.
    pub fn cycle(current: Option<Mood>) -> Option<Mood> {
        match current {
            None => Some(Mood::Hype),
            Some(Mood::Hype) => Some(Mood::Emotional),
            Some(Mood::Emotional) => Some(Mood::PlotTwist),
            Some(Mood::PlotTwist) => Some(Mood::Dark),
            Some(Mood::Dark) => None,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown mood name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid mood '{0}': expected one of hype, emotional, plot_twist, dark")]
pub struct InvalidMoodError(pub String);

impl FromStr for Mood {
    type Err = InvalidMoodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hype" => Ok(Mood::Hype),
            "emotional" => Ok(Mood::Emotional),
            "plot_twist" | "plot-twist" | "plottwist" => Ok(Mood::PlotTwist),
            "dark" => Ok(Mood::Dark),
            _ => Err(InvalidMoodError(s.to_string())),
        }
    }
}
