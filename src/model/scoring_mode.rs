//! Feed ranking regimes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The four ranking regimes a feed can be ordered by.
///
/// Exactly one mode is active at a time. Serialized lowercase (`"hot"`),
/// which is also the persisted `tab` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    /// Engagement decayed by age.
    #[default]
    Hot,
    /// Most recent first.
    New,
    /// Most liked first.
    Top,
    /// Engagement velocity.
    Rising,
}

impl ScoringMode {
    /// All modes in tab-bar order.
    pub const ALL: [ScoringMode; 4] = [
        ScoringMode::Hot,
        ScoringMode::New,
        ScoringMode::Top,
        ScoringMode::Rising,
    ];

    /// Wire name (`hot`, `new`, `top`, `rising`).
    pub fn as_str(self) -> &'static str {
        match self {
            ScoringMode::Hot => "hot",
            ScoringMode::New => "new",
            ScoringMode::Top => "top",
            ScoringMode::Rising => "rising",
        }
    }

    /// Tab label.
    pub fn label(self) -> &'static str {
        match self {
            ScoringMode::Hot => "Hot",
            ScoringMode::New => "New",
            ScoringMode::Top => "Top",
            ScoringMode::Rising => "Rising",
        }
    }

    /// Position in [`ScoringMode::ALL`].
    pub fn index(self) -> usize {
        match self {
            ScoringMode::Hot => 0,
            ScoringMode::New => 1,
            ScoringMode::Top => 2,
            ScoringMode::Rising => 3,
        }
    }

    /// Next tab, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping around.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A ranking mode name that does not name any [`ScoringMode`].
///
/// Unknown modes are always surfaced to the caller; they never fall back to
/// [`ScoringMode::Hot`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid scoring mode '{0}': expected one of hot, new, top, rising")]
pub struct InvalidModeError(pub String);

impl FromStr for ScoringMode {
    type Err = InvalidModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hot" => Ok(ScoringMode::Hot),
            "new" => Ok(ScoringMode::New),
            "top" => Ok(ScoringMode::Top),
            "rising" => Ok(ScoringMode::Rising),
            _ => Err(InvalidModeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_hot() {
        assert_eq!(ScoringMode::default(), ScoringMode::Hot);
    }

    #[test]
    fn parse_accepts_all_wire_names_case_insensitively() {
        assert_eq!("hot".parse(), Ok(ScoringMode::Hot));
        assert_eq!("NEW".parse(), Ok(ScoringMode::New));
        assert_eq!(" Top ".parse(), Ok(ScoringMode::Top));
        assert_eq!("rising".parse(), Ok(ScoringMode::Rising));
    }

    #[test]
    fn parse_rejects_unknown_mode_with_value() {
        let err = "controversial".parse::<ScoringMode>().unwrap_err();
        assert_eq!(err, InvalidModeError("controversial".to_string()));
        assert!(err.to_string().contains("controversial"));
    }

    #[test]
    fn parse_rejects_empty() {
        assert!("".parse::<ScoringMode>().is_err());
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(ScoringMode::Rising.next(), ScoringMode::Hot);
        assert_eq!(ScoringMode::Hot.prev(), ScoringMode::Rising);
        for mode in ScoringMode::ALL {
            assert_eq!(mode.next().prev(), mode);
        }
    }

    #[test]
    fn index_matches_all_order() {
        for (i, mode) in ScoringMode::ALL.iter().enumerate() {
            assert_eq!(mode.index(), i);
        }
    }

    #[test]
    fn serde_round_trips_lowercase() {
        assert_eq!(serde_json::to_string(&ScoringMode::Rising).unwrap(), "\"rising\"");
        let mode: ScoringMode = serde_json::from_str("\"top\"").unwrap();
        assert_eq!(mode, ScoringMode::Top);
    }
}
