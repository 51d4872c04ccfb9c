//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the ranking tab bar in lines (border + content).
pub const TAB_BAR_HEIGHT: u16 = 3;

/// Height of the mood filter bar in lines.
pub const MOOD_BAR_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Rows taken by everything except the feed body.
pub const CHROME_HEIGHT: u16 = TAB_BAR_HEIGHT + MOOD_BAR_HEIGHT + STATUS_BAR_HEIGHT;

/// Event poll interval for the main loop.
pub const EVENT_POLL_MILLIS: u64 = 250;
