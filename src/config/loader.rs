//! Configuration file loading with precedence handling.

use crate::model::Mood;
use crate::view_state::layout_params::{DEFAULT_ITEM_SIZE, DEFAULT_OVERSCAN};
use crate::view_state::LayoutParams;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV: &str = "TOMODACHI_CONFIG";

/// Environment variable overriding the initial mood filter.
pub const MOOD_ENV: &str = "TOMODACHI_MOOD";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/tomodachi/config.toml`.
///
/// ```toml
/// estimated_item_size = 5
/// overscan = 3
/// scroll_step = 2
/// default_mood = "plot_twist"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Estimated post card height in rows.
    #[serde(default)]
    pub estimated_item_size: Option<usize>,

    /// Cards rendered beyond each viewport edge.
    #[serde(default)]
    pub overscan: Option<usize>,

    /// Rows moved per single scroll step.
    #[serde(default)]
    pub scroll_step: Option<usize>,

    /// Mood filter applied at startup.
    #[serde(default)]
    pub default_mood: Option<Mood>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Base directory for session-scoped feed state.
    #[serde(default)]
    pub state_dir: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Estimated post card height in rows.
    pub estimated_item_size: usize,
    /// Overscan in cards.
    pub overscan: usize,
    /// Rows per scroll step.
    pub scroll_step: usize,
    /// Initial mood filter.
    pub mood: Option<Mood>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Base directory for session state; `None` uses the platform default.
    pub state_dir: Option<PathBuf>,
}

impl ResolvedConfig {
    /// Window layout derived from this config.
    pub fn layout(&self) -> LayoutParams {
        LayoutParams::new(self.estimated_item_size, self.overscan)
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            estimated_item_size: DEFAULT_ITEM_SIZE,
            overscan: DEFAULT_OVERSCAN,
            scroll_step: 1,
            mood: None,
            log_file_path: default_log_path(),
            state_dir: None,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/tomodachi/tomo.log` on Linux, or the platform
/// equivalent. Falls back to the current directory when no state directory
/// exists.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("tomodachi").join("tomo.log")
    } else {
        PathBuf::from("tomo.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path (`~/.config/tomodachi/config.toml` on Linux).
///
/// Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tomodachi").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `TOMODACHI_CONFIG` environment variable
/// 3. Default path `~/.config/tomodachi/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        estimated_item_size: config
            .estimated_item_size
            .unwrap_or(defaults.estimated_item_size),
        overscan: config.overscan.unwrap_or(defaults.overscan),
        scroll_step: config.scroll_step.unwrap_or(defaults.scroll_step).max(1),
        mood: config.default_mood.or(defaults.mood),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        state_dir: config.state_dir.or(defaults.state_dir),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `TOMODACHI_MOOD`: initial mood filter; `all` clears it, unknown values are ignored
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(MOOD_ENV) {
        if raw.trim().eq_ignore_ascii_case("all") {
            config.mood = None;
        } else if let Ok(mood) = raw.parse::<Mood>() {
            config.mood = Some(mood);
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, mood_override: Option<Mood>) -> ResolvedConfig {
    if let Some(mood) = mood_override {
        config.mood = Some(mood);
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
