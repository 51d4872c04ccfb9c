//! Error types for the feed client.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via `?` and
//! `From` conversions up to [`AppError`].
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from the binary's setup and event loop
//!   - [`InputError`] - Post file/stdin reading failures (file not found, no input, IO)
//!   - [`ParseError`] - Post record parsing failures (malformed JSON, bad document)
//!   - [`ConfigError`] - Config file read/parse failures
//!   - [`LoggingError`] - Tracing subscriber setup failures
//!   - [`TuiError`] - Terminal/TUI rendering failures
//!
//! # Error Recovery Strategy
//!
//! Malformed lines in a JSON Lines post file are **non-fatal**: they are logged and skipped
//! so the feed still shows every record that did parse. A whole-document parse failure (a
//! broken JSON array) is fatal because no records can be recovered from it.
//!
//! Ranking and filtering are total and never fail. Session-state persistence failures are
//! swallowed inside the feed store and never reach this taxonomy.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::view::TuiError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the post collection from a file or stdin.
    ///
    /// **Recovery**: Display the error and exit. The feed cannot be shown without posts.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// Config file exists but could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// Failures in the crossterm/ratatui layer such as broken pipes during rendering.
    /// **Recovery**: Restore the terminal, write the error to stderr and exit.
    #[error("{0}")]
    Terminal(#[from] TuiError),
}

/// Errors encountered when reading post input from files or stdin.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified post file does not exist at the given path.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use tomodachi_feed::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.json")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.json"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The filesystem path that was not found.
        path: PathBuf,
    },

    /// No input source was provided: no file argument and stdin is a terminal.
    ///
    /// **Recovery**: Show both invocation modes (`tomo posts.json` and
    /// `cat posts.json | tomo`) and exit with non-zero status.
    #[error("No input source: provide a file path or pipe data to stdin")]
    NoInput,

    /// The input could not be parsed as a post collection.
    #[error("Invalid post data: {0}")]
    Parse(#[from] ParseError),

    /// Generic I/O error reading from the input source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors encountered when parsing post records.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A line of a JSON Lines file is not a valid post record.
    ///
    /// Non-fatal: the line is logged and skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use tomodachi_feed::model::error::ParseError;
    ///
    /// let err = ParseError::InvalidLine {
    ///     line: 42,
    ///     message: "missing field `createdAt`".to_string()
    /// };
    /// assert!(err.to_string().contains("line 42"));
    /// ```
    #[error("Invalid post at line {line}: {message}")]
    InvalidLine {
        /// 1-based line number.
        line: usize,
        /// Parser message from `serde_json`.
        message: String,
    },

    /// A JSON array document could not be parsed as a list of posts.
    ///
    /// Fatal: no records can be recovered from a broken array.
    #[error("Invalid post document: {message}")]
    InvalidDocument {
        /// Parser message from `serde_json`.
        message: String,
    },
}
