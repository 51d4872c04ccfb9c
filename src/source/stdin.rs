//! Stdin-based post source for piped input.

use super::{parse_posts, PostBatch};
use crate::model::error::InputError;
use std::io::{IsTerminal, Read};
use tracing::info;

/// Stdin source for piped post data (`cat posts.json | tomo`).
///
/// The whole stream is read to EOF before the feed is ranked.
#[derive(Debug)]
pub struct StdinSource<R: Read> {
    reader: R,
}

impl StdinSource<std::io::Stdin> {
    /// Create a source from the process stdin.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NoInput` if stdin is an interactive terminal, so
    /// the TUI never blocks waiting for typed input.
    pub fn new() -> Result<Self, InputError> {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(InputError::NoInput);
        }
        Ok(Self { reader: stdin })
    }
}

impl<R: Read> StdinSource<R> {
    /// Create a source from any reader, bypassing the terminal check.
    pub fn from_reader(reader: R) -> Self {
        Self { reader }
    }

    /// Read to EOF and decode the posts.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` for read failures (including invalid UTF-8)
    /// and `InputError::Parse` for a malformed JSON array.
    pub fn read_posts(mut self) -> Result<PostBatch, InputError> {
        let mut text = String::new();
        self.reader.read_to_string(&mut text)?;
        let batch = parse_posts(&text)?;
        info!(
            posts = batch.posts.len(),
            skipped = batch.skipped,
            duplicates = batch.duplicates,
            "Loaded posts from stdin"
        );
        Ok(batch)
    }
}
