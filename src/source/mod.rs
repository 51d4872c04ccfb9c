//! Post input sources.
//!
//! The feed reads its flat post collection once at startup, either from a
//! file or from piped stdin. Both accept a JSON array of posts or JSON Lines
//! with one post per line.

use crate::model::error::{InputError, ParseError};
use crate::model::{Post, PostId};
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{debug, warn};

pub mod file;
pub mod stdin;

pub use file::FileSource;
pub use stdin::StdinSource;

/// Posts decoded from one input, plus the number of JSON Lines records skipped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostBatch {
    /// Successfully decoded posts in input order.
    pub posts: Vec<Post>,
    /// Malformed lines that were logged and dropped.
    pub skipped: usize,
    /// Posts whose id already appeared earlier in the input. They are kept.
    pub duplicates: usize,
}

/// Log every post whose id repeats an earlier one and return how many did.
fn count_duplicate_ids(posts: &[Post]) -> usize {
    let mut seen: HashSet<&PostId> = HashSet::with_capacity(posts.len());
    let mut duplicates = 0;
    for (idx, post) in posts.iter().enumerate() {
        if !seen.insert(&post.id) {
            warn!(id = %post.id, position = idx, "Duplicate post id");
            duplicates += 1;
        }
    }
    duplicates
}

/// Decode a post collection.
///
/// Input whose first non-whitespace character is `[` is treated as a JSON
/// array and must parse as a whole. Anything else is JSON Lines: blank lines
/// are ignored and malformed lines are logged at `warn` and skipped.
/// Repeated post ids are logged at `warn` and counted but not removed.
///
/// # Errors
///
/// Returns `ParseError::InvalidDocument` when a JSON array fails to parse.
pub fn parse_posts(text: &str) -> Result<PostBatch, ParseError> {
    if text.trim_start().starts_with('[') {
        let posts: Vec<Post> =
            serde_json::from_str(text).map_err(|e| ParseError::InvalidDocument {
                message: e.to_string(),
            })?;
        debug!(count = posts.len(), "Decoded post array");
        let duplicates = count_duplicate_ids(&posts);
        return Ok(PostBatch {
            posts,
            skipped: 0,
            duplicates,
        });
    }

    let mut batch = PostBatch::default();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<Post>(line) {
            Ok(post) => batch.posts.push(post),
            Err(e) => {
                let err = ParseError::InvalidLine {
                    line: idx + 1,
                    message: e.to_string(),
                };
                warn!(error = %err, "Skipping malformed post line");
                batch.skipped += 1;
            }
        }
    }
    batch.duplicates = count_duplicate_ids(&batch.posts);
    debug!(
        count = batch.posts.len(),
        skipped = batch.skipped,
        duplicates = batch.duplicates,
        "Decoded post lines"
    );
    Ok(batch)
}

/// Where the post collection comes from.
#[derive(Debug)]
pub enum InputSource {
    /// A file given on the command line.
    File(FileSource),
    /// Piped stdin.
    Stdin(StdinSource<std::io::Stdin>),
}

impl InputSource {
    /// Read and decode every post from this source.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` for read failures and `InputError::Parse`
    /// for an unparseable JSON array.
    pub fn read_posts(self) -> Result<PostBatch, InputError> {
        match self {
            InputSource::File(f) => f.read_posts(),
            InputSource::Stdin(s) => s.read_posts(),
        }
    }
}

/// Detect and create the appropriate input source.
///
/// 1. If a file path is provided: `FileSource` (fails if missing)
/// 2. Otherwise: `StdinSource`, which fails with `NoInput` when stdin is a terminal
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist, or
/// `InputError::NoInput` if no file is given and stdin is not piped.
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) => Ok(InputSource::File(FileSource::new(path)?)),
        None => Ok(InputSource::Stdin(StdinSource::new()?)),
    }
}
