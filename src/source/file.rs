//! File-based post source.

use super::{parse_posts, PostBatch};
use crate::model::error::InputError;
use std::path::{Path, PathBuf};
use tracing::info;

/// A post file read once at startup.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for an existing file.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file and decode its posts.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` if the file cannot be read and
    /// `InputError::Parse` if it holds a malformed JSON array.
    pub fn read_posts(self) -> Result<PostBatch, InputError> {
        let text = std::fs::read_to_string(&self.path)?;
        let batch = parse_posts(&text)?;
        info!(
            path = %self.path.display(),
            posts = batch.posts.len(),
            skipped = batch.skipped,
            duplicates = batch.duplicates,
            "Loaded posts from file"
        );
        Ok(batch)
    }
}
