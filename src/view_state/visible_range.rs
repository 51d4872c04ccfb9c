//! Visible range calculation result

use std::ops::Range;

/// Half-open range of item indices materialized for the current viewport.
///
/// Computed by direct arithmetic on scroll offset and item size.
/// Indices are into the ranked feed.
///
/// # Invariants
/// - `start_index <= end_index`
/// - `end_index <= item_count`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibleRange {
    /// Index of first rendered item (inclusive).
    pub start_index: usize,
    /// Index past the last rendered item (exclusive).
    pub end_index: usize,
}

impl VisibleRange {
    /// Create new visible range.
    ///
    /// # Panics
    /// In debug builds, panics if start_index > end_index.
    pub fn new(start_index: usize, end_index: usize) -> Self {
        debug_assert!(
            start_index <= end_index,
            "start_index {} > end_index {}",
            start_index,
            end_index
        );
        Self {
            start_index,
            end_index,
        }
    }

    /// The empty range at index zero.
    pub const EMPTY: Self = Self {
        start_index: 0,
        end_index: 0,
    };

    /// Number of items in the range.
    pub fn len(&self) -> usize {
        self.end_index - self.start_index
    }

    /// Check if range is empty.
    pub fn is_empty(&self) -> bool {
        self.start_index == self.end_index
    }

    /// Iterate over item indices.
    pub fn indices(&self) -> Range<usize> {
        self.start_index..self.end_index
    }

    /// Check if a specific item index is in range.
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }

    /// Last index in range (inclusive), if any.
    pub fn last(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.end_index - 1)
        }
    }
}
