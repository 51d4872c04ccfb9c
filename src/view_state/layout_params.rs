//! Global layout parameters for the feed window.

/// Default estimated height of one post card, in rows.
pub const DEFAULT_ITEM_SIZE: usize = 4;

/// Default number of cards materialized beyond each viewport edge.
pub const DEFAULT_OVERSCAN: usize = 5;

/// Parameters that, together with item count, offset and viewport, fully
/// determine the virtual window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutParams {
    /// Estimated size of every item. Zero renders nothing.
    pub estimated_item_size: usize,
    /// Overscan margin in items.
    pub overscan: usize,
}

impl LayoutParams {
    /// Create new layout params.
    pub fn new(estimated_item_size: usize, overscan: usize) -> Self {
        Self {
            estimated_item_size,
            overscan,
        }
    }
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self::new(DEFAULT_ITEM_SIZE, DEFAULT_OVERSCAN)
    }
}
