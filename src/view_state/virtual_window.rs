//! Virtualized render window over a long, fixed-estimate item list.
//!
//! Given the item count, an estimated per-item size, the scroll offset, the
//! viewport height and an overscan margin, computes which items must be
//! materialized and where each one starts. Units are whatever the caller
//! measures in (terminal rows here).
//!
//! # Complexity
//!
//! - `compute`: O(1), pure arithmetic on offset and item size
//! - `items`: O(range length), never O(item_count)

use super::visible_range::VisibleRange;

/// Inputs to a window computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowParams {
    /// Number of items in the list.
    pub item_count: usize,
    /// Estimated size of each item.
    pub estimated_item_size: usize,
    /// Requested scroll offset from the top of the content.
    pub scroll_offset: usize,
    /// Height of the viewport.
    pub viewport_height: usize,
    /// Extra items materialized above and below the viewport.
    pub overscan: usize,
}

impl WindowParams {
    /// Total content size: `item_count × estimated_item_size`, saturating.
    pub fn total_size(&self) -> usize {
        self.item_count.saturating_mul(self.estimated_item_size)
    }

    /// Largest offset that still fills the viewport (0 when content is shorter).
    pub fn max_scroll_offset(&self) -> usize {
        self.total_size().saturating_sub(self.viewport_height)
    }

    /// Requested offset clamped into `[0, max_scroll_offset]`.
    pub fn clamped_offset(&self) -> usize {
        self.scroll_offset.min(self.max_scroll_offset())
    }
}

/// One materialized item and its absolute position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtualItem {
    /// Index into the list.
    pub index: usize,
    /// Absolute start offset: `index × estimated_item_size`.
    pub start: usize,
    /// Item size.
    pub size: usize,
}

impl VirtualItem {
    /// Absolute end offset (exclusive).
    pub fn end(&self) -> usize {
        self.start + self.size
    }
}

/// Derived, ephemeral window state. Recomputed on every scroll or resize.
///
/// # Invariants
/// - `range` ⊇ `visible`
/// - `range.end_index <= item_count`
/// - empty when `item_count == 0` or `estimated_item_size == 0`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtualWindow {
    params: WindowParams,
    scroll_offset: usize,
    visible: VisibleRange,
    range: VisibleRange,
}

impl VirtualWindow {
    /// Compute the window for `params`.
    ///
    /// Offsets past the end clamp so the last items fill the viewport.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tomodachi_feed::view_state::{VirtualWindow, WindowParams};
    /// let window = VirtualWindow::compute(WindowParams {
    ///     item_count: 1000,
    ///     estimated_item_size: 160,
    ///     scroll_offset: 1600,
    ///     viewport_height: 800,
    ///     overscan: 5,
    /// });
    /// assert_eq!(window.visible_range().indices(), 10..15);
    /// assert_eq!(window.range().indices(), 5..20);
    /// assert_eq!(window.total_size(), 160_000);
    /// ```
    pub fn compute(params: WindowParams) -> Self {
        let count = params.item_count;
        let size = params.estimated_item_size;

        if count == 0 || size == 0 {
            return Self {
                params,
                scroll_offset: 0,
                visible: VisibleRange::EMPTY,
                range: VisibleRange::EMPTY,
            };
        }

        let offset = params.clamped_offset();
        let last_index = count - 1;

        let first = (offset / size).min(last_index);
        let last = if params.viewport_height == 0 {
            first
        } else {
            ((offset + params.viewport_height - 1) / size).min(last_index)
        };

        let start = first.saturating_sub(params.overscan);
        let end = (last + 1).saturating_add(params.overscan).min(count);

        Self {
            params,
            scroll_offset: offset,
            visible: VisibleRange::new(first, last + 1),
            range: VisibleRange::new(start, end),
        }
    }

    /// Parameters this window was computed from.
    pub fn params(&self) -> WindowParams {
        self.params
    }

    /// Size of the full scrollable content.
    pub fn total_size(&self) -> usize {
        self.params.total_size()
    }

    /// Effective (clamped) scroll offset.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Items intersecting the viewport, without overscan.
    pub fn visible_range(&self) -> VisibleRange {
        self.visible
    }

    /// Items to materialize, including overscan.
    pub fn range(&self) -> VisibleRange {
        self.range
    }

    /// Materialized items with their absolute start offsets.
    pub fn items(&self) -> impl Iterator<Item = VirtualItem> + '_ {
        let size = self.params.estimated_item_size;
        self.range.indices().map(move |index| VirtualItem {
            index,
            start: index * size,
            size,
        })
    }
}
