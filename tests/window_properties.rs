//! Property-based tests for the virtual render window.
//!
//! Invariants verified for arbitrary inputs:
//! - the render range contains the visible range
//! - neither range reaches past the item count
//! - the clamped offset never exceeds `total_size - viewport_height`
//! - the visible range covers exactly the rows in the viewport
//! - overscan extends the visible range by at most `overscan` per side
//! - materialized items are exactly the render range, positioned at `index * size`

use proptest::prelude::*;
use tomodachi_feed::view_state::{VirtualWindow, WindowParams};

fn arb_params() -> impl Strategy<Value = WindowParams> {
    (0usize..5_000, 0usize..300, 0usize..2_000_000, 0usize..2_000, 0usize..20).prop_map(
        |(item_count, estimated_item_size, scroll_offset, viewport_height, overscan)| {
            WindowParams {
                item_count,
                estimated_item_size,
                scroll_offset,
                viewport_height,
                overscan,
            }
        },
    )
}

/// Parameters that always produce a non-empty window.
fn arb_populated_params() -> impl Strategy<Value = WindowParams> {
    (1usize..5_000, 1usize..300, 0usize..2_000_000, 1usize..2_000, 0usize..20).prop_map(
        |(item_count, estimated_item_size, scroll_offset, viewport_height, overscan)| {
            WindowParams {
                item_count,
                estimated_item_size,
                scroll_offset,
                viewport_height,
                overscan,
            }
        },
    )
}

#[test]
fn reference_example_thousand_items() {
    let window = VirtualWindow::compute(WindowParams {
        item_count: 1000,
        estimated_item_size: 160,
        scroll_offset: 1600,
        viewport_height: 800,
        overscan: 5,
    });
    assert_eq!(window.visible_range().indices(), 10..15);
    assert_eq!(window.range().indices(), 5..20);
    assert_eq!(window.total_size(), 160_000);

    let starts: Vec<usize> = window.items().map(|item| item.start).collect();
    assert_eq!(starts.first(), Some(&800));
    assert_eq!(starts.last(), Some(&3040));
}

#[test]
fn empty_list_has_empty_window() {
    let window = VirtualWindow::compute(WindowParams {
        item_count: 0,
        estimated_item_size: 4,
        scroll_offset: 50,
        viewport_height: 20,
        overscan: 5,
    });
    assert!(window.range().is_empty());
    assert_eq!(window.items().count(), 0);
    assert_eq!(window.total_size(), 0);
    assert_eq!(window.scroll_offset(), 0);
}

#[test]
fn offset_past_end_shows_last_items() {
    let window = VirtualWindow::compute(WindowParams {
        item_count: 10,
        estimated_item_size: 4,
        scroll_offset: 10_000,
        viewport_height: 8,
        overscan: 0,
    });
    assert_eq!(window.scroll_offset(), 32);
    assert_eq!(window.visible_range().indices(), 8..10);
}

proptest! {
    #[test]
    fn range_contains_visible(params in arb_params()) {
        let window = VirtualWindow::compute(params);
        let visible = window.visible_range();
        let range = window.range();
        if !visible.is_empty() {
            prop_assert!(range.start_index <= visible.start_index);
            prop_assert!(range.end_index >= visible.end_index);
        }
    }

    #[test]
    fn ranges_stay_within_item_count(params in arb_params()) {
        let window = VirtualWindow::compute(params);
        prop_assert!(window.range().end_index <= params.item_count);
        prop_assert!(window.visible_range().end_index <= params.item_count);
    }

    #[test]
    fn clamped_offset_never_exceeds_max(params in arb_params()) {
        let window = VirtualWindow::compute(params);
        let max = params.total_size().saturating_sub(params.viewport_height);
        prop_assert!(window.scroll_offset() <= max);
        prop_assert!(window.scroll_offset() <= params.scroll_offset);
    }

    #[test]
    fn total_size_is_count_times_size(params in arb_params()) {
        let window = VirtualWindow::compute(params);
        prop_assert_eq!(
            window.total_size(),
            params.item_count * params.estimated_item_size
        );
    }

    #[test]
    fn visible_range_covers_viewport_rows(params in arb_populated_params()) {
        let window = VirtualWindow::compute(params);
        let size = params.estimated_item_size;
        let offset = window.scroll_offset();
        let visible = window.visible_range();

        prop_assert!(!visible.is_empty());
        // First visible item contains the top row.
        prop_assert!(visible.start_index * size <= offset);
        prop_assert!(offset < visible.end_index * size);
        // Last visible item starts inside the viewport.
        let last = visible.end_index - 1;
        prop_assert!(last * size < offset + params.viewport_height);
    }

    #[test]
    fn overscan_is_bounded_per_side(params in arb_populated_params()) {
        let window = VirtualWindow::compute(params);
        let visible = window.visible_range();
        let range = window.range();
        prop_assert_eq!(
            range.start_index,
            visible.start_index.saturating_sub(params.overscan)
        );
        prop_assert_eq!(
            range.end_index,
            (visible.end_index + params.overscan).min(params.item_count)
        );
    }

    #[test]
    fn items_match_range_and_positions(params in arb_populated_params()) {
        let window = VirtualWindow::compute(params);
        let items: Vec<_> = window.items().collect();
        prop_assert_eq!(items.len(), window.range().len());
        for (item, index) in items.iter().zip(window.range().indices()) {
            prop_assert_eq!(item.index, index);
            prop_assert_eq!(item.start, index * params.estimated_item_size);
            prop_assert_eq!(item.size, params.estimated_item_size);
        }
    }

    #[test]
    fn compute_is_deterministic(params in arb_params()) {
        prop_assert_eq!(VirtualWindow::compute(params), VirtualWindow::compute(params));
    }
}
