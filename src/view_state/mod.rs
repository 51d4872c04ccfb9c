//! View-state layer - virtual window math for the feed list
//!
//! Pure computations that decide which posts of the ranked feed are
//! materialized for the current viewport and where each one is placed.
//!
//! # Module Structure
//!
//! - `layout_params`: LayoutParams - estimated item size and overscan
//! - `visible_range`: VisibleRange - half-open index range
//! - `virtual_window`: VirtualWindow - window computation and item positions

pub mod layout_params;
pub mod virtual_window;
pub mod visible_range;

pub use layout_params::LayoutParams;
pub use virtual_window::{VirtualItem, VirtualWindow, WindowParams};
pub use visible_range::VisibleRange;
