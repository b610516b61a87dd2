//! Page layout calculation
//!
//! These types and functions compute the absolute box placements for a
//! content page before any PDF operation is emitted.

mod plan;
mod types;

pub use plan::compute_layout;
pub use types::{LayoutParams, LayoutPlan, Rect, Variant};
