//! Comparison engine: numeric and textual reconciliation.

pub mod numeric;
pub mod textual;

pub use numeric::reconcile;
pub use textual::{diff_outlines, diff_outlines_labeled};
