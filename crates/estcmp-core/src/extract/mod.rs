//! Structural extraction: line classification and hierarchy building.

pub mod builder;
pub mod classifier;
pub mod patterns;

pub use builder::{FlatOutlineBuilder, HierarchyBuilder};
pub use classifier::{extract_area, extract_cost, ClassifiedLine, LineClassifier};
