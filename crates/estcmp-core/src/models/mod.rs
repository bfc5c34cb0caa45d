//! Data models: estimate hierarchies, reports, and configuration.

pub mod config;
pub mod estimate;
pub mod report;

pub use config::{EstcmpConfig, ExtractConfig};
pub use estimate::{CategoryMap, FlatOutline, Hierarchy, LineItem, DEFAULT_SECTION, FALLBACK_CATEGORY};
pub use report::{ComparisonReport, ComparisonRow, DiffBlock, DiffReport};
