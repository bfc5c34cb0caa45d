//! Core library for estimate comparison.
//!
//! This crate provides:
//! - Document text acquisition (PDF and plain-text sources)
//! - Line classification (section headers, category keywords, cost and
//!   square-foot field extraction)
//! - Hierarchy building (section -> category -> line items)
//! - Reconciliation of two hierarchies into numeric comparison rows or
//!   per-group textual diffs
//!
//! The pipeline is fail-soft: malformed lines land in the "General"
//! section / "Other" category with zero-valued numeric fields, and any
//! input shape yields a well-formed (possibly empty) report.

pub mod compare;
pub mod document;
pub mod error;
pub mod extract;
pub mod models;

pub use error::{DocumentError, EstcmpError, ExportError, Result};
pub use models::config::{EstcmpConfig, ExtractConfig};
pub use models::estimate::{
    CategoryMap, FlatOutline, Hierarchy, LineItem, DEFAULT_SECTION, FALLBACK_CATEGORY,
};
pub use models::report::{ComparisonReport, ComparisonRow, DiffBlock, DiffReport};
pub use extract::{ClassifiedLine, FlatOutlineBuilder, HierarchyBuilder, LineClassifier};
pub use compare::{diff_outlines, diff_outlines_labeled, reconcile};
