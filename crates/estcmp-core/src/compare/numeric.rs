//! Numeric reconciliation of two hierarchies into comparison rows.

use indexmap::IndexMap;
use tracing::debug;

use crate::models::estimate::{CategoryMap, Hierarchy, LineItem};
use crate::models::report::{ComparisonReport, ComparisonRow};

/// Reconcile two hierarchies into one row per item key.
///
/// Iterates the sections of `left` in insertion order; sections present
/// only in `right` are dropped (left-driven comparison, kept for
/// compatibility with the original tool's behavior). Within each
/// section the category keys and then the item keys (raw text) are the
/// union of both sides, and an item absent on one side contributes
/// `(0, 0)` to that side of its row.
///
/// Union order is the left side's insertion order followed by
/// right-only keys in the right side's insertion order.
pub fn reconcile(left: &Hierarchy, right: &Hierarchy) -> ComparisonReport {
    let empty = CategoryMap::new();
    let mut rows = Vec::new();

    for (section, left_cats) in left.sections() {
        let right_cats = right.get(section).unwrap_or(&empty);

        let left_keys = left_cats.keys().map(String::as_str);
        let right_keys = right_cats.keys().map(String::as_str);
        for category in key_union(left_keys, right_keys) {
            let left_items = index_by_raw(left_cats.get(category));
            let right_items = index_by_raw(right_cats.get(category));

            for item in key_union(left_items.keys().copied(), right_items.keys().copied()) {
                let (cost_left, area_left) = fields_of(left_items.get(item));
                let (cost_right, area_right) = fields_of(right_items.get(item));

                rows.push(ComparisonRow {
                    section: section.to_string(),
                    category: category.to_string(),
                    item: item.to_string(),
                    cost_left,
                    cost_right,
                    cost_delta: cost_right - cost_left,
                    area_left,
                    area_right,
                    area_delta: area_right - area_left,
                });
            }
        }
    }

    debug!("reconciled {} rows across {} sections", rows.len(), left.section_count());
    ComparisonReport::from_rows(rows)
}

/// Left keys in order, then right-only keys in order.
fn key_union<'a>(
    left: impl IntoIterator<Item = &'a str>,
    right: impl IntoIterator<Item = &'a str>,
) -> Vec<&'a str> {
    let mut keys: Vec<&str> = left.into_iter().collect();
    for key in right {
        if !keys.contains(&key) {
            keys.push(key);
        }
    }
    keys
}

/// Index items by raw text; a duplicated raw line keeps its first
/// position and the last occurrence's fields.
fn index_by_raw(items: Option<&Vec<LineItem>>) -> IndexMap<&str, &LineItem> {
    let mut map = IndexMap::new();
    if let Some(items) = items {
        for item in items {
            map.insert(item.raw.as_str(), item);
        }
    }
    map
}

fn fields_of(item: Option<&&LineItem>) -> (f64, f64) {
    item.map(|item| (item.cost, item.area)).unwrap_or((0.0, 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::builder::HierarchyBuilder;
    use pretty_assertions::assert_eq;

    fn build(lines: &[&str]) -> Hierarchy {
        HierarchyBuilder::new().build(lines.iter().copied())
    }

    #[test]
    fn test_kitchen_example() {
        let left = build(&["Kitchen:", "Painting $200.00"]);
        let right = build(&["Kitchen:", "Painting $250.00", "Flooring $80.00"]);

        let report = reconcile(&left, &right);
        let rows = report.rows();
        assert_eq!(rows.len(), 2);

        let painting = rows.iter().find(|r| r.category == "Painting").unwrap();
        assert_eq!(painting.cost_left, 200.0);
        assert_eq!(painting.cost_right, 250.0);
        assert_eq!(painting.cost_delta, 50.0);

        let flooring = rows.iter().find(|r| r.category == "Flooring").unwrap();
        assert_eq!(flooring.cost_left, 0.0);
        assert_eq!(flooring.cost_right, 80.0);
        assert_eq!(flooring.cost_delta, 80.0);
    }

    #[test]
    fn test_delta_arithmetic_holds_for_all_rows() {
        let left = build(&[
            "Bedroom:",
            "Drywall repair 120 sq ft $450.00",
            "Painting $300.00",
        ]);
        let right = build(&[
            "Bedroom:",
            "Drywall repair 100 sq ft $400.00",
            "Trim $75.00",
        ]);

        for row in reconcile(&left, &right).rows() {
            assert_eq!(row.cost_delta, row.cost_right - row.cost_left);
            assert_eq!(row.area_delta, row.area_right - row.area_left);
        }
    }

    #[test]
    fn test_right_only_sections_are_dropped() {
        let left = build(&["Kitchen:", "Painting $200.00"]);
        let right = build(&["Garage:", "Doors $500.00"]);

        let report = reconcile(&left, &right);
        assert!(report.rows().iter().all(|r| r.section != "Garage"));
    }

    #[test]
    fn test_every_union_item_appears_exactly_once() {
        let left = build(&["Kitchen:", "Painting $200.00", "Cabinets $900.00"]);
        let right = build(&["Kitchen:", "Painting $200.00", "Flooring $80.00"]);

        let report = reconcile(&left, &right);
        let mut items: Vec<&str> = report.rows().iter().map(|r| r.item.as_str()).collect();
        items.sort_unstable();
        assert_eq!(
            items,
            vec!["Cabinets $900.00", "Flooring $80.00", "Painting $200.00"]
        );
    }

    #[test]
    fn test_self_comparison_has_no_nonzero_delta() {
        let doc = build(&[
            "Bedroom:",
            "Drywall repair 120 sq ft $450.00",
            "Kitchen:",
            "Painting $200.00",
        ]);

        let report = reconcile(&doc, &doc);
        assert!(!report.is_empty());
        assert!(report.rows().iter().all(|r| !r.is_changed()));
    }

    #[test]
    fn test_empty_hierarchies_yield_zero_rows() {
        let left = build(&[]);
        let right = build(&[]);
        assert!(reconcile(&left, &right).is_empty());
    }

    #[test]
    fn test_sections_follow_left_insertion_order() {
        let left = build(&["Kitchen:", "Painting $1.00", "Bedroom:", "Trim $2.00"]);
        let right = build(&["Bedroom:", "Trim $2.00", "Kitchen:", "Painting $1.00"]);

        let report = reconcile(&left, &right);
        let sections: Vec<&str> = report
            .rows()
            .iter()
            .map(|r| r.section.as_str())
            .collect();
        assert_eq!(sections, vec!["Kitchen", "Bedroom"]);
    }
}
