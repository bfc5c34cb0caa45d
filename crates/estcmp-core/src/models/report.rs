//! Report model - the canonical output shapes of reconciliation.
//!
//! Both report types are derived, immutable collections; downstream
//! presentation consumes them read-only and nothing here keeps a
//! reference back to the source hierarchies.

use serde::{Deserialize, Serialize};

use crate::error::ExportError;

/// One reconciled record comparing an item across two documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Section the item was filed under.
    pub section: String,

    /// Category the item was filed under.
    pub category: String,

    /// Raw line text identifying the item.
    pub item: String,

    /// Cost on the left side, 0.0 when the item is absent there.
    pub cost_left: f64,

    /// Cost on the right side, 0.0 when the item is absent there.
    pub cost_right: f64,

    /// `cost_right - cost_left`.
    pub cost_delta: f64,

    /// Area on the left side, 0.0 when the item is absent there.
    pub area_left: f64,

    /// Area on the right side, 0.0 when the item is absent there.
    pub area_right: f64,

    /// `area_right - area_left`.
    pub area_delta: f64,
}

impl ComparisonRow {
    /// Whether either numeric field differs between the two sides.
    pub fn is_changed(&self) -> bool {
        self.cost_delta != 0.0 || self.area_delta != 0.0
    }
}

/// Ordered collection of comparison rows from a numeric reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    rows: Vec<ComparisonRow>,
}

impl ComparisonReport {
    /// Column names of the tabular representation, in output order.
    pub const COLUMNS: [&'static str; 9] = [
        "Section",
        "Category",
        "LineItem",
        "Cost_Left",
        "Cost_Right",
        "Cost_Delta",
        "Area_Left",
        "Area_Right",
        "Area_Delta",
    ];

    /// Wrap reconciled rows into a report.
    pub fn from_rows(rows: Vec<ComparisonRow>) -> Self {
        Self { rows }
    }

    /// The rows, in reconciliation order.
    pub fn rows(&self) -> &[ComparisonRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Re-order rows lexicographically by (section, category, item).
    ///
    /// Reconciliation order is deterministic but follows document
    /// insertion order; callers that need a fully explicit order use
    /// this instead.
    pub fn sorted(mut self) -> Self {
        self.rows.sort_by(|a, b| {
            (&a.section, &a.category, &a.item).cmp(&(&b.section, &b.category, &b.item))
        });
        self
    }

    /// Keep only rows where a numeric field actually changed.
    pub fn changed_only(mut self) -> Self {
        self.rows.retain(ComparisonRow::is_changed);
        self
    }

    /// Export as CSV with the fixed column header.
    pub fn to_csv(&self) -> Result<String, ExportError> {
        let mut wtr = csv::Writer::from_writer(vec![]);

        wtr.write_record(Self::COLUMNS)?;
        for row in &self.rows {
            wtr.write_record([
                row.section.clone(),
                row.category.clone(),
                row.item.clone(),
                format!("{:.2}", row.cost_left),
                format!("{:.2}", row.cost_right),
                format!("{:.2}", row.cost_delta),
                format!("{:.2}", row.area_left),
                format!("{:.2}", row.area_right),
                format!("{:.2}", row.area_delta),
            ])?;
        }

        let data = String::from_utf8(wtr.into_inner().map_err(|e| e.into_error())?)?;
        Ok(data)
    }
}

/// One group's line-based textual difference between two documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffBlock {
    /// Group (flat category) label.
    pub category: String,

    /// Diff lines: `---`/`+++` header pair, then `-`, `+`, and
    /// space-prefixed context lines.
    pub lines: Vec<String>,
}

/// Ordered collection of diff blocks from a textual reconciliation.
///
/// Groups with identical line sequences on both sides are not present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiffReport {
    blocks: Vec<DiffBlock>,
}

impl DiffReport {
    /// Wrap diff blocks into a report.
    pub fn from_blocks(blocks: Vec<DiffBlock>) -> Self {
        Self { blocks }
    }

    /// The blocks, in reconciliation order.
    pub fn blocks(&self) -> &[DiffBlock] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Flat text export: each block preceded by a `=== <Category> ===`
    /// header line, then the raw diff lines one per output line.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            out.push_str(&format!("=== {} ===\n", block.category));
            for line in &block.lines {
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_row(section: &str, item: &str, cost_left: f64, cost_right: f64) -> ComparisonRow {
        ComparisonRow {
            section: section.to_string(),
            category: "Painting".to_string(),
            item: item.to_string(),
            cost_left,
            cost_right,
            cost_delta: cost_right - cost_left,
            area_left: 0.0,
            area_right: 0.0,
            area_delta: 0.0,
        }
    }

    #[test]
    fn test_csv_export_has_header_and_rows() {
        let report =
            ComparisonReport::from_rows(vec![sample_row("Kitchen", "Painting $200.00", 200.0, 250.0)]);

        let csv = report.to_csv().unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Section,Category,LineItem,Cost_Left,Cost_Right,Cost_Delta,Area_Left,Area_Right,Area_Delta"
        );
        assert_eq!(
            lines.next().unwrap(),
            "Kitchen,Painting,Painting $200.00,200.00,250.00,50.00,0.00,0.00,0.00"
        );
    }

    #[test]
    fn test_sorted_orders_by_section_category_item() {
        let report = ComparisonReport::from_rows(vec![
            sample_row("Kitchen", "b", 0.0, 0.0),
            sample_row("Bedroom", "z", 0.0, 0.0),
            sample_row("Kitchen", "a", 0.0, 0.0),
        ])
        .sorted();

        let items: Vec<(&str, &str)> = report
            .rows()
            .iter()
            .map(|r| (r.section.as_str(), r.item.as_str()))
            .collect();
        assert_eq!(items, vec![("Bedroom", "z"), ("Kitchen", "a"), ("Kitchen", "b")]);
    }

    #[test]
    fn test_changed_only_filters_zero_delta_rows() {
        let report = ComparisonReport::from_rows(vec![
            sample_row("Kitchen", "same", 100.0, 100.0),
            sample_row("Kitchen", "changed", 100.0, 150.0),
        ])
        .changed_only();

        assert_eq!(report.len(), 1);
        assert_eq!(report.rows()[0].item, "changed");
    }

    #[test]
    fn test_diff_report_text_export() {
        let report = DiffReport::from_blocks(vec![DiffBlock {
            category: "Painting".to_string(),
            lines: vec!["--- left".to_string(), "+++ right".to_string(), "+new".to_string()],
        }]);

        assert_eq!(report.to_text(), "=== Painting ===\n--- left\n+++ right\n+new\n");
    }
}
