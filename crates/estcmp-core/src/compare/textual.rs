//! Textual reconciliation: per-group unified line diffs.

use tracing::debug;

use crate::models::estimate::FlatOutline;
use crate::models::report::{DiffBlock, DiffReport};

/// Diff two flat outlines with default side labels.
pub fn diff_outlines(left: &FlatOutline, right: &FlatOutline) -> DiffReport {
    diff_outlines_labeled(left, right, "left", "right")
}

/// Diff two flat outlines, one block per group whose line sequences
/// differ.
///
/// Groups are taken from the union of both sides (left insertion order,
/// then right-only groups); a group absent on one side diffs against an
/// empty sequence. Identical groups produce no block. Block lines use
/// the unified-diff convention: a `--- <left_label>` / `+++
/// <right_label>` header pair, then `-` for left-only lines, `+` for
/// right-only lines, and a leading space for common context.
pub fn diff_outlines_labeled(
    left: &FlatOutline,
    right: &FlatOutline,
    left_label: &str,
    right_label: &str,
) -> DiffReport {
    let mut groups: Vec<&str> = left.group_names().collect();
    for group in right.group_names() {
        if !groups.contains(&group) {
            groups.push(group);
        }
    }

    let mut blocks = Vec::new();
    for group in groups {
        let left_lines = left.get(group).unwrap_or(&[]);
        let right_lines = right.get(group).unwrap_or(&[]);
        if left_lines == right_lines {
            continue;
        }

        let mut lines = vec![format!("--- {left_label}"), format!("+++ {right_label}")];
        for change in diff::slice(left_lines, right_lines) {
            match change {
                diff::Result::Left(line) => lines.push(format!("-{line}")),
                diff::Result::Right(line) => lines.push(format!("+{line}")),
                diff::Result::Both(line, _) => lines.push(format!(" {line}")),
            }
        }

        blocks.push(DiffBlock {
            category: group.to_string(),
            lines,
        });
    }

    debug!("textual diff produced {} blocks", blocks.len());
    DiffReport::from_blocks(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::builder::FlatOutlineBuilder;
    use pretty_assertions::assert_eq;

    fn build(lines: &[&str]) -> FlatOutline {
        FlatOutlineBuilder::new().build(lines.iter().copied())
    }

    #[test]
    fn test_identical_groups_emit_no_block() {
        let left = build(&["General prep", "Kitchen:", "Painting $200.00"]);
        let right = build(&["General prep", "Kitchen:", "Painting $200.00"]);

        assert!(diff_outlines(&left, &right).is_empty());
    }

    #[test]
    fn test_changed_group_gets_header_and_markers() {
        let left = build(&["Kitchen:", "Painting $200.00"]);
        let right = build(&["Kitchen:", "Painting $250.00", "Flooring $80.00"]);

        let report = diff_outlines(&left, &right);
        assert_eq!(report.len(), 1);

        let block = &report.blocks()[0];
        assert_eq!(block.category, "Kitchen");
        assert_eq!(
            block.lines,
            vec![
                "--- left",
                "+++ right",
                "-Painting $200.00",
                "+Painting $250.00",
                "+Flooring $80.00",
            ]
        );
    }

    #[test]
    fn test_common_lines_appear_as_context() {
        let left = build(&["shared line", "old line"]);
        let right = build(&["shared line", "new line"]);

        let report = diff_outlines(&left, &right);
        let block = &report.blocks()[0];
        assert!(block.lines.contains(&" shared line".to_string()));
    }

    #[test]
    fn test_group_missing_on_one_side_diffs_against_empty() {
        let left = build(&[]);
        let right = build(&["Garage:", "Doors $500.00"]);

        let report = diff_outlines(&left, &right);
        assert_eq!(report.len(), 1);
        assert_eq!(report.blocks()[0].category, "Garage");
        assert!(report.blocks()[0].lines.contains(&"+Doors $500.00".to_string()));
    }

    #[test]
    fn test_custom_labels_in_header() {
        let left = build(&["a"]);
        let right = build(&["b"]);

        let report = diff_outlines_labeled(&left, &right, "ours.pdf", "theirs.pdf");
        let block = &report.blocks()[0];
        assert_eq!(block.lines[0], "--- ours.pdf");
        assert_eq!(block.lines[1], "+++ theirs.pdf");
    }

    #[test]
    fn test_diff_soundness_reconstructs_right_side() {
        let left = build(&["keep", "drop me", "also keep"]);
        let right = build(&["keep", "added", "also keep", "tail"]);

        let report = diff_outlines(&left, &right);
        let block = &report.blocks()[0];

        // Replaying context and additions must reproduce the right side
        let reconstructed: Vec<&str> = block.lines[2..]
            .iter()
            .filter(|l| !l.starts_with('-'))
            .map(|l| &l[1..])
            .collect();
        assert_eq!(reconstructed, right.get("General").unwrap());
    }
}
