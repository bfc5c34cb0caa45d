//! Data model for extracted estimate hierarchies.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Section label used before any section header has been seen.
pub const DEFAULT_SECTION: &str = "General";

/// Category label for lines that match no configured keyword.
pub const FALLBACK_CATEGORY: &str = "Other";

/// One parsed record derived from a single input text line.
///
/// The raw text doubles as the item's identity during reconciliation:
/// two textually differing lines are two distinct items, even when they
/// describe the same real-world work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Raw line text as it appeared in the document.
    pub raw: String,

    /// Currency amount found on the line, 0.0 when absent.
    pub cost: f64,

    /// Square-foot measurement found on the line, 0.0 when absent.
    pub area: f64,
}

impl LineItem {
    /// Create a new line item.
    pub fn new(raw: impl Into<String>, cost: f64, area: f64) -> Self {
        Self {
            raw: raw.into(),
            cost,
            area,
        }
    }
}

/// Ordered mapping of category label to the line items filed under it.
pub type CategoryMap = IndexMap<String, Vec<LineItem>>;

/// The full section -> category -> line-item structure built from one
/// document. Immutable once the builder hands it out.
///
/// Sections, categories, and items all keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hierarchy {
    sections: IndexMap<String, CategoryMap>,
}

impl Hierarchy {
    /// Create an empty hierarchy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure a section exists, creating it empty if needed.
    pub fn ensure_section(&mut self, section: impl Into<String>) {
        self.sections.entry(section.into()).or_default();
    }

    /// Append an item under `section` / `category`, auto-creating
    /// containers as needed. Never fails on unseen keys.
    pub fn push_item(
        &mut self,
        section: impl Into<String>,
        category: impl Into<String>,
        item: LineItem,
    ) {
        self.sections
            .entry(section.into())
            .or_default()
            .entry(category.into())
            .or_default()
            .push(item);
    }

    /// Categories of one section, if present.
    pub fn get(&self, section: &str) -> Option<&CategoryMap> {
        self.sections.get(section)
    }

    /// Iterate sections in insertion order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &CategoryMap)> {
        self.sections.iter().map(|(name, cats)| (name.as_str(), cats))
    }

    /// Section labels in insertion order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Number of sections (including empty ones).
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Total number of line items across all sections and categories.
    pub fn item_count(&self) -> usize {
        self.sections
            .values()
            .flat_map(|cats| cats.values())
            .map(Vec::len)
            .sum()
    }
}

/// Flat single-level grouping of raw lines, used by the textual diff
/// pipeline where the group key is the only grouping level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlatOutline {
    groups: IndexMap<String, Vec<String>>,
}

impl FlatOutline {
    /// Create an empty outline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure a group exists, creating it empty if needed.
    pub fn ensure_group(&mut self, group: impl Into<String>) {
        self.groups.entry(group.into()).or_default();
    }

    /// Append a raw line under `group`.
    pub fn push_line(&mut self, group: impl Into<String>, line: impl Into<String>) {
        self.groups
            .entry(group.into())
            .or_default()
            .push(line.into());
    }

    /// Lines of one group, if present.
    pub fn get(&self, group: &str) -> Option<&[String]> {
        self.groups.get(group).map(Vec::as_slice)
    }

    /// Iterate groups in insertion order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(name, lines)| (name.as_str(), lines.as_slice()))
    }

    /// Group labels in insertion order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_push_item_creates_containers() {
        let mut hierarchy = Hierarchy::new();
        hierarchy.push_item("Kitchen", "Painting", LineItem::new("Painting $200.00", 200.0, 0.0));

        let cats = hierarchy.get("Kitchen").unwrap();
        assert_eq!(cats["Painting"].len(), 1);
        assert_eq!(cats["Painting"][0].cost, 200.0);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut hierarchy = Hierarchy::new();
        hierarchy.ensure_section("General");
        hierarchy.push_item("Kitchen", "Painting", LineItem::new("a", 0.0, 0.0));
        hierarchy.push_item("Bedroom", "Drywall", LineItem::new("b", 0.0, 0.0));

        let names: Vec<&str> = hierarchy.section_names().collect();
        assert_eq!(names, vec!["General", "Kitchen", "Bedroom"]);
    }

    #[test]
    fn test_item_count() {
        let mut hierarchy = Hierarchy::new();
        assert_eq!(hierarchy.item_count(), 0);

        hierarchy.push_item("General", "Other", LineItem::new("x", 0.0, 0.0));
        hierarchy.push_item("General", "Other", LineItem::new("y", 0.0, 0.0));
        hierarchy.push_item("Kitchen", "Flooring", LineItem::new("z", 0.0, 0.0));
        assert_eq!(hierarchy.item_count(), 3);
    }

    #[test]
    fn test_flat_outline_groups() {
        let mut outline = FlatOutline::new();
        outline.push_line("General", "first");
        outline.push_line("Kitchen", "second");
        outline.push_line("General", "third");

        assert_eq!(outline.get("General").unwrap(), ["first", "third"]);
        let names: Vec<&str> = outline.group_names().collect();
        assert_eq!(names, vec!["General", "Kitchen"]);
    }
}
