//! Hierarchy building: one linear pass over the line sequence.

use tracing::debug;

use crate::models::config::ExtractConfig;
use crate::models::estimate::{FlatOutline, Hierarchy, DEFAULT_SECTION};

use super::classifier::{ClassifiedLine, LineClassifier};
use super::patterns::LOOSE_HEADER;

/// Builds a section -> category -> line-item hierarchy from an ordered
/// line sequence.
///
/// A single fold threads `(current section, hierarchy so far)` through
/// the sequence; section headers update the current section and emit no
/// item, every other line is classified and appended under the current
/// section. The "General" section is always present, even when empty.
pub struct HierarchyBuilder {
    classifier: LineClassifier,
}

struct BuildState {
    current_section: String,
    hierarchy: Hierarchy,
}

impl BuildState {
    fn new() -> Self {
        let mut hierarchy = Hierarchy::new();
        hierarchy.ensure_section(DEFAULT_SECTION);
        Self {
            current_section: DEFAULT_SECTION.to_string(),
            hierarchy,
        }
    }
}

impl HierarchyBuilder {
    /// Create a builder with the default classifier configuration.
    pub fn new() -> Self {
        Self {
            classifier: LineClassifier::new(),
        }
    }

    /// Create a builder from an extraction configuration.
    pub fn with_config(config: &ExtractConfig) -> Self {
        Self {
            classifier: LineClassifier::with_config(config),
        }
    }

    /// Build a hierarchy from the lines of one document.
    ///
    /// Empty input yields a valid hierarchy holding only the default
    /// section. Item order within a category is encounter order.
    pub fn build<I, S>(&self, lines: I) -> Hierarchy
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let state = lines
            .into_iter()
            .fold(BuildState::new(), |state, line| self.step(state, line.as_ref()));

        debug!(
            "built hierarchy: {} sections, {} items",
            state.hierarchy.section_count(),
            state.hierarchy.item_count()
        );
        state.hierarchy
    }

    fn step(&self, mut state: BuildState, line: &str) -> BuildState {
        match self.classifier.classify(line) {
            ClassifiedLine::Section(label) => {
                state.hierarchy.ensure_section(label.clone());
                state.current_section = label;
            }
            ClassifiedLine::Item { category, item } => {
                state
                    .hierarchy
                    .push_item(state.current_section.as_str(), category, item);
            }
        }
        state
    }
}

impl Default for HierarchyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a flat outline for the textual diff pipeline.
///
/// Uses the loose header policy: any trimmed `word(, second word)?:`
/// line opens a new group, with no enumerated restriction. There is no
/// category classification and no numeric extraction; non-header lines
/// are kept raw under the current group, starting in "General".
pub struct FlatOutlineBuilder;

impl FlatOutlineBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build a flat outline from the lines of one document.
    pub fn build<I, S>(&self, lines: I) -> FlatOutline
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (outline, _) = lines.into_iter().fold(
            (
                {
                    let mut outline = FlatOutline::new();
                    outline.ensure_group(DEFAULT_SECTION);
                    outline
                },
                DEFAULT_SECTION.to_string(),
            ),
            |(mut outline, current), line| {
                let line = line.as_ref();
                if let Some(caps) = LOOSE_HEADER.captures(line.trim()) {
                    let group = caps[1].to_string();
                    outline.ensure_group(group.clone());
                    (outline, group)
                } else {
                    outline.push_line(current.as_str(), line);
                    (outline, current)
                }
            },
        );

        debug!("built flat outline: {} groups", outline.group_names().count());
        outline
    }
}

impl Default for FlatOutlineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
