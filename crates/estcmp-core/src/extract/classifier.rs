//! Line classification: section headers, category labels, numeric fields.

use regex::Regex;
use tracing::trace;

use crate::models::config::ExtractConfig;
use crate::models::estimate::{LineItem, FALLBACK_CATEGORY};

use super::patterns::{AREA, COST};

/// Result of classifying a single text line.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifiedLine {
    /// The line opens a new section; carries the captured label.
    Section(String),

    /// The line is a regular item with its category and parsed fields.
    Item {
        /// Category label from the keyword table, or "Other".
        category: String,
        /// Parsed record, raw text preserved as-is.
        item: LineItem,
    },
}

/// Classifies one line at a time, with no cross-line context.
///
/// Section detection uses the strict policy: the trimmed line must be
/// one of the configured section names (case-insensitive) followed by a
/// colon. The captured label keeps its input casing. Category keywords
/// are scanned in configured order and the first case-insensitive
/// substring match wins.
///
/// Classification is pure: the same line always yields the same result.
pub struct LineClassifier {
    section_re: Regex,
    keywords: Vec<String>,
}

impl LineClassifier {
    /// Create a classifier with the default section and keyword lists.
    pub fn new() -> Self {
        Self::with_config(&ExtractConfig::default())
    }

    /// Create a classifier from an extraction configuration.
    pub fn with_config(config: &ExtractConfig) -> Self {
        let alternatives: Vec<String> = config
            .section_names
            .iter()
            .map(|name| regex::escape(name))
            .collect();
        // Escaped alternatives always form a valid pattern
        let section_re =
            Regex::new(&format!(r"(?i)^({}):$", alternatives.join("|"))).unwrap();

        Self {
            section_re,
            keywords: config.category_keywords.clone(),
        }
    }

    /// Classify one line in isolation.
    pub fn classify(&self, line: &str) -> ClassifiedLine {
        if let Some(label) = self.section_header(line) {
            trace!("section header: {label}");
            return ClassifiedLine::Section(label);
        }

        ClassifiedLine::Item {
            category: self.categorize(line),
            item: LineItem::new(line, extract_cost(line), extract_area(line)),
        }
    }

    /// If the trimmed line is an enumerated section header, return its
    /// label (input casing preserved, colon stripped).
    pub fn section_header(&self, line: &str) -> Option<String> {
        self.section_re
            .captures(line.trim())
            .map(|caps| caps[1].to_string())
    }

    /// First-match-wins category lookup; "Other" when nothing matches.
    pub fn categorize(&self, line: &str) -> String {
        let lowered = line.to_lowercase();
        self.keywords
            .iter()
            .find(|keyword| lowered.contains(&keyword.to_lowercase()))
            .cloned()
            .unwrap_or_else(|| FALLBACK_CATEGORY.to_string())
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// First currency amount on the line, commas stripped; 0.0 when absent.
pub fn extract_cost(line: &str) -> f64 {
    COST.captures(line)
        .and_then(|caps| caps[1].replace(',', "").parse().ok())
        .unwrap_or(0.0)
}

/// First square-foot measurement on the line; 0.0 when absent.
pub fn extract_area(line: &str) -> f64 {
    AREA.captures(line)
        .and_then(|caps| caps[1].replace(',', "").parse().ok())
        .unwrap_or(0.0)
}
