//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the estcmp pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EstcmpConfig {
    /// Line classification configuration.
    pub extract: ExtractConfig,
}

impl Default for EstcmpConfig {
    fn default() -> Self {
        Self {
            extract: ExtractConfig::default(),
        }
    }
}

/// Line classification configuration.
///
/// Both lists are ordered and order is significant: the category
/// keyword table is scanned front to back and the first match wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Section names recognized as `Name:` headers (case-insensitive).
    pub section_names: Vec<String>,

    /// Category keyword priority table, first match wins.
    pub category_keywords: Vec<String>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            section_names: [
                "Bedroom",
                "Kitchen",
                "Bathroom",
                "Entry",
                "Dining Room",
                "Living Room",
                "Hallway",
                "Laundry Room",
                "Closet",
                "Garage",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            category_keywords: [
                "Drywall",
                "Flooring",
                "Baseboards",
                "Painting",
                "Ceiling",
                "Trim",
                "Doors",
                "Windows",
                "Insulation",
                "Cabinets",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl EstcmpConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_keyword_order() {
        let config = ExtractConfig::default();
        assert_eq!(config.category_keywords[0], "Drywall");
        assert_eq!(config.category_keywords[3], "Painting");
        assert_eq!(config.category_keywords.len(), 10);
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = EstcmpConfig::default();
        config.extract.section_names.push("Attic".to_string());
        config.save(&path).unwrap();

        let loaded = EstcmpConfig::from_file(&path).unwrap();
        assert_eq!(loaded.extract.section_names, config.extract.section_names);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: EstcmpConfig = serde_json::from_str("{}").unwrap();
        assert!(!config.extract.category_keywords.is_empty());
    }
}
