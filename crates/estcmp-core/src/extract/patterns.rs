//! Common regex patterns for estimate line extraction.
//!
//! The pattern set is centralized here so format changes stay local;
//! the enumerated section-header pattern is built from configuration in
//! the classifier instead, since its alternatives are user-editable.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Currency amount: $ followed by digits/commas, optional decimal part
    pub static ref COST: Regex = Regex::new(
        r"\$([0-9][0-9,]*(?:\.[0-9]*)?)"
    ).unwrap();

    // Area in square feet, tolerating space/period variations
    pub static ref AREA: Regex = Regex::new(
        r"(?i)([0-9][0-9,]*(?:\.[0-9]+)?)\s?sq\.?\s?ft"
    ).unwrap();

    // Loose group header: one word, optional second word, trailing colon
    pub static ref LOOSE_HEADER: Regex = Regex::new(
        r"^(\w+(?:\s\w+)?):$"
    ).unwrap();
}
