//! String utility functions
//!
//! Utilities for tokenising coordinate text.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").expect("whitespace pattern is valid");
    static ref PAIR_SEPARATOR: Regex = Regex::new(r"\s*[,;\t]\s*").expect("separator pattern is valid");
}

/// Splits text on runs of whitespace, ignoring leading and trailing space
pub fn split_whitespace_tokens(text: &str) -> Vec<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    WHITESPACE.split(trimmed).collect()
}

/// Splits a `lat,lng` line into its two halves
///
/// Commas, semicolons and tabs are accepted as separators. Returns `None`
/// unless there are exactly two parts.
pub fn split_pair(line: &str) -> Option<(&str, &str)> {
    let parts: Vec<&str> = PAIR_SEPARATOR.split(line.trim()).collect();
    match parts.as_slice() {
        [lat, lng] => Some((*lat, *lng)),
        _ => None,
    }
}

/// Whether a batch input line carries no coordinate
pub fn is_skippable_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}
