//! Rendered conversion output for a single axis

use std::fmt;

/// The value a conversion hands back to the caller for one axis
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    /// Formatted text, e.g. `"37.566482"` or `"37 33 59.3"`
    Text(String),
    /// Integer MMS units
    Integer(i64),
    /// Empty-string sentinel for malformed input on normalize paths
    Empty,
    /// `"Invalid"` sentinel for failed conversions
    Invalid,
}

impl Rendered {
    /// The formatted text, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Rendered::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The integer, if this is an MMS value
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Rendered::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Whether this is one of the failure sentinels
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Rendered::Empty | Rendered::Invalid)
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rendered::Text(s) => write!(f, "{}", s),
            Rendered::Integer(v) => write!(f, "{}", v),
            Rendered::Empty => Ok(()),
            Rendered::Invalid => write!(f, "Invalid"),
        }
    }
}
