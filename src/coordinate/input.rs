//! Raw caller input for a single axis

use std::fmt;

use super::errors::{CoordError, CoordResult};
use super::point::Axis;

/// A single axis value as handed over by a caller
///
/// Values come from map events, search results or manual text entry, so
/// both numbers and free text are accepted.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisInput {
    Number(f64),
    Text(String),
}

impl AxisInput {
    /// The value as a finite number, if it is one
    ///
    /// Text counts as numeric when it parses to a finite `f64` after trimming.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AxisInput::Number(v) if v.is_finite() => Some(*v),
            AxisInput::Number(_) => None,
            AxisInput::Text(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite()),
        }
    }

    /// Like `as_number`, but reports a malformed input error for the axis
    pub fn require_number(&self, axis: Axis) -> CoordResult<f64> {
        self.as_number().ok_or_else(|| CoordError::MalformedInput {
            axis,
            value: self.to_string(),
        })
    }

    /// Whether this input is numeric
    pub fn is_numeric(&self) -> bool {
        self.as_number().is_some()
    }
}

impl fmt::Display for AxisInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisInput::Number(v) => write!(f, "{}", v),
            AxisInput::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for AxisInput {
    fn from(value: f64) -> Self {
        AxisInput::Number(value)
    }
}

impl From<i64> for AxisInput {
    fn from(value: i64) -> Self {
        AxisInput::Number(value as f64)
    }
}

impl From<i32> for AxisInput {
    fn from(value: i32) -> Self {
        AxisInput::Number(value as f64)
    }
}

impl From<&str> for AxisInput {
    fn from(value: &str) -> Self {
        AxisInput::Text(value.to_string())
    }
}

impl From<String> for AxisInput {
    fn from(value: String) -> Self {
        AxisInput::Text(value)
    }
}
