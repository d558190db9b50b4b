//! Custom error types for coordinate conversion

use std::fmt;
use std::io;

use super::point::Axis;

/// Coordinate conversion error types
#[derive(Debug)]
pub enum CoordError {
    /// I/O error
    IoError(io::Error),
    /// Axis value is not a finite number
    MalformedInput {
        axis: Axis,
        value: String,
    },
    /// DEG text does not split into exactly three numeric parts
    UnparsableDeg {
        axis: Axis,
        text: String,
    },
    /// Decoded DEG component lies outside its valid range
    ComponentOutOfRange {
        axis: Axis,
        component: &'static str,
        value: f64,
    },
    /// Unknown coordinate format name
    UnknownFormat(String),
    /// Invalid conversion settings
    Config(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::IoError(e) => write!(f, "I/O error: {}", e),
            CoordError::MalformedInput { axis, value } => {
                write!(f, "Malformed {} value: '{}' is not a number", axis, value)
            }
            CoordError::UnparsableDeg { axis, text } => {
                write!(f, "Unparsable {} DEG value: '{}' (expected 'D M S')", axis, text)
            }
            CoordError::ComponentOutOfRange { axis, component, value } => {
                write!(f, "{} {} out of range: {}", axis, component, value)
            }
            CoordError::UnknownFormat(name) => write!(f, "Unknown coordinate format: {}", name),
            CoordError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CoordError::GenericError(msg) => write!(f, "Coordinate error: {}", msg),
        }
    }
}

impl std::error::Error for CoordError {}

impl From<io::Error> for CoordError {
    fn from(error: io::Error) -> Self {
        CoordError::IoError(error)
    }
}

impl From<String> for CoordError {
    fn from(msg: String) -> Self {
        CoordError::GenericError(msg)
    }
}

/// Result type for coordinate operations
pub type CoordResult<T> = Result<T, CoordError>;
