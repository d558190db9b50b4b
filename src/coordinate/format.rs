//! Coordinate representation identifiers

use std::fmt;
use std::str::FromStr;

use super::errors::CoordError;

/// The three supported coordinate representations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateFormat {
    /// Decimal degrees
    Dec,
    /// Degrees, minutes and seconds
    Deg,
    /// Fixed-point units of 1/360000 degree
    Mms,
}

impl CoordinateFormat {
    /// All formats, in display order
    pub fn all() -> [CoordinateFormat; 3] {
        [CoordinateFormat::Dec, CoordinateFormat::Deg, CoordinateFormat::Mms]
    }

    /// Upper-case name used in conversion names
    pub fn name(&self) -> &'static str {
        match self {
            CoordinateFormat::Dec => "DEC",
            CoordinateFormat::Deg => "DEG",
            CoordinateFormat::Mms => "MMS",
        }
    }

    /// Name of the conversion from this format to `target`, e.g. `DECToDEG`
    pub fn conversion_name(&self, target: CoordinateFormat) -> &'static str {
        use CoordinateFormat::*;
        match (self, target) {
            (Dec, Dec) => "DECToDEC",
            (Dec, Deg) => "DECToDEG",
            (Dec, Mms) => "DECToMMS",
            (Deg, Dec) => "DEGToDEC",
            (Deg, Deg) => "DEGToDEG",
            (Deg, Mms) => "DEGToMMS",
            (Mms, Dec) => "MMSToDEC",
            (Mms, Deg) => "MMSToDEG",
            (Mms, Mms) => "MMSToMMS",
        }
    }
}

impl fmt::Display for CoordinateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CoordinateFormat {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dec" | "decimal" => Ok(CoordinateFormat::Dec),
            "deg" | "dms" => Ok(CoordinateFormat::Deg),
            "mms" => Ok(CoordinateFormat::Mms),
            _ => Err(CoordError::UnknownFormat(s.to_string())),
        }
    }
}
