//! Degrees / minutes / seconds triple
//!
//! Degrees follow the floor convention: the sign lives in the degrees
//! component and minutes and seconds always count upward from it, so
//! `-37.5` becomes `-38 30 0.0`. Converting back with
//! `degrees + minutes / 60 + seconds / 3600` restores the original value.

use crate::convert::rounding::round_to_places;
use crate::utils::string_utils::split_whitespace_tokens;
use super::errors::{CoordError, CoordResult};
use super::point::Axis;

/// Largest degrees magnitude a triple can hold
///
/// Beyond 2^53 whole degrees an `f64` no longer resolves single degrees.
pub const MAX_DEGREES: i64 = 1 << 53;

/// A sexagesimal coordinate value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees, carrying the sign of the value
    pub degrees: i64,
    /// Whole minutes, 0 to 59
    pub minutes: u32,
    /// Seconds, 0 (inclusive) to 60 (exclusive)
    pub seconds: f64,
}

impl Dms {
    /// Create a triple from components that are already known to be valid
    pub fn new(degrees: i64, minutes: u32, seconds: f64) -> Self {
        Dms { degrees, minutes, seconds }
    }

    /// Create a triple from raw components, validating each one
    ///
    /// Degrees and minutes must be whole numbers; minutes and seconds must
    /// lie in `[0, 60)`.
    pub fn try_new(axis: Axis, degrees: f64, minutes: f64, seconds: f64) -> CoordResult<Self> {
        let degrees = Self::whole_degrees(axis, degrees)?;
        if !minutes.is_finite() || minutes.fract() != 0.0 || !(0.0..60.0).contains(&minutes) {
            return Err(CoordError::ComponentOutOfRange { axis, component: "minutes", value: minutes });
        }
        if !seconds.is_finite() || !(0.0..60.0).contains(&seconds) {
            return Err(CoordError::ComponentOutOfRange { axis, component: "seconds", value: seconds });
        }

        Ok(Dms {
            degrees,
            minutes: minutes as u32,
            seconds,
        })
    }

    /// Decompose decimal degrees with floor semantics
    ///
    /// Values whose whole degrees exceed `MAX_DEGREES` are rejected.
    pub fn from_decimal(axis: Axis, value: f64) -> CoordResult<Self> {
        let floor = value.floor();
        let degrees = Self::whole_degrees(axis, floor)?;
        let total_minutes = (value - floor) * 60.0;
        let minutes = total_minutes.floor().clamp(0.0, 59.0);
        let seconds = ((total_minutes - minutes) * 60.0).max(0.0);

        Ok(Dms {
            degrees,
            minutes: minutes as u32,
            seconds,
        })
    }

    /// Recompose decimal degrees
    pub fn to_decimal(&self) -> f64 {
        self.degrees as f64 + self.minutes as f64 / 60.0 + self.seconds / 3600.0
    }

    /// Round seconds to `places` digits, carrying a 60 into minutes and degrees
    pub fn rounded(&self, axis: Axis, places: usize) -> CoordResult<Self> {
        let mut degrees = self.degrees;
        let mut minutes = self.minutes;
        let mut seconds = round_to_places(self.seconds, places);

        if seconds >= 60.0 {
            seconds = 0.0;
            minutes = minutes.saturating_add(1);
        }
        if minutes >= 60 {
            minutes = 0;
            degrees = degrees.checked_add(1).ok_or(CoordError::ComponentOutOfRange {
                axis,
                component: "degrees",
                value: self.degrees as f64,
            })?;
        }

        Ok(Dms { degrees, minutes, seconds })
    }

    /// Render as `"D M S.s"` with `places` fractional digits of seconds
    pub fn render(&self, axis: Axis, places: usize) -> CoordResult<String> {
        let r = self.rounded(axis, places)?;
        Ok(format!("{} {} {:.*}", r.degrees, r.minutes, places, r.seconds))
    }

    /// Parse a `"D M S"` string
    ///
    /// The text must hold exactly three whitespace-separated numbers.
    pub fn parse(axis: Axis, text: &str) -> CoordResult<Self> {
        let tokens = split_whitespace_tokens(text);
        if tokens.len() != 3 {
            return Err(CoordError::UnparsableDeg { axis, text: text.to_string() });
        }

        let mut parts = [0.0f64; 3];
        for (slot, token) in parts.iter_mut().zip(tokens.iter()) {
            *slot = token.parse::<f64>()
                .map_err(|_| CoordError::UnparsableDeg { axis, text: text.to_string() })?;
        }

        Dms::try_new(axis, parts[0], parts[1], parts[2])
    }

    fn whole_degrees(axis: Axis, degrees: f64) -> CoordResult<i64> {
        if !degrees.is_finite() || degrees.fract() != 0.0 || degrees.abs() > MAX_DEGREES as f64 {
            return Err(CoordError::ComponentOutOfRange { axis, component: "degrees", value: degrees });
        }
        Ok(degrees as i64)
    }
}
