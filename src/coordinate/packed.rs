//! Packed DEG values
//!
//! Some callers hand over DEG coordinates as a single decimal number whose
//! digit groups hold degrees, minutes and seconds (`373359.3` for
//! `37 33 59.3`). The packed form only exists at the input boundary; it is
//! unpacked into a `Dms` immediately.

use super::dms::Dms;
use super::errors::{CoordError, CoordResult};
use super::point::Axis;

/// Digit-group layout of a packed DEG value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackedLayout {
    /// Divisor isolating the degrees group
    pub degree_divisor: f64,
    /// Divisor separating minutes from seconds
    pub minute_divisor: f64,
}

impl PackedLayout {
    /// Latitude layout, `DD MM SS.s` behind a divisor of 10000
    pub const LATITUDE: PackedLayout = PackedLayout {
        degree_divisor: 10000.0,
        minute_divisor: 100.0,
    };

    /// Longitude layout, degrees group behind a divisor of 1000
    pub const LONGITUDE: PackedLayout = PackedLayout {
        degree_divisor: 1000.0,
        minute_divisor: 100.0,
    };

    /// Create a layout from its two divisors
    pub fn new(degree_divisor: f64, minute_divisor: f64) -> Self {
        PackedLayout { degree_divisor, minute_divisor }
    }

    /// Check that the divisors describe a usable layout
    pub fn validate(&self) -> CoordResult<()> {
        if !(self.minute_divisor > 0.0) || !self.minute_divisor.is_finite() {
            return Err(CoordError::Config(format!(
                "minute_divisor must be positive, got {}", self.minute_divisor)));
        }
        if !(self.degree_divisor > self.minute_divisor) || !self.degree_divisor.is_finite() {
            return Err(CoordError::Config(format!(
                "degree_divisor ({}) must be greater than minute_divisor ({})",
                self.degree_divisor, self.minute_divisor)));
        }
        Ok(())
    }

    /// Split a packed value into its components
    ///
    /// Negative values have no defined packing and end up with negative
    /// minutes or seconds, which are rejected like any other out-of-range
    /// component.
    pub fn unpack(&self, axis: Axis, value: f64) -> CoordResult<Dms> {
        if !value.is_finite() {
            return Err(CoordError::MalformedInput { axis, value: value.to_string() });
        }

        let degrees = (value / self.degree_divisor).floor();
        let minutes = ((value % self.degree_divisor) / self.minute_divisor).floor();
        let seconds = value % self.minute_divisor;

        Dms::try_new(axis, degrees, minutes, seconds)
    }
}
