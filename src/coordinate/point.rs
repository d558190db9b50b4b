//! Latitude/longitude pair and axis identifiers

use std::fmt;

use super::input::AxisInput;

/// One of the two geographic axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Short name as used in `{lat, lng}` pairs
    pub fn short_name(&self) -> &'static str {
        match self {
            Axis::Latitude => "lat",
            Axis::Longitude => "lng",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => write!(f, "latitude"),
            Axis::Longitude => write!(f, "longitude"),
        }
    }
}

/// A coordinate pair, one value per axis
///
/// The same container carries raw caller input, rendered output and
/// per-axis results; the axes never influence each other.
#[derive(Debug, Clone, PartialEq)]
pub struct LatLng<T> {
    /// Latitude value
    pub lat: T,
    /// Longitude value
    pub lng: T,
}

impl<T> LatLng<T> {
    /// Create a new pair
    pub fn new(lat: T, lng: T) -> Self {
        LatLng { lat, lng }
    }

    /// Apply a function to both axes, passing the axis along
    pub fn map<U, F>(&self, mut f: F) -> LatLng<U>
    where
        F: FnMut(Axis, &T) -> U,
    {
        LatLng {
            lat: f(Axis::Latitude, &self.lat),
            lng: f(Axis::Longitude, &self.lng),
        }
    }
}

impl LatLng<AxisInput> {
    /// Build an input pair from anything convertible into an axis input
    pub fn input(lat: impl Into<AxisInput>, lng: impl Into<AxisInput>) -> Self {
        LatLng {
            lat: lat.into(),
            lng: lng.into(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for LatLng<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}
