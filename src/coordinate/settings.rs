//! Conversion settings
//!
//! Settings are read from TOML. The built-in values live in
//! `coordinate_formats.toml` at the crate root and are parsed once.

use std::fs;

use lazy_static::lazy_static;
use log::warn;

use super::errors::{CoordError, CoordResult};
use super::packed::PackedLayout;
use super::point::Axis;

lazy_static! {
    static ref BUILTIN_SETTINGS: ConversionSettings = {
        let content = include_str!("../../coordinate_formats.toml");
        ConversionSettings::from_str(content).unwrap_or_else(|e| {
            warn!("Failed to parse built-in conversion settings: {}", e);
            ConversionSettings::default()
        })
    };
}

/// Precision and layout parameters shared by every conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionSettings {
    /// Fractional digits of rendered decimal degrees
    pub decimal_places: usize,
    /// Fractional digits of rendered seconds
    pub seconds_places: usize,
    /// MMS units per degree
    pub mms_scale: f64,
    /// Packed DEG layout for latitude
    pub latitude_layout: PackedLayout,
    /// Packed DEG layout for longitude
    pub longitude_layout: PackedLayout,
}

impl Default for ConversionSettings {
    fn default() -> Self {
        ConversionSettings {
            decimal_places: 6,
            seconds_places: 1,
            mms_scale: 360000.0,
            latitude_layout: PackedLayout::LATITUDE,
            longitude_layout: PackedLayout::LONGITUDE,
        }
    }
}

impl ConversionSettings {
    /// Settings parsed from the embedded `coordinate_formats.toml`
    pub fn builtin() -> Self {
        BUILTIN_SETTINGS.clone()
    }

    /// Parse settings from a TOML string
    ///
    /// Keys that are absent keep their default value.
    pub fn from_str(content: &str) -> CoordResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(CoordError::Config(format!("Failed to parse TOML: {}", e))),
        };

        let mut settings = ConversionSettings::default();

        if let Some(places) = Self::get_integer(&toml_value, "decimal", "places")? {
            settings.decimal_places = places;
        }
        if let Some(places) = Self::get_integer(&toml_value, "sexagesimal", "seconds_places")? {
            settings.seconds_places = places;
        }
        if let Some(scale) = Self::get_number(&toml_value, "mms", "scale")? {
            settings.mms_scale = scale;
        }

        if let Some(packed) = toml_value.get("packed") {
            Self::parse_layout(packed, "latitude", &mut settings.latitude_layout)?;
            Self::parse_layout(packed, "longitude", &mut settings.longitude_layout)?;
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file
    pub fn from_file(path: &str) -> CoordResult<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => return Err(CoordError::IoError(e)),
        };

        Self::from_str(&contents)
    }

    /// Packed DEG layout for an axis
    pub fn layout_for(&self, axis: Axis) -> &PackedLayout {
        match axis {
            Axis::Latitude => &self.latitude_layout,
            Axis::Longitude => &self.longitude_layout,
        }
    }

    /// Check that the settings are internally consistent
    pub fn validate(&self) -> CoordResult<()> {
        if self.decimal_places > 15 {
            return Err(CoordError::Config(format!(
                "decimal places must be at most 15, got {}", self.decimal_places)));
        }
        if self.seconds_places > 15 {
            return Err(CoordError::Config(format!(
                "seconds places must be at most 15, got {}", self.seconds_places)));
        }
        if !(self.mms_scale > 0.0) || !self.mms_scale.is_finite() {
            return Err(CoordError::Config(format!(
                "MMS scale must be positive, got {}", self.mms_scale)));
        }
        self.latitude_layout.validate()?;
        self.longitude_layout.validate()?;
        Ok(())
    }

    fn as_number(value: &toml::Value) -> Option<f64> {
        value.as_float().or_else(|| value.as_integer().map(|i| i as f64))
    }

    fn get_number(toml_value: &toml::Value, table: &str, key: &str) -> CoordResult<Option<f64>> {
        match toml_value.get(table).and_then(|t| t.get(key)) {
            None => Ok(None),
            Some(value) => Self::as_number(value)
                .map(Some)
                .ok_or_else(|| CoordError::Config(format!("{}.{} must be a number", table, key))),
        }
    }

    fn get_integer(toml_value: &toml::Value, table: &str, key: &str) -> CoordResult<Option<usize>> {
        match toml_value.get(table).and_then(|t| t.get(key)) {
            None => Ok(None),
            Some(value) => match value.as_integer() {
                Some(i) if i >= 0 => Ok(Some(i as usize)),
                _ => Err(CoordError::Config(format!(
                    "{}.{} must be a non-negative integer", table, key))),
            },
        }
    }

    fn parse_layout(packed: &toml::Value, axis_name: &str, target: &mut PackedLayout) -> CoordResult<()> {
        if let Some(d) = Self::get_number(packed, axis_name, "degree_divisor")? {
            target.degree_divisor = d;
        }
        if let Some(m) = Self::get_number(packed, axis_name, "minute_divisor")? {
            target.minute_divisor = m;
        }
        Ok(())
    }
}
