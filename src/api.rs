use log::info;

use crate::coordinate::{AxisInput, ConversionSettings, CoordResult, CoordinateFormat, LatLng, Rendered};
use crate::convert::{ConversionReport, CoordinateConverter};

/// Main interface to the CoordKit library
///
/// Each of the nine named conversions takes a `{lat, lng}` pair and returns
/// the rendered pair. They never fail: malformed input on the DEC -> DEC and
/// MMS -> MMS paths yields `''` for both axes, any other failure yields
/// `'Invalid'` for both axes. Use `convert_detailed` to see which axis failed.
#[derive(Debug, Clone, Default)]
pub struct CoordKit {
    converter: CoordinateConverter,
}

impl CoordKit {
    /// Create a CoordKit instance with explicit settings
    pub fn new(settings: ConversionSettings) -> Self {
        CoordKit {
            converter: CoordinateConverter::new(settings),
        }
    }

    /// Create a CoordKit instance from a settings file
    ///
    /// # Arguments
    /// * `config_path` - Optional TOML settings file; built-in settings otherwise
    ///
    /// # Returns
    /// A CoordKit instance or an error if the settings cannot be loaded
    pub fn from_config(config_path: Option<&str>) -> CoordResult<Self> {
        let settings = match config_path {
            Some(path) => {
                info!("Loading conversion settings from {}", path);
                ConversionSettings::from_file(path)?
            }
            None => ConversionSettings::builtin(),
        };
        Ok(CoordKit::new(settings))
    }

    /// Settings in use
    pub fn settings(&self) -> &ConversionSettings {
        self.converter.settings()
    }

    /// Convert a pair between any two formats
    pub fn convert(&self, source: CoordinateFormat, target: CoordinateFormat,
                   coords: &LatLng<AxisInput>) -> LatLng<Rendered> {
        self.converter.convert(source, target, coords)
    }

    /// Convert a pair between any two formats, keeping per-axis results
    pub fn convert_detailed(&self, source: CoordinateFormat, target: CoordinateFormat,
                            coords: &LatLng<AxisInput>) -> ConversionReport {
        self.converter.convert_detailed(source, target, coords)
    }

    /// Normalize decimal degrees to fixed 6-digit text
    pub fn dec_to_dec(&self, coords: &LatLng<AxisInput>) -> LatLng<Rendered> {
        self.convert(CoordinateFormat::Dec, CoordinateFormat::Dec, coords)
    }

    /// Decimal degrees to `"D M S.s"`
    pub fn dec_to_deg(&self, coords: &LatLng<AxisInput>) -> LatLng<Rendered> {
        self.convert(CoordinateFormat::Dec, CoordinateFormat::Deg, coords)
    }

    /// Decimal degrees to MMS units, truncating toward zero
    pub fn dec_to_mms(&self, coords: &LatLng<AxisInput>) -> LatLng<Rendered> {
        self.convert(CoordinateFormat::Dec, CoordinateFormat::Mms, coords)
    }

    /// `"D M S"` text or packed DEG to decimal degrees
    pub fn deg_to_dec(&self, coords: &LatLng<AxisInput>) -> LatLng<Rendered> {
        self.convert(CoordinateFormat::Deg, CoordinateFormat::Dec, coords)
    }

    /// Packed DEG (or `"D M S"` text) to `"D M S.s"`
    pub fn deg_to_deg(&self, coords: &LatLng<AxisInput>) -> LatLng<Rendered> {
        self.convert(CoordinateFormat::Deg, CoordinateFormat::Deg, coords)
    }

    /// Packed DEG (or `"D M S"` text) to MMS units, rounding to nearest
    pub fn deg_to_mms(&self, coords: &LatLng<AxisInput>) -> LatLng<Rendered> {
        self.convert(CoordinateFormat::Deg, CoordinateFormat::Mms, coords)
    }

    /// MMS units to decimal degrees
    pub fn mms_to_dec(&self, coords: &LatLng<AxisInput>) -> LatLng<Rendered> {
        self.convert(CoordinateFormat::Mms, CoordinateFormat::Dec, coords)
    }

    /// MMS units to `"D M S.s"`
    pub fn mms_to_deg(&self, coords: &LatLng<AxisInput>) -> LatLng<Rendered> {
        self.convert(CoordinateFormat::Mms, CoordinateFormat::Deg, coords)
    }

    /// Normalize MMS units to integers, truncating toward zero
    pub fn mms_to_mms(&self, coords: &LatLng<AxisInput>) -> LatLng<Rendered> {
        self.convert(CoordinateFormat::Mms, CoordinateFormat::Mms, coords)
    }
}
