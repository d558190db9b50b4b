//! Pair-level conversion
//!
//! Applies a conversion handler to both axes. Callers that render the result
//! directly use `convert`, which never fails: if either axis fails both axes
//! report the handler's sentinel. `convert_detailed` keeps the per-axis
//! outcome for callers that want to tell the axes apart.

use log::{debug, warn};

use crate::coordinate::{
    AxisInput, ConversionSettings, CoordError, CoordResult, CoordinateFormat, LatLng, Rendered,
};
use super::factory::ConversionFactory;
use super::handler::FormatConversion;

/// Per-axis outcome of converting one coordinate pair
#[derive(Debug)]
pub struct ConversionReport {
    /// Name of the conversion that produced this report
    pub name: &'static str,
    /// Result for each axis
    pub results: LatLng<CoordResult<Rendered>>,
    sentinel: Rendered,
}

impl ConversionReport {
    /// Whether both axes converted successfully
    pub fn is_ok(&self) -> bool {
        self.results.lat.is_ok() && self.results.lng.is_ok()
    }

    /// Errors of the failed axes, latitude first
    pub fn errors(&self) -> Vec<&CoordError> {
        [&self.results.lat, &self.results.lng]
            .into_iter()
            .filter_map(|r| r.as_ref().err())
            .collect()
    }

    /// Collapse into the rendered pair, failing both axes together
    pub fn collapse(self) -> LatLng<Rendered> {
        match (self.results.lat, self.results.lng) {
            (Ok(lat), Ok(lng)) => LatLng::new(lat, lng),
            _ => LatLng::new(self.sentinel.clone(), self.sentinel),
        }
    }
}

/// Converts coordinate pairs using a fixed set of settings
#[derive(Debug, Clone)]
pub struct CoordinateConverter {
    settings: ConversionSettings,
}

impl Default for CoordinateConverter {
    fn default() -> Self {
        CoordinateConverter::new(ConversionSettings::builtin())
    }
}

impl CoordinateConverter {
    /// Create a converter with the given settings
    pub fn new(settings: ConversionSettings) -> Self {
        CoordinateConverter { settings }
    }

    /// Settings used by this converter
    pub fn settings(&self) -> &ConversionSettings {
        &self.settings
    }

    /// Convert a pair, collapsing failures into sentinels
    pub fn convert(&self, source: CoordinateFormat, target: CoordinateFormat,
                   coords: &LatLng<AxisInput>) -> LatLng<Rendered> {
        self.convert_detailed(source, target, coords).collapse()
    }

    /// Convert a pair, keeping each axis result
    pub fn convert_detailed(&self, source: CoordinateFormat, target: CoordinateFormat,
                            coords: &LatLng<AxisInput>) -> ConversionReport {
        let handler = ConversionFactory::create_handler(source, target);
        self.apply(handler.as_ref(), coords)
    }

    /// Run a specific handler over both axes
    pub fn apply(&self, handler: &dyn FormatConversion, coords: &LatLng<AxisInput>) -> ConversionReport {
        let name = handler.name();
        let results = coords.map(|axis, input| {
            let result = handler.convert_axis(axis, input, &self.settings);
            match &result {
                Ok(rendered) => debug!("{} {}: {} -> {}", name, axis.short_name(), input, rendered),
                Err(e) => warn!("{} {}: {}", name, axis.short_name(), e),
            }
            result
        });

        ConversionReport {
            name,
            results,
            sentinel: handler.failure_sentinel(),
        }
    }
}
