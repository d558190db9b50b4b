//! Conversion handler trait definition

use crate::coordinate::{Axis, AxisInput, ConversionSettings, CoordResult, CoordinateFormat, Rendered};

/// Strategy trait for converting one axis from a source to a target format
pub trait FormatConversion: Send + Sync {
    /// Format the input is expected in
    fn source(&self) -> CoordinateFormat;

    /// Format the output is rendered in
    fn target(&self) -> CoordinateFormat;

    /// Convert a single axis value
    fn convert_axis(&self, axis: Axis, input: &AxisInput, settings: &ConversionSettings) -> CoordResult<Rendered>;

    /// Value reported for both axes when either axis fails
    fn failure_sentinel(&self) -> Rendered {
        Rendered::Invalid
    }

    /// Get the name of this conversion, e.g. `DECToMMS`
    fn name(&self) -> &'static str {
        self.source().conversion_name(self.target())
    }
}
