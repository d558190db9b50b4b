//! Conversions from decimal degrees

use crate::coordinate::{Axis, AxisInput, ConversionSettings, CoordResult, CoordinateFormat, Dms, Rendered};
use super::handler::FormatConversion;
use super::rounding::{format_fixed, truncate_to_int};

/// Handler for DEC input
pub struct DecConversion {
    target: CoordinateFormat,
}

impl DecConversion {
    pub fn new(target: CoordinateFormat) -> Self {
        DecConversion { target }
    }
}

impl FormatConversion for DecConversion {
    fn source(&self) -> CoordinateFormat {
        CoordinateFormat::Dec
    }

    fn target(&self) -> CoordinateFormat {
        self.target
    }

    fn convert_axis(&self, axis: Axis, input: &AxisInput, settings: &ConversionSettings) -> CoordResult<Rendered> {
        let value = input.require_number(axis)?;

        let rendered = match self.target {
            CoordinateFormat::Dec => Rendered::Text(format_fixed(value, settings.decimal_places)),
            CoordinateFormat::Deg => Rendered::Text(Dms::from_decimal(axis, value)?.render(axis, settings.seconds_places)?),
            // Truncates toward zero; DEG -> MMS rounds instead
            CoordinateFormat::Mms => Rendered::Integer(truncate_to_int(value * settings.mms_scale)),
        };

        Ok(rendered)
    }

    fn failure_sentinel(&self) -> Rendered {
        match self.target {
            CoordinateFormat::Dec => Rendered::Empty,
            _ => Rendered::Invalid,
        }
    }
}
