//! Conversions from MMS fixed-point units

use crate::coordinate::{Axis, AxisInput, ConversionSettings, CoordResult, CoordinateFormat, Dms, Rendered};
use super::handler::FormatConversion;
use super::rounding::{format_fixed, round_to_places, truncate_to_int};

/// Handler for MMS input
pub struct MmsConversion {
    target: CoordinateFormat,
}

impl MmsConversion {
    pub fn new(target: CoordinateFormat) -> Self {
        MmsConversion { target }
    }
}

impl FormatConversion for MmsConversion {
    fn source(&self) -> CoordinateFormat {
        CoordinateFormat::Mms
    }

    fn target(&self) -> CoordinateFormat {
        self.target
    }

    fn convert_axis(&self, axis: Axis, input: &AxisInput, settings: &ConversionSettings) -> CoordResult<Rendered> {
        let value = input.require_number(axis)?;

        let rendered = match self.target {
            CoordinateFormat::Dec => Rendered::Text(format_fixed(value / settings.mms_scale, settings.decimal_places)),
            CoordinateFormat::Deg => {
                // Decomposes the rendered decimal, not the exact quotient
                let decimal = round_to_places(value / settings.mms_scale, settings.decimal_places);
                Rendered::Text(Dms::from_decimal(axis, decimal)?.render(axis, settings.seconds_places)?)
            }
            CoordinateFormat::Mms => Rendered::Integer(truncate_to_int(value)),
        };

        Ok(rendered)
    }

    fn failure_sentinel(&self) -> Rendered {
        match self.target {
            CoordinateFormat::Mms => Rendered::Empty,
            _ => Rendered::Invalid,
        }
    }
}
