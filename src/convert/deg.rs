//! Conversions from degrees / minutes / seconds
//!
//! DEG input is either `"D M S"` text or a packed number whose digit groups
//! follow the axis layout from the settings. Packed input is repacked into
//! the rendered `"D M S.s"` form first, so its seconds are rounded to the
//! configured precision before any further arithmetic.

use log::trace;

use crate::coordinate::{Axis, AxisInput, ConversionSettings, CoordResult, CoordinateFormat, Dms, Rendered};
use super::handler::FormatConversion;
use super::rounding::{format_fixed, round_to_int, round_to_places};

/// Handler for DEG input
pub struct DegConversion {
    target: CoordinateFormat,
}

impl DegConversion {
    pub fn new(target: CoordinateFormat) -> Self {
        DegConversion { target }
    }

    /// Decode an axis input into a triple
    fn decode(axis: Axis, input: &AxisInput, settings: &ConversionSettings) -> CoordResult<Dms> {
        match input {
            AxisInput::Text(text) if !input.is_numeric() => Dms::parse(axis, text),
            _ => {
                let packed = input.require_number(axis)?;
                let dms = settings.layout_for(axis).unpack(axis, packed)?;
                trace!("Unpacked {} {} into {:?}", axis, packed, dms);
                dms.rounded(axis, settings.seconds_places)
            }
        }
    }
}

impl FormatConversion for DegConversion {
    fn source(&self) -> CoordinateFormat {
        CoordinateFormat::Deg
    }

    fn target(&self) -> CoordinateFormat {
        self.target
    }

    fn convert_axis(&self, axis: Axis, input: &AxisInput, settings: &ConversionSettings) -> CoordResult<Rendered> {
        let dms = Self::decode(axis, input, settings)?;

        let rendered = match self.target {
            CoordinateFormat::Dec => Rendered::Text(format_fixed(dms.to_decimal(), settings.decimal_places)),
            CoordinateFormat::Deg => Rendered::Text(dms.render(axis, settings.seconds_places)?),
            CoordinateFormat::Mms => {
                let repacked = dms.rounded(axis, settings.seconds_places)?;
                let decimal = round_to_places(repacked.to_decimal(), settings.decimal_places);
                // Rounds to nearest; DEC -> MMS truncates instead
                Rendered::Integer(round_to_int(decimal * settings.mms_scale))
            }
        };

        Ok(rendered)
    }
}
