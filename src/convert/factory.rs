//! Factory for creating conversion handlers

use crate::coordinate::{CoordError, CoordResult, CoordinateFormat};
use super::handler::FormatConversion;
use super::dec::DecConversion;
use super::deg::DegConversion;
use super::mms::MmsConversion;

/// Factory for creating conversion handlers
pub struct ConversionFactory;

impl ConversionFactory {
    /// Create the handler converting `source` into `target`
    pub fn create_handler(source: CoordinateFormat, target: CoordinateFormat) -> Box<dyn FormatConversion> {
        match source {
            CoordinateFormat::Dec => Box::new(DecConversion::new(target)),
            CoordinateFormat::Deg => Box::new(DegConversion::new(target)),
            CoordinateFormat::Mms => Box::new(MmsConversion::new(target)),
        }
    }

    /// Get a handler by its conversion name, e.g. `DECToDEG`
    pub fn get_handler_by_name(name: &str) -> CoordResult<Box<dyn FormatConversion>> {
        Self::get_available_handlers()
            .into_iter()
            .find(|handler| handler.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| CoordError::GenericError(format!("Unknown conversion: {}", name)))
    }

    /// Get all nine conversion handlers
    pub fn get_available_handlers() -> Vec<Box<dyn FormatConversion>> {
        let mut handlers = Vec::with_capacity(9);
        for source in CoordinateFormat::all() {
            for target in CoordinateFormat::all() {
                handlers.push(Self::create_handler(source, target));
            }
        }
        handlers
    }
}
