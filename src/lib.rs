pub mod utils;
pub mod coordinate;
pub mod convert;
pub mod commands;
pub mod api;

pub use crate::api::CoordKit;

pub use coordinate::{Axis, AxisInput, CoordError, CoordResult, CoordinateFormat, ConversionSettings, Dms, LatLng, Rendered};
pub use convert::{ConversionFactory, ConversionReport, CoordinateConverter};
