//! Coordinate model for conversion
//!
//! This module provides the coordinate pair, the per-axis input and output
//! values, the structured DEG triple and the settings every conversion
//! shares.

pub mod errors;
mod point;
mod input;
mod rendered;
mod dms;
mod packed;
mod format;
mod settings;

// Re-export key types
pub use self::errors::{CoordError, CoordResult};
pub use self::point::{Axis, LatLng};
pub use self::input::AxisInput;
pub use self::rendered::Rendered;
pub use self::dms::{Dms, MAX_DEGREES};
pub use self::packed::PackedLayout;
pub use self::format::CoordinateFormat;
pub use self::settings::ConversionSettings;
