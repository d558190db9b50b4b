//! Coordinate conversion between DEC, DEG and MMS
//!
//! This module implements one strategy per source format and a converter
//! applying them to coordinate pairs.

mod handler;
mod dec;
mod deg;
mod mms;
mod factory;
mod converter;
pub mod rounding;
#[cfg(test)]
mod tests;

pub use handler::FormatConversion;
pub use dec::DecConversion;
pub use deg::DegConversion;
pub use mms::MmsConversion;
pub use factory::ConversionFactory;
pub use converter::{ConversionReport, CoordinateConverter};
