//! Single coordinate conversion command
//!
//! This module implements the command converting one coordinate pair
//! given on the command line.

use clap::ArgMatches;
use log::{info, warn};

use crate::api::CoordKit;
use crate::commands::command_traits::Command;
use crate::coordinate::{AxisInput, CoordError, CoordResult, CoordinateFormat, LatLng, Rendered};

/// Command for converting a single coordinate pair
pub struct ConvertCommand<'a> {
    /// Raw input pair
    coords: LatLng<AxisInput>,
    /// Source format
    from: CoordinateFormat,
    /// Target format
    to: CoordinateFormat,
    /// Whether to report each axis separately
    detailed: bool,
    /// Converter to use
    kit: &'a CoordKit,
}

impl<'a> ConvertCommand<'a> {
    /// Create a new convert command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `kit` - Configured converter
    ///
    /// # Returns
    /// A new ConvertCommand instance or an error
    pub fn new(args: &ArgMatches, kit: &'a CoordKit) -> CoordResult<Self> {
        let lat = args.get_one::<String>("lat")
            .ok_or_else(|| CoordError::GenericError("Missing latitude".to_string()))?;
        let lng = args.get_one::<String>("lng")
            .ok_or_else(|| CoordError::GenericError("Missing longitude".to_string()))?;

        let (from, to) = super::format_pair(args)?;

        Ok(ConvertCommand {
            coords: LatLng::input(lat.as_str(), lng.as_str()),
            from,
            to,
            detailed: args.get_flag("detailed"),
            kit,
        })
    }

    /// Create a convert command from already parsed parts
    pub fn from_parts(coords: LatLng<AxisInput>, from: CoordinateFormat, to: CoordinateFormat,
                      detailed: bool, kit: &'a CoordKit) -> Self {
        ConvertCommand { coords, from, to, detailed, kit }
    }

    /// Render the command output without printing it
    pub fn render(&self) -> CoordResult<Vec<String>> {
        let report = self.kit.convert_detailed(self.from, self.to, &self.coords);
        info!("{} on {}", report.name, self.coords);

        if self.detailed {
            return Ok(vec![
                format!("lat: {}", render_axis(&report.results.lat)),
                format!("lng: {}", render_axis(&report.results.lng)),
            ]);
        }

        if !report.is_ok() {
            let reasons: Vec<String> = report.errors().iter().map(|e| e.to_string()).collect();
            warn!("{} failed: {}", report.name, reasons.join("; "));
        }

        Ok(vec![report.collapse().to_string()])
    }
}

fn render_axis(result: &CoordResult<Rendered>) -> String {
    match result {
        Ok(rendered) => rendered.to_string(),
        Err(e) => format!("error: {}", e),
    }
}

impl<'a> Command for ConvertCommand<'a> {
    fn execute(&self) -> CoordResult<()> {
        for line in self.render()? {
            println!("{}", line);
        }
        Ok(())
    }
}
