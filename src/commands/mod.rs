//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod convert_command;
pub mod batch_command;
pub mod list_command;

pub use command_traits::{Command, CommandFactory};
pub use convert_command::ConvertCommand;
pub use batch_command::{BatchCommand, BatchSummary};
pub use list_command::ListCommand;

use clap::ArgMatches;
use crate::api::CoordKit;
use crate::coordinate::{CoordError, CoordResult, CoordinateFormat};

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct CoordkitCommandFactory;

impl CoordkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        CoordkitCommandFactory
    }
}

impl Default for CoordkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for CoordkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, kit: &'a CoordKit) -> CoordResult<Box<dyn Command + 'a>> {
        if args.get_flag("list-conversions") {
            Ok(Box::new(ListCommand::new()))
        } else if args.get_one::<String>("batch").is_some() {
            Ok(Box::new(BatchCommand::new(args, kit)?))
        } else {
            // Default to converting a single pair
            Ok(Box::new(ConvertCommand::new(args, kit)?))
        }
    }
}

/// Read the `--from`/`--to` format pair shared by the converting commands
pub(crate) fn format_pair(args: &ArgMatches) -> CoordResult<(CoordinateFormat, CoordinateFormat)> {
    let from = args.get_one::<String>("from")
        .ok_or_else(|| CoordError::GenericError("Missing source format (--from)".to_string()))?
        .parse::<CoordinateFormat>()?;
    let to = args.get_one::<String>("to")
        .ok_or_else(|| CoordError::GenericError("Missing target format (--to)".to_string()))?
        .parse::<CoordinateFormat>()?;
    Ok((from, to))
}
