//! Batch conversion command
//!
//! This module implements the command converting a file of coordinate
//! pairs, one `lat,lng` pair per line.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use clap::ArgMatches;
use log::{info, warn};

use crate::api::CoordKit;
use crate::commands::command_traits::Command;
use crate::convert::ConversionFactory;
use crate::coordinate::{CoordError, CoordResult, CoordinateFormat, LatLng};
use crate::utils::progress::ProgressTracker;
use crate::utils::string_utils::{is_skippable_line, split_pair};

/// Counts gathered while processing a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Lines converted successfully
    pub converted: usize,
    /// Lines written as sentinels
    pub invalid: usize,
    /// Blank and comment lines
    pub skipped: usize,
}

/// Command for converting a file of coordinate pairs
pub struct BatchCommand<'a> {
    /// Input path, `-` for stdin
    input: String,
    /// Output path, stdout when absent
    output: Option<String>,
    /// Source format
    from: CoordinateFormat,
    /// Target format
    to: CoordinateFormat,
    /// Converter to use
    kit: &'a CoordKit,
}

impl<'a> BatchCommand<'a> {
    /// Create a new batch command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `kit` - Configured converter
    ///
    /// # Returns
    /// A new BatchCommand instance or an error
    pub fn new(args: &ArgMatches, kit: &'a CoordKit) -> CoordResult<Self> {
        let input = args.get_one::<String>("batch")
            .ok_or_else(|| CoordError::GenericError("Missing batch input file".to_string()))?
            .clone();
        let output = args.get_one::<String>("output").cloned();
        let (from, to) = super::format_pair(args)?;

        Ok(BatchCommand { input, output, from, to, kit })
    }

    /// Create a batch command from already parsed parts
    pub fn from_parts(input: &str, output: Option<&str>, from: CoordinateFormat,
                      to: CoordinateFormat, kit: &'a CoordKit) -> Self {
        BatchCommand {
            input: input.to_string(),
            output: output.map(str::to_string),
            from,
            to,
            kit,
        }
    }

    /// Convert every line of `reader`, writing one output line per pair
    ///
    /// Blank lines and lines starting with `#` are skipped. Lines that do
    /// not hold a pair, or whose pair fails to convert, are written as the
    /// conversion's sentinel pair.
    pub fn process<R: BufRead, W: Write>(&self, reader: R, writer: &mut W,
                                         progress: &ProgressTracker) -> CoordResult<BatchSummary> {
        let sentinel = ConversionFactory::create_handler(self.from, self.to).failure_sentinel();
        let mut summary = BatchSummary::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            progress.increment(1);

            if is_skippable_line(&line) {
                summary.skipped += 1;
                continue;
            }

            let converted = match split_pair(&line) {
                Some((lat, lng)) => self.kit.convert(self.from, self.to, &LatLng::input(lat, lng)),
                None => {
                    warn!("Line {}: expected 'lat,lng', got '{}'", index + 1, line);
                    LatLng::new(sentinel.clone(), sentinel.clone())
                }
            };

            if converted.lat.is_sentinel() || converted.lng.is_sentinel() {
                summary.invalid += 1;
            } else {
                summary.converted += 1;
            }
            writeln!(writer, "{}", converted)?;
        }

        writer.flush()?;
        Ok(summary)
    }

    fn open_input(&self) -> CoordResult<Box<dyn BufRead>> {
        if self.input == "-" {
            Ok(Box::new(BufReader::new(io::stdin())))
        } else {
            Ok(Box::new(BufReader::new(File::open(&self.input)?)))
        }
    }

    fn count_lines(&self) -> CoordResult<u64> {
        if self.input == "-" {
            return Ok(0);
        }
        let reader = BufReader::new(File::open(&self.input)?);
        Ok(reader.lines().count() as u64)
    }
}

impl<'a> Command for BatchCommand<'a> {
    fn execute(&self) -> CoordResult<()> {
        info!("Converting {} from {} to {}", self.input, self.from, self.to);

        let total = self.count_lines()?;
        let progress = if total > 0 {
            ProgressTracker::new(total, &format!("{} -> {}", self.from, self.to))
        } else {
            ProgressTracker::hidden()
        };

        let reader = self.open_input()?;
        let summary = match &self.output {
            Some(path) => {
                let mut writer = BufWriter::new(File::create(path)?);
                self.process(reader, &mut writer, &progress)?
            }
            None => {
                let stdout = io::stdout();
                let mut writer = stdout.lock();
                self.process(reader, &mut writer, &progress)?
            }
        };
        progress.finish();

        info!("Batch complete: {} converted, {} invalid, {} skipped",
              summary.converted, summary.invalid, summary.skipped);

        Ok(())
    }
}
