//! Conversion listing command

use crate::commands::command_traits::Command;
use crate::convert::ConversionFactory;
use crate::coordinate::CoordResult;

/// Command printing every available conversion
pub struct ListCommand;

impl ListCommand {
    pub fn new() -> Self {
        ListCommand
    }

    /// One line per conversion: name, source and target
    pub fn lines(&self) -> Vec<String> {
        ConversionFactory::get_available_handlers()
            .iter()
            .map(|h| format!("{:<9} {} -> {}", h.name(), h.source(), h.target()))
            .collect()
    }
}

impl Default for ListCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for ListCommand {
    fn execute(&self) -> CoordResult<()> {
        for line in self.lines() {
            println!("{}", line);
        }
        Ok(())
    }
}
