//! Scan command implementation.
//!
//! The `deconda scan` command walks a directory tree for conda-related
//! keywords and writes the match table as CSV.

use crate::cli::args::ScanArgs;
use crate::error::Result;
use crate::scan;

use super::dispatcher::{Command, CommandResult};

/// The scan command implementation.
pub struct ScanCommand {
    args: ScanArgs,
}

impl ScanCommand {
    /// Create a new scan command.
    pub fn new(args: ScanArgs) -> Self {
        Self { args }
    }
}

impl Command for ScanCommand {
    fn execute(&self) -> Result<CommandResult> {
        // Fatal: a missing root produces no output file at all.
        let matches = scan::run_scan(&self.args.root)?;

        scan::write_matches(&self.args.output, &matches)?;

        println!(
            "Scan complete: {} matches saved to '{}'",
            matches.len(),
            self.args.output.display()
        );

        Ok(CommandResult::success())
    }
}
