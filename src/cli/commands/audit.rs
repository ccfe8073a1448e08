//! Audit command implementation.
//!
//! The `deconda audit` command runs the environment audit and emits the
//! summary twice: once to stdout and once, byte-identical, to the report
//! file.

use crate::audit::{self, report};
use crate::cli::args::AuditArgs;
use crate::conda::CondaClient;
use crate::error::Result;

use super::dispatcher::{Command, CommandResult};

/// The audit command implementation.
pub struct AuditCommand {
    args: AuditArgs,
}

impl AuditCommand {
    /// Create a new audit command.
    pub fn new(args: AuditArgs) -> Self {
        Self { args }
    }
}

impl Command for AuditCommand {
    fn execute(&self) -> Result<CommandResult> {
        let client = CondaClient::new(&self.args.channel);

        if self.args.dry_run {
            tracing::info!("dry-run mode: no packages will be installed");
        }

        // Fatal: without the environment list there is nothing to audit,
        // and no report file may be written.
        let summary = audit::run_audit(&client, self.args.dry_run)?;

        let rendered = report::render(&summary);
        print!("{}", rendered);
        std::fs::write(&self.args.report, &rendered)?;
        println!("Results saved to '{}'", self.args.report.display());

        Ok(CommandResult::success())
    }
}
