//! conda subcommand invocations and JSON parsing.
//!
//! [`CondaClient`] wraps the four conda operations the audit needs. The
//! actual subprocess call is injected as a function so tests can stand in
//! canned output for the conda binary.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{DecondaError, Result};
use crate::shell::{self, CommandResult};

/// Function that runs a shell command and returns its captured result.
pub type CommandRunner<'a> = &'a dyn Fn(&str) -> Result<CommandResult>;

/// A package installed in a conda environment, with channel metadata.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct InstalledPackage {
    pub name: String,
    pub version: String,
    #[serde(default = "unknown_channel")]
    pub channel: String,
}

fn unknown_channel() -> String {
    "unknown".to_string()
}

/// Shape of `conda env list --json`.
#[derive(Debug, Deserialize)]
struct EnvListOutput {
    envs: Vec<PathBuf>,
}

/// Client for the conda CLI.
pub struct CondaClient<'a> {
    runner: CommandRunner<'a>,
    preferred: String,
}

fn shell_runner(command: &str) -> Result<CommandResult> {
    shell::execute(command)
}

impl CondaClient<'static> {
    /// Create a client that shells out to the real conda binary.
    pub fn new(preferred: &str) -> Self {
        Self::with_runner(preferred, &shell_runner)
    }
}

impl<'a> CondaClient<'a> {
    /// Create a client with a custom command runner.
    pub fn with_runner(preferred: &str, runner: CommandRunner<'a>) -> Self {
        Self {
            runner,
            preferred: preferred.to_string(),
        }
    }

    /// The channel this client reinstalls packages from.
    pub fn preferred_channel(&self) -> &str {
        &self.preferred
    }

    /// List all conda environments, in the order conda reports them.
    ///
    /// Failure here is fatal for the audit: with no environment list there
    /// is nothing meaningful to report.
    pub fn list_environments(&self) -> Result<Vec<PathBuf>> {
        let command = "conda env list --json";
        let output = self.run_checked(command)?;
        let parsed: EnvListOutput =
            serde_json::from_str(&output.stdout).map_err(|e| DecondaError::CondaParseError {
                command: command.to_string(),
                message: e.to_string(),
            })?;
        Ok(parsed.envs)
    }

    /// List installed packages (with channel metadata) for one environment.
    pub fn list_packages(&self, env: &Path) -> Result<Vec<InstalledPackage>> {
        let command = format!(
            "conda run -p {} conda list --show-channel --json",
            env.display()
        );
        let output = self.run_checked(&command)?;
        serde_json::from_str(&output.stdout).map_err(|e| DecondaError::CondaParseError {
            command,
            message: e.to_string(),
        })
    }

    /// Check whether the preferred channel carries a package.
    ///
    /// Available iff the search response maps the exact package name to a
    /// non-empty candidate list. Any command or parse failure counts as
    /// "not available" and is logged, never propagated.
    pub fn is_available(&self, package: &str) -> bool {
        let command = format!("conda search -c {} {} --json", self.preferred, package);
        let output = match self.run_checked(&command) {
            Ok(o) => o,
            Err(e) => {
                tracing::warn!(
                    "Failed to check availability of {} in {}: {}",
                    package,
                    self.preferred,
                    e
                );
                return false;
            }
        };

        match serde_json::from_str::<serde_json::Value>(&output.stdout) {
            Ok(value) => value
                .get(package)
                .and_then(|v| v.as_array())
                .is_some_and(|candidates| !candidates.is_empty()),
            Err(e) => {
                tracing::warn!(
                    "Unparsable search result for {} in {}: {}",
                    package,
                    self.preferred,
                    e
                );
                false
            }
        }
    }

    /// Reinstall a package from the preferred channel into an environment.
    pub fn install_from_preferred(&self, env: &Path, package: &str) -> Result<()> {
        let command = format!(
            "conda run -p {} conda install -y -c {} {}",
            env.display(),
            self.preferred,
            package
        );
        self.run_checked(&command)?;
        Ok(())
    }

    /// Run a command, mapping a non-zero exit to an error carrying stderr.
    fn run_checked(&self, command: &str) -> Result<CommandResult> {
        let result = (self.runner)(command)?;
        if result.success {
            Ok(result)
        } else {
            tracing::debug!("command failed: {}\nstderr: {}", command, result.stderr);
            Err(DecondaError::CondaCommandFailed {
                command: command.to_string(),
                code: result.exit_code,
            })
        }
    }
}
