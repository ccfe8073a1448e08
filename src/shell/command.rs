//! Shell command execution.
//!
//! All conda invocations run through the user's shell rather than spawning
//! `conda` directly. conda is usually activated in `.bashrc`/`.zshrc`
//! (interactive) or `.bash_profile`/`.zprofile` (login); a plain
//! `Command::new("conda")` spawns a non-interactive, non-login shell where
//! that initialization never ran and the binary is often not on PATH.

use crate::error::{DecondaError, Result};
use std::process::{Command, Stdio};

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

/// Execute a shell command, capturing stdout and stderr.
///
/// Spawn failures return `Err`; a command that runs and exits non-zero
/// returns `Ok` with `success == false` so callers can decide whether the
/// failure is fatal for them.
pub fn execute(command: &str) -> Result<CommandResult> {
    let shell = detect_shell();
    let shell_flag = shell_flag(&shell);

    let mut cmd = Command::new(&shell);
    cmd.arg(shell_flag);
    cmd.arg(command);
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let output = cmd.output().map_err(|_| DecondaError::CondaCommandFailed {
        command: command.to_string(),
        code: None,
    })?;

    Ok(CommandResult {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        success: output.status.success(),
    })
}

/// Detect the current shell.
fn detect_shell() -> String {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string())
    }
}

/// Get the flag to pass commands to the shell.
///
/// Uses `-lic` (interactive login shell) on Unix so that the user's full
/// shell environment is available, including a conda activated from
/// `.zshrc`/`.bashrc` or `.zprofile`/`.bash_profile`.
///
/// In CI environments, uses `-lc` (login, non-interactive) to avoid
/// `bash: cannot set terminal process group` errors caused by `-i`
/// trying to set up job control without a TTY.
fn shell_flag(_shell: &str) -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else if super::is_ci() {
        "-lc"
    } else {
        "-lic"
    }
}
