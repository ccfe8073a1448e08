//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// deconda - Audit conda environments and hunt down Anaconda leftovers.
#[derive(Debug, Parser)]
#[command(name = "deconda")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output (warnings and errors only)
    #[arg(short, long, global = true, conflicts_with = "debug")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Audit conda environments and reinstall Anaconda-channel packages
    /// from the preferred channel
    Audit(AuditArgs),

    /// Scan a directory tree for conda-related keywords
    Scan(ScanArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `audit` command.
#[derive(Debug, Clone, clap::Args)]
pub struct AuditArgs {
    /// Channel to reinstall packages from
    #[arg(long, env = "DECONDA_CHANNEL", default_value = "conda-forge")]
    pub channel: String,

    /// Path of the text report written alongside stdout
    #[arg(long, default_value = "anaconda_overwrite_stats.txt")]
    pub report: PathBuf,

    /// Classify and report only; do not install anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `scan` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ScanArgs {
    /// Root directory to scan
    pub root: PathBuf,

    /// Path of the CSV match table
    #[arg(short, long, default_value = "anaconda_search_results.csv")]
    pub output: PathBuf,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
