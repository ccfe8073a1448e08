//! deconda - Audit conda environments and hunt down Anaconda leftovers.
//!
//! deconda is a CLI tool with two independent jobs:
//!
//! - `deconda audit` enumerates conda environments, finds packages that were
//!   installed from Anaconda-owned channels (or their mirrors), reinstalls
//!   them from conda-forge where possible, and writes a summary report.
//! - `deconda scan` walks a directory tree and records every line that
//!   mentions a conda-related keyword to a CSV file.
//!
//! # Modules
//!
//! - [`audit`] - Environment audit loop, aggregation, and report rendering
//! - [`cli`] - Command-line interface and argument parsing
//! - [`conda`] - conda CLI boundary: channel classification and subcommands
//! - [`error`] - Error types and result aliases
//! - [`scan`] - Keyword scanner: traversal, matching, CSV output
//! - [`shell`] - Shell command execution
//!
//! # Example
//!
//! ```
//! use deconda::conda::channels::{classify, ChannelKind};
//!
//! // Packages already on conda-forge are never flagged
//! assert_eq!(classify("conda-forge", "conda-forge"), ChannelKind::Preferred);
//! // Packages from Anaconda's default channels are
//! assert_eq!(classify("defaults", "conda-forge"), ChannelKind::Legacy);
//! ```

pub mod audit;
pub mod cli;
pub mod conda;
pub mod error;
pub mod scan;
pub mod shell;

pub use error::{DecondaError, Result};
