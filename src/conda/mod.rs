//! conda CLI boundary.
//!
//! This module owns every interaction with the `conda` binary:
//!
//! - [`channels`] - Channel classification against the fixed marker lists
//! - [`client`] - The four conda operations (env list, package list,
//!   search, install) with JSON parsing

pub mod channels;
pub mod client;

pub use channels::{classify, ChannelKind, LEGACY_CHANNEL_MARKERS, PREFERRED_CHANNEL};
pub use client::{CondaClient, InstalledPackage};
