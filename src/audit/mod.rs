//! Environment audit loop and aggregation.
//!
//! For each conda environment the audit lists installed packages, keeps the
//! ones classified as legacy-channel, and tries to reinstall each from the
//! preferred channel. Everything below the environment listing is isolated:
//! a package-listing failure empties that one environment, an unavailable or
//! failing package lands in its failed list, and siblings always continue.
//! No retries anywhere.

pub mod report;

use std::path::{Path, PathBuf};

use crate::conda::{classify, ChannelKind, CondaClient, InstalledPackage};
use crate::error::Result;

/// A package update attempt, keyed by name and the version it had before.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRecord {
    pub name: String,
    pub version: String,
}

/// Audit result for a single environment.
#[derive(Debug, Clone)]
pub struct EnvAudit {
    /// Display name (basename, or `base` for the root environment).
    pub name: String,
    /// Environment prefix path.
    pub path: PathBuf,
    /// Packages classified as coming from a legacy channel.
    pub legacy_packages: Vec<InstalledPackage>,
    /// Whether at least one package was overwritten.
    pub updated: bool,
    /// Packages successfully reinstalled from the preferred channel.
    pub successful: Vec<UpdateRecord>,
    /// Packages that need a manual update (unavailable or install failed).
    pub failed: Vec<UpdateRecord>,
}

impl EnvAudit {
    fn empty(name: String, path: PathBuf) -> Self {
        Self {
            name,
            path,
            legacy_packages: Vec::new(),
            updated: false,
            successful: Vec::new(),
            failed: Vec::new(),
        }
    }

    /// Whether this environment has any legacy-channel packages.
    pub fn has_legacy(&self) -> bool {
        !self.legacy_packages.is_empty()
    }
}

/// Aggregated audit results across all environments.
#[derive(Debug)]
pub struct AuditSummary {
    pub environments: Vec<EnvAudit>,
    pub total_legacy_packages: usize,
    pub envs_with_legacy: usize,
    pub preferred_channel: String,
}

/// Derive the display name for an environment prefix.
///
/// Named environments live under an `envs` directory; anything else is the
/// root (`base`) environment.
pub fn display_name(path: &Path) -> String {
    if path.to_string_lossy().contains("envs") {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "base".to_string())
    } else {
        "base".to_string()
    }
}

/// Audit all environments and attempt updates.
///
/// Fails only if the environment listing itself fails; in that case nothing
/// has been processed and no report should be written.
pub fn run_audit(client: &CondaClient<'_>, dry_run: bool) -> Result<AuditSummary> {
    let envs = client.list_environments()?;
    tracing::info!("Found {} environments", envs.len());

    let mut environments = Vec::with_capacity(envs.len());
    let mut total_legacy_packages = 0;
    let mut envs_with_legacy = 0;

    for env_path in envs {
        let audit = audit_environment(client, &env_path, dry_run);
        if audit.has_legacy() {
            envs_with_legacy += 1;
            total_legacy_packages += audit.legacy_packages.len();
        }
        environments.push(audit);
    }

    Ok(AuditSummary {
        environments,
        total_legacy_packages,
        envs_with_legacy,
        preferred_channel: client.preferred_channel().to_string(),
    })
}

/// Audit a single environment: classify packages, then overwrite-install
/// each legacy package that the preferred channel carries.
///
/// Never fails: a package-listing error is logged and yields an empty audit.
pub fn audit_environment(client: &CondaClient<'_>, path: &Path, dry_run: bool) -> EnvAudit {
    let name = display_name(path);

    let packages = match client.list_packages(path) {
        Ok(packages) => packages,
        Err(e) => {
            tracing::warn!("Error checking {}: {}", name, e);
            return EnvAudit::empty(name, path.to_path_buf());
        }
    };

    let legacy_packages: Vec<InstalledPackage> = packages
        .into_iter()
        .filter(|p| classify(&p.channel, client.preferred_channel()) == ChannelKind::Legacy)
        .collect();

    let mut audit = EnvAudit {
        name,
        path: path.to_path_buf(),
        legacy_packages,
        updated: false,
        successful: Vec::new(),
        failed: Vec::new(),
    };

    if audit.legacy_packages.is_empty() {
        return audit;
    }

    tracing::info!("Processing {} ({})", audit.name, path.display());

    for package in &audit.legacy_packages {
        let record = UpdateRecord {
            name: package.name.clone(),
            version: package.version.clone(),
        };
        tracing::info!(
            "Found {} ({}) from {}",
            package.name,
            package.version,
            package.channel
        );

        if dry_run {
            audit.failed.push(record);
            continue;
        }

        if !client.is_available(&package.name) {
            tracing::info!(
                "{} not found in {}, skipping update. Manual replacement required.",
                package.name,
                client.preferred_channel()
            );
            audit.failed.push(record);
            continue;
        }

        match client.install_from_preferred(path, &package.name) {
            Ok(()) => {
                tracing::info!(
                    "Successfully overwritten {} with {} version",
                    package.name,
                    client.preferred_channel()
                );
                audit.successful.push(record);
                audit.updated = true;
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to overwrite {} with {}: {}",
                    package.name,
                    client.preferred_channel(),
                    e
                );
                audit.failed.push(record);
            }
        }
    }

    audit
}
