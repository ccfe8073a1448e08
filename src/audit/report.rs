//! Audit report rendering.
//!
//! The summary is rendered once to a `String`; the caller prints it and
//! writes the identical bytes to the report file, so console and file can
//! never drift apart.

use std::fmt::Write;

use super::AuditSummary;

/// Render the full audit report.
pub fn render(summary: &AuditSummary) -> String {
    let mut out = String::new();

    // writeln! into a String cannot fail
    macro_rules! emit {
        ($($arg:tt)*) => {
            let _ = writeln!(out, $($arg)*);
        };
    }

    emit!("=== Anaconda/Miniconda Package Statistics and Updates ===");

    for env in &summary.environments {
        if !env.has_legacy() {
            continue;
        }
        emit!();
        emit!("Environment: {} ({})", env.name, env.path.display());
        emit!(
            "Found {} Anaconda/Miniconda-related packages:",
            env.legacy_packages.len()
        );
        for package in &env.legacy_packages {
            emit!(
                "  - {} ({}) from {}",
                package.name,
                package.version,
                package.channel
            );
        }
        if env.updated {
            emit!(
                "  -> Packages overwritten with {} versions.",
                summary.preferred_channel
            );
        } else {
            emit!("  -> Update failed or partially completed, some packages may remain.");
        }
    }

    if summary.envs_with_legacy == 0 {
        emit!();
        emit!("No environments use Anaconda/Miniconda-related packages.");
    }

    emit!();
    emit!(
        "Summary: {} Anaconda/Miniconda-related packages across {} environments.",
        summary.total_legacy_packages, summary.envs_with_legacy
    );

    emit!();
    emit!("=== Update Summary by Environment ===");
    for env in &summary.environments {
        emit!();
        emit!("Environment: {}", env.name);
        if env.successful.is_empty() {
            emit!("  No packages were successfully updated.");
        } else {
            emit!("  Successfully updated packages:");
            for record in &env.successful {
                emit!("    - {} ({})", record.name, record.version);
            }
        }
        if env.failed.is_empty() {
            emit!("  No packages need manual update.");
        } else {
            emit!("  Packages that need manual update:");
            for record in &env.failed {
                emit!("    - {} ({})", record.name, record.version);
            }
        }
    }

    out
}
