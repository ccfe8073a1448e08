//! Integration tests for the audit command.
//!
//! The audit talks to conda through `$SHELL -c <command>`, so pointing
//! `SHELL` at a stub script lets these tests exercise the full binary
//! without a conda installation (and without mutating any real environment).
#![allow(deprecated)]
#![cfg(unix)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write an executable stub shell that answers conda invocations with
/// canned JSON. The real shell is invoked as `$SHELL -lc '<command>'`, so
/// the conda command line arrives as `$2`.
fn fake_shell(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("fake-shell.sh");
    let script = format!("#!/bin/sh\ncmd=\"$2\"\n{}\n", body);
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

const HAPPY_CONDA: &str = r#"
case "$cmd" in
  "conda env list --json")
    echo '{"envs": ["/opt/conda", "/opt/conda/envs/ml"]}' ;;
  *"envs/ml conda list"*)
    echo '[{"name": "numpy", "version": "1.21", "channel": "defaults"},
           {"name": "requests", "version": "2.0", "channel": "conda-forge"}]' ;;
  *"conda list"*)
    echo '[]' ;;
  *"conda search"*)
    echo '{"numpy": [{"version": "1.26"}]}' ;;
  *"conda install"*)
    echo 'Transaction done' ;;
  *)
    exit 1 ;;
esac
"#;

#[test]
fn audit_reports_successful_update() -> Result<(), Box<dyn std::error::Error>> {
    let stub_dir = TempDir::new()?;
    let shell = fake_shell(&stub_dir, HAPPY_CONDA);
    let cwd = TempDir::new()?;

    let mut cmd = Command::new(cargo_bin("deconda"));
    cmd.current_dir(cwd.path());
    cmd.env("SHELL", &shell);
    cmd.arg("audit");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("  - numpy (1.21) from defaults"))
        .stdout(predicate::str::contains(
            "Summary: 1 Anaconda/Miniconda-related packages across 1 environments.",
        ))
        .stdout(predicate::str::contains("Successfully updated packages:"))
        .stdout(predicate::str::contains("    - numpy (1.21)"));

    Ok(())
}

#[test]
fn audit_report_file_matches_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let stub_dir = TempDir::new()?;
    let shell = fake_shell(&stub_dir, HAPPY_CONDA);
    let cwd = TempDir::new()?;

    let mut cmd = Command::new(cargo_bin("deconda"));
    cmd.current_dir(cwd.path());
    cmd.env("SHELL", &shell);
    cmd.arg("audit");
    let output = cmd.assert().success().get_output().stdout.clone();

    let report = fs::read_to_string(cwd.path().join("anaconda_overwrite_stats.txt"))?;
    let stdout = String::from_utf8(output)?;
    // stdout is the report plus a trailing "Results saved to" line
    assert!(stdout.starts_with(&report));
    assert!(report.contains("=== Update Summary by Environment ==="));
    Ok(())
}

#[test]
fn audit_dry_run_never_installs() -> Result<(), Box<dyn std::error::Error>> {
    let stub_dir = TempDir::new()?;
    // Any search or install invocation kills the stub with a distinctive code
    let shell = fake_shell(
        &stub_dir,
        r#"
case "$cmd" in
  "conda env list --json")
    echo '{"envs": ["/opt/conda/envs/ml"]}' ;;
  *"conda list"*)
    echo '[{"name": "numpy", "version": "1.21", "channel": "defaults"}]' ;;
  *)
    exit 42 ;;
esac
"#,
    );
    let cwd = TempDir::new()?;

    let mut cmd = Command::new(cargo_bin("deconda"));
    cmd.current_dir(cwd.path());
    cmd.env("SHELL", &shell);
    cmd.args(["audit", "--dry-run"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Packages that need manual update:"))
        .stdout(predicate::str::contains("    - numpy (1.21)"));
    Ok(())
}

#[test]
fn audit_quiet_suppresses_info_logs() -> Result<(), Box<dyn std::error::Error>> {
    let stub_dir = TempDir::new()?;
    let shell = fake_shell(&stub_dir, HAPPY_CONDA);
    let cwd = TempDir::new()?;

    // Default level is info, so the dry-run notice reaches stderr
    let mut cmd = Command::new(cargo_bin("deconda"));
    cmd.current_dir(cwd.path());
    cmd.env("SHELL", &shell);
    cmd.args(["audit", "--dry-run"]);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("dry-run mode"));

    // --quiet caps logging at warn and drops it
    let mut cmd = Command::new(cargo_bin("deconda"));
    cmd.current_dir(cwd.path());
    cmd.env("SHELL", &shell);
    cmd.args(["audit", "--dry-run", "--quiet"]);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("dry-run mode").not());

    Ok(())
}

#[test]
fn audit_channel_comes_from_environment_variable() -> Result<(), Box<dyn std::error::Error>> {
    let stub_dir = TempDir::new()?;
    // The stub only answers search/install for the mirror channel, so the
    // audit succeeds only if DECONDA_CHANNEL reached the conda command line
    let shell = fake_shell(
        &stub_dir,
        r#"
case "$cmd" in
  "conda env list --json")
    echo '{"envs": ["/opt/conda/envs/ml"]}' ;;
  *"conda list"*)
    echo '[{"name": "numpy", "version": "1.21", "channel": "defaults"}]' ;;
  *"conda search -c mirror-forge"*)
    echo '{"numpy": [{"version": "1.26"}]}' ;;
  *"conda install -y -c mirror-forge"*)
    echo 'Transaction done' ;;
  *)
    exit 1 ;;
esac
"#,
    );
    let cwd = TempDir::new()?;

    let mut cmd = Command::new(cargo_bin("deconda"));
    cmd.current_dir(cwd.path());
    cmd.env("SHELL", &shell);
    cmd.env("DECONDA_CHANNEL", "mirror-forge");
    cmd.arg("audit");
    cmd.assert().success().stdout(predicate::str::contains(
        "-> Packages overwritten with mirror-forge versions.",
    ));

    Ok(())
}

#[test]
fn audit_env_listing_failure_writes_no_report() -> Result<(), Box<dyn std::error::Error>> {
    let stub_dir = TempDir::new()?;
    let shell = fake_shell(&stub_dir, "exit 1");
    let cwd = TempDir::new()?;

    let mut cmd = Command::new(cargo_bin("deconda"));
    cmd.current_dir(cwd.path());
    cmd.env("SHELL", &shell);
    cmd.arg("audit");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("conda env list --json"));

    assert!(!cwd.path().join("anaconda_overwrite_stats.txt").exists());
    Ok(())
}

#[test]
fn audit_custom_report_path() -> Result<(), Box<dyn std::error::Error>> {
    let stub_dir = TempDir::new()?;
    let shell = fake_shell(&stub_dir, HAPPY_CONDA);
    let cwd = TempDir::new()?;
    let report = cwd.path().join("out/custom.txt");
    fs::create_dir_all(cwd.path().join("out"))?;

    let mut cmd = Command::new(cargo_bin("deconda"));
    cmd.current_dir(cwd.path());
    cmd.env("SHELL", &shell);
    cmd.args(["audit", "--report"]);
    cmd.arg(&report);
    cmd.assert().success();

    assert!(report.exists());
    Ok(())
}
