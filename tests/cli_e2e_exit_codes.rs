//! End-to-end tests for CLI exit codes.
//!
//! - Exit code 0: the repository was installed
//! - Exit code 1: synchronization or dependency installation failed
//! - Exit code 2: invalid command-line usage (handled by clap)

mod common;
use common::prelude::*;

/// Exit code 0 is returned for --help.
#[test]
fn test_exit_code_help() {
    let mut cmd = cargo_bin_cmd!("node-install");

    cmd.arg("--help")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("REPO_URL"))
        .stdout(predicate::str::contains("--version"))
        .stdout(predicate::str::contains("--no-build-isolation"));
}

/// Exit code 2 is returned when the repository URL is missing.
#[test]
fn test_exit_code_missing_url() {
    let mut cmd = cargo_bin_cmd!("node-install");

    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("REPO_URL"));
}

/// Exit code 2 is returned for an unknown flag.
#[test]
fn test_exit_code_unknown_flag() {
    let mut cmd = cargo_bin_cmd!("node-install");

    cmd.args(["https://example.com/foo.git", "--bogus"])
        .assert()
        .code(2);
}

/// Exit code 1 is returned when the clone fails, and the tool's error text
/// is passed through.
#[test]
fn test_exit_code_clone_failure() {
    if !git_available() {
        eprintln!("Skipping: git is not available");
        return;
    }
    let fixture = TestFixture::new();
    let missing = format!("file://{}/does-not-exist.git", fixture.path().display());

    fixture
        .command()
        .arg(&missing)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error cloning repository"))
        .stdout(predicate::str::contains("Installing requirements").not());
}

/// Exit code 1 is returned when the requested branch does not exist.
#[test]
fn test_exit_code_unknown_branch() {
    if !git_available() {
        eprintln!("Skipping: git is not available");
        return;
    }
    let fixture = TestFixture::new();
    fixture.init_source("my-node", &[("README.md", "# my node\n")]);

    fixture
        .command()
        .arg(fixture.source_url("my-node"))
        .args(["--version", "no-such-branch"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no-such-branch"));
}
