//! Shared test utilities for the CLI end-to-end tests.
//!
//! Tests build throwaway git repositories on disk and install them through
//! `file://` URLs, so no network access is needed. They do need a `git`
//! executable; tests return early when it is missing.

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::git_available;
    #[allow(unused_imports)]
    pub use super::TestFixture;
}

/// Returns `true` if a usable `git` is on PATH.
#[allow(dead_code)]
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Run git in `dir`, panicking with its stderr on failure.
#[allow(dead_code)]
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args([
            "-c",
            "user.name=Node Tester",
            "-c",
            "user.email=tester@example.com",
            "-c",
            "commit.gpgsign=false",
            "-c",
            "tag.gpgsign=false",
        ])
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// A temporary workspace holding source repositories and a target directory.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Directory that receives installed nodes.
    pub fn target_dir(&self) -> PathBuf {
        self.path().join("custom_nodes")
    }

    /// Path of the source repository named `name`.
    pub fn source_dir(&self, name: &str) -> PathBuf {
        self.path().join("remote").join(name)
    }

    /// `file://` URL of the source repository named `name`.
    pub fn source_url(&self, name: &str) -> String {
        format!("file://{}", self.source_dir(name).display())
    }

    /// Create a source repository with one commit containing `files`.
    ///
    /// Returns the commit hash.
    pub fn init_source(&self, name: &str, files: &[(&str, &str)]) -> String {
        let dir = self.source_dir(name);
        std::fs::create_dir_all(&dir).expect("Failed to create source dir");
        git(&dir, &["init", "--quiet"]);
        // Allow fetching commits that are not at a branch tip.
        git(&dir, &["config", "uploadpack.allowAnySHA1InWant", "true"]);
        self.commit(name, files, "initial")
    }

    /// Add a commit with `files` to the source repository `name`.
    ///
    /// Returns the new commit hash.
    pub fn commit(&self, name: &str, files: &[(&str, &str)], message: &str) -> String {
        let dir = self.source_dir(name);
        for (path, content) in files {
            self.temp_dir
                .child("remote")
                .child(name)
                .child(path)
                .write_str(content)
                .expect("Failed to write source file");
        }
        git(&dir, &["add", "--all"]);
        git(&dir, &["commit", "--quiet", "--allow-empty", "-m", message]);
        git(&dir, &["rev-parse", "HEAD"])
    }

    /// Tag the current HEAD of the source repository `name`.
    pub fn tag(&self, name: &str, tag: &str) {
        git(&self.source_dir(name), &["tag", tag]);
    }

    /// Write an executable installer stand-in that records its arguments,
    /// one per line, into `installer-args.txt` and exits with `status`.
    #[cfg(unix)]
    pub fn recording_installer(&self, status: i32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script = self.path().join("fake-installer");
        std::fs::write(
            &script,
            format!(
                "#!/bin/sh\nprintf '%s\\n' \"$@\" > '{}'\necho 'installer error output' >&2\nexit {}\n",
                self.args_log().display(),
                status
            ),
        )
        .expect("Failed to write installer script");
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make installer executable");
        script
    }

    /// Arguments recorded by the installer stand-in, if it ran.
    pub fn recorded_args(&self) -> Option<Vec<String>> {
        std::fs::read_to_string(self.args_log())
            .ok()
            .map(|text| text.lines().map(str::to_string).collect())
    }

    fn args_log(&self) -> PathBuf {
        self.path().join("installer-args.txt")
    }

    /// A `node-install` command with decoration off and the target directory
    /// pointed into the fixture.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("node-install");
        cmd.current_dir(self.path())
            .env_remove("NODE_INSTALL_TARGET_DIR")
            .env_remove("NODE_INSTALL_INSTALLER")
            .env_remove("RUST_LOG")
            .arg("--color")
            .arg("never")
            .arg("--target-dir")
            .arg(self.target_dir());
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
