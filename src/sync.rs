//! # Repository Synchronization
//!
//! Populates a destination directory with the requested version of a
//! repository using the system `git` command, so SSH keys, credential helpers
//! and `~/.gitconfig` settings apply as usual.
//!
//! Two strategies are used depending on the [`VersionSpec`]:
//!
//! - **Default / branch or tag**: a single shallow, recursive clone,
//!   `git clone --recursive --depth 1 [--branch <name>] <url> <dest>`.
//! - **Commit hash**: most hosts refuse `clone --branch <sha>`, so the commit
//!   is fetched by name into a fresh repository:
//!   1. create `<dest>`
//!   2. `git init`
//!   3. `git remote add origin <url>`
//!   4. `git fetch --depth 1 origin <sha>`
//!   5. `git checkout FETCH_HEAD`
//!
//!   followed by best-effort cleanup (`reflog expire`, `gc`) and a
//!   best-effort `git submodule update --init --recursive --depth 1`.
//!
//! Mandatory steps stop the sequence at the first nonzero exit. The
//! destination is left as the failing tool produced it; nothing is cleaned up
//! or retried, and an existing destination is not checked for.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::exec::{run_best_effort, run_step, CommandRunner, Invocation};
use crate::reporter::Reporter;
use crate::version::VersionSpec;

/// Named steps of a synchronization, used in error messages and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitStep {
    Clone,
    Init,
    RemoteAdd,
    Fetch,
    Checkout,
    ReflogExpire,
    Gc,
    SubmoduleUpdate,
}

impl GitStep {
    pub fn name(self) -> &'static str {
        match self {
            GitStep::Clone => "clone",
            GitStep::Init => "init",
            GitStep::RemoteAdd => "remote add",
            GitStep::Fetch => "fetch",
            GitStep::Checkout => "checkout",
            GitStep::ReflogExpire => "reflog expire",
            GitStep::Gc => "gc",
            GitStep::SubmoduleUpdate => "submodule update",
        }
    }

    /// Whether a failure of this step aborts the synchronization.
    pub fn is_mandatory(self) -> bool {
        !matches!(
            self,
            GitStep::ReflogExpire | GitStep::Gc | GitStep::SubmoduleUpdate
        )
    }
}

impl fmt::Display for GitStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Remote name registered for commit-hash installs.
const REMOTE_NAME: &str = "origin";

/// Bring `destination` to the state described by `spec`.
///
/// Returns the populated directory on success. On failure the error names
/// the step that failed and carries the tool's stderr.
pub fn synchronize(
    runner: &dyn CommandRunner,
    reporter: &dyn Reporter,
    url: &str,
    spec: &VersionSpec,
    destination: &Path,
) -> Result<PathBuf> {
    match spec {
        VersionSpec::CommitHash(hash) => {
            log::info!("Detected commit hash format for version: {}", hash);
            fetch_commit(runner, reporter, url, hash, destination)?;
        }
        VersionSpec::Default | VersionSpec::BranchOrTag(_) => {
            log::info!("Using standard clone approach for version: {}", spec);
            clone_shallow(runner, reporter, url, spec.as_ref_name(), destination)?;
        }
    }

    reporter.success("Repository cloned successfully!");
    Ok(destination.to_path_buf())
}

/// Single-call shallow recursive clone, optionally pinned to a branch or tag.
fn clone_shallow(
    runner: &dyn CommandRunner,
    reporter: &dyn Reporter,
    url: &str,
    branch: Option<&str>,
    destination: &Path,
) -> Result<()> {
    let mut clone = Invocation::git(["clone", "--recursive", "--depth", "1"]);
    if let Some(name) = branch {
        clone = clone.args(["--branch", name]);
    }
    let clone = clone
        .arg(url)
        .arg(destination.to_string_lossy().into_owned());

    reporter.progress(&format!(
        "Cloning repository to {}...",
        destination.display()
    ));
    run_step(runner, GitStep::Clone.name(), &clone)?;
    Ok(())
}

/// Fetch exactly one commit at depth 1 into a fresh repository.
fn fetch_commit(
    runner: &dyn CommandRunner,
    reporter: &dyn Reporter,
    url: &str,
    hash: &str,
    destination: &Path,
) -> Result<()> {
    reporter.progress(&format!(
        "Cloning repository to {}...",
        destination.display()
    ));
    fs::create_dir_all(destination)?;

    let git = |args: &[&str]| Invocation::git(args.iter().copied()).current_dir(destination);

    run_step(runner, GitStep::Init.name(), &git(&["init"]))?;
    run_step(
        runner,
        GitStep::RemoteAdd.name(),
        &git(&["remote", "add", REMOTE_NAME, url]),
    )?;

    reporter.progress(&format!("Fetching commit {}...", hash));
    run_step(
        runner,
        GitStep::Fetch.name(),
        &git(&["fetch", "--depth", "1", REMOTE_NAME, hash]),
    )?;
    run_step(
        runner,
        GitStep::Checkout.name(),
        &git(&["checkout", "FETCH_HEAD"]),
    )?;

    reporter.progress("Cleaning up git objects to save space...");
    run_best_effort(
        runner,
        GitStep::ReflogExpire.name(),
        &git(&["reflog", "expire", "--expire=now", "--all"]),
    );
    run_best_effort(
        runner,
        GitStep::Gc.name(),
        &git(&["gc", "--prune=now", "--aggressive"]),
    );

    // Repositories without submodules make this exit nonzero on some git versions.
    run_best_effort(
        runner,
        GitStep::SubmoduleUpdate.name(),
        &git(&["submodule", "update", "--init", "--recursive", "--depth", "1"]),
    );

    Ok(())
}
