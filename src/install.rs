//! # Install Orchestration
//!
//! Runs one install from start to finish:
//!
//! 1. **Resolving**: classify the requested version.
//! 2. **Synchronizing**: clone or fetch the repository into
//!    `<target_dir>/<repo name>`.
//! 3. **InstallingDependencies**: install `requirements.txt` if present.
//! 4. **Done**.
//!
//! The stages run strictly in order. The first failure ends the run: the
//! failing step's diagnostic is reported and the error is returned to the
//! caller, which exits with status 1. There is no retry and no partial
//! success.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::deps::{install_dependencies, DependencyStatus, InstallerCommand};
use crate::error::{Error, Result};
use crate::exec::CommandRunner;
use crate::reporter::Reporter;
use crate::sync::synchronize;
use crate::version::{resolve, VersionSpec};

/// What the caller asked for. Built once from command-line input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRequest {
    pub repo_url: String,
    pub version: Option<String>,
    pub no_build_isolation: bool,
}

/// Stages of an install run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Resolving,
    Synchronizing,
    InstallingDependencies,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Resolving => "resolving",
            Stage::Synchronizing => "synchronizing",
            Stage::InstallingDependencies => "installing dependencies",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// Summary of a successful install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub destination: PathBuf,
    pub version: VersionSpec,
    pub dependencies: DependencyStatus,
}

/// Everything an install needs besides the request itself.
pub struct Installer<'a> {
    pub runner: &'a dyn CommandRunner,
    pub reporter: &'a dyn Reporter,
    pub installer: InstallerCommand,
    pub target_dir: PathBuf,
}

/// Derive the checkout directory name from a repository URL.
///
/// Trailing slashes are trimmed, the last path segment is taken and a
/// `.git` suffix is stripped.
pub fn repo_dir_name(url: &str) -> &str {
    let trimmed = url.trim_end_matches('/');
    let last = trimmed.rsplit('/').next().unwrap_or(trimmed);
    last.strip_suffix(".git").unwrap_or(last)
}

impl Installer<'_> {
    /// Run the full install for `request`.
    pub fn run(&self, request: &InstallRequest) -> Result<InstallReport> {
        log::info!(
            "Starting node installation for repository: {}",
            request.repo_url
        );
        if let Some(version) = &request.version {
            log::info!("Target version/branch/commit: {}", version);
        }
        if request.no_build_isolation {
            log::info!("Build isolation disabled for dependency installation");
        }

        let mut stage = Stage::Resolving;
        let result = self.run_stages(request, &mut stage);

        match result {
            Ok(report) => {
                log::info!(
                    "Node installation completed successfully at {}",
                    report.destination.display()
                );
                self.reporter.success(&format!(
                    "Setup complete! Repository installed at {}",
                    report.destination.display()
                ));
                Ok(report)
            }
            Err(e) => {
                log::error!("Node installation failed while {}: {:?}", stage, e);
                self.reporter.error(&failure_message(stage, &e));
                Err(e)
            }
        }
    }

    fn run_stages(&self, request: &InstallRequest, stage: &mut Stage) -> Result<InstallReport> {
        let version = resolve(request.version.as_deref());
        log::debug!("Resolved version: {}", version);

        *stage = Stage::Synchronizing;
        fs::create_dir_all(&self.target_dir)?;
        log::debug!("Target directory: {}", self.target_dir.display());
        let destination = self.destination_for(&request.repo_url);
        let repo_dir = synchronize(
            self.runner,
            self.reporter,
            &request.repo_url,
            &version,
            &destination,
        )?;

        *stage = Stage::InstallingDependencies;
        let dependencies = install_dependencies(
            self.runner,
            self.reporter,
            &self.installer,
            &repo_dir,
            request.no_build_isolation,
        )?;

        *stage = Stage::Done;
        Ok(InstallReport {
            destination: repo_dir,
            version,
            dependencies,
        })
    }

    fn destination_for(&self, url: &str) -> PathBuf {
        self.target_dir.join(repo_dir_name(url))
    }
}

fn failure_message(stage: Stage, error: &Error) -> String {
    let prefix = match (stage, error) {
        (_, Error::StepFailed { step, .. }) if step == "clone" => "Error cloning repository",
        (_, Error::StepFailed { step, .. }) if step == "init" => "Error initializing repository",
        (_, Error::StepFailed { step, .. }) if step == "remote add" => "Error adding remote",
        (_, Error::StepFailed { step, .. }) if step == "fetch" => "Error fetching commit",
        (_, Error::StepFailed { step, .. }) if step == "checkout" => "Error checking out commit",
        (Stage::InstallingDependencies, _) => "Error installing requirements",
        _ => "An error occurred",
    };
    match error.diagnostic() {
        Some(text) => format!("{}: {}", prefix, text.trim_end()),
        None => format!("{}: {}", prefix, error),
    }
}
