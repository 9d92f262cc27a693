//! # Dependency Installation
//!
//! Looks for a `requirements.txt` at the root of a synchronized repository
//! and, when present, hands it to the package installer
//! (`uv pip install -r <manifest>` by default).
//!
//! The manifest is read only so its content can be logged. Its entries are
//! never parsed or validated here; malformed requirements are reported by
//! the installer itself.

use std::fs;
use std::path::{Path, PathBuf};

use crate::defaults::{
    DEFAULT_INSTALLER, INSTALLER_SUBCOMMAND, MANIFEST_FILE, NO_BUILD_ISOLATION_FLAG,
};
use crate::error::{Error, Result};
use crate::exec::{CommandRunner, Invocation};
use crate::reporter::Reporter;

/// A dependency manifest found in a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyManifest {
    pub path: PathBuf,
    /// Raw text, or `None` when the file exists but could not be read.
    pub content: Option<String>,
}

impl DependencyManifest {
    /// Look for the manifest under `repo_dir`.
    pub fn discover(repo_dir: &Path) -> Option<Self> {
        let path = repo_dir.join(MANIFEST_FILE);
        if !path.is_file() {
            return None;
        }

        let content = match fs::read_to_string(&path) {
            Ok(text) => Some(text),
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                None
            }
        };

        Some(Self { path, content })
    }

    fn log_content(&self) {
        match self.content.as_deref().map(str::trim) {
            Some("") => log::warn!("{} is empty", MANIFEST_FILE),
            Some(text) => log::info!("Requirements to install:\n{}", text),
            None => {}
        }
    }
}

/// The installer program and the arguments that precede `-r <manifest>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallerCommand {
    pub program: String,
    pub subcommand: Vec<String>,
}

impl InstallerCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            subcommand: INSTALLER_SUBCOMMAND.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Build the invocation for `manifest`.
    pub fn invocation(&self, manifest: &Path, no_build_isolation: bool) -> Invocation {
        let mut invocation = Invocation::new(self.program.as_str())
            .args(self.subcommand.iter().cloned())
            .arg("-r")
            .arg(manifest.to_string_lossy().into_owned());
        if no_build_isolation {
            invocation = invocation.arg(NO_BUILD_ISOLATION_FLAG);
        }
        invocation
    }
}

impl Default for InstallerCommand {
    fn default() -> Self {
        Self::new(DEFAULT_INSTALLER)
    }
}

/// What happened to the repository's dependencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyStatus {
    /// No manifest was found; nothing was installed.
    Skipped,
    /// The installer ran successfully against this manifest.
    Installed { manifest: PathBuf },
}

/// Install the dependencies declared by `repo_dir`, if any.
pub fn install_dependencies(
    runner: &dyn CommandRunner,
    reporter: &dyn Reporter,
    installer: &InstallerCommand,
    repo_dir: &Path,
    no_build_isolation: bool,
) -> Result<DependencyStatus> {
    let Some(manifest) = DependencyManifest::discover(repo_dir) else {
        log::info!(
            "No {} found at {}",
            MANIFEST_FILE,
            repo_dir.join(MANIFEST_FILE).display()
        );
        reporter.progress(&format!(
            "No {} found, skipping package installation.",
            MANIFEST_FILE
        ));
        return Ok(DependencyStatus::Skipped);
    };

    log::info!("Found {} at {}", MANIFEST_FILE, manifest.path.display());
    manifest.log_content();

    let invocation = installer.invocation(&manifest.path, no_build_isolation);
    if no_build_isolation {
        log::info!("Added {} flag to installer", NO_BUILD_ISOLATION_FLAG);
    }
    log::info!("Executing install command: {}", invocation);
    reporter.progress(&format!("Installing requirements with {}...", installer.program));

    let output = runner.run(&invocation)?;
    if !output.stdout.trim().is_empty() {
        log::info!("{} stdout:\n{}", installer.program, output.stdout.trim_end());
    }
    if !output.stderr.trim().is_empty() {
        log::warn!("{} stderr:\n{}", installer.program, output.stderr.trim_end());
    }

    if !output.success() {
        log::error!(
            "{} failed with exit status {:?}",
            installer.program,
            output.code
        );
        return Err(Error::InstallFailed {
            program: installer.program.clone(),
            stderr: output.stderr,
        });
    }

    reporter.success("Requirements installed successfully!");
    Ok(DependencyStatus::Installed {
        manifest: manifest.path,
    })
}
