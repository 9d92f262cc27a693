//! # Error Handling
//!
//! This module defines the error type shared by every stage of a node
//! install. It uses `thiserror` to derive descriptive messages.
//!
//! The variants follow the failure taxonomy of the installer:
//!
//! - **`StepFailed`**: a mandatory `git` step exited with a nonzero status.
//!   The captured stderr of the tool is carried verbatim.
//! - **`InstallFailed`**: the package installer exited with a nonzero status.
//! - **`Spawn`**: an external program could not be started at all.
//! - **`Io`**: any other filesystem failure, such as a permission error while
//!   creating the destination directory.
//!
//! Version classification never fails, so it has no variant here.

use thiserror::Error;

/// Main error type for node-install operations
#[derive(Error, Debug)]
pub enum Error {
    /// A mandatory repository synchronization step exited nonzero.
    #[error("Git {step} failed: {stderr}")]
    StepFailed { step: String, stderr: String },

    /// The dependency installer exited nonzero.
    #[error("Dependency installation with {program} failed: {stderr}")]
    InstallFailed { program: String, stderr: String },

    /// An external command could not be launched.
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Text captured from the failing external tool, if any.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Error::StepFailed { stderr, .. } | Error::InstallFailed { stderr, .. } => {
                Some(stderr.as_str())
            }
            _ => None,
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
