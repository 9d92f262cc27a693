//! # node-install
//!
//! Installs a third-party custom node: fetches its repository at a requested
//! version and installs the Python requirements it declares.
//!
//! ## Quick Example
//!
//! ```
//! use node_install::version::{resolve, VersionSpec};
//! use node_install::install::repo_dir_name;
//!
//! assert_eq!(resolve(None), VersionSpec::Default);
//! assert_eq!(
//!     resolve(Some("v2.1.0")),
//!     VersionSpec::BranchOrTag("v2.1.0".to_string())
//! );
//! assert_eq!(repo_dir_name("https://example.com/foo.git"), "foo");
//! ```
//!
//! ## Execution Flow
//!
//! The entry point is [`install::Installer::run`], which executes:
//!
//! 1.  **Resolving** (`version`): classify the version string as the default
//!     branch, a branch or tag, or a full commit hash.
//! 2.  **Synchronizing** (`sync`): shallow-clone the branch or tag, or fetch
//!     the single commit into a fresh repository.
//! 3.  **Installing dependencies** (`deps`): run the package installer
//!     against `requirements.txt` when the repository has one.
//!
//! External programs are run through the [`exec::CommandRunner`] trait and
//! user-facing output goes through the [`reporter::Reporter`] trait; both are
//! passed in explicitly so tests can substitute recording implementations.

pub mod defaults;
pub mod deps;
pub mod error;
pub mod exec;
pub mod install;
pub mod output;
pub mod reporter;
pub mod sync;
pub mod version;

#[cfg(test)]
mod version_proptest;
