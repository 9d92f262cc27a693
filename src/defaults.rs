//! Default values for node-install configuration.
//!
//! Each of these can be overridden from the command line, except the
//! manifest location which is fixed by convention.

use std::path::PathBuf;

/// Directory that receives node checkouts when `--target-dir` and
/// `NODE_INSTALL_TARGET_DIR` are not given.
pub const DEFAULT_TARGET_DIR: &str = "/app/comfy/custom_nodes";

/// Dependency manifest, relative to the repository root.
pub const MANIFEST_FILE: &str = "requirements.txt";

/// Installer executable used when `--installer` is not given.
pub const DEFAULT_INSTALLER: &str = "uv";

/// Arguments placed between the installer program and `-r <manifest>`.
pub const INSTALLER_SUBCOMMAND: [&str; 2] = ["pip", "install"];

/// Extra installer argument for `--no-build-isolation`.
pub const NO_BUILD_ISOLATION_FLAG: &str = "--no-build-isolation";

/// Returns the default parent directory for node checkouts.
pub fn default_target_dir() -> PathBuf {
    PathBuf::from(DEFAULT_TARGET_DIR)
}
