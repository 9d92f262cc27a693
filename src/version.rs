//! # Version Resolution
//!
//! Classifies the caller-supplied version string into a [`VersionSpec`],
//! which decides how the repository has to be fetched.
//!
//! The classification is purely based on the shape of the string and never
//! consults the remote:
//!
//! - absent or empty: [`VersionSpec::Default`], the remote's default branch
//! - exactly 40 hexadecimal characters (any case): [`VersionSpec::CommitHash`]
//! - anything else: [`VersionSpec::BranchOrTag`]
//!
//! A branch or tag whose name is 40 hex characters is therefore always
//! treated as a commit hash.

use std::fmt;

/// Length of a full SHA-1 object name.
pub const COMMIT_HASH_LEN: usize = 40;

/// How a repository version must be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSpec {
    /// The remote's default branch.
    Default,
    /// A named branch or tag, passed to `git clone --branch`.
    BranchOrTag(String),
    /// A full commit hash, fetched by object name.
    CommitHash(String),
}

impl VersionSpec {
    /// The ref name as given by the caller, if any.
    pub fn as_ref_name(&self) -> Option<&str> {
        match self {
            VersionSpec::Default => None,
            VersionSpec::BranchOrTag(name) | VersionSpec::CommitHash(name) => Some(name),
        }
    }
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionSpec::Default => write!(f, "default branch"),
            VersionSpec::BranchOrTag(name) => write!(f, "branch/tag {}", name),
            VersionSpec::CommitHash(hash) => write!(f, "commit {}", hash),
        }
    }
}

/// Returns true if `value` looks like a full commit hash.
pub fn is_commit_hash(value: &str) -> bool {
    value.len() == COMMIT_HASH_LEN && value.chars().all(|c| c.is_ascii_hexdigit())
}

/// Classify a version specifier. Never fails.
pub fn resolve(spec: Option<&str>) -> VersionSpec {
    match spec {
        None | Some("") => VersionSpec::Default,
        Some(value) if is_commit_hash(value) => VersionSpec::CommitHash(value.to_string()),
        Some(value) => VersionSpec::BranchOrTag(value.to_string()),
    }
}
