//! # External Command Execution
//!
//! Every interaction with `git` and the package installer goes through the
//! [`CommandRunner`] trait. A runner executes one [`Invocation`] and captures
//! its exit status, stdout and stderr into a [`CommandOutput`]; it only fails
//! when the program cannot be started.
//!
//! On top of the runner, two helpers express the two kinds of steps used by
//! the installer:
//!
//! - [`run_step`] for mandatory steps: a nonzero exit becomes
//!   [`Error::StepFailed`] carrying the tool's stderr.
//! - [`run_best_effort`] for optional steps: any failure is demoted to a
//!   logged warning.
//!
//! Swapping the runner is how tests observe the exact commands issued
//! without touching the network.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};

/// A single external command: program, arguments and working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Shorthand for a `git` invocation.
    pub fn git<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new("git").args(args)
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run the command inside `dir` instead of the current directory.
    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.cwd = Some(dir.to_path_buf());
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Captured result of a finished external command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code; `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Trait for running external commands - allows mocking in tests
pub trait CommandRunner {
    /// Runs the command to completion and captures its output.
    ///
    /// Returns an error only if the program could not be launched; a
    /// nonzero exit status is reported through [`CommandOutput::code`].
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput>;
}

/// The default `CommandRunner`, which spawns real processes and blocks until
/// they exit.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput> {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args);
        if let Some(dir) = &invocation.cwd {
            command.current_dir(dir);
        }

        let output = command.output().map_err(|source| Error::Spawn {
            command: invocation.to_string(),
            source,
        })?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

fn run_logged(runner: &dyn CommandRunner, invocation: &Invocation) -> Result<CommandOutput> {
    log::debug!("Executing: {}", invocation);
    let output = runner.run(invocation)?;
    if !output.stdout.is_empty() {
        log::debug!("{} stdout: {}", invocation.program, output.stdout.trim_end());
    }
    if !output.stderr.is_empty() {
        log::debug!("{} stderr: {}", invocation.program, output.stderr.trim_end());
    }
    Ok(output)
}

/// Runs a mandatory step.
///
/// A nonzero exit status is turned into [`Error::StepFailed`] named after
/// `step`, with the tool's stderr copied verbatim.
pub fn run_step(
    runner: &dyn CommandRunner,
    step: &str,
    invocation: &Invocation,
) -> Result<CommandOutput> {
    let output = run_logged(runner, invocation)?;
    if !output.success() {
        log::error!(
            "{} failed with exit status {}",
            invocation,
            output
                .code
                .map_or_else(|| "signal".to_string(), |c| c.to_string())
        );
        return Err(Error::StepFailed {
            step: step.to_string(),
            stderr: output.stderr,
        });
    }
    Ok(output)
}

/// Runs an optional step, logging a warning instead of failing.
///
/// Returns `true` when the command ran and exited successfully.
pub fn run_best_effort(runner: &dyn CommandRunner, step: &str, invocation: &Invocation) -> bool {
    match run_logged(runner, invocation) {
        Ok(output) if output.success() => true,
        Ok(output) => {
            log::warn!(
                "Ignoring failed {} step: {}",
                step,
                output.stderr.trim_end()
            );
            false
        }
        Err(e) => {
            log::warn!("Ignoring failed {} step: {}", step, e);
            false
        }
    }
}
