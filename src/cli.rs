//! CLI argument parsing, logger setup and install dispatch

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use node_install::defaults::{DEFAULT_INSTALLER, DEFAULT_TARGET_DIR};
use node_install::deps::InstallerCommand;
use node_install::exec::SystemRunner;
use node_install::install::{InstallRequest, Installer};
use node_install::output::OutputConfig;
use node_install::reporter::ConsoleReporter;

/// Clone a custom node repository and install its requirements
#[derive(Parser, Debug)]
#[command(name = "node-install")]
#[command(about, long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// Git repository URL to clone
    #[arg(value_name = "REPO_URL")]
    pub repo_url: String,

    /// Specific branch, tag, or commit hash to clone
    #[arg(short = 'v', long = "version", value_name = "VERSION")]
    pub version: Option<String>,

    /// Disable build isolation for the requirements install
    #[arg(long)]
    pub no_build_isolation: bool,

    /// Directory that receives the repository checkout
    #[arg(
        long,
        value_name = "PATH",
        env = "NODE_INSTALL_TARGET_DIR",
        default_value = DEFAULT_TARGET_DIR
    )]
    pub target_dir: PathBuf,

    /// Installer executable, run as `<PROGRAM> pip install -r requirements.txt`
    #[arg(
        long,
        value_name = "PROGRAM",
        env = "NODE_INSTALL_INSTALLER",
        default_value = DEFAULT_INSTALLER
    )]
    pub installer: String,

    /// Suppress progress output; errors are still printed
    #[arg(short, long)]
    pub quiet: bool,

    /// Colorize output (always, never, auto)
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Run the install described by the parsed arguments.
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        let reporter =
            ConsoleReporter::new(OutputConfig::from_env_and_flag(&self.color)).quiet(self.quiet);
        let runner = SystemRunner;
        let installer = Installer {
            runner: &runner,
            reporter: &reporter,
            installer: InstallerCommand::new(self.installer),
            target_dir: self.target_dir,
        };

        let request = InstallRequest {
            repo_url: self.repo_url,
            version: self.version,
            no_build_isolation: self.no_build_isolation,
        };

        installer.run(&request)?;
        Ok(())
    }
}

/// Initialize the timestamped log stream on stderr.
///
/// `RUST_LOG` takes precedence over `--log-level` when set.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .format_target(true)
        .try_init();
}
