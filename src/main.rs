//! # node-install
//!
//! Binary entry point. Parses the command line and runs a single install;
//! all of the work lives in the `node_install` library.
//!
//! Exit status is 0 when the repository was synchronized and its
//! requirements (if any) installed, 1 on any failure, and 2 for usage errors
//! reported by `clap`.

mod cli;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
