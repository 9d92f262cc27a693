//! # Progress Reporting
//!
//! Human-readable progress is written through a [`Reporter`] that is passed
//! explicitly to every stage of the install. The console implementation
//! prints progress lines to stdout, error detail to stderr, and mirrors both
//! into the `log` stream so the structured log carries the same events.

use crate::output::{emoji, OutputConfig};

/// Sink for user-facing progress and error messages.
pub trait Reporter {
    /// A progress line for the user.
    fn progress(&self, message: &str);

    /// A line announcing successful completion of a stage.
    fn success(&self, message: &str) {
        self.progress(message);
    }

    /// Error detail for the user.
    fn error(&self, message: &str);
}

/// Reporter that writes to the terminal.
#[derive(Debug, Clone)]
pub struct ConsoleReporter {
    output: OutputConfig,
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new(output: OutputConfig) -> Self {
        Self {
            output,
            quiet: false,
        }
    }

    /// Suppress progress lines on stdout. Errors are still printed.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

impl Reporter for ConsoleReporter {
    fn progress(&self, message: &str) {
        log::info!("{}", message);
        if !self.quiet {
            println!("{} {}", emoji(&self.output, "📦", "[..]"), message);
        }
    }

    fn success(&self, message: &str) {
        log::info!("{}", message);
        if !self.quiet {
            println!("{} {}", emoji(&self.output, "✅", "[OK]"), message);
        }
    }

    fn error(&self, message: &str) {
        log::error!("{}", message);
        eprintln!("{} {}", emoji(&self.output, "❌", "[ERROR]"), message);
    }
}
