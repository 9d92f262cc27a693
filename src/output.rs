//! # Output Appearance
//!
//! Decides whether progress lines are decorated with emoji or plain-text
//! markers. The decision follows the `--color` flag first, then the usual
//! environment conventions:
//!
//! - `NO_COLOR` set (any value) disables decoration (https://no-color.org/)
//! - `CLICOLOR=0` disables decoration
//! - `CLICOLOR_FORCE=1` forces decoration even when stdout is not a TTY
//! - `TERM=dumb` disables decoration
//!
//! Installs frequently run inside container builds with no TTY, where the
//! plain markers (`[OK]`, `[ERROR]`) keep build logs readable.

use std::env;

/// Output configuration for controlling emoji decoration.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    /// Build the configuration from the `--color` flag value
    /// (`always`, `never` or `auto`) and the environment.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    #[cfg(test)]
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    #[cfg(test)]
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Pick the emoji when decoration is enabled, otherwise the plain marker.
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}
