//! Console output
//!
//! Report lines go to stdout with a status prefix; warnings and errors go
//! to stderr. `--quiet` silences everything but warnings and errors.

use crate::core::report::{Reporter, Severity};

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";

    /// Info prefix (blue circle)
    pub const INFO: &str = "ℹ";
}

/// Global output settings from the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Suppress non-error output
    pub quiet: bool,
    /// Verbosity level (`-v` count)
    pub verbose: u8,
}

impl OutputConfig {
    /// Create output settings
    pub fn new(quiet: bool, verbose: u8) -> Self {
        Self { quiet, verbose }
    }

    /// Tracing level implied by the verbosity
    pub fn tracing_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        }
    }

    /// Reporter writing to the console
    pub fn reporter(&self) -> ConsoleReporter {
        ConsoleReporter { quiet: self.quiet }
    }
}

/// [`Reporter`] printing to the terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter {
    quiet: bool,
}

/// Render a report line with its status prefix
pub fn format_line(severity: Severity, message: &str) -> String {
    match severity {
        Severity::Comment => format!("{} {message}", status::INFO),
        Severity::Info => format!("  {message}"),
        Severity::Success => format!("{} {message}", status::SUCCESS),
        Severity::Warning => format!("{} {message}", status::WARNING),
    }
}

impl Reporter for ConsoleReporter {
    fn line(&mut self, severity: Severity, message: &str) {
        if severity == Severity::Warning {
            eprintln!("{}", format_line(severity, message));
        } else if !self.quiet {
            println!("{}", format_line(severity, message));
        }
    }

    fn blank(&mut self) {
        if !self.quiet {
            println!();
        }
    }
}

/// Print an error and its causes to stderr
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} Error: {error}", status::ERROR);
    for cause in error.chain().skip(1) {
        eprintln!("  Caused by: {cause}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_prefixes() {
        assert_eq!(format_line(Severity::Success, "built"), "✓ built");
        assert_eq!(format_line(Severity::Comment, "note"), "ℹ note");
        assert_eq!(format_line(Severity::Warning, "careful"), "⚠ careful");
        assert_eq!(format_line(Severity::Info, "plain"), "  plain");
    }

    #[test]
    fn test_tracing_level_from_verbosity() {
        assert_eq!(OutputConfig::new(false, 0).tracing_level(), tracing::Level::WARN);
        assert_eq!(OutputConfig::new(false, 1).tracing_level(), tracing::Level::INFO);
        assert_eq!(OutputConfig::new(false, 3).tracing_level(), tracing::Level::DEBUG);
    }
}
