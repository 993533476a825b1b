//! Single-line error and warning messages on stderr, colored when supported.
//!
//! Format: `✖ {error type}: {message}` and `⚠ Warning: {message}`.

use std::io::{IsTerminal, Write};

use super::ColorMode;
use super::ansi;

/// Error output formatter with color support.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        let use_colors = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => Self::stderr_supports_color(),
        };
        Self { use_colors }
    }

    fn stderr_supports_color() -> bool {
        // Presence of NO_COLOR, whatever its value, disables color (https://no-color.org/).
        if std::env::var_os("NO_COLOR").is_some() {
            return false;
        }
        std::io::stderr().is_terminal()
    }

    pub fn print_error(&self, error_type: &str, message: &str) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(&mut stderr, error_type, message);
    }

    pub fn print_warning(&self, message: &str) {
        let mut stderr = std::io::stderr().lock();
        self.write_warning(&mut stderr, message);
    }

    pub fn print_info(&self, message: &str) {
        let mut stderr = std::io::stderr().lock();
        self.write_info(&mut stderr, message);
    }

    /// Writes error to a writer (for testing).
    pub fn write_error<W: Write>(&self, w: &mut W, error_type: &str, message: &str) {
        // Nothing sensible to do if stderr itself is gone.
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }
    }

    /// Writes warning to a writer (for testing).
    pub fn write_warning<W: Write>(&self, w: &mut W, message: &str) {
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}⚠ Warning:{} {message}",
                ansi::BOLD,
                ansi::YELLOW,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "⚠ Warning: {message}");
        }
    }

    pub fn write_info<W: Write>(&self, w: &mut W, message: &str) {
        if self.use_colors {
            let _ = writeln!(w, "{}ℹ{} {message}", ansi::CYAN, ansi::RESET);
        } else {
            let _ = writeln!(w, "ℹ {message}");
        }
    }
}

/// Prints a crate error, its source chain flattened onto the same line.
pub fn print_error(mode: ColorMode, err: &crate::LintSweepError) {
    ErrorOutput::new(mode).print_error(err.label(), &error_chain(err));
}

/// Prints a warning using the given color mode.
pub fn print_warning(mode: ColorMode, message: &str) {
    ErrorOutput::new(mode).print_warning(message);
}

/// Joins an error with its sources: `outer: inner: root cause`.
///
/// Sources already spelled out by an outer message are not repeated.
#[must_use]
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
