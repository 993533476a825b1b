use std::fmt::Write;
use std::io::IsTerminal;

use crate::aggregate::ScanReport;
use crate::error::Result;

use super::{ColorMode, ansi};

/// Renders the end-of-scan summary printed on stdout.
pub trait SummaryFormatter {
    /// # Errors
    /// Returns an error if the report cannot be serialized.
    fn format(&self, report: &ScanReport) -> Result<String>;
}

/// The three summary lines, plus extra lines only when they carry information.
pub struct TextSummary {
    use_colors: bool,
    verbose: u8,
}

impl TextSummary {
    #[must_use]
    pub fn new(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
            }
        }
    }

    fn count(&self, value: usize) -> String {
        if !self.use_colors {
            return value.to_string();
        }
        let color = if value == 0 { ansi::GREEN } else { ansi::RED };
        format!("{color}{value}{}", ansi::RESET)
    }
}

impl SummaryFormatter for TextSummary {
    fn format(&self, report: &ScanReport) -> Result<String> {
        let mut out = String::new();
        let _ = writeln!(out, "Total files checked: {}", report.total_files);
        let _ = writeln!(out, "Files with errors: {}", self.count(report.problem_files));
        let _ = writeln!(out, "Total errors/warnings: {}", self.count(report.total_errors));

        if self.verbose >= 1 {
            for (kind, count) in &report.by_kind {
                let _ = writeln!(out, "  {kind}: {count}");
            }
        }
        if report.undetermined_files > 0 {
            let _ = writeln!(out, "Files undetermined (timed out or killed): {}", report.undetermined_files);
        }
        if report.skipped_entries > 0 {
            let _ = writeln!(out, "Entries skipped: {}", report.skipped_entries);
        }
        if report.interrupted {
            let _ = writeln!(out, "Scan interrupted: counts cover only the files checked");
        }
        Ok(out)
    }
}

/// The whole report, problem entries included, as pretty JSON.
pub struct JsonSummary;

impl SummaryFormatter for JsonSummary {
    fn format(&self, report: &ScanReport) -> Result<String> {
        let mut out = serde_json::to_string_pretty(report)?;
        out.push('\n');
        Ok(out)
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
