//! Persisted issue report.
//!
//! One block per problem file:
//!
//! ```text
//! <path>:
//! <checker output, trimmed>
//!
//! ```

use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use crate::aggregate::ScanReport;
use crate::error::{LintSweepError, Result};

pub struct ReportWriter {
    path: PathBuf,
}

impl ReportWriter {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Renders the report body. Empty when there are no problem files.
    #[must_use]
    pub fn render(report: &ScanReport) -> String {
        let mut out = String::new();
        for entry in &report.entries {
            let _ = write!(out, "{}:\n{}\n\n", entry.path.display(), entry.output);
        }
        out
    }

    /// Writes the report if and only if some file had issues.
    ///
    /// A clean scan leaves an existing file at the path untouched. Returns
    /// whether a file was written.
    ///
    /// # Errors
    /// Returns `ReportWrite` if the file or its parent directory cannot be created.
    pub fn write(&self, report: &ScanReport) -> Result<bool> {
        if !report.has_problems() {
            return Ok(false);
        }

        let to_error = |source| LintSweepError::ReportWrite {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(to_error)?;
        }
        fs::write(&self.path, Self::render(report)).map_err(to_error)?;
        Ok(true)
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
