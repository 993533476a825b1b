use std::path::{Path, PathBuf};

/// What the external checker produced for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub path: PathBuf,
    /// Standard output followed by standard error.
    pub output: String,
    /// Exit code, `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    /// The process was killed after exceeding the per-file timeout.
    pub timed_out: bool,
}

impl CheckOutcome {
    #[must_use]
    pub fn completed(path: &Path, output: String, exit_code: Option<i32>) -> Self {
        Self {
            path: path.to_path_buf(),
            output,
            exit_code,
            timed_out: false,
        }
    }

    #[must_use]
    pub fn timed_out(path: &Path, output: String) -> Self {
        Self {
            path: path.to_path_buf(),
            output,
            exit_code: None,
            timed_out: true,
        }
    }

    /// No verdict could be drawn: the check timed out or the checker was
    /// killed by a signal (e.g. SIGINT reaching the process group).
    #[must_use]
    pub const fn is_undetermined(&self) -> bool {
        self.timed_out || self.exit_code.is_none()
    }

    /// Output with surrounding whitespace removed, as it appears in the report.
    #[must_use]
    pub fn trimmed_output(&self) -> &str {
        self.output.trim()
    }
}
