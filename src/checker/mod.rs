mod command;
mod process;
mod result;

pub use command::CommandChecker;
pub use result::CheckOutcome;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::error::LintSweepError;

/// Failure to obtain any outcome from the checker.
///
/// A non-zero exit status is not an error: it is reported through
/// [`CheckOutcome::exit_code`].
#[derive(Error, Debug)]
pub enum CheckerError {
    /// The checker program could not be started at all. Fatal for the scan.
    #[error("failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The checker started but its status or output could not be collected.
    #[error("failed to collect checker result for '{}': {source}", path.display())]
    Wait {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CheckerError {
    /// Returns true if the whole scan must stop.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Launch { .. })
    }
}

impl From<CheckerError> for LintSweepError {
    fn from(err: CheckerError) -> Self {
        match err {
            CheckerError::Launch { program, source } => Self::Launch { program, source },
            CheckerError::Wait { source, .. } => Self::Io(source),
        }
    }
}

pub trait Checker: Send + Sync {
    /// Run the external check on one file.
    ///
    /// # Errors
    /// Returns `Launch` if the checker cannot be started, `Wait` if its result
    /// cannot be collected.
    fn check(&self, path: &Path) -> Result<CheckOutcome, CheckerError>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
