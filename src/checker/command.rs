use std::path::Path;
use std::process::Command;
use std::time::Duration;

use tracing::debug;

use super::process::{collect, spawn_piped};
use super::{CheckOutcome, Checker, CheckerError};
use crate::error::{LintSweepError, Result};

/// Runs an external program once per file, passing the path as the last argument.
///
/// The program is spawned directly from an argument vector; no shell sees the
/// file path.
#[derive(Debug, Clone)]
pub struct CommandChecker {
    program: String,
    args: Vec<String>,
    timeout: Option<Duration>,
}

impl CommandChecker {
    #[must_use]
    pub const fn new(program: String, args: Vec<String>) -> Self {
        Self {
            program,
            args,
            timeout: None,
        }
    }

    /// Builds a checker from a command line such as `php -l`.
    ///
    /// The line is split with shell quoting rules, so
    /// `"/opt/php 8/bin/php" -l` names a program containing a space.
    ///
    /// # Errors
    /// Returns a `Config` error if the line has unbalanced quotes or is empty.
    pub fn from_command_line(line: &str) -> Result<Self> {
        let mut words = shell_words::split(line).map_err(|e| {
            LintSweepError::Config(format!("cannot parse checker command '{line}': {e}"))
        })?;
        if words.is_empty() {
            return Err(LintSweepError::Config(
                "checker command is empty".to_string(),
            ));
        }
        let program = words.remove(0);
        Ok(Self::new(program, words))
    }

    /// Kill the checker if it runs longer than `timeout`.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Checker for CommandChecker {
    fn check(&self, path: &Path) -> std::result::Result<CheckOutcome, CheckerError> {
        let mut command = Command::new(&self.program);
        command.args(&self.args).arg(path);

        let child = spawn_piped(&mut command).map_err(|source| CheckerError::Launch {
            program: self.program.clone(),
            source,
        })?;

        let captured = collect(child, self.timeout).map_err(|source| CheckerError::Wait {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(
            path = %path.display(),
            exit_code = ?captured.exit_code,
            timed_out = captured.timed_out,
            "checker finished"
        );

        Ok(if captured.timed_out {
            CheckOutcome::timed_out(path, captured.output)
        } else {
            CheckOutcome::completed(path, captured.output, captured.exit_code)
        })
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
