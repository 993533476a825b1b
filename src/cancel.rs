//! Cooperative cancellation of a running scan.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::EXIT_INTERRUPTED;
use crate::error::{LintSweepError, Result};

/// Shared flag polled by workers before they start a new file.
///
/// Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Routes Ctrl+C to `flag`.
///
/// The first interrupt lets in-flight checks finish so a partial report can be
/// written; a second one exits immediately.
///
/// # Errors
/// Returns an error if a signal handler is already installed or cannot be set.
pub fn install_interrupt_handler(flag: &CancelFlag) -> Result<()> {
    let flag = flag.clone();
    ctrlc::set_handler(move || {
        if flag.is_cancelled() {
            std::process::exit(EXIT_INTERRUPTED);
        }
        flag.cancel();
        eprintln!("\nInterrupted: finishing running checks (press Ctrl+C again to abort)");
    })
    .map_err(|e| LintSweepError::Config(format!("cannot install Ctrl+C handler: {e}")))
}

#[cfg(test)]
#[path = "cancel_tests.rs"]
mod tests;
