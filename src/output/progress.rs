use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};

/// Per-file progress on stderr.
///
/// Rendered only when stderr is a terminal and `--quiet` is off. A hidden bar
/// still counts, so `position` is accurate either way.
#[derive(Clone)]
pub struct CheckProgress {
    bar: ProgressBar,
}

impl CheckProgress {
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        Self::new_with_visibility(total, quiet, std::io::stderr().is_terminal())
    }

    fn new_with_visibility(total: u64, quiet: bool, is_tty: bool) -> Self {
        let bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(total).with_style(bar_style())
        };
        bar.set_length(total);
        Self { bar }
    }

    /// Marks one more file as done. Callable from any worker.
    pub fn inc(&self) {
        self.bar.inc(1);
    }

    #[must_use]
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Status text after the bar, e.g. while draining after Ctrl+C.
    pub fn set_message(&self, message: &'static str) {
        self.bar.set_message(message);
    }

    /// Runs `f` with the bar cleared so warnings are not overdrawn.
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.bar.suspend(f)
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.green} {pos}/{len} checked [{bar:40.cyan/blue}] {msg}")
        .expect("literal progress template")
        .progress_chars("=> ")
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
