//! Thread-safe accumulation of per-file results into a [`ScanReport`].

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use indexmap::IndexMap;
use serde::Serialize;

use crate::checker::CheckOutcome;
use crate::classifier::{Classification, DiagnosticKind};

/// A file with at least one diagnostic, as it appears in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemFile {
    pub path: PathBuf,
    /// Checker output, trimmed.
    pub output: String,
    pub occurrences: usize,
}

/// Final, immutable result of one scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    /// Files handed to the checker, undetermined ones included.
    pub total_files: usize,
    /// Files with at least one diagnostic.
    pub problem_files: usize,
    /// Sum of every diagnostic occurrence across all files.
    pub total_errors: usize,
    /// Files whose check timed out or was killed; their status is unknown.
    pub undetermined_files: usize,
    /// Unreadable directory entries and checks whose result could not be collected.
    pub skipped_entries: usize,
    /// Subtotals of `total_errors`, in `DiagnosticKind` order.
    pub by_kind: IndexMap<DiagnosticKind, usize>,
    /// The scan was cancelled; counts cover only the files checked so far.
    pub interrupted: bool,
    /// Problem files sorted by path.
    pub entries: Vec<ProblemFile>,
}

impl ScanReport {
    #[must_use]
    pub const fn has_problems(&self) -> bool {
        self.problem_files > 0
    }
}

/// Collects results from concurrent workers.
///
/// Every update takes the same lock, so counters are never torn or lost.
#[derive(Debug, Default)]
pub struct ResultAggregator {
    state: Mutex<ScanReport>,
}

impl ResultAggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one checked file.
    ///
    /// An undetermined outcome (timed out or killed) counts as examined but
    /// its classification is ignored.
    pub fn record(&self, outcome: &CheckOutcome, classification: &Classification) {
        let mut state = self.lock();
        state.total_files += 1;

        if outcome.is_undetermined() {
            state.undetermined_files += 1;
            return;
        }
        if classification.is_clean() {
            return;
        }

        state.problem_files += 1;
        state.total_errors += classification.count();
        for (kind, count) in classification.counts_by_kind() {
            *state.by_kind.entry(kind).or_insert(0) += count;
        }
        state.entries.push(ProblemFile {
            path: outcome.path.clone(),
            output: outcome.trimmed_output().to_string(),
            occurrences: classification.count(),
        });
    }

    /// Records entries that could not be examined at all.
    pub fn record_skipped(&self, count: usize) {
        self.lock().skipped_entries += count;
    }

    /// Consumes the aggregator into an order-independent report.
    #[must_use]
    pub fn finalize(self, interrupted: bool) -> ScanReport {
        let mut report = self
            .state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        report.interrupted = interrupted;
        report.entries.sort_by(|a, b| a.path.cmp(&b.path));
        report.by_kind.sort_keys();
        report
    }

    fn lock(&self) -> MutexGuard<'_, ScanReport> {
        // A panicking worker cannot leave the counters half-updated, so keep going.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
