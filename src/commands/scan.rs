use std::io;
use std::path::Path;

use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use tracing::info;

use crate::aggregate::{ResultAggregator, ScanReport};
use crate::cancel::CancelFlag;
use crate::checker::CheckerError;
use crate::classifier::Classification;
use crate::cli::Cli;
use crate::error::{LintSweepError, Result};
use crate::output::{CheckProgress, ColorMode, ErrorOutput, ReportWriter, print_error};
use crate::{EXIT_CONFIG_ERROR, EXIT_INTERRUPTED, EXIT_ISSUES_FOUND, EXIT_SUCCESS};

use super::context::{ScanContext, color_choice_to_mode, load_config, resolve_directory};

/// Runs a full scan from parsed arguments and returns the process exit code.
#[must_use]
pub fn run_scan(cli: &Cli, cancel: &CancelFlag) -> i32 {
    let color = color_choice_to_mode(cli.color);
    match run_scan_impl(cli, cancel, color) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            print_error(color, &e);
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_scan_impl(cli: &Cli, cancel: &CancelFlag, color: ColorMode) -> Result<i32> {
    // 1. Effective configuration
    let config = load_config(cli)?;

    // 2. Scan root, prompting when not given
    let root = resolve_directory(
        cli.directory.as_deref(),
        &mut io::stdin().lock(),
        &mut io::stderr(),
    )?;

    // 3. Scanner, checker and classifier
    let context = ScanContext::from_config(&config)?;

    // 4. Check every candidate
    let report = execute_scan(&root, &context, cancel, cli.quiet, color)?;

    // 5. Persist the report, only when something was found
    let writer = ReportWriter::new(&config.report.path);
    if writer.write(&report)? && !cli.quiet {
        ErrorOutput::new(color).print_info(&format!(
            "Report written to {}",
            writer.path().display()
        ));
    }

    // 6. Summary on stdout
    let summary = cli.format.formatter(color, cli.verbose).format(&report)?;
    print!("{summary}");

    Ok(exit_code(&report, cli.warn_only))
}

#[must_use]
pub(crate) const fn exit_code(report: &ScanReport, warn_only: bool) -> i32 {
    if report.interrupted {
        EXIT_INTERRUPTED
    } else if report.has_problems() && !warn_only {
        EXIT_ISSUES_FOUND
    } else {
        EXIT_SUCCESS
    }
}

/// Discovers candidates under `root` and checks them on a dedicated pool.
///
/// Once `cancel` is set no new check starts; checks already running finish and
/// the returned report is flagged as interrupted.
///
/// # Errors
/// Returns an error if `root` is not a directory or the checker cannot be
/// launched. In the latter case no partial report is returned.
pub(crate) fn execute_scan(
    root: &Path,
    context: &ScanContext,
    cancel: &CancelFlag,
    quiet: bool,
    color: ColorMode,
) -> Result<ScanReport> {
    info!(root = %root.display(), "discovering files");
    let discovered = context.scanner.scan(root)?;

    let aggregator = ResultAggregator::new();
    for entry in &discovered.skipped {
        ErrorOutput::new(color).print_warning(&format!("skipped {entry}"));
    }
    aggregator.record_skipped(discovered.skipped.len());

    info!(
        files = discovered.files.len(),
        jobs = context.jobs,
        "checking files"
    );
    let total = u64::try_from(discovered.files.len()).unwrap_or(u64::MAX);
    let progress = CheckProgress::new(total, quiet);
    let pool = ThreadPoolBuilder::new()
        .num_threads(context.jobs)
        .build()
        .map_err(|e| LintSweepError::Config(format!("cannot start worker pool: {e}")))?;

    let checker = context.checker.as_ref();
    let classifier = context.classifier.as_ref();
    let warnings = ErrorOutput::new(color);

    let result: std::result::Result<(), CheckerError> = pool.install(|| {
        discovered.files.par_iter().try_for_each(|path| {
            if cancel.is_cancelled() {
                progress.set_message("interrupted, waiting for running checks");
                return Ok(());
            }

            match checker.check(path) {
                Ok(outcome) if outcome.is_undetermined() => {
                    let reason = if outcome.timed_out {
                        "check timed out"
                    } else {
                        "checker killed by a signal"
                    };
                    progress.suspend(|| {
                        warnings.print_warning(&format!("{reason}: {}", path.display()));
                    });
                    aggregator.record(&outcome, &Classification::default());
                }
                Ok(outcome) => {
                    let classification = classifier.classify(&outcome.output);
                    aggregator.record(&outcome, &classification);
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    progress.suspend(|| warnings.print_warning(&e.to_string()));
                    aggregator.record_skipped(1);
                }
            }
            progress.inc();
            Ok(())
        })
    });
    progress.finish();
    result?;

    let report = aggregator.finalize(cancel.is_cancelled());
    info!(
        checked = progress.position(),
        problem_files = report.problem_files,
        "scan finished"
    );
    Ok(report)
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
