use std::path::PathBuf;

use super::*;
use crate::aggregate::ProblemFile;
use crate::classifier::DiagnosticKind;

fn sample_report() -> ScanReport {
    let mut report = ScanReport {
        total_files: 3,
        problem_files: 2,
        total_errors: 3,
        entries: vec![ProblemFile {
            path: PathBuf::from("c.php"),
            output: "Parse error: x".to_string(),
            occurrences: 2,
        }],
        ..ScanReport::default()
    };
    report.by_kind.insert(DiagnosticKind::ParseError, 2);
    report.by_kind.insert(DiagnosticKind::Warning, 1);
    report
}

#[test]
fn text_summary_prints_three_lines() {
    let output = TextSummary::new(ColorMode::Never, 0)
        .format(&sample_report())
        .unwrap();

    assert_eq!(
        output,
        "Total files checked: 3\nFiles with errors: 2\nTotal errors/warnings: 3\n"
    );
}

#[test]
fn verbose_text_summary_adds_breakdown() {
    let output = TextSummary::new(ColorMode::Never, 1)
        .format(&sample_report())
        .unwrap();

    assert!(output.contains("  parse errors: 2\n"));
    assert!(output.contains("  warnings: 1\n"));
}

#[test]
fn extra_lines_appear_only_when_relevant() {
    let mut report = sample_report();
    report.undetermined_files = 1;
    report.skipped_entries = 4;
    report.interrupted = true;

    let output = TextSummary::new(ColorMode::Never, 0).format(&report).unwrap();

    assert!(output.contains("Files undetermined (timed out or killed): 1\n"));
    assert!(output.contains("Entries skipped: 4\n"));
    assert!(output.contains("Scan interrupted"));
    assert_eq!(output.lines().count(), 6);
}

#[test]
fn colored_counts_use_ansi() {
    let output = TextSummary::new(ColorMode::Always, 0)
        .format(&sample_report())
        .unwrap();

    assert!(output.contains(&format!("Files with errors: {}2", ansi::RED)));
    assert!(output.starts_with("Total files checked: 3\n"));
}

#[test]
fn json_summary_serializes_report() {
    let output = JsonSummary.format(&sample_report()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["total_files"], 3);
    assert_eq!(value["problem_files"], 2);
    assert_eq!(value["total_errors"], 3);
    assert_eq!(value["by_kind"]["parse_error"], 2);
    assert_eq!(value["entries"][0]["path"], "c.php");
    assert_eq!(value["interrupted"], false);
}
