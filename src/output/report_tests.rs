use std::path::PathBuf;

use tempfile::TempDir;

use super::*;
use crate::aggregate::ProblemFile;

fn report_with(entries: Vec<(&str, &str, usize)>) -> ScanReport {
    let entries: Vec<_> = entries
        .into_iter()
        .map(|(path, output, occurrences)| ProblemFile {
            path: PathBuf::from(path),
            output: output.to_string(),
            occurrences,
        })
        .collect();
    ScanReport {
        total_files: entries.len() + 1,
        problem_files: entries.len(),
        total_errors: entries.iter().map(|e| e.occurrences).sum(),
        entries,
        ..ScanReport::default()
    }
}

#[test]
fn render_uses_block_layout() {
    let report = report_with(vec![
        ("src/b.php", "Warning: odd", 1),
        ("src/c.php", "Parse error: one\nParse error: two", 2),
    ]);

    assert_eq!(
        ReportWriter::render(&report),
        "src/b.php:\nWarning: odd\n\nsrc/c.php:\nParse error: one\nParse error: two\n\n"
    );
}

#[test]
fn writes_file_when_problems_exist() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("php_syntax_errors.log");
    let report = report_with(vec![("a.php", "Deprecated: x", 1)]);

    let written = ReportWriter::new(&path).write(&report).unwrap();

    assert!(written);
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "a.php:\nDeprecated: x\n\n"
    );
}

#[test]
fn overwrites_previous_report() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("report.log");
    std::fs::write(&path, "stale content from last run\n").unwrap();
    let report = report_with(vec![("a.php", "Warning: new", 1)]);

    ReportWriter::new(&path).write(&report).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "a.php:\nWarning: new\n\n");
}

#[test]
fn clean_scan_writes_nothing_and_keeps_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("report.log");
    std::fs::write(&path, "previous issues\n").unwrap();

    let written = ReportWriter::new(&path).write(&report_with(vec![])).unwrap();

    assert!(!written);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "previous issues\n");
}

#[test]
fn clean_scan_does_not_create_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("report.log");

    ReportWriter::new(&path).write(&report_with(vec![])).unwrap();

    assert!(!path.exists());
}

#[test]
fn creates_missing_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("reports/nightly/issues.log");

    ReportWriter::new(&path)
        .write(&report_with(vec![("a.php", "Warning: w", 1)]))
        .unwrap();

    assert!(path.exists());
}

#[test]
fn unwritable_target_is_a_report_error() {
    let temp_dir = TempDir::new().unwrap();
    // The target path is an existing directory.
    let result = ReportWriter::new(temp_dir.path()).write(&report_with(vec![("a.php", "Warning: w", 1)]));

    assert!(matches!(result, Err(LintSweepError::ReportWrite { .. })));
}
