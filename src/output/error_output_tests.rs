use std::path::PathBuf;

use super::*;
use crate::LintSweepError;

fn render<F: FnOnce(&ErrorOutput, &mut Vec<u8>)>(use_colors: bool, f: F) -> String {
    let out = ErrorOutput::new(if use_colors {
        ColorMode::Always
    } else {
        ColorMode::Never
    });
    let mut buf = Vec::new();
    f(&out, &mut buf);
    String::from_utf8(buf).unwrap()
}

#[test]
fn error_without_colors() {
    let result = render(false, |out, buf| {
        out.write_error(buf, "Invalid directory", "Directory does not exist: x");
    });
    assert_eq!(result, "✖ Invalid directory: Directory does not exist: x\n");
}

#[test]
fn error_with_colors_has_ansi_codes() {
    let result = render(true, |out, buf| out.write_error(buf, "IO error", "disk full"));
    assert!(result.contains(ansi::RED));
    assert!(result.contains(ansi::RESET));
    assert!(result.contains("IO error:"));
}

#[test]
fn warning_is_single_line() {
    let result = render(false, |out, buf| out.write_warning(buf, "skipped locked/: denied"));
    assert_eq!(result, "⚠ Warning: skipped locked/: denied\n");
}

#[test]
fn info_without_colors() {
    let result = render(false, |out, buf| out.write_info(buf, "Report written"));
    assert_eq!(result, "ℹ Report written\n");
}

#[test]
fn error_chain_appends_root_cause() {
    let err = LintSweepError::Launch {
        program: "php".to_string(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
    };
    assert_eq!(
        error_chain(&err),
        "Failed to launch checker 'php': No such file"
    );
}

#[test]
fn error_chain_skips_sources_already_in_message() {
    let err = LintSweepError::Io(std::io::Error::other("disk full"));
    assert_eq!(error_chain(&err), "disk full");

    let err = LintSweepError::DirectoryNotFound {
        path: PathBuf::from("nope"),
    };
    assert_eq!(error_chain(&err), "Directory does not exist: nope");
}
