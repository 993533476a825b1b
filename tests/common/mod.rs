#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the lint-sweep binary.
#[macro_export]
macro_rules! lint_sweep {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("lint-sweep"))
    };
}

/// Default report name, relative to the working directory.
pub const REPORT_NAME: &str = "php_syntax_errors.log";

/// Creates a temporary directory with test fixtures for integration tests.
///
/// Candidate files live under `project/`, so the report written to the
/// working directory never becomes a candidate itself.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a `.lint-sweep.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".lint-sweep.toml", content);
    }

    /// Creates `project/<relative_path>` whose content is what `cat` will report.
    pub fn create_source(&self, relative_path: &str, checker_output: &str) {
        self.create_file(&format!("project/{relative_path}"), checker_output);
    }

    /// Lays out the clean / one warning / two parse errors tree.
    pub fn create_abc_tree(&self) {
        self.create_source("a.php", "No syntax errors detected in a.php\n");
        self.create_source(
            "lib/b.php",
            "Warning: Undefined variable $x in lib/b.php on line 3\n",
        );
        self.create_source(
            "lib/deep/c.php",
            "Parse error: syntax error, unexpected '}' on line 4\n\
             Parse error: syntax error, unexpected end of file on line 9\n",
        );
    }

    pub fn report_path(&self) -> PathBuf {
        self.dir.path().join(REPORT_NAME)
    }

    pub fn read_report(&self) -> String {
        fs::read_to_string(self.report_path()).expect("Failed to read report")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Config that swaps `php -l` for `cat` and narrows markers to line starts.
pub const CAT_LINE_CONFIG: &str = r#"
version = "1"

[checker]
command = "cat"
jobs = 2

[classifier]
match_mode = "line"
"#;
