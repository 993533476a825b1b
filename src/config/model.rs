use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::classifier::DiagnosticKind;

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Default report file written next to the working directory.
pub const DEFAULT_REPORT_PATH: &str = "php_syntax_errors.log";

/// Scanner configuration for candidate file discovery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// File extension (without the leading dot) selecting candidate files.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Glob patterns for paths that are never checked.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Respect .gitignore rules (default: false).
    #[serde(default)]
    pub gitignore: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            exclude: Vec::new(),
            gitignore: false,
        }
    }
}

/// External checker invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckerConfig {
    /// Command line of the checker; the file path is appended as the last argument.
    #[serde(default = "default_command")]
    pub command: String,

    /// Worker threads. 0 means one per CPU.
    #[serde(default)]
    pub jobs: usize,

    /// Per-file timeout in seconds. 0 disables the timeout.
    #[serde(default)]
    pub timeout_secs: u64,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            jobs: 0,
            timeout_secs: 0,
        }
    }
}

/// How diagnostic markers are located in checker output.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Marker may appear anywhere in the output.
    #[default]
    Substring,
    /// Marker must start a line (after an optional prefix word such as `PHP`).
    Line,
}

impl std::str::FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "substring" => Ok(Self::Substring),
            "line" => Ok(Self::Line),
            _ => Err(format!("Unknown match mode: {s}")),
        }
    }
}

/// Markers recognized in checker output, grouped by diagnostic kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassifierConfig {
    #[serde(default)]
    pub match_mode: MatchMode,

    #[serde(default = "default_parse_error_markers")]
    pub parse_error: Vec<String>,

    #[serde(default = "default_deprecation_markers")]
    pub deprecation: Vec<String>,

    #[serde(default = "default_warning_markers")]
    pub warning: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::default(),
            parse_error: default_parse_error_markers(),
            deprecation: default_deprecation_markers(),
            warning: default_warning_markers(),
        }
    }
}

impl ClassifierConfig {
    /// Flattens the per-kind marker lists into `(kind, marker)` pairs.
    ///
    /// Order is deprecation, parse error, warning, then config order within a kind.
    #[must_use]
    pub fn markers(&self) -> Vec<(DiagnosticKind, String)> {
        let groups = [
            (DiagnosticKind::Deprecation, &self.deprecation),
            (DiagnosticKind::ParseError, &self.parse_error),
            (DiagnosticKind::Warning, &self.warning),
        ];
        groups
            .into_iter()
            .flat_map(|(kind, markers)| markers.iter().map(move |m| (kind, m.clone())))
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportConfig {
    /// Where the issue report is written.
    #[serde(default = "default_report_path")]
    pub path: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            path: default_report_path(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub checker: CheckerConfig,

    #[serde(default)]
    pub classifier: ClassifierConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

fn default_extension() -> String {
    "php".to_string()
}

fn default_command() -> String {
    "php -l".to_string()
}

fn default_parse_error_markers() -> Vec<String> {
    vec!["Parse error:".to_string()]
}

fn default_deprecation_markers() -> Vec<String> {
    vec!["Deprecated:".to_string()]
}

fn default_warning_markers() -> Vec<String> {
    vec!["Warning:".to_string()]
}

fn default_report_path() -> PathBuf {
    PathBuf::from(DEFAULT_REPORT_PATH)
}
