use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LintSweepError {
    /// Message is shown after the "Configuration error" label.
    #[error("{0}")]
    Config(String),

    #[error("Failed to read file: {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory does not exist: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Failed to launch checker '{program}'")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report: {}", path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid diagnostic marker: {marker}")]
    InvalidRegex {
        marker: String,
        #[source]
        source: regex::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl LintSweepError {
    /// Short label used as the error type in stderr output.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Config(_)
            | Self::TomlParse(_)
            | Self::InvalidPattern { .. }
            | Self::InvalidRegex { .. }
            | Self::FileRead { .. } => "Configuration error",
            Self::DirectoryNotFound { .. } | Self::NotADirectory { .. } => "Invalid directory",
            Self::Launch { .. } => "Checker unavailable",
            Self::ReportWrite { .. } | Self::Io(_) => "IO error",
            Self::JsonSerialize(_) => "Output error",
        }
    }
}

pub type Result<T> = std::result::Result<T, LintSweepError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
