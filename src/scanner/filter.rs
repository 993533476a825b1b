use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{LintSweepError, Result};

pub trait FileFilter {
    /// `path` is relative to the scan root.
    fn should_include(&self, path: &Path) -> bool;
}

/// Accepts files whose name ends with `.<extension>` and that match no exclude glob.
pub struct ExtensionFilter {
    suffix: String,
    exclude_patterns: GlobSet,
}

impl ExtensionFilter {
    /// Create a filter for `extension` (with or without the leading dot).
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(extension: &str, exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| LintSweepError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| LintSweepError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            suffix: format!(".{}", extension.trim_start_matches('.')),
            exclude_patterns,
        })
    }

    fn has_suffix(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| name.to_string_lossy().ends_with(&self.suffix))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }
}

impl FileFilter for ExtensionFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_suffix(path) && !self.is_excluded(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
