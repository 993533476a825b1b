use std::fmt;
use std::path::PathBuf;

/// A directory entry the walker could not read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Offending path, when the walker could tell.
    pub path: Option<PathBuf>,
    pub reason: String,
}

impl fmt::Display for SkippedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{}: {}", path.display(), self.reason),
            None => write!(f, "{}", self.reason),
        }
    }
}

impl From<walkdir::Error> for SkippedEntry {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(std::path::Path::to_path_buf);
        let reason = err
            .io_error()
            .map_or_else(|| err.to_string(), ToString::to_string);
        Self { path, reason }
    }
}

impl From<ignore::Error> for SkippedEntry {
    fn from(err: ignore::Error) -> Self {
        Self {
            path: None,
            reason: err.to_string(),
        }
    }
}

/// One item of a directory walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveredEntry {
    /// A candidate file accepted by the filter.
    File(PathBuf),
    /// An entry that could not be read; the walk continues past it.
    Skipped(SkippedEntry),
}

/// Result of draining a full discovery.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Candidate files in walk order.
    pub files: Vec<PathBuf>,
    pub skipped: Vec<SkippedEntry>,
}

impl FromIterator<DiscoveredEntry> for ScanResult {
    fn from_iter<I: IntoIterator<Item = DiscoveredEntry>>(iter: I) -> Self {
        let mut result = Self::default();
        for entry in iter {
            match entry {
                DiscoveredEntry::File(path) => result.files.push(path),
                DiscoveredEntry::Skipped(skipped) => result.skipped.push(skipped),
            }
        }
        result
    }
}
