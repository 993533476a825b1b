mod directory;
mod filter;
mod types;

pub use directory::DirectoryScanner;
pub use filter::{ExtensionFilter, FileFilter};
pub use types::{DiscoveredEntry, ScanResult, SkippedEntry};

use std::path::Path;

use crate::error::Result;

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths plus unreadable entries.
    ///
    /// # Errors
    /// Returns an error if `root` is missing or not a directory.
    fn scan(&self, root: &Path) -> Result<ScanResult>;
}
