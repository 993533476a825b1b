use std::path::Path;

use walkdir::WalkDir;

use super::{DiscoveredEntry, FileFilter, FileScanner, ScanResult, SkippedEntry};
use crate::error::{LintSweepError, Result};

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    use_gitignore: bool,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self {
            filter,
            use_gitignore: false,
        }
    }

    #[must_use]
    pub const fn with_gitignore(filter: F, use_gitignore: bool) -> Self {
        Self {
            filter,
            use_gitignore,
        }
    }

    /// Starts a lazy walk of `root`.
    ///
    /// Nothing is read beyond `root` itself until the iterator is polled.
    /// Calling this again starts a fresh walk.
    ///
    /// # Errors
    /// Returns `DirectoryNotFound` or `NotADirectory` before any traversal.
    pub fn discover<'a>(
        &'a self,
        root: &'a Path,
    ) -> Result<Box<dyn Iterator<Item = DiscoveredEntry> + 'a>> {
        ensure_directory(root)?;
        if self.use_gitignore {
            Ok(Box::new(self.walk_with_gitignore(root)))
        } else {
            Ok(Box::new(self.walk_without_gitignore(root)))
        }
    }

    fn accepts(&self, root: &Path, path: &Path) -> bool {
        let relative = path.strip_prefix(root).unwrap_or(path);
        self.filter.should_include(relative)
    }

    fn walk_without_gitignore<'a>(
        &'a self,
        root: &'a Path,
    ) -> impl Iterator<Item = DiscoveredEntry> + 'a {
        WalkDir::new(root)
            .into_iter()
            .filter_map(move |entry| match entry {
                Ok(entry) => {
                    // Symlinked files count like regular files; symlinked dirs are not followed.
                    let is_file = entry.file_type().is_file()
                        || (entry.path_is_symlink() && entry.path().is_file());
                    (is_file && self.accepts(root, entry.path()))
                        .then(|| DiscoveredEntry::File(entry.into_path()))
                }
                Err(err) => Some(DiscoveredEntry::Skipped(SkippedEntry::from(err))),
            })
    }

    fn walk_with_gitignore<'a>(
        &'a self,
        root: &'a Path,
    ) -> impl Iterator<Item = DiscoveredEntry> + 'a {
        use ignore::WalkBuilder;

        WalkBuilder::new(root)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .require_git(false)
            .hidden(false)
            .parents(false)
            .build()
            .filter_map(move |entry| match entry {
                Ok(entry) => {
                    let is_file = entry.file_type().is_some_and(|ft| ft.is_file())
                        || (entry.path_is_symlink() && entry.path().is_file());
                    (is_file && self.accepts(root, entry.path()))
                        .then(|| DiscoveredEntry::File(entry.into_path()))
                }
                Err(err) => Some(DiscoveredEntry::Skipped(SkippedEntry::from(err))),
            })
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<ScanResult> {
        Ok(self.discover(root)?.collect())
    }
}

fn ensure_directory(root: &Path) -> Result<()> {
    if !root.exists() {
        return Err(LintSweepError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }
    if !root.is_dir() {
        return Err(LintSweepError::NotADirectory {
            path: root.to_path_buf(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
