use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::checker::{Checker, CommandChecker};
use crate::classifier::{Classifier, build_classifier};
use crate::cli::{Cli, ColorChoice};
use crate::config::{Config, ConfigLoader, FileConfigLoader, validate_config_semantics};
use crate::error::{LintSweepError, Result};
use crate::output::ColorMode;
use crate::scanner::{DirectoryScanner, ExtensionFilter, FileScanner};

pub(crate) const DIRECTORY_PROMPT: &str = "Enter the directory to check: ";

#[must_use]
pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Loads the configuration file (unless `--no-config`) and applies CLI overrides.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, or if the merged
/// configuration is invalid.
pub(crate) fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = if cli.no_config {
        Config::default()
    } else {
        let loader = FileConfigLoader::new();
        match &cli.config {
            Some(path) => loader.load_from_path(path)?,
            None => loader.load()?,
        }
    };

    apply_cli_overrides(&mut config, cli);
    validate_config_semantics(&config)?;
    Ok(config)
}

pub(crate) fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(ext) = &cli.ext {
        config.scanner.extension.clone_from(ext);
    }
    if let Some(command) = &cli.checker {
        config.checker.command.clone_from(command);
    }
    if let Some(report) = &cli.report {
        config.report.path.clone_from(report);
    }
    if let Some(jobs) = cli.jobs {
        config.checker.jobs = jobs;
    }
    if let Some(timeout) = cli.timeout {
        config.checker.timeout_secs = timeout;
    }
    if let Some(mode) = cli.match_mode {
        config.classifier.match_mode = mode;
    }
    config.scanner.exclude.extend(cli.exclude.iter().cloned());
    config.scanner.gitignore |= cli.gitignore;
}

/// Returns `directory`, or asks for one on `prompt` and reads a line from `input`.
///
/// Only the line terminator is stripped from the answer, so paths with
/// leading or trailing spaces survive.
///
/// # Errors
/// Returns a `Config` error if the answer is empty or stdin cannot be read.
pub(crate) fn resolve_directory<R: BufRead, W: Write>(
    directory: Option<&Path>,
    input: &mut R,
    prompt: &mut W,
) -> Result<PathBuf> {
    if let Some(dir) = directory {
        return Ok(dir.to_path_buf());
    }

    write!(prompt, "{DIRECTORY_PROMPT}")?;
    prompt.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let answer = line.trim_end_matches(['\r', '\n']);
    if answer.is_empty() {
        return Err(LintSweepError::Config("no directory given".to_string()));
    }
    Ok(PathBuf::from(answer))
}

/// Everything a scan needs, built once from the effective configuration.
pub(crate) struct ScanContext {
    pub scanner: Box<dyn FileScanner>,
    pub checker: Box<dyn Checker>,
    pub classifier: Box<dyn Classifier>,
    /// Worker count; 0 lets rayon pick one per CPU.
    pub jobs: usize,
}

impl ScanContext {
    /// # Errors
    /// Returns an error if an exclude pattern, the checker command or a
    /// marker is invalid.
    pub(crate) fn from_config(config: &Config) -> Result<Self> {
        let filter = ExtensionFilter::new(&config.scanner.extension, &config.scanner.exclude)?;
        let scanner = DirectoryScanner::with_gitignore(filter, config.scanner.gitignore);

        let timeout = (config.checker.timeout_secs > 0)
            .then(|| Duration::from_secs(config.checker.timeout_secs));
        let checker =
            CommandChecker::from_command_line(&config.checker.command)?.with_timeout(timeout);

        Ok(Self {
            scanner: Box::new(scanner),
            checker: Box::new(checker),
            classifier: build_classifier(&config.classifier)?,
            jobs: config.checker.jobs,
        })
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
