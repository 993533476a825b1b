//! Configuration semantic validation.
//!
//! Runs after parsing and after CLI overrides are applied, so both sources are
//! held to the same rules.

use crate::config::Config;
use crate::{LintSweepError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if the extension or checker command is empty, the command
/// cannot be split into arguments, or no diagnostic marker is configured.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_scanner_section(config)?;
    validate_checker_section(config)?;
    validate_classifier_section(config)?;
    Ok(())
}

fn validate_scanner_section(config: &Config) -> Result<()> {
    if config.scanner.extension.trim_start_matches('.').is_empty() {
        return Err(LintSweepError::Config(
            "scanner.extension must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_checker_section(config: &Config) -> Result<()> {
    let args = shell_words::split(&config.checker.command).map_err(|e| {
        LintSweepError::Config(format!(
            "checker.command '{}' cannot be parsed: {e}",
            config.checker.command
        ))
    })?;
    if args.is_empty() {
        return Err(LintSweepError::Config(
            "checker.command must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_classifier_section(config: &Config) -> Result<()> {
    let markers = config.classifier.markers();
    if markers.is_empty() {
        return Err(LintSweepError::Config(
            "classifier needs at least one marker".to_string(),
        ));
    }
    if let Some((kind, _)) = markers.iter().find(|(_, m)| m.is_empty()) {
        return Err(LintSweepError::Config(format!(
            "classifier.{} contains an empty marker",
            kind.config_key()
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
