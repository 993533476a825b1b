//! Classification of free-form checker output into typed diagnostics.
//!
//! The checker's output format is not a stable contract, so classification is
//! marker based. Two strategies exist behind the [`Classifier`] trait:
//! [`KeywordClassifier`] counts markers anywhere in the text, while
//! [`LineClassifier`] only accepts markers that open a line.

mod keyword;
mod line;

pub use keyword::KeywordClassifier;
pub use line::LineClassifier;

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::{ClassifierConfig, MatchMode};
use crate::error::Result;

/// Kind of a recognized diagnostic.
///
/// Variant order is the order subtotals are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    ParseError,
    Deprecation,
    Warning,
}

impl DiagnosticKind {
    /// Key of the marker list for this kind in the `[classifier]` config section.
    #[must_use]
    pub const fn config_key(self) -> &'static str {
        match self {
            Self::ParseError => "parse_error",
            Self::Deprecation => "deprecation",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParseError => write!(f, "parse errors"),
            Self::Deprecation => write!(f, "deprecations"),
            Self::Warning => write!(f, "warnings"),
        }
    }
}

/// One marker instance found in checker output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticOccurrence {
    pub kind: DiagnosticKind,
    /// The output line the marker was found on, trimmed.
    pub message: String,
}

/// All occurrences found in one checker output, in text order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    occurrences: Vec<DiagnosticOccurrence>,
}

impl Classification {
    #[must_use]
    pub const fn new(occurrences: Vec<DiagnosticOccurrence>) -> Self {
        Self { occurrences }
    }

    /// A file is clean when no marker matched.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.occurrences.is_empty()
    }

    /// Total number of marker instances, every repetition included.
    #[must_use]
    pub fn count(&self) -> usize {
        self.occurrences.len()
    }

    #[must_use]
    pub fn occurrences(&self) -> &[DiagnosticOccurrence] {
        &self.occurrences
    }

    /// Occurrence counts per kind, in order of first appearance.
    #[must_use]
    pub fn counts_by_kind(&self) -> IndexMap<DiagnosticKind, usize> {
        let mut counts = IndexMap::new();
        for occurrence in &self.occurrences {
            *counts.entry(occurrence.kind).or_insert(0) += 1;
        }
        counts
    }
}

/// Turns raw checker output into a [`Classification`].
///
/// Implementations must never fail: unrecognized output is simply clean.
pub trait Classifier: Send + Sync {
    fn classify(&self, text: &str) -> Classification;
}

/// Builds the classifier selected by `config.match_mode`.
///
/// # Errors
/// Returns an error if a marker cannot be compiled into a line pattern.
pub fn build_classifier(config: &ClassifierConfig) -> Result<Box<dyn Classifier>> {
    let markers = config.markers();
    Ok(match config.match_mode {
        MatchMode::Substring => Box::new(KeywordClassifier::new(markers)),
        MatchMode::Line => Box::new(LineClassifier::new(markers)?),
    })
}

/// Returns the trimmed line of `text` containing byte offset `index`.
fn line_at(text: &str, index: usize) -> &str {
    let start = text[..index].rfind('\n').map_or(0, |i| i + 1);
    let end = text[index..].find('\n').map_or(text.len(), |i| index + i);
    text[start..end].trim()
}

/// Orders `(offset, kind, line)` hits by position and converts them to occurrences.
fn collect_occurrences(mut hits: Vec<(usize, DiagnosticKind, &str)>) -> Classification {
    hits.sort_by_key(|(offset, _, _)| *offset);
    Classification::new(
        hits.into_iter()
            .map(|(_, kind, line)| DiagnosticOccurrence {
                kind,
                message: line.to_string(),
            })
            .collect(),
    )
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
