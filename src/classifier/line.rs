use regex::Regex;

use super::{Classification, Classifier, DiagnosticKind, collect_occurrences, line_at};
use crate::error::{LintSweepError, Result};

/// Accepts a marker only at the start of a line.
///
/// Leading whitespace and one prefix word are allowed before the marker, so
/// `PHP Parse error: ...` matches the `Parse error:` marker while
/// `echo "Parse error:";` quoted inside a source excerpt does not.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    patterns: Vec<(DiagnosticKind, Regex)>,
}

impl LineClassifier {
    /// Compiles one anchored pattern per marker.
    ///
    /// # Errors
    /// Returns `InvalidRegex` if a pattern cannot be compiled.
    pub fn new(markers: Vec<(DiagnosticKind, String)>) -> Result<Self> {
        let patterns = markers
            .into_iter()
            .filter(|(_, marker)| !marker.is_empty())
            .map(|(kind, marker)| {
                let pattern = format!(r"(?m)^[ \t]*(?:[^\s:]+[ \t]+)?{}", regex::escape(&marker));
                Regex::new(&pattern)
                    .map(|re| (kind, re))
                    .map_err(|source| LintSweepError::InvalidRegex { marker, source })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }
}

impl Classifier for LineClassifier {
    fn classify(&self, text: &str) -> Classification {
        let hits = self
            .patterns
            .iter()
            .flat_map(|(kind, re)| {
                re.find_iter(text)
                    .map(move |m| (m.start(), *kind, line_at(text, m.start())))
            })
            .collect();
        collect_occurrences(hits)
    }
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
