use super::{Classification, Classifier, DiagnosticKind, collect_occurrences, line_at};

/// Counts every non-overlapping instance of each marker anywhere in the output.
///
/// Markers are matched independently: if one marker contains another, text
/// matching the longer one counts for both.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    markers: Vec<(DiagnosticKind, String)>,
}

impl KeywordClassifier {
    #[must_use]
    pub const fn new(markers: Vec<(DiagnosticKind, String)>) -> Self {
        Self { markers }
    }
}

impl Classifier for KeywordClassifier {
    fn classify(&self, text: &str) -> Classification {
        let hits = self
            .markers
            .iter()
            .filter(|(_, marker)| !marker.is_empty())
            .flat_map(|(kind, marker)| {
                text.match_indices(marker.as_str())
                    .map(move |(offset, _)| (offset, *kind, line_at(text, offset)))
            })
            .collect();
        collect_occurrences(hits)
    }
}

#[cfg(test)]
#[path = "keyword_tests.rs"]
mod tests;
