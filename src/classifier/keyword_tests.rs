use super::*;
use crate::config::ClassifierConfig;

fn default_classifier() -> KeywordClassifier {
    KeywordClassifier::new(ClassifierConfig::default().markers())
}

#[test]
fn clean_output_has_no_occurrences() {
    let classification = default_classifier().classify("No syntax errors detected in a.php\n");

    assert!(classification.is_clean());
}

#[test]
fn empty_output_is_clean() {
    assert!(default_classifier().classify("").is_clean());
}

#[test]
fn counts_every_repetition_of_a_marker() {
    let text = "Warning: one\nWarning: two\nsomething Warning: three\n";

    let classification = default_classifier().classify(text);

    assert_eq!(classification.count(), 3);
    assert!(
        classification
            .occurrences()
            .iter()
            .all(|o| o.kind == DiagnosticKind::Warning)
    );
}

#[test]
fn sums_instances_across_kinds() {
    let text = "PHP Deprecated:  old call in a.php on line 2\n\
                PHP Parse error:  syntax error in a.php on line 9\n\
                Parse error: syntax error in a.php on line 9\n\
                Errors parsing a.php\n";

    let classification = default_classifier().classify(text);
    let counts = classification.counts_by_kind();

    assert_eq!(classification.count(), 3);
    assert_eq!(counts[&DiagnosticKind::Deprecation], 1);
    assert_eq!(counts[&DiagnosticKind::ParseError], 2);
    assert!(!counts.contains_key(&DiagnosticKind::Warning));
}

#[test]
fn occurrences_are_in_text_order_with_their_lines() {
    let text = "Warning: first\nDeprecated: second\n";

    let classification = default_classifier().classify(text);
    let messages: Vec<_> = classification
        .occurrences()
        .iter()
        .map(|o| o.message.as_str())
        .collect();

    assert_eq!(messages, vec!["Warning: first", "Deprecated: second"]);
}

#[test]
fn matching_is_case_sensitive() {
    let classification = default_classifier().classify("warning: lower case\nPARSE ERROR: caps");

    assert!(classification.is_clean());
}

#[test]
fn two_markers_on_one_line_count_twice() {
    let classification = default_classifier().classify("Warning: Deprecated: both here");

    assert_eq!(classification.count(), 2);
    assert_eq!(classification.occurrences()[0].message, "Warning: Deprecated: both here");
}

#[test]
fn custom_markers_are_recognized() {
    let classifier = KeywordClassifier::new(vec![(DiagnosticKind::Warning, "Notice:".to_string())]);

    let classification = classifier.classify("Notice: a\nWarning: ignored\nNotice: b");

    assert_eq!(classification.count(), 2);
}
