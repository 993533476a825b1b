use super::*;

#[test]
fn default_config_is_valid() {
    assert!(validate_config_semantics(&Config::default()).is_ok());
}

#[test]
fn empty_extension_is_rejected() {
    let mut config = Config::default();
    config.scanner.extension = ".".to_string();

    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("scanner.extension"));
}

#[test]
fn blank_checker_command_is_rejected() {
    let mut config = Config::default();
    config.checker.command = "   ".to_string();

    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("must not be empty"));
}

#[test]
fn unbalanced_quotes_in_command_are_rejected() {
    let mut config = Config::default();
    config.checker.command = "\"/opt/php/bin/php -l".to_string();

    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("cannot be parsed"));
}

#[test]
fn classifier_without_markers_is_rejected() {
    let mut config = Config::default();
    config.classifier.parse_error.clear();
    config.classifier.deprecation.clear();
    config.classifier.warning.clear();

    assert!(validate_config_semantics(&config).is_err());
}

#[test]
fn single_kind_with_markers_is_enough() {
    let mut config = Config::default();
    config.classifier.deprecation.clear();
    config.classifier.warning.clear();

    assert!(validate_config_semantics(&config).is_ok());
}

#[test]
fn empty_marker_is_rejected_with_kind_name() {
    let mut config = Config::default();
    config.classifier.warning.push(String::new());

    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("classifier.warning"));
}
