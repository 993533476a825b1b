use super::*;

#[test]
fn output_format_from_str() {
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert!("sarif".parse::<OutputFormat>().is_err());
}

#[test]
fn output_format_default_is_text() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}

#[test]
fn formatter_matches_format() {
    let report = crate::aggregate::ScanReport::default();

    let text = OutputFormat::Text
        .formatter(ColorMode::Never, 0)
        .format(&report)
        .unwrap();
    let json = OutputFormat::Json
        .formatter(ColorMode::Never, 0)
        .format(&report)
        .unwrap();

    assert!(text.starts_with("Total files checked: 0"));
    assert!(json.trim_start().starts_with('{'));
}
