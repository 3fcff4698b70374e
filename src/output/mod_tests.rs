use super::*;

#[test]
fn parses_known_formats() {
    assert_eq!("text".parse::<ReportFormat>(), Ok(ReportFormat::Text));
    assert_eq!("JSON".parse::<ReportFormat>(), Ok(ReportFormat::Json));
    assert_eq!("html".parse::<ReportFormat>(), Ok(ReportFormat::Html));
    assert_eq!("htm".parse::<ReportFormat>(), Ok(ReportFormat::Html));
}

#[test]
fn rejects_unknown_format() {
    let result = "pdf".parse::<ReportFormat>();

    assert!(result.is_err());
    assert!(result.unwrap_err().contains("pdf"));
}

#[test]
fn default_format_is_text() {
    assert_eq!(ReportFormat::default(), ReportFormat::Text);
}
