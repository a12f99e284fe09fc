use std::error::Error;
use docsum::errors::DocsumError;

#[test]
fn test_docsum_error_implements_error_trait() {
    // Verify DocsumError implements the Error trait
    fn assert_error<T: Error>(_: &T) {}

    let error = DocsumError::ParseError("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_docsum_error_display() {
    let error = DocsumError::ParseError("Missing body".to_string());
    assert_eq!(format!("{error}"), "Failed to parse request: Missing body");

    let error = DocsumError::MissingFile("No file selected".to_string());
    assert_eq!(format!("{error}"), "No file selected");

    assert_eq!(
        format!("{}", DocsumError::UnsupportedFileType),
        "Unsupported file type"
    );

    assert!(
        DocsumError::NoExtractableText
            .to_string()
            .starts_with("No extractable text found.")
    );
}

#[test]
fn test_docsum_error_status_codes() {
    assert_eq!(DocsumError::ParseError(String::new()).status_code(), 400);
    assert_eq!(DocsumError::MissingFile(String::new()).status_code(), 400);
    assert_eq!(DocsumError::UnsupportedFileType.status_code(), 400);
    assert_eq!(DocsumError::PayloadTooLarge { limit: 1 }.status_code(), 413);
    assert_eq!(DocsumError::NoExtractableText.status_code(), 422);
    assert_eq!(DocsumError::ExtractionError(String::new()).status_code(), 500);
    assert_eq!(DocsumError::OcrUnavailable.status_code(), 500);
    assert_eq!(DocsumError::IoError(String::new()).status_code(), 500);
}

#[test]
fn test_docsum_error_from_conversions() {
    // Test conversion from anyhow::Error
    let err = anyhow::anyhow!("test error");
    let docsum_err: DocsumError = err.into();

    match docsum_err {
        DocsumError::ExtractionError(msg) => assert!(msg.contains("test error")),
        _ => panic!("Unexpected error type"),
    }

    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    assert!(matches!(DocsumError::from(io), DocsumError::IoError(msg) if msg.contains("gone")));

    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert!(matches!(DocsumError::from(json_err), DocsumError::ParseError(_)));
}
