//! Image OCR through the `tesseract` command-line tool.

use std::io::Write;
use std::process::Command;
use tracing::{debug, warn};

use crate::core::config::AppConfig;
use crate::errors::DocsumError;

/// Returns whether the configured tesseract binary can be executed.
#[must_use]
pub fn is_ocr_available(config: &AppConfig) -> bool {
    let available = Command::new(&config.tesseract_cmd)
        .arg("--version")
        .output()
        .is_ok_and(|output| output.status.success());

    if !available {
        debug!(cmd = %config.tesseract_cmd, "tesseract not found - install tesseract-ocr for OCR support");
    }
    available
}

/// Runs OCR over an image held in memory.
///
/// The bytes are written to a temporary file carrying `extension` so that
/// tesseract can pick the right image decoder.
pub fn extract_image_text(
    bytes: &[u8],
    extension: &str,
    config: &AppConfig,
) -> Result<String, DocsumError> {
    if !is_ocr_available(config) {
        return Err(DocsumError::OcrUnavailable);
    }

    let mut image = tempfile::Builder::new()
        .prefix("docsum-")
        .suffix(&format!(".{extension}"))
        .tempfile()?;
    image.write_all(bytes)?;
    image.flush()?;

    let output = Command::new(&config.tesseract_cmd)
        .arg(image.path())
        .arg("stdout")
        .arg("-l")
        .arg(&config.ocr_lang)
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        warn!(status = %output.status, stderr = %stderr.trim(), "tesseract failed");
        return Err(DocsumError::ExtractionError(format!(
            "tesseract exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    let text = String::from_utf8_lossy(&output.stdout).into_owned();
    debug!(chars = text.len(), "OCR complete");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing_tesseract() -> AppConfig {
        AppConfig {
            tesseract_cmd: "/nonexistent/docsum-test-tesseract".to_string(),
            ..AppConfig::default()
        }
    }

    #[test]
    fn missing_binary_is_reported_unavailable() {
        assert!(!is_ocr_available(&missing_tesseract()));
    }

    #[test]
    fn extraction_without_binary_fails_with_ocr_unavailable() {
        let err = extract_image_text(b"\x89PNG", "png", &missing_tesseract()).unwrap_err();
        assert!(matches!(err, DocsumError::OcrUnavailable));
        assert_eq!(err.status_code(), 500);
    }
}
