use tracing::info;

use super::parsing;
use crate::analysis::{advise, summarize};
use crate::core::config::AppConfig;
use crate::core::models::{AnalysisReport, SummaryLength, UploadRequest};
use crate::errors::DocsumError;
use crate::extract;
use crate::utils::mime::detect_kind;

/// Runs the whole upload flow: decode, extract, summarize and advise.
pub async fn analyze_upload(
    config: &AppConfig,
    request: &UploadRequest,
) -> Result<AnalysisReport, DocsumError> {
    let (filename, bytes) = parsing::decode_upload(request, config.max_content_length)?;
    let kind = detect_kind(&filename).ok_or(DocsumError::UnsupportedFileType)?;

    info!(
        filename = %filename,
        kind = ?kind,
        bytes = bytes.len(),
        length = %request.length,
        "Extracting upload"
    );

    let config = config.clone();
    let (text, ocr_available) = tokio::task::spawn_blocking(move || {
        let text = extract::extract_text(kind, &bytes, &filename, &config);
        (text, extract::is_ocr_available(&config))
    })
    .await
    .map_err(|e| DocsumError::ExtractionError(format!("Extraction task failed: {e}")))?;

    analyze_text(&text?, request.length, ocr_available)
}

/// Summarizes and reviews already-extracted text.
///
/// Blank text is rejected as [`DocsumError::NoExtractableText`]; the
/// analysis itself never fails.
pub fn analyze_text(
    text: &str,
    length: SummaryLength,
    ocr_available: bool,
) -> Result<AnalysisReport, DocsumError> {
    if text.trim().is_empty() {
        return Err(DocsumError::NoExtractableText);
    }

    let result = summarize(text, length);
    let suggestions = advise(text);

    Ok(AnalysisReport {
        ok: true,
        extracted_chars: text.chars().count(),
        summary: result.summary,
        key_points: result.keywords,
        suggestions,
        ocr_available,
    })
}
