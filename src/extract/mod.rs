//! Turning uploaded files into plain text.

pub mod ocr;
pub mod pdf;

pub use ocr::{extract_image_text, is_ocr_available};
pub use pdf::extract_pdf_text;

use crate::core::config::AppConfig;
use crate::errors::DocsumError;
use crate::utils::mime::{DocumentKind, extension_of};

/// Extracts plain text from `bytes` according to `kind`.
///
/// Blocking: PDF parsing is CPU-bound and OCR spawns a subprocess.
pub fn extract_text(
    kind: DocumentKind,
    bytes: &[u8],
    filename: &str,
    config: &AppConfig,
) -> Result<String, DocsumError> {
    match kind {
        DocumentKind::Pdf => Ok(extract_pdf_text(bytes)?),
        DocumentKind::Image => {
            let extension = extension_of(filename).unwrap_or_else(|| "png".to_string());
            extract_image_text(bytes, &extension, config)
        }
    }
}
