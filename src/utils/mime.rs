//! File-type detection for uploads.

use std::path::Path;

/// Extensions accepted by the upload endpoint.
pub const SUPPORTED_EXTENSIONS: [&str; 7] = ["pdf", "png", "jpg", "jpeg", "webp", "tif", "tiff"];

/// How text is pulled out of an uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Text-based PDF, read directly.
    Pdf,
    /// Raster image, read through OCR.
    Image,
}

/// Lowercased extension of `filename`, without the dot.
#[must_use]
pub fn extension_of(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

/// Classifies `filename` by extension; `None` for unsupported files.
#[must_use]
pub fn detect_kind(filename: &str) -> Option<DocumentKind> {
    let ext = extension_of(filename)?;
    if !SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
        return None;
    }

    let mime = mime_guess::from_ext(&ext).first()?;
    if mime.essence_str() == "application/pdf" {
        Some(DocumentKind::Pdf)
    } else if mime.type_().as_str() == "image" {
        Some(DocumentKind::Image)
    } else {
        None
    }
}
