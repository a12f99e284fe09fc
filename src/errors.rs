use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocsumError {
    #[error("Failed to parse request: {0}")]
    ParseError(String),

    #[error("{0}")]
    MissingFile(String),

    #[error("Unsupported file type")]
    UnsupportedFileType,

    #[error("Upload exceeds maximum size of {limit} bytes")]
    PayloadTooLarge { limit: usize },

    #[error(
        "No extractable text found. If this is a scanned PDF, OCR for PDFs is not enabled in this minimal build."
    )]
    NoExtractableText,

    #[error("Failed to extract text: {0}")]
    ExtractionError(String),

    #[error(
        "OCR not available. Install Tesseract and make sure it is on PATH (or set TESSERACT_CMD) to enable image text extraction."
    )]
    OcrUnavailable,

    #[error("I/O error: {0}")]
    IoError(String),
}

impl DocsumError {
    /// HTTP status code reported to the caller for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::ParseError(_) | Self::MissingFile(_) | Self::UnsupportedFileType => 400,
            Self::PayloadTooLarge { .. } => 413,
            Self::NoExtractableText => 422,
            Self::ExtractionError(_) | Self::OcrUnavailable | Self::IoError(_) => 500,
        }
    }
}

impl From<std::io::Error> for DocsumError {
    fn from(error: std::io::Error) -> Self {
        DocsumError::IoError(error.to_string())
    }
}

impl From<base64::DecodeError> for DocsumError {
    fn from(error: base64::DecodeError) -> Self {
        DocsumError::ParseError(format!("Invalid base64 content: {}", error))
    }
}

impl From<serde_json::Error> for DocsumError {
    fn from(error: serde_json::Error) -> Self {
        DocsumError::ParseError(format!("Invalid JSON body: {}", error))
    }
}

impl From<anyhow::Error> for DocsumError {
    fn from(error: anyhow::Error) -> Self {
        DocsumError::ExtractionError(format!("{:#}", error))
    }
}
