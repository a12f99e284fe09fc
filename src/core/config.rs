use std::env;

/// Largest upload accepted by the API (25 MiB).
pub const DEFAULT_MAX_CONTENT_LENGTH: usize = 25 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Maximum decoded upload size in bytes.
    pub max_content_length: usize,
    /// Command used to run OCR on images.
    pub tesseract_cmd: String,
    /// Tesseract language code.
    pub ocr_lang: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_content_length: DEFAULT_MAX_CONTENT_LENGTH,
            tesseract_cmd: "tesseract".to_string(),
            ocr_lang: "eng".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();
        let max_content_length = match env::var("MAX_CONTENT_LENGTH") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|e| format!("MAX_CONTENT_LENGTH: {}", e))?,
            Err(_) => defaults.max_content_length,
        };

        Ok(Self {
            max_content_length,
            tesseract_cmd: env::var("TESSERACT_CMD")
                .ok()
                .filter(|cmd| !cmd.trim().is_empty())
                .unwrap_or(defaults.tesseract_cmd),
            ocr_lang: env::var("OCR_LANG")
                .ok()
                .filter(|lang| !lang.trim().is_empty())
                .unwrap_or(defaults.ocr_lang),
        })
    }
}
