use serde::{Deserialize, Serialize};
use std::fmt;

/// Requested summary size. Unrecognized values fall back to `Medium`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl SummaryLength {
    /// Case-insensitive parse; anything other than `short`/`medium`/`long`
    /// becomes `Medium`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "short" => Self::Short,
            "long" => Self::Long,
            _ => Self::Medium,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }
}

impl From<&str> for SummaryLength {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for SummaryLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SummaryLength {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Self::parse).unwrap_or_default())
    }
}

/// Extractive summary plus its top keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub summary: String,
    pub keywords: Vec<String>,
}

/// Upload payload accepted by `POST /api/summarize`.
#[derive(Debug, Deserialize, Serialize)]
pub struct UploadRequest {
    #[serde(default)]
    pub filename: String,
    /// Base64-encoded file bytes.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub length: SummaryLength,
}

/// Successful analysis response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub ok: bool,
    pub extracted_chars: usize,
    pub summary: String,
    pub key_points: Vec<String>,
    pub suggestions: Vec<String>,
    pub ocr_available: bool,
}
