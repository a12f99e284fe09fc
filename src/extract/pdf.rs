use anyhow::{Context, Result, anyhow};
use std::panic::{self, AssertUnwindSafe};

/// Extracts the text layer of a PDF held in memory.
///
/// Scanned PDFs without a text layer come back as an empty (or
/// whitespace-only) string; OCR is not attempted for PDFs.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String> {
    // pdf-extract panics on some malformed documents.
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem(bytes)
    }))
    .map_err(|_| anyhow!("PDF parser aborted on a malformed document"))?;

    let text = outcome.context("Failed to read PDF")?;
    tracing::debug!(chars = text.len(), "Extracted PDF text layer");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_an_error() {
        assert!(extract_pdf_text(b"definitely not a pdf").is_err());
    }
}
