//! docsum - Extractive summaries, keywords and writing suggestions for uploaded documents.
//!
//! This crate has two layers:
//! 1. A pure text-analysis core (`analysis`) that turns plain text into a
//!    summary, a keyword list and a list of writing suggestions
//! 2. An API Lambda (`api`) that accepts PDF or image uploads, extracts their
//!    text (`extract`) and runs the core over it
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - pdf-extract for PDF text layers
//! - the tesseract CLI for image OCR
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```
//! use docsum::{SummaryLength, advise, summarize};
//!
//! let text = "Rust is a systems language. Rust programs are fast. \
//!             Memory safety comes from ownership. Ownership rules are checked at compile time.";
//!
//! let result = summarize(text, SummaryLength::Short);
//! assert!(result.summary.contains("Rust programs are fast."));
//! assert_eq!(result.keywords.first().map(String::as_str), Some("rust"));
//!
//! let suggestions = advise(text);
//! assert!(!suggestions.is_empty());
//! ```

// Module declarations
pub mod analysis;
pub mod api;
pub mod core;
pub mod errors;
pub mod extract;
pub mod utils;

pub use analysis::{advise, summarize};
pub use crate::core::models::{SummaryLength, SummaryResult};
pub use errors::DocsumError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at startup; later
/// calls leave the existing subscriber in place. Building with the
/// `debug-logs` feature lowers the level from INFO to DEBUG.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// docsum::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::prelude::*;

    let level = if cfg!(feature = "debug-logs") {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_filter(level);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
