//! Text-analysis pipeline: segmentation, frequency scoring, extractive
//! selection, keyword extraction and writing heuristics.
//!
//! Everything here is a pure function of its input text.

pub mod advisor;
pub mod frequency;
pub mod keywords;
pub mod scorer;
pub mod stopwords;
pub mod tokenizer;

// Re-export main types for convenience
pub use advisor::advise;
pub use frequency::{FrequencyTable, build_frequency_table};
pub use keywords::top_keywords;
pub use scorer::{ScoredSentence, pick_count, score, select};
pub use tokenizer::{segment_sentences, segment_words};

use crate::core::models::{SummaryLength, SummaryResult};

/// Builds an extractive summary and keyword list for `text`.
///
/// Selected sentences keep their document order and are joined with single
/// spaces. Empty or whitespace-only text yields an empty summary and no
/// keywords.
#[must_use]
pub fn summarize(text: &str, length: SummaryLength) -> SummaryResult {
    let sentences = segment_sentences(text);
    if sentences.is_empty() {
        return SummaryResult::default();
    }

    let table = build_frequency_table(&sentences);
    let scored = score(&sentences, &table);
    let chosen = select(&scored, sentences.len(), length);

    let summary = chosen
        .iter()
        .map(|&i| sentences[i].as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let keywords = top_keywords(&table, length);

    tracing::debug!(
        sentences = sentences.len(),
        selected = chosen.len(),
        keywords = keywords.len(),
        length = %length,
        "Summary built"
    );

    SummaryResult { summary, keywords }
}
