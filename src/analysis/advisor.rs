//! Rule-based writing-quality suggestions.
//!
//! Every check runs on every document; each contributes at most one message
//! and the messages keep the order of the checks below.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use super::tokenizer::segment_sentences;

pub const MIN_DOCUMENT_CHARS: usize = 500;
pub const MAX_DOCUMENT_CHARS: usize = 20_000;

/// Sentences with more whitespace-delimited words than this are "very long".
pub const LONG_SENTENCE_WORDS: usize = 35;

/// Distinct jargon terms needed before the jargon message fires.
pub const JARGON_THRESHOLD: usize = 2;

/// Passive constructions tolerated before the passive-voice message fires.
pub const PASSIVE_VOICE_LIMIT: usize = 5;

pub const JARGON_TERMS: [&str; 6] = [
    "synergy", "leverage", "paradigm", "robust", "granular", "scalable",
];

pub const SHORT_DOCUMENT_MSG: &str =
    "Document is quite short; add more context or supporting details.";
pub const LONG_DOCUMENT_MSG: &str =
    "Document is very long; consider adding headings and an executive summary.";
pub const MISSING_HEADINGS_MSG: &str =
    "Add clear section headings (e.g., Introduction, Method, Conclusion) to improve structure.";
pub const MISSING_BULLETS_MSG: &str =
    "Where appropriate, use bullet points to highlight key lists.";
pub const JARGON_MSG: &str = "Reduce corporate jargon to make writing clearer.";
pub const PASSIVE_VOICE_MSG: &str =
    "Heavy passive voice detected; convert some sentences to active voice.";
pub const LOOKS_GOOD_MSG: &str =
    "Looks good! Consider adding visuals or examples to enhance engagement.";

static HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(introduction|summary|conclusion|references|abstract)\b")
        .expect("static regex compile")
});

static BULLET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*[-*•‣◦▪●]\s+").expect("static regex compile"));

static JARGON_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b({})\b", JARGON_TERMS.join("|"))).expect("static regex compile")
});

static PASSIVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(was|were|is|are|be|been|being)\s+\w+ed\b").expect("static regex compile")
});

/// Message reporting `count` overly long sentences.
#[must_use]
pub fn long_sentences_msg(count: usize) -> String {
    format!("Contains {count} very long sentence(s); break them up for readability.")
}

/// Runs the full battery of writing checks over `text`.
///
/// The result is never empty: when no check fires, a single positive
/// message is returned.
#[must_use]
pub fn advise(text: &str) -> Vec<String> {
    let mut suggestions = Vec::new();
    let char_count = text.chars().count();

    if char_count < MIN_DOCUMENT_CHARS {
        suggestions.push(SHORT_DOCUMENT_MSG.to_string());
    }
    if char_count > MAX_DOCUMENT_CHARS {
        suggestions.push(LONG_DOCUMENT_MSG.to_string());
    }

    if !HEADING_RE.is_match(text) {
        suggestions.push(MISSING_HEADINGS_MSG.to_string());
    }

    let long_sentences = count_long_sentences(text);
    if long_sentences > 0 {
        suggestions.push(long_sentences_msg(long_sentences));
    }

    if !BULLET_RE.is_match(text) {
        suggestions.push(MISSING_BULLETS_MSG.to_string());
    }

    if distinct_jargon(text) >= JARGON_THRESHOLD {
        suggestions.push(JARGON_MSG.to_string());
    }

    if count_passive_constructions(text) > PASSIVE_VOICE_LIMIT {
        suggestions.push(PASSIVE_VOICE_MSG.to_string());
    }

    if suggestions.is_empty() {
        suggestions.push(LOOKS_GOOD_MSG.to_string());
    }

    tracing::debug!(
        chars = char_count,
        long_sentences,
        suggestions = suggestions.len(),
        "Writing checks complete"
    );

    suggestions
}

/// Sentences with more than [`LONG_SENTENCE_WORDS`] whitespace-delimited words.
#[must_use]
pub fn count_long_sentences(text: &str) -> usize {
    segment_sentences(text)
        .iter()
        .filter(|s| s.split_whitespace().count() > LONG_SENTENCE_WORDS)
        .count()
}

/// Number of different jargon terms present, ignoring case and repeats.
#[must_use]
pub fn distinct_jargon(text: &str) -> usize {
    JARGON_RE
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect::<HashSet<_>>()
        .len()
}

/// Rough count of "be-verb + ...ed" constructions.
#[must_use]
pub fn count_passive_constructions(text: &str) -> usize {
    PASSIVE_RE.find_iter(text).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_distinct_jargon_case_insensitively() {
        assert_eq!(distinct_jargon("Leverage the leverage. LEVERAGE!"), 1);
        assert_eq!(distinct_jargon("A robust, Scalable paradigm."), 3);
        assert_eq!(distinct_jargon("leveraged robustness"), 0);
    }

    #[test]
    fn counts_passive_constructions() {
        let text = "It was tested. They were Tired. This is red. Be seated. It is fine.";
        assert_eq!(count_passive_constructions(text), 4);
    }

    #[test]
    fn bullet_detection_accepts_glyphs_and_indentation() {
        assert!(BULLET_RE.is_match("Intro\n  - item"));
        assert!(BULLET_RE.is_match("• item"));
        assert!(BULLET_RE.is_match("text\n* item"));
        assert!(!BULLET_RE.is_match("a - b\n-nospace"));
    }

    #[test]
    fn long_sentence_threshold_is_strict() {
        let exactly = format!("{}.", vec!["word"; LONG_SENTENCE_WORDS].join(" "));
        let over = format!("{}.", vec!["word"; LONG_SENTENCE_WORDS + 1].join(" "));
        assert_eq!(count_long_sentences(&exactly), 0);
        assert_eq!(count_long_sentences(&over), 1);
    }
}
