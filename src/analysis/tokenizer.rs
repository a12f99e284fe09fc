//! Sentence and word segmentation.
//!
//! Sentence splitting is a heuristic: a boundary sits right after `.`, `!`
//! or `?` when the following whitespace is followed by an ASCII uppercase
//! letter or a digit. Abbreviations followed by a lowercase word stay in one
//! sentence; a decimal number followed by a capitalized word is split.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static regex compile"));

// After whitespace normalization every gap is exactly one space.
static BOUNDARY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?] [A-Z0-9]").expect("static regex compile"));

static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9']+").expect("static regex compile"));

/// Collapses every run of whitespace to a single space and trims the ends.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").trim().to_string()
}

/// Splits a document into trimmed sentences in document order.
///
/// When the punctuation rule finds no boundary at all, the original line
/// breaks are used instead. Empty or whitespace-only input yields no
/// sentences.
#[must_use]
pub fn segment_sentences(text: &str) -> Vec<String> {
    let normalized = normalize_whitespace(text);
    if normalized.is_empty() {
        return Vec::new();
    }

    let sentences = split_on_terminators(&normalized);
    if sentences.len() == 1 {
        return split_on_lines(text);
    }

    sentences
}

/// Extracts lowercase word tokens (ASCII letters, digits, apostrophes).
#[must_use]
pub fn segment_words(sentence: &str) -> Vec<String> {
    let lowered = sentence.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

fn split_on_terminators(normalized: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in BOUNDARY_RE.find_iter(normalized) {
        // The punctuation and the space are single ASCII bytes.
        let end = m.start() + 1;
        push_trimmed(&mut sentences, &normalized[start..end]);
        start = end + 1;
    }
    push_trimmed(&mut sentences, &normalized[start..]);

    sentences
}

fn split_on_lines(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    for line in text.lines() {
        push_trimmed(&mut sentences, &normalize_whitespace(line));
    }
    sentences
}

fn push_trimmed(out: &mut Vec<String>, candidate: &str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
}
