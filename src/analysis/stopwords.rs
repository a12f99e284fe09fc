//! Fixed English stopword table used by the frequency model.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Common English function words excluded from frequency scoring.
pub const STOPWORDS: [&str; 119] = [
    "a", "an", "and", "the", "is", "are", "was", "were", "be", "been", "being", "do", "does",
    "did", "doing", "of", "for", "to", "in", "on", "with", "without", "at", "by", "from", "up",
    "down", "into", "over", "under", "again", "further", "then", "once", "here", "there", "when",
    "where", "why", "how", "all", "any", "both", "each", "few", "more", "most", "other", "some",
    "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very", "can",
    "will", "just", "don", "t", "should", "shouldn", "now", "you", "your", "yours", "yourself",
    "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself", "it", "its",
    "itself", "they", "them", "their", "theirs", "themselves", "we", "us", "our", "ours",
    "ourselves", "i", "me", "my", "mine", "myself", "this", "that", "these", "those", "as", "if",
    "because", "while", "during", "before", "after", "above", "below", "off", "out", "between",
    "through", "until", "against", "about",
];

/// Words shorter than this (in bytes) never qualify for scoring.
pub const MIN_QUALIFYING_LEN: usize = 3;

static STOPWORD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| STOPWORDS.into_iter().collect());

/// Returns whether `word` (already lowercased) is a stopword.
#[must_use]
pub fn is_stopword(word: &str) -> bool {
    STOPWORD_SET.contains(word)
}

/// A word qualifies for frequency scoring when it is not a stopword and is
/// longer than two characters.
#[must_use]
pub fn is_qualifying(word: &str) -> bool {
    word.len() >= MIN_QUALIFYING_LEN && !is_stopword(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_and_stop_words_do_not_qualify() {
        assert!(!is_qualifying("the"));
        assert!(!is_qualifying("about"));
        assert!(!is_qualifying("ai"));
        assert!(is_qualifying("rust"));
        assert!(is_qualifying("don't"));
    }
}
