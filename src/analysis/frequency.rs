//! Normalized term-importance table.

use std::collections::HashMap;

use super::stopwords::is_qualifying;
use super::tokenizer::segment_words;

/// Maps qualifying words to a score in `(0, 1]`, where `1.0` belongs to the
/// most frequent word. Iteration follows first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    entries: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Score for `word`, or `0.0` when it does not qualify.
    #[must_use]
    pub fn get(&self, word: &str) -> f64 {
        self.index
            .get(word)
            .map_or(0.0, |&position| self.entries[position].1)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(word, score)| (word.as_str(), *score))
    }

    fn increment(&mut self, word: &str) {
        if let Some(&position) = self.index.get(word) {
            self.entries[position].1 += 1.0;
        } else {
            self.index.insert(word.to_string(), self.entries.len());
            self.entries.push((word.to_string(), 1.0));
        }
    }

    fn normalize(&mut self) {
        let max = self
            .entries
            .iter()
            .map(|(_, count)| *count)
            .fold(0.0_f64, f64::max);
        if max > 0.0 {
            for (_, score) in &mut self.entries {
                *score /= max;
            }
        }
    }
}

/// Counts qualifying words across all sentences and scales the counts by the
/// largest one. Returns an empty table when nothing qualifies.
#[must_use]
pub fn build_frequency_table<S: AsRef<str>>(sentences: &[S]) -> FrequencyTable {
    let mut table = FrequencyTable::default();
    for sentence in sentences {
        for word in segment_words(sentence.as_ref()) {
            if is_qualifying(&word) {
                table.increment(&word);
            }
        }
    }
    table.normalize();
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_frequent_word_scores_one() {
        let table = build_frequency_table(&[
            "Rust compilers check borrowing.",
            "Rust programs run fast.",
        ]);
        assert!((table.get("rust") - 1.0).abs() < f64::EPSILON);
        assert!((table.get("compilers") - 0.5).abs() < f64::EPSILON);
        assert_eq!(table.get("the"), 0.0);
    }

    #[test]
    fn keeps_first_seen_order() {
        let table = build_frequency_table(&["zeta alpha zeta", "beta"]);
        let words: Vec<&str> = table.iter().map(|(w, _)| w).collect();
        assert_eq!(words, vec!["zeta", "alpha", "beta"]);
    }

    #[test]
    fn stopwords_only_yield_empty_table() {
        let table = build_frequency_table(&["It is as it is.", "We are in on it."]);
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }
}
