//! Sentence scoring and summary selection.

use super::frequency::FrequencyTable;
use super::tokenizer::segment_words;
use crate::core::models::SummaryLength;

/// Exponent of the sublinear sentence-length penalty.
pub const LENGTH_PENALTY_EXPONENT: f64 = 0.7;

/// Bonus added to each of the first [`LEAD_SENTENCES`] sentences.
pub const LEAD_BONUS: f64 = 0.12;

pub const LEAD_SENTENCES: usize = 3;

/// A sentence's original position and its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredSentence {
    pub index: usize,
    pub score: f64,
}

/// Scores every sentence as the sum of its words' table values divided by
/// `word_count^0.7`, plus the lead bonus for opening sentences. A sentence
/// without words scores exactly zero.
#[must_use]
pub fn score<S: AsRef<str>>(sentences: &[S], table: &FrequencyTable) -> Vec<ScoredSentence> {
    sentences
        .iter()
        .enumerate()
        .map(|(index, sentence)| {
            let words = segment_words(sentence.as_ref());
            if words.is_empty() {
                return ScoredSentence { index, score: 0.0 };
            }

            let lexical: f64 = words.iter().map(|w| table.get(w)).sum();
            #[allow(clippy::cast_precision_loss)]
            let penalty = (words.len() as f64).powf(LENGTH_PENALTY_EXPONENT);
            let bonus = if index < LEAD_SENTENCES { LEAD_BONUS } else { 0.0 };

            ScoredSentence {
                index,
                score: lexical / penalty + bonus,
            }
        })
        .collect()
}

/// Number of sentences to keep for a document of `total` sentences.
#[must_use]
pub fn pick_count(total: usize, length: SummaryLength) -> usize {
    let (floor, divisor) = match length {
        SummaryLength::Short => (3, 12),
        SummaryLength::Medium => (5, 8),
        SummaryLength::Long => (8, 5),
    };
    let scaled = total / divisor;
    floor.max(if scaled == 0 { floor } else { scaled })
}

/// Picks the top-scoring sentences and returns their indices in document
/// order. Equal scores keep their original relative order.
#[must_use]
pub fn select(scored: &[ScoredSentence], total: usize, length: SummaryLength) -> Vec<usize> {
    let mut ranked = scored.to_vec();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut chosen: Vec<usize> = ranked
        .iter()
        .take(pick_count(total, length))
        .map(|s| s.index)
        .collect();
    chosen.sort_unstable();
    chosen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::frequency::build_frequency_table;

    #[test]
    fn pick_count_applies_floors_and_ratios() {
        assert_eq!(pick_count(10, SummaryLength::Short), 3);
        assert_eq!(pick_count(48, SummaryLength::Short), 4);
        assert_eq!(pick_count(1, SummaryLength::Medium), 5);
        assert_eq!(pick_count(80, SummaryLength::Medium), 10);
        assert_eq!(pick_count(100, SummaryLength::Long), 20);
        assert_eq!(pick_count(0, SummaryLength::Long), 8);
    }

    #[test]
    fn wordless_sentence_scores_zero_outside_the_lead() {
        let sentences = ["Alpha beta.", "Gamma.", "Delta.", "...", "Alpha again."];
        let table = build_frequency_table(&sentences);
        let scored = score(&sentences, &table);
        assert_eq!(scored[3].score, 0.0);
        assert!(scored[0].score > LEAD_BONUS);
    }

    #[test]
    fn lead_bonus_applies_to_first_three_only() {
        let sentences = ["Alpha.", "Alpha.", "Alpha.", "Alpha."];
        let table = build_frequency_table(&sentences);
        let scores: Vec<f64> = score(&sentences, &table).iter().map(|s| s.score).collect();
        let lead = 1.0 + LEAD_BONUS;
        assert_eq!(scores, vec![lead, lead, lead, 1.0]);
    }

    #[test]
    fn wordless_lead_sentences_get_no_bonus() {
        let scored = score(&["...", "!"], &FrequencyTable::default());
        assert!(scored.iter().all(|s| s.score == 0.0));
    }

    #[test]
    fn ties_keep_document_order_and_output_is_sorted() {
        let scored: Vec<ScoredSentence> = (0..12)
            .map(|index| ScoredSentence {
                index,
                score: if index == 9 { 2.0 } else { 1.0 },
            })
            .collect();
        assert_eq!(select(&scored, 12, SummaryLength::Short), vec![0, 1, 9]);
    }
}
