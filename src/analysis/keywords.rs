//! Keyword extraction from the frequency table.

use super::frequency::FrequencyTable;
use crate::core::models::SummaryLength;

/// Number of keywords reported for a summary length.
#[must_use]
pub const fn keyword_count(length: SummaryLength) -> usize {
    match length {
        SummaryLength::Short => 5,
        SummaryLength::Medium => 6,
        SummaryLength::Long => 8,
    }
}

/// Highest-scoring words, best first. Equal scores keep first-seen order.
#[must_use]
pub fn top_keywords(table: &FrequencyTable, length: SummaryLength) -> Vec<String> {
    let mut ranked: Vec<(&str, f64)> = table.iter().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
        .into_iter()
        .take(keyword_count(length))
        .map(|(word, _)| word.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::frequency::build_frequency_table;

    #[test]
    fn ranks_by_score_then_first_seen() {
        let table = build_frequency_table(&[
            "apple banana cherry banana",
            "durian cherry elder fig grape",
        ]);
        assert_eq!(
            top_keywords(&table, SummaryLength::Short),
            vec!["banana", "cherry", "apple", "durian", "elder"]
        );
    }

    #[test]
    fn capped_by_table_size() {
        let table = build_frequency_table(&["solitary keyword"]);
        assert_eq!(
            top_keywords(&table, SummaryLength::Long),
            vec!["solitary", "keyword"]
        );
        assert!(top_keywords(&FrequencyTable::default(), SummaryLength::Medium).is_empty());
    }
}
