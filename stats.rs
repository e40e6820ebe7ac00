use std::time::Instant;

use log::debug;

use crate::tokenize::split_words;
use crate::wc::FrequencyMap;

const FIRST_UNIQUE_LIMIT: usize = 5; // how many once-only words to show

/// Summary statistics for one text.
#[derive(Debug, Clone)]
pub struct TextStats {
    pub name: String,
    pub words: Vec<String>,
    pub total_words: usize,
    pub unique_words: usize,
    pub ttr: f64,
    pub first_unique: Vec<String>,
}

impl TextStats {
    pub fn analyze(name: &str, text: &str) -> Self {
        let start = Instant::now();
        let words = split_words(text);
        let frequencies = FrequencyMap::from_words(&words);
        let total_words = words.len();
        let unique_words = frequencies.len();
        let first_unique = frequencies
            .hapax()
            .take(FIRST_UNIQUE_LIMIT)
            .map(str::to_string)
            .collect();
        debug!(
            "analyzed {}: {} words, {} unique, most frequent {:?} ({:.2?})",
            name,
            total_words,
            unique_words,
            frequencies.iter().max_by_key(|&(_, c)| c),
            start.elapsed()
        );
        Self {
            name: name.to_string(),
            ttr: type_token_ratio(unique_words, total_words),
            words,
            total_words,
            unique_words,
            first_unique,
        }
    }

    /// How often the exact (uncleaned) token appears in the text.
    pub fn find_word(&self, word: &str) -> usize {
        self.words.iter().filter(|w| *w == word).count()
    }
}

/// Unique over total words, rounded half-to-even to three decimals. An empty text has a TTR of 0.
pub fn type_token_ratio(unique: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let ratio = unique as f64 / total as f64;
    (ratio * 1000.0).round_ties_even() / 1000.0
}
