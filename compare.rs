use itertools::Itertools;

use crate::stats::TextStats;

// word-count gap beyond which TTR values stop being comparable
pub const COMPARABLE_DIFFERENCE: usize = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparability {
    Comparable,
    Unreliable,
}

impl Comparability {
    pub fn from_difference(difference: usize) -> Self {
        if difference <= COMPARABLE_DIFFERENCE {
            Comparability::Comparable
        } else {
            Comparability::Unreliable
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Comparability::Comparable => "These TTR values are between comparable texts.",
            Comparability::Unreliable => {
                "TTR is not a reliable comparison of lexical complexity for the chosen texts."
            }
        }
    }
}

/// A larger text measured against a smaller one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub larger: String,
    pub larger_total: usize,
    pub smaller: String,
    pub difference: usize,
    pub verdict: Comparability,
}

/// Compare every pair of texts, from the largest pair down.
///
/// Texts are ordered by (total words, name); for three texts the result is
/// (largest, middle), (largest, smallest), (middle, smallest).
pub fn compare_totals(texts: &[&TextStats]) -> Vec<Comparison> {
    texts
        .iter()
        .map(|t| (t.total_words, t.name.as_str()))
        .sorted()
        .rev()
        .tuple_combinations()
        .map(|((larger_total, larger), (smaller_total, smaller))| {
            let difference = larger_total - smaller_total;
            Comparison {
                larger: larger.to_string(),
                larger_total,
                smaller: smaller.to_string(),
                difference,
                verdict: Comparability::from_difference(difference),
            }
        })
        .collect()
}
