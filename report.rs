use std::fs;
use std::io::Write;
use std::path::Path;

use encoding_rs::Encoding;
use itertools::Itertools;
use log::{info, warn};
use num_format::{Locale, ToFormattedString};

use crate::compare::Comparison;
use crate::error::{Result, TextStatsError};
use crate::stats::TextStats;

fn count(n: usize) -> String {
    n.to_formatted_string(&Locale::en)
}

/// `['a', 'b']`
fn quoted_list(words: &[String]) -> String {
    format!("[{}]", words.iter().map(|w| format!("'{}'", w)).join(", "))
}

/// Whole ratios keep one decimal place: `1.0`, `0.0`.
fn ratio(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

pub fn summary(stats: &TextStats) -> String {
    format!(
        "\nIn {0} there are {1} total words and {2} unique words.\n\
         Here are the first five unique words {3}\n\
         {0} has a TTR of {4}",
        stats.name,
        count(stats.total_words),
        count(stats.unique_words),
        quoted_list(&stats.first_unique),
        ratio(stats.ttr)
    )
}

pub fn comparison(cmp: &Comparison) -> String {
    format!(
        "\n{} has {} words, which is {} more words than {}\n{}",
        cmp.larger,
        count(cmp.larger_total),
        count(cmp.difference),
        cmp.smaller,
        cmp.verdict.message()
    )
}

/// `'word' appears 1 time(s) in a, 2 time(s) in b, and 3 time(s) in c.`
pub fn search(word: &str, texts: &[&TextStats]) -> String {
    let hits: Vec<String> = texts
        .iter()
        .map(|t| format!("{} time(s) in {}", count(t.find_word(word)), t.name))
        .collect();
    let listed = match hits.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{}, and {}", rest.join(", "), last),
        Some((last, _)) => last.clone(),
        None => "0 time(s)".to_string(),
    };
    format!("'{}' appears {}.", word, listed)
}

/// Writes report lines to the terminal and keeps a copy for saving.
pub struct Transcript<W: Write> {
    out: W,
    saved: String,
}

impl<W: Write> Transcript<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            saved: String::new(),
        }
    }

    pub fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        self.saved.push_str(text);
        self.saved.push('\n');
        Ok(())
    }

    /// Direct access for prompts, which are not kept.
    pub fn terminal(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn text(&self) -> &str {
        &self.saved
    }

    pub fn save(&self, path: &Path, encoding: &'static Encoding) -> Result<()> {
        let (bytes, used, had_errors) = encoding.encode(self.text());
        if had_errors {
            warn!(
                "report contains characters {} cannot represent; wrote them as numeric references",
                used.name()
            );
        }
        fs::write(path, &bytes).map_err(|source| TextStatsError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!("saved report to {}", path.display());
        Ok(())
    }
}
