use std::collections::HashMap;

use crate::tokenize::clean_word;

/// Word counts for one text, in the order words were first seen.
#[derive(Debug, Default, Clone)]
pub struct FrequencyMap {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl FrequencyMap {
    /// Clean every raw word and tally it. Punctuation-only words share the empty key.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = Self::default();
        for word in words {
            map.add(clean_word(word.as_ref()));
        }
        map
    }

    fn add(&mut self, word: String) {
        match self.index.get(&word) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(word.clone(), self.entries.len());
                self.entries.push((word, 1));
            }
        }
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(w, c)| (w.as_str(), *c))
    }

    /// Words that occur exactly once.
    pub fn hapax(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|&(_, c)| c == 1).map(|(w, _)| w)
    }
}
