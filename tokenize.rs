use std::fs;
use std::path::Path;

use encoding_rs::Encoding;
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, TextStatsError};

// "CHAPTER IV." becomes the single token "CHAPTERIV."
static CHAPTER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(CHAPTER) ([IVXLC]+.)").unwrap());

// typographic marks that survive ASCII punctuation stripping
const EXTRA_PUNCTUATION: [char; 7] = ['“', '”', '‘', '’', '—', '–', '…'];

/// Read a file and decode it with the given encoding.
pub fn read_text(path: &Path, encoding: &'static Encoding) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| TextStatsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let (text, used, had_errors) = encoding.decode(&bytes);
    if had_errors {
        warn!(
            "{} contains bytes that are not valid {}; replaced them",
            path.display(),
            used.name()
        );
    }
    debug!("read {} bytes from {} as {}", bytes.len(), path.display(), used.name());
    Ok(text.into_owned())
}

/// Group chapter headings together as one word.
pub fn merge_chapter_headings(text: &str) -> String {
    CHAPTER_REGEX.replace_all(text, "${1}${2}").into_owned()
}

/// Merge chapter headings, then split on whitespace. Words are left raw.
pub fn split_words(text: &str) -> Vec<String> {
    merge_chapter_headings(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Drop punctuation anywhere in the word and lowercase it.
pub fn clean_word(word: &str) -> String {
    word.chars()
        .filter(|c| !c.is_ascii_punctuation() && !EXTRA_PUNCTUATION.contains(c))
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn chapter_headings_become_one_token() {
        assert_eq!(
            merge_chapter_headings("CHAPTER IV. The Rabbit"),
            "CHAPTERIV. The Rabbit"
        );
        // numeral must be upper-case roman
        assert_eq!(merge_chapter_headings("CHAPTER 4."), "CHAPTER 4.");
        assert_eq!(merge_chapter_headings("chapter iv."), "chapter iv.");
    }

    #[test]
    fn heading_regex_consumes_one_trailing_char() {
        assert_eq!(merge_chapter_headings("CHAPTER XII\nText"), "CHAPTERXII\nText");
        assert_eq!(merge_chapter_headings("CHAPTER I:"), "CHAPTERI:");
    }

    #[test]
    fn split_handles_mixed_whitespace() {
        let words = split_words("  Down the\trabbit-hole\n\nCHAPTER I. Alice  ");
        assert_eq!(words, vec!["Down", "the", "rabbit-hole", "CHAPTERI.", "Alice"]);
    }

    #[test]
    fn split_of_blank_text_is_empty() {
        assert!(split_words(" \n\t ").is_empty());
    }

    #[test]
    fn clean_strips_punctuation_and_lowercases() {
        assert_eq!(clean_word("Rabbit-Hole,"), "rabbithole");
        assert_eq!(clean_word("don't"), "dont");
        assert_eq!(clean_word("CHAPTERIV."), "chapteriv");
        assert_eq!(clean_word("“Curiouser!”"), "curiouser");
        assert_eq!(clean_word("‘Tis"), "tis");
        assert_eq!(clean_word("--"), "");
    }

    #[test]
    fn clean_keeps_non_ascii_letters() {
        assert_eq!(clean_word("Émile's"), "émiles");
    }

    #[test]
    fn read_text_decodes_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all("Café au lait".as_bytes()).unwrap();
        let text = read_text(file.path(), encoding_rs::UTF_8).unwrap();
        assert_eq!(text, "Café au lait");
    }

    #[test]
    fn read_text_decodes_legacy_encoding() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"Caf\xe9").unwrap();
        let text = read_text(file.path(), encoding_rs::WINDOWS_1252).unwrap();
        assert_eq!(text, "Café");
    }

    #[test]
    fn read_text_replaces_malformed_bytes() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"ok \xff ok").unwrap();
        let text = read_text(file.path(), encoding_rs::UTF_8).unwrap();
        assert_eq!(text, "ok \u{FFFD} ok");
    }

    #[test]
    fn read_text_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let err = read_text(&missing, encoding_rs::UTF_8).unwrap_err();
        assert!(matches!(err, TextStatsError::Read { ref path, .. } if *path == missing));
    }
}
