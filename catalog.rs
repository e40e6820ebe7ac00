use std::io::Write;
use std::path::{Path, PathBuf};

// text files obtained from Project Gutenberg
pub const TEXTS: [&str; 5] = [
    "alice.txt",
    "dorian-gray.txt",
    "frankenstein.txt",
    "mystics-of-islam.txt",
    "oxford-lectures-on-poetry.txt",
];

/// The fixed list of texts, rooted at a directory.
#[derive(Debug, Clone)]
pub struct Catalog {
    dir: PathBuf,
}

impl Catalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn len(&self) -> usize {
        TEXTS.len()
    }

    /// Name of the text behind a 1-based menu number.
    pub fn name(&self, choice: usize) -> Option<&'static str> {
        choice.checked_sub(1).and_then(|i| TEXTS.get(i).copied())
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn print_menu<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for (i, text) in TEXTS.iter().enumerate() {
            writeln!(out, "{}  {}", i + 1, text)?;
        }
        Ok(())
    }
}
