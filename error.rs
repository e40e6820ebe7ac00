use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextStatsError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("terminal I/O error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("unknown text encoding: {0}")]
    UnknownEncoding(String),

    #[error("no text numbered {0} in the catalog")]
    UnknownChoice(usize),

    #[error("input closed before a choice was made")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, TextStatsError>;
