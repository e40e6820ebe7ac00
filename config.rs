use std::path::PathBuf;

use clap::Parser;
use encoding_rs::Encoding;

use crate::error::{Result, TextStatsError};

/// Command-line flags, each with an environment fallback.
#[derive(Parser, Debug)]
#[command(author, version, about = "Compare word statistics across a fixed catalog of texts", long_about = None)]
pub struct Args {
    /// Directory holding the catalog's text files
    #[arg(long, env = "TEXTSTATS_DIR", default_value = ".")]
    pub texts_dir: PathBuf,

    /// Encoding label used to read the texts and write the report
    #[arg(long, env = "TEXTSTATS_ENCODING", default_value = "utf-8")]
    pub encoding: String,

    /// Also save the report (without prompts) to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub texts_dir: PathBuf,
    pub encoding: &'static Encoding,
    pub output: Option<PathBuf>,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        Ok(Self {
            texts_dir: args.texts_dir,
            encoding: resolve_encoding(&args.encoding)?,
            output: args.output,
        })
    }
}

/// Look up a WHATWG encoding label such as "utf-8" or "latin1".
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| TextStatsError::UnknownEncoding(label.to_string()))
}
