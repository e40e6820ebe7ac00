mod catalog;
mod compare;
mod config;
mod error;
mod prompt;
mod report;
mod session;
mod stats;
mod tokenize;
mod wc;

use std::io;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::debug;

use crate::config::{Args, Config};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let start = Instant::now();
    let result = Config::from_args(Args::parse()).and_then(|config| {
        debug!("using {:?}", config);
        let stdin = io::stdin();
        session::run(&config, &mut stdin.lock(), io::stdout().lock())
    });
    debug!("session finished in {:.2?}", start.elapsed());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("{:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
