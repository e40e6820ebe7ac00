use std::io::{BufRead, Write};

use log::info;

use crate::catalog::Catalog;
use crate::compare::compare_totals;
use crate::config::Config;
use crate::error::{Result, TextStatsError};
use crate::prompt::{ask_word, choose_text};
use crate::report::{self, Transcript};
use crate::stats::TextStats;
use crate::tokenize::read_text;

/// One interactive run: pick texts, summarize, compare, search.
pub fn run<R: BufRead, W: Write>(config: &Config, input: &mut R, output: W) -> Result<()> {
    let catalog = Catalog::new(config.texts_dir.clone());
    let mut transcript = Transcript::new(output);

    catalog.print_menu(transcript.terminal())?;

    // first pick two texts, then a third to compare them against
    let first = choose_text(input, transcript.terminal(), catalog.len())?;
    let second = choose_text(input, transcript.terminal(), catalog.len())?;
    let text1 = load(&catalog, config, first)?;
    transcript.line(&report::summary(&text1))?;
    let text2 = load(&catalog, config, second)?;
    transcript.line(&report::summary(&text2))?;

    let third = choose_text(input, transcript.terminal(), catalog.len())?;
    let text3 = load(&catalog, config, third)?;
    transcript.line(&report::summary(&text3))?;

    let chosen = [&text1, &text2, &text3];
    for cmp in compare_totals(&chosen) {
        transcript.line(&report::comparison(&cmp))?;
    }

    let word = ask_word(input, transcript.terminal())?;
    transcript.line(&report::search(&word, &chosen))?;

    if let Some(path) = &config.output {
        transcript.save(path, config.encoding)?;
    }
    Ok(())
}

fn load(catalog: &Catalog, config: &Config, choice: usize) -> Result<TextStats> {
    let name = catalog
        .name(choice)
        .ok_or(TextStatsError::UnknownChoice(choice))?;
    info!("loading {} from {}", name, catalog.dir().display());
    let text = read_text(&catalog.path(name), config.encoding)?;
    Ok(TextStats::analyze(name, &text))
}
