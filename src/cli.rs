// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE
use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::{debug, LevelFilter};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::emit::convert;
use crate::{Error, Options};

/// Converts a firmware image into a listing of 32-bit binary words, one per
/// line, for loading into a memory initialization file.
#[derive(Debug, Parser)]
#[clap(name = env!("CARGO_CRATE_NAME"), version)]
pub struct App {
    /// The firmware image to convert
    bin_file: PathBuf,

    /// Number of 4-byte words to emit; short images are padded with zeros
    #[clap(value_parser = parse_word_count, allow_negative_numbers = true)]
    num_words: usize,

    /// Output file for the word listing (default: console)
    #[clap(long, short)]
    output: Option<PathBuf>,

    /// Verbosity level (can be specified multiple times)
    #[clap(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl App {
    pub fn word_count(&self) -> usize {
        self.num_words
    }

    fn level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn writer(&self) -> Result<Box<dyn Write>, Error> {
        Ok(match self.output {
            Some(ref path) => {
                let file = File::create(path).map_err(|source| Error::CreateOutput {
                    path: path.clone(),
                    source,
                })?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(BufWriter::new(io::stdout().lock())),
        })
    }
}

/// Parses a decimal word count. Surrounding whitespace and single `_`
/// separators between digits are allowed. Any negative count, however large,
/// is an empty range.
fn parse_word_count(s: &str) -> Result<usize, String> {
    let trimmed = s.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let well_formed = !digits.is_empty()
        && !digits.starts_with('_')
        && !digits.ends_with('_')
        && !digits.contains("__")
        && digits.chars().all(|c| c.is_ascii_digit() || c == '_');
    if !well_formed {
        return Err(format!("`{s}` is not a decimal integer"));
    }

    if negative {
        return Ok(0);
    }

    digits
        .chars()
        .filter(|c| *c != '_')
        .collect::<String>()
        .parse::<usize>()
        .map_err(|e| e.to_string())
}

fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_env(Env::new().filter("MEMLIST_LOG"))
        .init();
}

pub fn main() -> anyhow::Result<()> {
    let args = App::parse();
    init_logger(args.level());
    debug!("{args:?}");

    let mut options = Options::new(args.writer()?, args.word_count());

    convert(&args.bin_file, &mut options)
        .with_context(|| format!("converting {}", args.bin_file.display()))?;

    Ok(())
}
