use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tally_core::CleanerConfig;

use crate::input::InputSource;

/// Tally: word-frequency statistics for a body of text.
///
/// Reports the total word count, the unique word count and every unique
/// word with its number of occurrences, in ordinal order.
#[derive(Debug, Parser)]
#[command(name = "tally")]
#[command(version)]
#[command(about = "Count words and their frequencies", long_about = None)]
pub struct Cli {
    /// File to analyze; standard input is read when neither FILE nor --text is given
    #[arg(value_name = "FILE", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Analyze this text instead of reading a file
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    pub format: Format,

    /// Include the analyzed text in the output
    #[arg(long)]
    pub echo: bool,

    /// Strip every apostrophe, including those inside contractions
    #[arg(long)]
    pub legacy_apostrophes: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Aligned plain-text table
    Table,
    /// Pretty-printed JSON document
    Json,
}

impl Cli {
    pub fn input_source(&self) -> InputSource {
        match (&self.text, &self.file) {
            (Some(text), _) => InputSource::Inline(text.clone()),
            (None, Some(path)) => InputSource::File(path.clone()),
            (None, None) => InputSource::Stdin,
        }
    }

    pub fn cleaner_config(&self) -> CleanerConfig {
        CleanerConfig {
            keep_contractions: !self.legacy_apostrophes,
        }
    }
}
