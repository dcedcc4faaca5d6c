//! Where the text to analyze comes from.

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};

/// A source of text: an inline argument, a file, or standard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Inline(String),
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// Reads the whole text from this source.
    pub fn read(&self) -> Result<String> {
        match self {
            InputSource::Inline(text) => Ok(text.clone()),
            InputSource::File(path) => fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display())),
            InputSource::Stdin => read_all(io::stdin().lock()).context("failed to read stdin"),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Inline(text) => write!(f, "inline text ({} bytes)", text.len()),
            InputSource::File(path) => write!(f, "{}", path.display()),
            InputSource::Stdin => write!(f, "stdin"),
        }
    }
}

fn read_all<R: Read>(mut reader: R) -> io::Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}
