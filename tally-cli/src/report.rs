//! Presentation model and renderers.

use std::io::{self, Write};

use serde::Serialize;
use tally_core::TextAnalysis;
use tally_types::WordCount;
use unicode_width::UnicodeWidthStr;

const WORD_HEADER: &str = "WORD";
const COUNT_HEADER: &str = "COUNT";

/// What the front end shows for one analysis.
#[derive(Debug, Serialize)]
pub struct AnalysisReport<'a> {
    pub total_word_count: usize,
    pub unique_word_count: usize,
    pub unique_word_counts: &'a [WordCount],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<&'a str>,
}

impl<'a> AnalysisReport<'a> {
    /// Builds a report over `analysis`, optionally echoing the input text.
    pub fn new(analysis: &'a TextAnalysis, text: Option<&'a str>) -> Self {
        Self {
            total_word_count: analysis.total_word_count(),
            unique_word_count: analysis.unique_word_count(),
            unique_word_counts: analysis.unique_word_counts(),
            text,
        }
    }

    /// Writes a human-readable table.
    pub fn write_table<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if let Some(text) = self.text {
            writeln!(out, "Text:")?;
            writeln!(out, "{}", text)?;
            writeln!(out)?;
        }

        writeln!(out, "Total words : {}", self.total_word_count)?;
        writeln!(out, "Unique words: {}", self.unique_word_count)?;

        if self.unique_word_counts.is_empty() {
            return Ok(());
        }

        let width = self
            .unique_word_counts
            .iter()
            .map(|wc| wc.word.width())
            .max()
            .unwrap_or(0)
            .max(WORD_HEADER.len());

        writeln!(out)?;
        write_row(out, WORD_HEADER, WORD_HEADER.len(), width, COUNT_HEADER)?;
        for wc in self.unique_word_counts {
            write_row(out, &wc.word, wc.word.width(), width, &wc.count.to_string())?;
        }

        Ok(())
    }

    /// Writes the report as pretty-printed JSON followed by a newline.
    pub fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)
    }
}

// `{:<width$}` pads by char count, which misaligns wide CJK glyphs, so the
// padding is computed from display width instead.
fn write_row<W: Write>(
    out: &mut W,
    word: &str,
    word_width: usize,
    column: usize,
    count: &str,
) -> io::Result<()> {
    let pad = column.saturating_sub(word_width);
    writeln!(out, "{}{}  {}", word, " ".repeat(pad), count)
}
