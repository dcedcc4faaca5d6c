mod cli;
mod input;
mod logging;
mod report;

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tally_core::TextAnalysis;

use crate::cli::{Cli, Format};
use crate::report::AnalysisReport;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let source = cli.input_source();
    let text = source.read()?;

    let analysis = TextAnalysis::with_config(&text, cli.cleaner_config());
    log::info!("analyzed {}: {}", source, analysis.summary());

    let report = AnalysisReport::new(&analysis, cli.echo.then_some(text.as_str()));

    let mut out = BufWriter::new(io::stdout().lock());
    let written = match cli.format {
        Format::Table => report.write_table(&mut out),
        Format::Json => report.write_json(&mut out),
    };
    written
        .and_then(|()| out.flush())
        .context("failed to write report")?;

    Ok(())
}
