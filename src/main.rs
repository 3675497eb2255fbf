// src/main.rs
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use character_names::{extract_file, logging, DEFAULT_SOURCE_PATH};

#[derive(Parser, Debug)]
#[command(
    name = "character-names",
    about = "Lists probable character names found in a plain-text narrative"
)]
struct Args {
    /// Text file to scan
    #[arg(default_value = DEFAULT_SOURCE_PATH)]
    path: PathBuf,

    /// Normalize apostrophes, quotes and dashes before scanning
    #[arg(long)]
    preprocess: bool,

    /// Log scan statistics to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Extracts names from `args.path` and writes the report to `out`.
fn run<W: Write>(args: &Args, out: W) -> anyhow::Result<()> {
    let extraction = extract_file(&args.path, args.preprocess)?;
    extraction
        .write_to(out)
        .context("Failed to write names to stdout")
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::configure_logging(args.verbose);

    let stdout = io::stdout();
    run(&args, BufWriter::new(stdout.lock()))
}
