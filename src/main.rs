use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use colored::*;
use std::fs;
use std::io;
use tracing::Level;

mod cli;

use cli::Args;
use parklot::{run_script, OutputFormat};

fn main() {
    let args = Args::parse();

    // Setup logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    // Stderr only: stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(&args) {
        eprintln!("{} {:#}", "Error:".bold().red(), err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let format = match args.format.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Text,
    };

    let script = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read command file '{}'", args.file.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_script(&script, format, &mut out)
}
