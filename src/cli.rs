use clap::Parser as ClapParser;
use std::path::PathBuf;

#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the command file to execute
    pub file: PathBuf,

    /// Output format for command results
    #[arg(short = 'f', long = "format", default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
