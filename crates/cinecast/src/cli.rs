//! Command-line interface definition.

use clap::Parser;

/// Cinecast - pick a movie from TMDB and post it to X
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "cinecast")]
#[command(about = "Pick a movie from TMDB by mode and post it to X", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Mode key (run with --list to see every mode)
    #[arg(required_unless_present = "list")]
    pub mode: Option<String>,

    /// List every mode with its description and exit
    #[arg(long, conflicts_with_all = ["mode", "dry_run"])]
    pub list: bool,

    /// Select and format, but log the post instead of publishing it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
