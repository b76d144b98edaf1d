//! Command line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Naflix - Browse movies and TV shows from TMDB
#[derive(Parser, Debug)]
#[command(name = "naflix")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Skip preflight checks
    #[arg(long, global = true)]
    pub skip_preflight: bool,

    /// Path to config.toml (default: <config dir>/naflix/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the home screen: top rated, now playing, upcoming and popular
    Home {
        /// Fetch all categories at once; failures only empty their own section
        #[arg(long)]
        parallel: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Show one title, e.g. /movies/27205 or /shows/1399
    Detail {
        /// Route path: first segment "movies" for a movie, anything else for a show
        #[arg(value_name = "ROUTE")]
        route: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}
