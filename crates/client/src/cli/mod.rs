//! CLI command definitions.

pub mod books;
pub mod reviews;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the bookreview API.
#[derive(Debug, Parser)]
#[command(name = "bookreview-client")]
#[command(about = "CLI client for the bookreview API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "BOOKREVIEW_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Book management.
    Books(books::BooksCommand),
    /// Review management.
    Reviews(reviews::ReviewsCommand),
    /// Server, database and cache status.
    Health,
}
