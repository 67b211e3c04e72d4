//! Review CLI commands.

use clap::{Parser, Subcommand};

/// Review management commands.
#[derive(Debug, Parser)]
pub struct ReviewsCommand {
    #[command(subcommand)]
    pub action: ReviewsAction,
}

/// Available review actions.
#[derive(Debug, Subcommand)]
pub enum ReviewsAction {
    /// List the reviews of a book.
    List {
        /// Book ID.
        book_id: i64,
    },
    /// Add a review to a book.
    Create {
        /// Book ID.
        book_id: i64,
        /// Review text.
        #[arg(long)]
        comment: String,
        /// Rating from 1 to 5.
        #[arg(long, value_parser = clap::value_parser!(i64).range(1..=5))]
        rating: i64,
    },
}
