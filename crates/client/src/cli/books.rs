//! Book CLI commands.

use clap::{Parser, Subcommand};

/// Book management commands.
#[derive(Debug, Parser)]
pub struct BooksCommand {
    #[command(subcommand)]
    pub action: BooksAction,
}

/// Available book actions.
#[derive(Debug, Subcommand)]
pub enum BooksAction {
    /// List all books with their reviews.
    List,
    /// Create a new book.
    Create {
        /// Book title.
        #[arg(long)]
        title: String,
        /// Book author.
        #[arg(long)]
        author: String,
    },
}
