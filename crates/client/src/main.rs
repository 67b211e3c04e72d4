//! bookreview-client CLI entry point.

use bookreview_client::cli::books::BooksAction;
use bookreview_client::cli::reviews::ReviewsAction;
use bookreview_client::cli::{Cli, Commands, OutputFormat};
use bookreview_client::client::BookReviewClient;
use bookreview_client::output::{format_output, pretty};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = BookReviewClient::new(&cli.base_url);

    match cli.command {
        Commands::Books(books_cmd) => match books_cmd.action {
            BooksAction::List => {
                let books = client.list_books().await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&books, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_books(&books)),
                }
            }
            BooksAction::Create { title, author } => {
                let book = client.create_book(&title, &author).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&book, cli.format)),
                    OutputFormat::Pretty => println!("Created:\n{}", pretty::format_book(&book)),
                }
            }
        },
        Commands::Reviews(reviews_cmd) => match reviews_cmd.action {
            ReviewsAction::List { book_id } => {
                let reviews = client.list_reviews(book_id).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&reviews, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_reviews(&reviews)),
                }
            }
            ReviewsAction::Create {
                book_id,
                comment,
                rating,
            } => {
                let review = client.create_review(book_id, &comment, rating).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&review, cli.format)),
                    OutputFormat::Pretty => {
                        println!("Created:\n{}", pretty::format_review(&review))
                    }
                }
            }
        },
        Commands::Health => {
            let health = client.health().await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&health, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_health(&health)),
            }
        }
    }

    Ok(())
}
