//! Pretty output formatting.

use bookreview_core::catalog::{Book, Review};

use crate::client::health::HealthStatus;

/// Format a review for display.
pub fn format_review(review: &Review) -> String {
    format!(
        "{} {}\n  ID: {}\n  Book: {}",
        stars(review.rating),
        review.comment,
        review.id,
        review.book_id
    )
}

/// Format reviews for display.
pub fn format_reviews(reviews: &[Review]) -> String {
    if reviews.is_empty() {
        return "No reviews found.".to_string();
    }
    let mut output = format!("REVIEWS ({})\n", reviews.len());
    output.push_str(&"-".repeat(40));
    for review in reviews {
        output.push_str(&format!("\n{}", format_review(review)));
        output.push('\n');
    }
    output
}

/// Format a book and its reviews for display.
pub fn format_book(book: &Book) -> String {
    let mut output = format!("{} by {}\n  ID: {}", book.title, book.author, book.id);
    match average_rating(&book.reviews) {
        Some(avg) => output.push_str(&format!(
            "\n  Rating: {:.1} ({} reviews)",
            avg,
            book.reviews.len()
        )),
        None => output.push_str("\n  No reviews yet"),
    }
    for review in &book.reviews {
        output.push_str(&format!("\n    {} {}", stars(review.rating), review.comment));
    }
    output
}

/// Format books for display.
pub fn format_books(books: &[Book]) -> String {
    if books.is_empty() {
        return "No books found.".to_string();
    }
    let mut output = format!("BOOKS ({})\n", books.len());
    output.push_str(&"-".repeat(40));
    for book in books {
        output.push_str(&format!("\n{}", format_book(book)));
        output.push('\n');
    }
    output
}

/// Format the health report for display.
pub fn format_health(health: &HealthStatus) -> String {
    format!(
        "Status: {}\n  Database: {}\n  Redis: {}\n  Checked at: {}",
        health.status, health.database, health.redis, health.timestamp
    )
}

fn stars(rating: i64) -> String {
    let filled = rating.clamp(0, 5) as usize;
    format!("{}{}", "*".repeat(filled), ".".repeat(5 - filled))
}

fn average_rating(reviews: &[Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let total: i64 = reviews.iter().map(|r| r.rating).sum();
    Some(total as f64 / reviews.len() as f64)
}
