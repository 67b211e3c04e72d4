//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use std::collections::HashMap;

use bookreview_core::catalog::{Book, Review};
use rusqlite::Row;

/// Convert a SQLite row to a Book without reviews.
///
/// Expected columns: id, title, author
pub fn row_to_book(row: &Row) -> rusqlite::Result<Book> {
    Ok(Book::new(row.get(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?))
}

/// Convert a SQLite row to a Review.
///
/// Expected columns: id, book_id, comment, rating
pub fn row_to_review(row: &Row) -> rusqlite::Result<Review> {
    Ok(Review {
        id: row.get(0)?,
        book_id: row.get(1)?,
        comment: row.get(2)?,
        rating: row.get(3)?,
    })
}

/// Distributes reviews onto their books, keeping both orders as given.
///
/// Reviews whose book is not in `books` are dropped.
pub fn attach_reviews(mut books: Vec<Book>, reviews: Vec<Review>) -> Vec<Book> {
    let index: HashMap<i64, usize> = books
        .iter()
        .enumerate()
        .map(|(position, book)| (book.id, position))
        .collect();

    for review in reviews {
        if let Some(&position) = index.get(&review.book_id) {
            books[position].reviews.push(review);
        }
    }

    books
}
