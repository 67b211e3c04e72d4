use async_trait::async_trait;

use crate::catalog::{Book, NewBook, NewReview, Review};

use super::Result;

/// Repository for book operations.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Stores a new book and returns it with its assigned id and no reviews.
    ///
    /// Returns `RepositoryError::AlreadyExists` when the `(title, author)`
    /// pair is taken.
    async fn create_book(&self, book: &NewBook) -> Result<Book>;

    /// Gets a book by its id, with its reviews.
    async fn get_book(&self, id: i64) -> Result<Option<Book>>;

    /// Gets every book with its reviews, ordered by id.
    async fn list_books_with_reviews(&self) -> Result<Vec<Book>>;

    /// Finds a book by its exact title and author.
    async fn find_book_by_title_and_author(&self, title: &str, author: &str)
        -> Result<Option<Book>>;
}

/// Repository for review operations.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Stores a new review.
    ///
    /// Returns `RepositoryError::NotFound` when the parent book does not exist.
    async fn create_review(&self, review: &NewReview) -> Result<Review>;

    /// Gets the reviews of a book, ordered by id.
    async fn get_reviews_by_book(&self, book_id: i64) -> Result<Vec<Review>>;
}

/// Liveness check for the durable store.
#[async_trait]
pub trait StorageHealth: Send + Sync {
    async fn ping(&self) -> Result<()>;
}
