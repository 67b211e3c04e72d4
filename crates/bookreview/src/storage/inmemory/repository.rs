//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use bookreview_core::catalog::{Book, NewBook, NewReview, Review};
use bookreview_core::storage::{
    BookRepository, RepositoryError, Result, ReviewRepository, StorageHealth,
};

use crate::storage::ResetStore;

#[derive(Debug, Default)]
struct Tables {
    books: BTreeMap<i64, Book>,
    reviews: BTreeMap<i64, Review>,
    last_book_id: i64,
    last_review_id: i64,
}

impl Tables {
    fn reviews_for(&self, book_id: i64) -> Vec<Review> {
        self.reviews
            .values()
            .filter(|review| review.book_id == book_id)
            .cloned()
            .collect()
    }

    fn with_reviews(&self, book: &Book) -> Book {
        book.clone().with_reviews(self.reviews_for(book.id))
    }
}

/// In-memory storage backend.
///
/// Books are stored without their reviews; reviews are joined on read.
/// Data is not persisted and is lost when the last clone is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookRepository for InMemoryRepository {
    async fn create_book(&self, book: &NewBook) -> Result<Book> {
        let mut tables = self.tables.write().await;

        let taken = tables
            .books
            .values()
            .any(|b| b.title == book.title() && b.author == book.author());
        if taken {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Book",
                id: format!("{} by {}", book.title(), book.author()),
            });
        }

        tables.last_book_id += 1;
        let created = book.clone().into_book(tables.last_book_id);
        tables.books.insert(created.id, created.clone());
        Ok(created)
    }

    async fn get_book(&self, id: i64) -> Result<Option<Book>> {
        let tables = self.tables.read().await;
        Ok(tables.books.get(&id).map(|book| tables.with_reviews(book)))
    }

    async fn list_books_with_reviews(&self) -> Result<Vec<Book>> {
        let tables = self.tables.read().await;
        Ok(tables
            .books
            .values()
            .map(|book| tables.with_reviews(book))
            .collect())
    }

    async fn find_book_by_title_and_author(
        &self,
        title: &str,
        author: &str,
    ) -> Result<Option<Book>> {
        let tables = self.tables.read().await;
        Ok(tables
            .books
            .values()
            .find(|b| b.title == title && b.author == author)
            .map(|book| tables.with_reviews(book)))
    }
}

#[async_trait]
impl ReviewRepository for InMemoryRepository {
    async fn create_review(&self, review: &NewReview) -> Result<Review> {
        let mut tables = self.tables.write().await;

        if !tables.books.contains_key(&review.book_id()) {
            return Err(RepositoryError::NotFound {
                entity_type: "Book",
                id: review.book_id().to_string(),
            });
        }

        tables.last_review_id += 1;
        let created = review.clone().into_review(tables.last_review_id);
        tables.reviews.insert(created.id, created.clone());
        Ok(created)
    }

    async fn get_reviews_by_book(&self, book_id: i64) -> Result<Vec<Review>> {
        Ok(self.tables.read().await.reviews_for(book_id))
    }
}

#[async_trait]
impl StorageHealth for InMemoryRepository {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
impl ResetStore for InMemoryRepository {
    async fn clear(&self) -> Result<()> {
        *self.tables.write().await = Tables::default();
        Ok(())
    }
}
