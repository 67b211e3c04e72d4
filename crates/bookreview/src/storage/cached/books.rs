//! Cached book repository decorator.
//!
//! Wraps a store implementing both `BookRepository` and `ReviewRepository`
//! with a cache-aside layer around the `books:all` snapshot.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use bookreview_core::cache::{
    deserialize_books, serialize_books, Cache, CacheError, Result as CacheResult, BOOKS_ALL_KEY,
};
use bookreview_core::catalog::{Book, NewBook, NewReview, Review};
use bookreview_core::storage::{BookRepository, Result, ReviewRepository};

/// Cached book repository decorator.
///
/// - `list_books_with_reviews` is served from the cache when possible and
///   repopulates it on a miss.
/// - `create_book` and `create_review` invalidate the snapshot after the
///   store write succeeds.
/// - Every other read passes straight through to the store.
///
/// # Type Parameters
///
/// * `R` - The underlying store
/// * `C` - The cache implementation
pub struct CachedBookRepository<R, C>
where
    R: BookRepository + ReviewRepository,
    C: Cache,
{
    repository: Arc<R>,
    cache: Arc<C>,
    ttl: Duration,
    timeout: Duration,
}

impl<R, C> CachedBookRepository<R, C>
where
    R: BookRepository + ReviewRepository,
    C: Cache,
{
    /// Creates a new cached book repository.
    ///
    /// # Arguments
    ///
    /// * `repository` - The store to cache
    /// * `cache` - The cache implementation
    /// * `ttl` - Time-to-live for the cached book list
    /// * `timeout` - Upper bound on each cache call
    pub fn new(repository: Arc<R>, cache: Arc<C>, ttl: Duration, timeout: Duration) -> Self {
        Self {
            repository,
            cache,
            ttl,
            timeout,
        }
    }

    /// Drops the cached book list. Failures are logged, never returned.
    pub async fn invalidate(&self) {
        match self.bounded(self.cache.delete(BOOKS_ALL_KEY)).await {
            Ok(()) => tracing::debug!(key = BOOKS_ALL_KEY, "Invalidated book list cache"),
            Err(err) => {
                tracing::warn!(key = BOOKS_ALL_KEY, error = %err, "Failed to invalidate book list cache")
            }
        }
    }

    /// Runs a cache call, turning an overrun into `CacheError::Timeout`.
    async fn bounded<T>(&self, call: impl Future<Output = CacheResult<T>>) -> CacheResult<T> {
        tokio::time::timeout(self.timeout, call)
            .await
            .unwrap_or(Err(CacheError::Timeout(self.timeout)))
    }

    /// Returns the cached book list, or `None` on a miss or any cache failure.
    async fn cached_books(&self) -> Option<Vec<Book>> {
        let bytes = match self.bounded(self.cache.get(BOOKS_ALL_KEY)).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                tracing::trace!(key = BOOKS_ALL_KEY, "Cache miss for book list");
                return None;
            }
            Err(err) => {
                tracing::warn!(key = BOOKS_ALL_KEY, error = %err, "Cache read failed, using store");
                return None;
            }
        };

        match deserialize_books(&bytes) {
            Ok(books) => {
                tracing::trace!(key = BOOKS_ALL_KEY, count = books.len(), "Cache hit for book list");
                Some(books)
            }
            Err(err) => {
                tracing::warn!(key = BOOKS_ALL_KEY, error = %err, "Cached book list is corrupt");
                None
            }
        }
    }

    async fn populate(&self, books: &[Book]) {
        let bytes = match serialize_books(books) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to serialize book list for cache");
                return;
            }
        };

        if let Err(err) = self
            .bounded(self.cache.set(BOOKS_ALL_KEY, &bytes, Some(self.ttl)))
            .await
        {
            tracing::warn!(key = BOOKS_ALL_KEY, error = %err, "Failed to cache book list");
        }
    }
}

#[async_trait]
impl<R, C> BookRepository for CachedBookRepository<R, C>
where
    R: BookRepository + ReviewRepository + 'static,
    C: Cache + 'static,
{
    async fn create_book(&self, book: &NewBook) -> Result<Book> {
        let created = self.repository.create_book(book).await?;
        self.invalidate().await;

        tracing::info!(book_id = created.id, title = %created.title, "Book created");
        Ok(created)
    }

    async fn get_book(&self, id: i64) -> Result<Option<Book>> {
        self.repository.get_book(id).await
    }

    async fn list_books_with_reviews(&self) -> Result<Vec<Book>> {
        if let Some(books) = self.cached_books().await {
            return Ok(books);
        }

        let books = self.repository.list_books_with_reviews().await?;
        self.populate(&books).await;
        Ok(books)
    }

    async fn find_book_by_title_and_author(
        &self,
        title: &str,
        author: &str,
    ) -> Result<Option<Book>> {
        self.repository
            .find_book_by_title_and_author(title, author)
            .await
    }
}

#[async_trait]
impl<R, C> ReviewRepository for CachedBookRepository<R, C>
where
    R: BookRepository + ReviewRepository + 'static,
    C: Cache + 'static,
{
    async fn create_review(&self, review: &NewReview) -> Result<Review> {
        let created = self.repository.create_review(review).await?;
        self.invalidate().await;

        tracing::info!(
            review_id = created.id,
            book_id = created.book_id,
            rating = created.rating,
            "Review created"
        );
        Ok(created)
    }

    async fn get_reviews_by_book(&self, book_id: i64) -> Result<Vec<Review>> {
        self.repository.get_reviews_by_book(book_id).await
    }
}
