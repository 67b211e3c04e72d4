//! SQLite repository implementation.
//!
//! Implements the repository traits from `bookreview_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use bookreview_core::catalog::{Book, NewBook, NewReview, Review};
use bookreview_core::storage::{
    BookRepository, RepositoryError, Result, ReviewRepository, StorageHealth,
};

use crate::storage::ResetStore;

use super::conversions::{attach_reviews, row_to_book, row_to_review};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Loads one book and its reviews on the connection thread.
fn load_book(
    conn: &rusqlite::Connection,
    sql: &str,
    params: impl rusqlite::Params,
) -> rusqlite::Result<Option<Book>> {
    let mut stmt = conn.prepare(sql)?;
    let book = match stmt.query_row(params, row_to_book) {
        Ok(book) => book,
        Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
        Err(e) => return Err(e),
    };

    let mut stmt = conn.prepare(schema::SELECT_REVIEWS_BY_BOOK)?;
    let reviews = stmt
        .query_map([book.id], row_to_review)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(Some(book.with_reviews(reviews)))
}

/// SQLite-based repository implementation.
///
/// All statements run on the single `tokio-rusqlite` connection thread, so
/// writes are serialized.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens (or creates) a file-based database and applies the schema.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a repository backed by a private in-memory database.
    ///
    /// Data is lost when the repository is dropped.
    #[cfg(test)]
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

// ============================================================================
// BookRepository implementation
// ============================================================================

#[async_trait]
impl BookRepository for SqliteRepository {
    async fn create_book(&self, book: &NewBook) -> Result<Book> {
        let title = book.title().to_string();
        let author = book.author().to_string();
        let key = format!("{title} by {author}");
        let new_book = book.clone();

        let id = self
            .conn
            .call(move |conn| {
                conn.execute(schema::INSERT_BOOK, rusqlite::params![title, author])
                    .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Book", key))?;

        Ok(new_book.into_book(id))
    }

    async fn get_book(&self, id: i64) -> Result<Option<Book>> {
        self.conn
            .call(move |conn| load_book(conn, schema::SELECT_BOOK_BY_ID, [id]).map_err(wrap_err))
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Book", id.to_string()))
    }

    async fn list_books_with_reviews(&self) -> Result<Vec<Book>> {
        self.conn
            .call(|conn| {
                // One read transaction so books and reviews come from the same snapshot.
                let tx = conn.transaction().map_err(wrap_err)?;

                let books = {
                    let mut stmt = tx.prepare(schema::SELECT_ALL_BOOKS).map_err(wrap_err)?;
                    let rows = stmt.query_map([], row_to_book).map_err(wrap_err)?;
                    rows.collect::<rusqlite::Result<Vec<_>>>()
                        .map_err(wrap_err)?
                };
                let reviews = {
                    let mut stmt = tx.prepare(schema::SELECT_ALL_REVIEWS).map_err(wrap_err)?;
                    let rows = stmt.query_map([], row_to_review).map_err(wrap_err)?;
                    rows.collect::<rusqlite::Result<Vec<_>>>()
                        .map_err(wrap_err)?
                };

                tx.commit().map_err(wrap_err)?;
                Ok(attach_reviews(books, reviews))
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Book"))
    }

    async fn find_book_by_title_and_author(
        &self,
        title: &str,
        author: &str,
    ) -> Result<Option<Book>> {
        let title = title.to_string();
        let author = author.to_string();

        self.conn
            .call(move |conn| {
                load_book(
                    conn,
                    schema::SELECT_BOOK_BY_TITLE_AND_AUTHOR,
                    rusqlite::params![title, author],
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Book"))
    }
}

// ============================================================================
// ReviewRepository implementation
// ============================================================================

#[async_trait]
impl ReviewRepository for SqliteRepository {
    async fn create_review(&self, review: &NewReview) -> Result<Review> {
        let book_id = review.book_id();
        let comment = review.comment().to_string();
        let rating = review.rating();
        let new_review = review.clone();

        let id = self
            .conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;

                let exists = tx
                    .prepare(schema::SELECT_BOOK_BY_ID)
                    .and_then(|mut stmt| stmt.exists([book_id]))
                    .map_err(wrap_err)?;
                if !exists {
                    return Ok(None);
                }

                tx.execute(
                    schema::INSERT_REVIEW,
                    rusqlite::params![book_id, comment, rating],
                )
                .map_err(wrap_err)?;
                let id = tx.last_insert_rowid();

                tx.commit().map_err(wrap_err)?;
                Ok(Some(id))
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Review", book_id.to_string()))?;

        match id {
            Some(id) => Ok(new_review.into_review(id)),
            None => Err(RepositoryError::NotFound {
                entity_type: "Book",
                id: book_id.to_string(),
            }),
        }
    }

    async fn get_reviews_by_book(&self, book_id: i64) -> Result<Vec<Review>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_REVIEWS_BY_BOOK)
                    .map_err(wrap_err)?;
                let reviews = stmt
                    .query_map([book_id], row_to_review)
                    .map_err(wrap_err)?
                    .collect::<rusqlite::Result<Vec<_>>>()
                    .map_err(wrap_err)?;
                Ok(reviews)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Review", book_id.to_string()))
    }
}

#[async_trait]
impl StorageHealth for SqliteRepository {
    async fn ping(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.query_row(schema::PING, [], |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Database"))
    }
}

#[async_trait]
impl ResetStore for SqliteRepository {
    async fn clear(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                tx.execute_batch(schema::CLEAR_ALL).map_err(wrap_err)?;
                tx.commit().map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Book"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookreview_core::catalog::{CreateBookRequest, CreateReviewRequest};

    async fn repo() -> SqliteRepository {
        SqliteRepository::new_in_memory().await.unwrap()
    }

    fn new_book(title: &str, author: &str) -> NewBook {
        CreateBookRequest::new(title, author).validate().unwrap()
    }

    fn new_review(book_id: i64, comment: &str, rating: i64) -> NewReview {
        CreateReviewRequest::new(comment, rating)
            .validate(book_id)
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get_book() {
        let repo = repo().await;

        let created = repo.create_book(&new_book("1984", "George Orwell")).await.unwrap();
        assert_eq!(created, Book::new(1, "1984", "George Orwell"));

        let fetched = repo.get_book(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_get_missing_book() {
        let repo = repo().await;
        assert_eq!(repo.get_book(999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_duplicate_book_is_rejected_by_unique_index() {
        let repo = repo().await;
        repo.create_book(&new_book("Emma", "Jane Austen")).await.unwrap();

        let result = repo.create_book(&new_book("Emma", "Jane Austen")).await;

        assert!(matches!(
            result,
            Err(RepositoryError::AlreadyExists {
                entity_type: "Book",
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_same_title_different_author_is_allowed() {
        let repo = repo().await;
        repo.create_book(&new_book("Emma", "Jane Austen")).await.unwrap();

        let other = repo.create_book(&new_book("Emma", "Someone Else")).await;

        assert!(other.is_ok());
    }

    #[tokio::test]
    async fn test_find_book_by_title_and_author() {
        let repo = repo().await;
        let created = repo.create_book(&new_book("Dune", "Frank Herbert")).await.unwrap();

        let found = repo
            .find_book_by_title_and_author("Dune", "Frank Herbert")
            .await
            .unwrap();
        assert_eq!(found.map(|b| b.id), Some(created.id));

        let missing = repo
            .find_book_by_title_and_author("Dune", "Brian Herbert")
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_create_review_and_list_by_book() {
        let repo = repo().await;
        let book = repo.create_book(&new_book("1984", "George Orwell")).await.unwrap();

        let first = repo.create_review(&new_review(book.id, "Chilling.", 5)).await.unwrap();
        let second = repo.create_review(&new_review(book.id, "Bleak.", 3)).await.unwrap();

        assert_eq!(first, Review::new(1, book.id, "Chilling.", 5));
        assert_eq!(
            repo.get_reviews_by_book(book.id).await.unwrap(),
            vec![first, second]
        );
    }

    #[tokio::test]
    async fn test_create_review_for_missing_book() {
        let repo = repo().await;

        let result = repo.create_review(&new_review(42, "Ghost.", 3)).await;

        assert_eq!(
            result,
            Err(RepositoryError::NotFound {
                entity_type: "Book",
                id: "42".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_list_books_with_reviews_nests_and_orders() {
        let repo = repo().await;
        let gatsby = repo
            .create_book(&new_book("The Great Gatsby", "F. Scott Fitzgerald"))
            .await
            .unwrap();
        let orwell = repo.create_book(&new_book("1984", "George Orwell")).await.unwrap();
        repo.create_review(&new_review(orwell.id, "Prophetic.", 5)).await.unwrap();
        repo.create_review(&new_review(gatsby.id, "Dazzling.", 4)).await.unwrap();

        let books = repo.list_books_with_reviews().await.unwrap();

        assert_eq!(books.len(), 2);
        assert_eq!(books[0].id, gatsby.id);
        assert_eq!(books[0].reviews[0].comment, "Dazzling.");
        assert_eq!(books[1].id, orwell.id);
        assert_eq!(books[1].reviews[0].comment, "Prophetic.");
    }

    #[tokio::test]
    async fn test_get_book_includes_reviews() {
        let repo = repo().await;
        let book = repo.create_book(&new_book("Emma", "Jane Austen")).await.unwrap();
        repo.create_review(&new_review(book.id, "Witty.", 4)).await.unwrap();

        let fetched = repo.get_book(book.id).await.unwrap().unwrap();

        assert_eq!(fetched.reviews.len(), 1);
    }

    #[tokio::test]
    async fn test_clear_resets_tables_and_ids() {
        let repo = repo().await;
        let book = repo.create_book(&new_book("Emma", "Jane Austen")).await.unwrap();
        repo.create_review(&new_review(book.id, "Witty.", 4)).await.unwrap();

        repo.clear().await.unwrap();

        assert!(repo.list_books_with_reviews().await.unwrap().is_empty());
        let again = repo.create_book(&new_book("Emma", "Jane Austen")).await.unwrap();
        assert_eq!(again.id, 1);
    }

    #[tokio::test]
    async fn test_ping() {
        assert!(repo().await.ping().await.is_ok());
    }

    #[tokio::test]
    async fn test_file_database_persists_across_opens() {
        let path = std::env::temp_dir().join(format!(
            "bookreview-test-{}.sqlite",
            std::process::id()
        ));
        let path_str = path.to_string_lossy().to_string();
        let _ = std::fs::remove_file(&path);

        {
            let repo = SqliteRepository::new(&path_str).await.unwrap();
            repo.create_book(&new_book("Emma", "Jane Austen")).await.unwrap();
        }

        let reopened = SqliteRepository::new(&path_str).await.unwrap();
        let books = reopened.list_books_with_reviews().await.unwrap();
        assert_eq!(books.len(), 1);

        drop(reopened);
        let _ = std::fs::remove_file(&path);
    }
}
