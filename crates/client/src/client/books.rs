//! Book API operations.

use super::BookReviewClient;
use crate::error::Result;
use bookreview_core::catalog::{Book, CreateBookRequest};

impl BookReviewClient {
    /// List all books with their reviews.
    pub async fn list_books(&self) -> Result<Vec<Book>> {
        let response = self.client.get(self.url("/books")).send().await?;
        self.handle_response(response).await
    }

    /// Create a new book.
    pub async fn create_book(&self, title: &str, author: &str) -> Result<Book> {
        let response = self
            .client
            .post(self.url("/books"))
            .json(&CreateBookRequest::new(title, author))
            .send()
            .await?;
        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::{test_server, BookReviewClient};
    use crate::error::ClientError;

    #[tokio::test]
    async fn test_create_then_list_books() {
        let client = BookReviewClient::new(test_server::spawn().await);

        let book = client.create_book("1984", "George Orwell").await.unwrap();
        let books = client.list_books().await.unwrap();

        assert_eq!(book.id, 1);
        assert_eq!(book.title, "1984");
        assert!(book.reviews.is_empty());
        assert_eq!(books, vec![book]);
    }

    #[tokio::test]
    async fn test_create_book_validation_error() {
        let client = BookReviewClient::new(test_server::spawn().await);

        let err = client.create_book("  ", "George Orwell").await.unwrap_err();

        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Title and author cannot be empty");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
