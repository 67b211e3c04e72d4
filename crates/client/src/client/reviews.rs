//! Review API operations.

use super::BookReviewClient;
use crate::error::Result;
use bookreview_core::catalog::{CreateReviewRequest, Review};

impl BookReviewClient {
    /// List the reviews of a book.
    pub async fn list_reviews(&self, book_id: i64) -> Result<Vec<Review>> {
        let response = self
            .client
            .get(self.url(&format!("/books/{}/reviews", book_id)))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Add a review to a book.
    pub async fn create_review(&self, book_id: i64, comment: &str, rating: i64) -> Result<Review> {
        let response = self
            .client
            .post(self.url(&format!("/books/{}/reviews", book_id)))
            .json(&CreateReviewRequest::new(comment, rating))
            .send()
            .await?;
        self.handle_response(response).await
    }
}
