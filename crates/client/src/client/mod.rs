//! HTTP client for the bookreview API.

pub mod books;
pub mod health;
pub mod reviews;

use serde::Deserialize;

use crate::error::{ClientError, Result};

/// HTTP client for the bookreview API.
#[derive(Debug, Clone)]
pub struct BookReviewClient {
    client: reqwest::Client,
    base_url: String,
}

/// Body of every non-2xx response from the server.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl BookReviewClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create from environment (BOOKREVIEW_URL or default).
    pub fn from_env() -> Self {
        let base_url = std::env::var("BOOKREVIEW_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());
        Self::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decodes a success body, or turns the `{"error"}` body into a `ClientError`.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return response.json().await.map_err(ClientError::from);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or_else(|_| {
                if text.is_empty() {
                    status.canonical_reason().unwrap_or("Unknown error").to_string()
                } else {
                    text
                }
            });

        if status == reqwest::StatusCode::NOT_FOUND {
            Err(ClientError::NotFound { message })
        } else {
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[cfg(test)]
pub(crate) mod test_server {
    //! A stand-in API server bound to an ephemeral local port.

    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::{IntoResponse, Response},
        routing::get,
        Json, Router,
    };
    use bookreview_core::catalog::{Book, CreateBookRequest, CreateReviewRequest, Review};
    use serde_json::json;

    #[derive(Clone, Default)]
    struct Catalog {
        books: Arc<Mutex<Vec<Book>>>,
    }

    fn error(status: StatusCode, message: &str) -> Response {
        (status, Json(json!({ "error": message }))).into_response()
    }

    async fn list_books(State(catalog): State<Catalog>) -> Json<Vec<Book>> {
        Json(catalog.books.lock().unwrap().clone())
    }

    async fn create_book(
        State(catalog): State<Catalog>,
        Json(request): Json<CreateBookRequest>,
    ) -> Response {
        let new_book = match request.validate() {
            Ok(new_book) => new_book,
            Err(err) => return error(StatusCode::BAD_REQUEST, &err.to_string()),
        };
        let mut books = catalog.books.lock().unwrap();
        let book = Book::new(books.len() as i64 + 1, new_book.title(), new_book.author());
        books.push(book.clone());
        (StatusCode::CREATED, Json(book)).into_response()
    }

    async fn list_reviews(State(catalog): State<Catalog>, Path(id): Path<i64>) -> Response {
        let books = catalog.books.lock().unwrap();
        match books.iter().find(|b| b.id == id) {
            Some(book) => Json(book.reviews.clone()).into_response(),
            None => error(StatusCode::NOT_FOUND, "Book not found"),
        }
    }

    async fn create_review(
        State(catalog): State<Catalog>,
        Path(id): Path<i64>,
        Json(request): Json<CreateReviewRequest>,
    ) -> Response {
        let new_review = match request.validate(id) {
            Ok(new_review) => new_review,
            Err(err) => return error(StatusCode::BAD_REQUEST, &err.to_string()),
        };
        let mut books = catalog.books.lock().unwrap();
        let Some(book) = books.iter_mut().find(|b| b.id == id) else {
            return error(StatusCode::NOT_FOUND, "Book not found");
        };
        let review = Review::new(
            book.reviews.len() as i64 + 1,
            id,
            new_review.comment(),
            new_review.rating(),
        );
        book.reviews.push(review.clone());
        (StatusCode::CREATED, Json(review)).into_response()
    }

    async fn health() -> Json<serde_json::Value> {
        Json(json!({
            "status": "OK",
            "timestamp": "2024-01-01T00:00:00.000Z",
            "database": "Connected",
            "redis": "Disconnected",
        }))
    }

    /// Starts the server and returns its base URL.
    pub async fn spawn() -> String {
        let app = Router::new()
            .route("/books", get(list_books).post(create_book))
            .route("/books/{id}/reviews", get(list_reviews).post(create_review))
            .route("/health", get(health))
            .with_state(Catalog::default());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}", addr)
    }
}
