use axum::{extract::State, http::StatusCode, Json};

use bookreview_core::catalog::{Book, BookError, CreateBookRequest};
use bookreview_core::storage::RepositoryError;

use crate::{
    handlers::{AppError, Payload},
    state::AppState,
};

/// GET /books - All books with their reviews.
///
/// Served from the cache when the snapshot is present.
#[axum::debug_handler]
pub async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, AppError> {
    let books = state.book_repo.list_books_with_reviews().await?;
    tracing::debug!(count = books.len(), "Listed books");
    Ok(Json(books))
}

/// POST /books - Create a book.
///
/// Rejects a second book with the same title and author, both before the
/// insert and, for concurrent requests, through the store's uniqueness check.
#[axum::debug_handler]
pub async fn create_book(
    State(state): State<AppState>,
    payload: Result<Payload<CreateBookRequest>, AppError>,
) -> Result<(StatusCode, Json<Book>), AppError> {
    let Payload(request) = payload?;
    let new_book = request.validate()?;

    let existing = state
        .book_repo
        .find_book_by_title_and_author(new_book.title(), new_book.author())
        .await?;
    if existing.is_some() {
        return Err(BookError::Duplicate.into());
    }

    let book = state
        .book_repo
        .create_book(&new_book)
        .await
        .map_err(|err| match err {
            RepositoryError::AlreadyExists { .. } => AppError::from(BookError::Duplicate),
            other => AppError::from(other),
        })?;

    Ok((StatusCode::CREATED, Json(book)))
}
