use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use bookreview_core::catalog::{parse_book_id, BookError, CreateReviewRequest, Review};
use bookreview_core::storage::RepositoryError;

use crate::{
    handlers::{AppError, Payload},
    state::AppState,
};

/// GET /books/{id}/reviews - Reviews of one book.
#[axum::debug_handler]
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Review>>, AppError> {
    let book_id = parse_book_id(&id)?;

    if state.book_repo.get_book(book_id).await?.is_none() {
        return Err(BookError::NotFound.into());
    }

    let reviews = state.review_repo.get_reviews_by_book(book_id).await?;
    Ok(Json(reviews))
}

/// POST /books/{id}/reviews - Add a review to a book.
///
/// Checks run in order: book id, required fields, empty comment, rating,
/// then whether the book exists.
#[axum::debug_handler]
pub async fn create_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Payload<CreateReviewRequest>, AppError>,
) -> Result<(StatusCode, Json<Review>), AppError> {
    let book_id = parse_book_id(&id)?;
    let Payload(request) = payload?;
    let new_review = request.validate(book_id)?;

    if state.book_repo.get_book(book_id).await?.is_none() {
        return Err(BookError::NotFound.into());
    }

    let review = state
        .review_repo
        .create_review(&new_review)
        .await
        .map_err(|err| match err {
            // The book was deleted between the check and the insert.
            RepositoryError::NotFound { .. } => AppError::from(BookError::NotFound),
            other => AppError::from(other),
        })?;

    Ok((StatusCode::CREATED, Json(review)))
}
