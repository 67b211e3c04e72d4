use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use bookreview_core::catalog::{
    book_error_to_status_code, review_error_to_status_code, BookError, ReviewError,
};
use bookreview_core::storage::{
    repository_error_message, repository_error_to_status_code, RepositoryError,
};

use super::body::InvalidBody;

/// Handler error type that wraps `anyhow::Error`.
///
/// The response status and the `{"error": ...}` message are chosen by
/// downcasting to the typed errors. Anything unrecognized is a 500 whose
/// details only reach the logs.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_and_message(&self) -> (StatusCode, String) {
        if let Some(err) = self.0.downcast_ref::<BookError>() {
            return (status(book_error_to_status_code(err)), err.to_string());
        }
        if let Some(err) = self.0.downcast_ref::<ReviewError>() {
            return (status(review_error_to_status_code(err)), err.to_string());
        }
        if let Some(err) = self.0.downcast_ref::<RepositoryError>() {
            return (
                status(repository_error_to_status_code(err)),
                repository_error_message(err).to_string(),
            );
        }
        if self.0.downcast_ref::<InvalidBody>().is_some() {
            return (StatusCode::BAD_REQUEST, "Invalid request body".to_string());
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error".to_string(),
        )
    }
}

fn status(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, message) = self.status_and_message();

        if status_code.is_server_error() {
            tracing::error!(error = %self.0, status = status_code.as_u16(), "Request failed");
        } else {
            tracing::debug!(error = %self.0, status = status_code.as_u16(), "Request rejected");
        }

        (status_code, Json(json!({ "error": message }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
