//! Pure functions for mapping repository errors to HTTP responses.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404
/// - `AlreadyExists` -> 409
/// - `ConnectionFailed` -> 503
/// - `QueryFailed`, `Serialization` -> 500
/// - `InvalidData` -> 400
///
/// # Examples
///
/// ```
/// use bookreview_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::ConnectionFailed("database is locked".to_string());
/// assert_eq!(repository_error_to_status_code(&error), 503);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::AlreadyExists { .. } => 409,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::QueryFailed(_) => 500,
        RepositoryError::Serialization(_) => 500,
        RepositoryError::InvalidData(_) => 400,
    }
}

/// Returns the message shown to API callers for a [`RepositoryError`].
///
/// Driver details stay in the logs.
pub fn repository_error_message(error: &RepositoryError) -> &'static str {
    match error {
        RepositoryError::NotFound { .. } => "Not found",
        RepositoryError::AlreadyExists { .. } => "Already exists",
        RepositoryError::ConnectionFailed(_) => "Database unavailable",
        RepositoryError::QueryFailed(_) => "Database query failed",
        RepositoryError::Serialization(_) => "Internal Server Error",
        RepositoryError::InvalidData(_) => "Invalid data",
    }
}
