use thiserror::Error;

/// Errors raised while validating or looking up books.
///
/// The display strings are returned verbatim to API callers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookError {
    #[error("Title and author are required")]
    MissingFields,
    #[error("Title and author cannot be empty")]
    EmptyFields,
    #[error("Book with this title and author already exists")]
    Duplicate,
    #[error("Invalid book ID")]
    InvalidId,
    #[error("Book not found")]
    NotFound,
}

/// Errors raised while validating reviews.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReviewError {
    #[error("Comment and rating are required")]
    MissingFields,
    #[error("Comment cannot be empty")]
    EmptyComment,
    #[error("Rating must be a number between 1 and 5")]
    InvalidRating,
}

/// Maps a [`BookError`] to an HTTP status code.
///
/// `NotFound` is a 404; every other variant is a caller mistake (400).
pub fn book_error_to_status_code(error: &BookError) -> u16 {
    match error {
        BookError::NotFound => 404,
        BookError::MissingFields
        | BookError::EmptyFields
        | BookError::Duplicate
        | BookError::InvalidId => 400,
    }
}

/// Maps a [`ReviewError`] to an HTTP status code. All review errors are 400s.
pub fn review_error_to_status_code(_error: &ReviewError) -> u16 {
    400
}
