//! Client error types.

use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status other than 404.
    #[error("Server returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status reported by the server, if the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::NotFound { .. } => Some(404),
            ClientError::Request(err) => err.status().map(|s| s.as_u16()),
            ClientError::Json(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ClientError::Api {
            status: 400,
            message: "Invalid book ID".to_string(),
        };
        assert_eq!(err.to_string(), "Server returned 400: Invalid book ID");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_not_found_status() {
        let err = ClientError::NotFound {
            message: "Book not found".to_string(),
        };
        assert_eq!(err.to_string(), "Not found: Book not found");
        assert_eq!(err.status(), Some(404));
    }
}
