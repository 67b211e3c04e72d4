//! Pure functions for serializing the book list snapshot to and from cache bytes.
//!
//! JSON keeps cached values human-readable, so `redis-cli GET books:all`
//! shows exactly what the API would return.

use crate::catalog::Book;
use thiserror::Error;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value to bytes.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize bytes to a value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes books (with nested reviews) to JSON bytes.
pub fn serialize_books(books: &[Book]) -> Result<Vec<u8>> {
    serde_json::to_vec(books).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a vector of books.
pub fn deserialize_books(bytes: &[u8]) -> Result<Vec<Book>> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}
