mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{BOOKS_ALL_KEY, DEFAULT_BOOKS_TTL};
pub use serialization::{deserialize_books, serialize_books, SerializationError};
pub use traits::Cache;
