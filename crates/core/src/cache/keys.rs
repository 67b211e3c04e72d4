use std::time::Duration;

/// Cache key holding the full book list with nested reviews.
///
/// This is the only key the service writes.
pub const BOOKS_ALL_KEY: &str = "books:all";

/// Default lifetime of the book list snapshot.
pub const DEFAULT_BOOKS_TTL: Duration = Duration::from_secs(300);
