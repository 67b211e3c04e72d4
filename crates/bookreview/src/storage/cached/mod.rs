//! Cached repository decorators.
//!
//! Decorators wrap the repository traits with the cache-aside pattern:
//!
//! - **Reads**: check the cache first, on miss fetch from the store and populate the cache
//! - **Writes**: persist to the store, then invalidate the cache
//!
//! The cache is never required for correctness. Every cache call is bounded
//! by a timeout and any cache failure degrades to reading the store.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let repo = Arc::new(SqliteRepository::new("database.sqlite").await?);
//! let cache = Arc::new(RedisCache::new("redis://localhost:6379", Duration::from_millis(250))?);
//!
//! let books = CachedBookRepository::new(repo, cache, Duration::from_secs(300), Duration::from_millis(250));
//! ```

mod books;

pub use books::CachedBookRepository;
