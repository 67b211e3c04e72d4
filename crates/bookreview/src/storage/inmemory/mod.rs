//! In-memory storage backend.
//!
//! Keeps books and reviews in ordered maps behind a single `tokio` lock. Used
//! by the `inmemory` feature and as the store in handler tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use bookreview::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! ```

mod repository;

pub use repository::InMemoryRepository;
