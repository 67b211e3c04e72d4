//! Storage backend implementations.
//!
//! Concrete implementations of the repository traits defined in
//! `bookreview_core::storage`. The backend used by the server is selected at
//! compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//! - `inmemory`: process-local storage, lost on restart
//!
//! These features are mutually exclusive. `InMemoryRepository` is also
//! compiled for tests.
//!
//! # Examples
//!
//! Build with SQLite (default):
//! ```bash
//! cargo build -p bookreview
//! ```
//!
//! Build with in-memory storage:
//! ```bash
//! cargo build -p bookreview --no-default-features --features inmemory,memory
//! ```

#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!(
    "Features 'sqlite' and 'inmemory' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "sqlite", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'sqlite' or 'inmemory' feature. \
    Example: cargo build -p bookreview --features sqlite"
);

use async_trait::async_trait;

use bookreview_core::storage::Result;

pub mod cached;
#[cfg(any(test, feature = "inmemory"))]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use cached::CachedBookRepository;
#[cfg(any(test, feature = "inmemory"))]
pub use inmemory::InMemoryRepository;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;

/// Wipes a store back to empty, resetting id sequences.
#[async_trait]
pub trait ResetStore: Send + Sync {
    async fn clear(&self) -> Result<()>;
}
