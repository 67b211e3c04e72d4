//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It holds repository trait objects for storage
//! abstraction; the concrete backend combination is chosen via feature flags.

use std::sync::Arc;
use std::time::Duration;

use bookreview_core::cache::Cache;
use bookreview_core::storage::{BookRepository, ReviewRepository, StorageHealth};

use crate::config::Config;
use crate::storage::{CachedBookRepository, ResetStore};

/// Shared application state.
///
/// Cloned for each request handler. Every field is an `Arc` to a client
/// created once at startup.
#[derive(Clone)]
pub struct AppState {
    /// Book repository (cached, wraps the store).
    pub book_repo: Arc<dyn BookRepository>,
    /// Review repository (same decorator as `book_repo`).
    pub review_repo: Arc<dyn ReviewRepository>,
    /// Liveness of the durable store.
    pub storage_health: Arc<dyn StorageHealth>,
    /// Store wipe, used only by the seed command.
    pub store_reset: Arc<dyn ResetStore>,
    /// Raw cache handle, used by the health check.
    pub cache: Arc<dyn Cache>,
    /// Upper bound on each cache call.
    pub cache_timeout: Duration,
}

impl AppState {
    /// Wires a store and a cache together behind the cache-aside decorator.
    pub fn from_parts<R, C>(store: Arc<R>, cache: Arc<C>, ttl: Duration, timeout: Duration) -> Self
    where
        R: BookRepository + ReviewRepository + StorageHealth + ResetStore + 'static,
        C: Cache + 'static,
    {
        let cached = Arc::new(CachedBookRepository::new(
            store.clone(),
            cache.clone(),
            ttl,
            timeout,
        ));

        Self {
            book_repo: cached.clone(),
            review_repo: cached,
            storage_health: store.clone(),
            store_reset: store,
            cache,
            cache_timeout: timeout,
        }
    }
}

// ============================================================================
// Factory functions for different backend combinations
// ============================================================================

#[cfg(all(feature = "sqlite", feature = "memory"))]
mod sqlite_memory {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::storage::SqliteRepository;

    impl AppState {
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let sqlite_repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let memory_cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            Ok(Self::from_parts(
                sqlite_repo,
                memory_cache,
                config.cache_ttl(),
                config.cache_timeout(),
            ))
        }
    }
}

#[cfg(all(feature = "sqlite", feature = "redis"))]
mod sqlite_redis {
    use super::*;
    use crate::cache::RedisCache;
    use crate::storage::SqliteRepository;

    impl AppState {
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let sqlite_repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let redis_cache = Arc::new(RedisCache::new(
                &config.redis_url,
                config.cache_timeout(),
            )?);

            Ok(Self::from_parts(
                sqlite_repo,
                redis_cache,
                config.cache_ttl(),
                config.cache_timeout(),
            ))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "memory"))]
mod inmemory_memory {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::storage::InMemoryRepository;

    impl AppState {
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let inmemory_repo = Arc::new(InMemoryRepository::new());
            let memory_cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            Ok(Self::from_parts(
                inmemory_repo,
                memory_cache,
                config.cache_ttl(),
                config.cache_timeout(),
            ))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "redis"))]
mod inmemory_redis {
    use super::*;
    use crate::cache::RedisCache;
    use crate::storage::InMemoryRepository;

    impl AppState {
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let inmemory_repo = Arc::new(InMemoryRepository::new());
            let redis_cache = Arc::new(RedisCache::new(
                &config.redis_url,
                config.cache_timeout(),
            )?);

            Ok(Self::from_parts(
                inmemory_repo,
                redis_cache,
                config.cache_ttl(),
                config.cache_timeout(),
            ))
        }
    }
}

#[cfg(test)]
impl AppState {
    /// In-memory store and cache, as used by the handler tests.
    pub fn for_tests() -> Self {
        use crate::cache::MemoryCache;
        use crate::storage::InMemoryRepository;

        Self::from_parts(
            Arc::new(InMemoryRepository::new()),
            Arc::new(MemoryCache::new(std::num::NonZeroUsize::new(100).unwrap())),
            Duration::from_secs(300),
            Duration::from_millis(250),
        )
    }
}
