use std::{env, num::NonZeroUsize, time::Duration};

use bookreview_core::cache::DEFAULT_BOOKS_TTL;

const DEFAULT_CACHE_TIMEOUT_MS: u64 = 250;
const DEFAULT_CACHE_MAX_ENTRIES: NonZeroUsize = match NonZeroUsize::new(1_000) {
    Some(n) => n,
    None => unreachable!(),
};

/// Application configuration loaded from environment variables.
///
/// Bind address and port are CLI flags (see `main.rs`); everything about
/// the store and cache lives here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Book list cache TTL in seconds (default: 300)
    pub cache_ttl_seconds: u64,
    /// Upper bound on each cache call in milliseconds (default: 250)
    pub cache_timeout_ms: u64,
    /// Maximum number of entries in the memory cache (default: 1,000)
    #[cfg_attr(not(feature = "memory"), allow(dead_code))]
    pub cache_max_entries: NonZeroUsize,
    /// Path to SQLite database file (default: "database.sqlite")
    #[cfg_attr(not(feature = "sqlite"), allow(dead_code))]
    pub sqlite_path: String,
    /// Redis connection URL (default: "redis://localhost:6379")
    #[cfg_attr(not(feature = "redis"), allow(dead_code))]
    pub redis_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_TTL_SECONDS` - Book list TTL in seconds (default: 300)
    /// - `CACHE_TIMEOUT_MS` - Cache call timeout in milliseconds (default: 250)
    /// - `CACHE_MAX_ENTRIES` - Memory cache capacity (default: 1,000)
    /// - `SQLITE_PATH` - SQLite database path (default: "database.sqlite")
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parsed = |key: &str| lookup(key).and_then(|v| v.trim().parse().ok());

        Self {
            cache_ttl_seconds: parsed("CACHE_TTL_SECONDS").unwrap_or(DEFAULT_BOOKS_TTL.as_secs()),
            cache_timeout_ms: parsed("CACHE_TIMEOUT_MS").unwrap_or(DEFAULT_CACHE_TIMEOUT_MS),
            cache_max_entries: lookup("CACHE_MAX_ENTRIES")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_CACHE_MAX_ENTRIES),
            sqlite_path: lookup("SQLITE_PATH").unwrap_or_else(|| "database.sqlite".to_string()),
            redis_url: lookup("REDIS_URL")
                .unwrap_or_else(|| "redis://localhost:6379".to_string()),
        }
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    /// Get the per-call cache timeout as a Duration.
    pub fn cache_timeout(&self) -> Duration {
        Duration::from_millis(self.cache_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
