//! Cache backend implementations.
//!
//! Concrete implementations of `bookreview_core::cache::Cache`. The backend
//! used by the server is selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `redis` (default): Redis cache shared by every instance
//! - `memory`: in-process LRU cache for single-instance deployments
//!
//! These features are mutually exclusive. `MemoryCache` is also compiled for
//! tests, where it stands in for Redis.

#[cfg(all(feature = "memory", feature = "redis"))]
compile_error!(
    "Features 'memory' and 'redis' are mutually exclusive. \
    Enable only one cache backend at a time."
);

#[cfg(not(any(feature = "memory", feature = "redis")))]
compile_error!(
    "No cache backend selected. Enable 'memory' or 'redis' feature. \
    Example: cargo build -p bookreview --no-default-features --features sqlite,memory"
);

#[cfg(any(test, feature = "memory"))]
pub mod memory;

#[cfg(feature = "redis")]
pub mod redis_impl;

#[cfg(any(test, feature = "memory"))]
pub use memory::MemoryCache;

#[cfg(feature = "redis")]
pub use redis_impl::RedisCache;
