//! Redis cache backend implementation.

mod cache;
mod error;

pub use cache::RedisCache;
