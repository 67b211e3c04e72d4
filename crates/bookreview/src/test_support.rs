//! Cache doubles shared by the decorator and router tests.

use std::time::Duration;

use async_trait::async_trait;

use bookreview_core::cache::{Cache, CacheError, Result};

/// Cache whose every call fails, as when Redis is unreachable.
pub struct FailingCache;

fn refused() -> CacheError {
    CacheError::ConnectionFailed("connection refused".to_string())
}

#[async_trait]
impl Cache for FailingCache {
    async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>> {
        Err(refused())
    }

    async fn set(&self, _key: &str, _value: &[u8], _ttl: Option<Duration>) -> Result<()> {
        Err(refused())
    }

    async fn delete(&self, _key: &str) -> Result<()> {
        Err(refused())
    }

    async fn ping(&self) -> Result<()> {
        Err(refused())
    }
}

/// Cache whose calls never complete, as with a hung connection.
pub struct StalledCache;

#[async_trait]
impl Cache for StalledCache {
    async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>> {
        std::future::pending().await
    }

    async fn set(&self, _key: &str, _value: &[u8], _ttl: Option<Duration>) -> Result<()> {
        std::future::pending().await
    }

    async fn delete(&self, _key: &str) -> Result<()> {
        std::future::pending().await
    }

    async fn ping(&self) -> Result<()> {
        std::future::pending().await
    }
}
