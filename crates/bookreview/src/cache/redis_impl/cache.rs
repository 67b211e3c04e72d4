//! Redis cache implementation.
//!
//! The connection is opened on first use instead of at startup, so the
//! service boots and keeps serving from the store while Redis is down. Once
//! established, the `ConnectionManager` reconnects on its own after drops.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::AsyncCommands;
use tokio::sync::OnceCell;

use bookreview_core::cache::{Cache, Result};

use super::error::map_redis_error;

/// Redis cache backend using a lazily created connection manager.
pub struct RedisCache {
    client: redis::Client,
    conn: OnceCell<ConnectionManager>,
    timeout: Duration,
}

impl RedisCache {
    /// Creates a Redis cache for `url` without connecting.
    ///
    /// `timeout` bounds both connecting and each command round trip.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::OperationFailed` if the URL cannot be parsed.
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let client = redis::Client::open(url).map_err(map_redis_error)?;
        Ok(Self {
            client,
            conn: OnceCell::new(),
            timeout,
        })
    }

    /// Returns a handle to the shared connection, connecting if needed.
    ///
    /// A failed attempt leaves the cell empty so the next call retries.
    async fn connection(&self) -> Result<ConnectionManager> {
        let conn = self
            .conn
            .get_or_try_init(|| async {
                let config = ConnectionManagerConfig::new()
                    .set_connection_timeout(self.timeout)
                    .set_response_timeout(self.timeout)
                    .set_number_of_retries(1);
                let manager = ConnectionManager::new_with_config(self.client.clone(), config)
                    .await
                    .map_err(map_redis_error)?;
                tracing::info!("connected to Redis");
                Ok(manager)
            })
            .await?;
        Ok(conn.clone())
    }
}

#[async_trait]
impl Cache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.connection().await?;
        let result: Option<Vec<u8>> = conn.get(key).await.map_err(map_redis_error)?;
        Ok(result)
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let mut conn = self.connection().await?;

        match ttl {
            Some(duration) => {
                let seconds = duration.as_secs().max(1);
                conn.set_ex::<_, _, ()>(key, value, seconds)
                    .await
                    .map_err(map_redis_error)?;
            }
            None => {
                conn.set::<_, _, ()>(key, value)
                    .await
                    .map_err(map_redis_error)?;
            }
        }

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut conn = self.connection().await?;
        conn.del::<_, ()>(key).await.map_err(map_redis_error)?;
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.connection().await?;
        let _pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(map_redis_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookreview_core::cache::CacheError;

    fn redis_url() -> String {
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string())
    }

    /// Returns a cache only when Redis answers, so these tests skip cleanly.
    async fn get_test_cache() -> Option<RedisCache> {
        let cache = RedisCache::new(&redis_url(), Duration::from_millis(500)).ok()?;
        cache.ping().await.ok()?;
        Some(cache)
    }

    /// Unique key per test run to avoid clobbering a real `books:all`.
    fn test_key(suffix: &str) -> String {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        format!("test:redis_cache:{nanos}:{suffix}")
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        assert!(RedisCache::new("not a url", Duration::from_millis(100)).is_err());
    }

    #[tokio::test]
    async fn test_unreachable_redis_fails_without_panicking() {
        // Port 1 is never a Redis server.
        let cache = RedisCache::new("redis://127.0.0.1:1", Duration::from_millis(100)).unwrap();

        let result = cache.get("books:all").await;

        assert!(matches!(
            result,
            Err(CacheError::ConnectionFailed(_) | CacheError::OperationFailed(_))
        ));
        assert!(cache.ping().await.is_err());
    }

    #[tokio::test]
    async fn test_redis_set_and_get() {
        let Some(cache) = get_test_cache().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        let key = test_key("set_get");
        let value = br#"[{"id":1,"title":"Dune","author":"Frank Herbert","reviews":[]}]"#;

        cache.set(&key, value, None).await.unwrap();
        assert_eq!(cache.get(&key).await.unwrap(), Some(value.to_vec()));

        cache.delete(&key).await.unwrap();
    }

    #[tokio::test]
    async fn test_redis_get_nonexistent() {
        let Some(cache) = get_test_cache().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        let result = cache.get(&test_key("nonexistent")).await.unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_redis_delete() {
        let Some(cache) = get_test_cache().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        let key = test_key("delete");

        cache.set(&key, b"to be deleted", None).await.unwrap();
        assert!(cache.get(&key).await.unwrap().is_some());

        cache.delete(&key).await.unwrap();
        assert!(cache.get(&key).await.unwrap().is_none());

        // Deleting again is not an error.
        cache.delete(&key).await.unwrap();
    }

    #[tokio::test]
    async fn test_redis_ttl() {
        let Some(cache) = get_test_cache().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        let key = test_key("ttl");

        cache
            .set(&key, b"expiring value", Some(Duration::from_secs(1)))
            .await
            .unwrap();
        assert!(cache.get(&key).await.unwrap().is_some());

        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert!(cache.get(&key).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_redis_overwrite() {
        let Some(cache) = get_test_cache().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        let key = test_key("overwrite");

        cache.set(&key, b"initial", None).await.unwrap();
        cache.set(&key, b"updated", None).await.unwrap();
        assert_eq!(cache.get(&key).await.unwrap(), Some(b"updated".to_vec()));

        cache.delete(&key).await.unwrap();
    }
}
