use async_trait::async_trait;
use moka::future::Cache;
use std::time::Duration;
use tracing::debug;

use crate::cache::{CacheResult, ObjectCache};

pub struct MokaCacheWrapper {
    inner: Cache<String, String>,
}

impl MokaCacheWrapper {
    pub fn new(max_capacity: u64, default_ttl: u64) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(default_ttl))
            .build();

        debug!(
            "MokaCacheWrapper initialized with max capacity: {}",
            max_capacity
        );
        Self { inner }
    }
}

#[async_trait]
impl ObjectCache for MokaCacheWrapper {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        if let Some(value) = self.inner.get(key).await {
            debug!("Successfully retrieved key: {}", key);
            CacheResult::Found(value)
        } else {
            debug!("Key not found in cache: {}", key);
            CacheResult::NotFound
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        // Moka 使用创建时的全局 TTL，这里的 ttl 参数会被忽略
        self.inner.insert(key, value).await;

        if ttl != 0 {
            debug!("Moka cache ignores per-item TTL, using global TTL configuration");
        }
    }

    async fn remove(&self, key: &str) {
        self.inner.invalidate(key).await;
    }

    async fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_remove() {
        let cache = MokaCacheWrapper::new(16, 60);
        cache
            .insert_raw("role_id:judge".to_string(), "1".to_string(), 0)
            .await;
        assert_eq!(
            cache.get_raw("role_id:judge").await,
            CacheResult::Found("1".to_string())
        );

        cache.remove("role_id:judge").await;
        assert_eq!(cache.get_raw("role_id:judge").await, CacheResult::NotFound);
    }

    #[tokio::test]
    async fn test_typed_helpers() {
        let cache: Box<dyn ObjectCache> = Box::new(MokaCacheWrapper::new(16, 60));
        cache.insert("answer".to_string(), &42_i64, 0).await;
        assert_eq!(cache.get::<i64>("answer").await, CacheResult::Found(42));

        cache
            .insert_raw("broken".to_string(), "not-a-number".to_string(), 0)
            .await;
        assert_eq!(
            cache.get::<i64>("broken").await,
            CacheResult::ExistsButNoValue
        );
    }
}
