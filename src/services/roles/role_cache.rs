//! 角色名到角色 ID 的读穿缓存

use std::sync::Arc;

use tracing::debug;

use crate::cache::{CacheResult, ObjectCache};
use crate::errors::{JudgingError, Result};
use crate::storage::Storage;

pub struct RoleIdCache {
    storage: Arc<dyn Storage>,
    cache: Arc<dyn ObjectCache>,
    ttl: u64,
}

impl RoleIdCache {
    pub fn new(storage: Arc<dyn Storage>, cache: Arc<dyn ObjectCache>, ttl: u64) -> Self {
        Self {
            storage,
            cache,
            ttl,
        }
    }

    fn key(name: &str) -> String {
        format!("role_id:{name}")
    }

    pub async fn role_id(&self, name: &str) -> Result<i64> {
        let key = Self::key(name);
        if let CacheResult::Found(id) = self.cache.get::<i64>(&key).await {
            return Ok(id);
        }

        let role = self
            .storage
            .get_role_by_name(name)
            .await?
            .ok_or_else(|| JudgingError::not_found(format!("角色不存在: {name}")))?;

        debug!("Caching role id {} for {}", role.id, name);
        self.cache.insert(key, &role.id, self.ttl).await;
        Ok(role.id)
    }

    /// 角色表变更后调用
    pub async fn invalidate(&self, name: &str) {
        self.cache.remove(&Self::key(name)).await;
    }

    pub async fn invalidate_all(&self) {
        self.cache.invalidate_all().await;
    }
}
