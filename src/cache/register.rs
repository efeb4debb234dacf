use crate::cache::ObjectCache;
use crate::cache::object_cache::moka::MokaCacheWrapper;
use crate::config::CacheConfig;
use crate::errors::Result;
use once_cell::sync::Lazy;
use std::{
    collections::HashMap,
    future::Future,
    pin::Pin,
    sync::{Arc, RwLock},
};

pub type BoxedObjectCacheFuture =
    Pin<Box<dyn Future<Output = Result<Box<dyn ObjectCache>>> + Send>>;
pub type ObjectCacheConstructor =
    Arc<dyn Fn(CacheConfig) -> BoxedObjectCacheFuture + Send + Sync>;

static OBJECT_CACHE_REGISTRY: Lazy<RwLock<HashMap<String, ObjectCacheConstructor>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

pub fn register_object_cache_plugin<S: Into<String>>(name: S, constructor: ObjectCacheConstructor) {
    let name = name.into();
    let mut registry = OBJECT_CACHE_REGISTRY
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    registry.insert(name, constructor);
}

pub fn get_object_cache_plugin(name: &str) -> Option<ObjectCacheConstructor> {
    OBJECT_CACHE_REGISTRY
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .get(name)
        .cloned()
}

/// 注册内置缓存后端
pub fn register_builtin_plugins() {
    register_object_cache_plugin(
        "moka",
        Arc::new(|config: CacheConfig| {
            Box::pin(async move {
                let cache = MokaCacheWrapper::new(config.memory.max_capacity, config.default_ttl);
                Ok(Box::new(cache) as Box<dyn ObjectCache>)
            })
        }),
    );
}

pub fn debug_object_cache_registry() {
    let registry = OBJECT_CACHE_REGISTRY
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if registry.is_empty() {
        tracing::debug!("No object cache plugins registered.");
    } else {
        tracing::debug!("Registered object cache plugins:");
        for key in registry.keys() {
            tracing::debug!(" - {}", key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryConfig;

    #[tokio::test]
    async fn test_builtin_moka_plugin() {
        register_builtin_plugins();
        let constructor = get_object_cache_plugin("moka").expect("moka plugin registered");
        let cache = constructor(CacheConfig {
            cache_type: "moka".to_string(),
            default_ttl: 60,
            memory: MemoryConfig { max_capacity: 8 },
        })
        .await
        .expect("moka cache constructed");
        cache.insert_raw("k".to_string(), "v".to_string(), 0).await;
        assert!(matches!(
            cache.get_raw("k").await,
            crate::cache::CacheResult::Found(_)
        ));
        assert!(get_object_cache_plugin("redis").is_none());
    }
}
