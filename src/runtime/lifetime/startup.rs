use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::cache::register::{
    debug_object_cache_registry, get_object_cache_plugin, register_builtin_plugins,
};
use crate::cache::ObjectCache;
use crate::config::{AppConfig, CacheConfig};
use crate::errors::{JudgingError, Result};
use crate::services::notifications::{LogDispatcher, NotificationDispatcher};
use crate::services::roles::registry::RoleRegistry;
use crate::services::roles::role_cache::RoleIdCache;
use crate::services::{
    EntryService, FanOutService, JudgingOptions, ProgressService, RoleService, StatsService,
    WinnerService,
};
use crate::storage::Storage;

/// 启动完成后可供调用方使用的全部服务
pub struct EngineContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
    pub fan_out: FanOutService,
    pub entries: EntryService,
    pub winners: WinnerService,
    pub stats: StatsService,
    pub progress: ProgressService,
    pub roles: RoleService,
}

/// 创建缓存实例，配置的后端不可用时回退到 moka
async fn create_cache(config: &CacheConfig) -> Result<Arc<dyn ObjectCache>> {
    let cache_type = &config.cache_type;
    warn!("Attempting to create {} cache backend", cache_type);

    if let Some(constructor) = get_object_cache_plugin(cache_type) {
        match constructor(config.clone()).await {
            Ok(cache) => {
                warn!("Successfully created {} cache backend", cache_type);
                return Ok(Arc::from(cache));
            }
            Err(e) => warn!("Failed to create {} cache: {}", cache_type, e),
        }
    } else {
        warn!("Cache backend '{}' not found in registry", cache_type);
    }

    if cache_type != "moka" {
        if let Some(fallback) = get_object_cache_plugin("moka") {
            warn!("Falling back to memory cache");
            let cache = fallback(config.clone()).await?;
            return Ok(Arc::from(cache));
        }
    }

    Err(JudgingError::cache_plugin_not_found(format!(
        "No cache backend available (tried: {cache_type})"
    )))
}

/// 由存储与缓存组装服务
pub fn build_services(
    storage: Arc<dyn Storage>,
    cache: Arc<dyn ObjectCache>,
    options: JudgingOptions,
    default_ttl: u64,
) -> EngineContext {
    let notifier: Option<Arc<dyn NotificationDispatcher>> = if options.notifications_enabled {
        Some(Arc::new(LogDispatcher))
    } else {
        None
    };

    let role_ids = RoleIdCache::new(storage.clone(), cache.clone(), default_ttl);

    EngineContext {
        fan_out: FanOutService::new(storage.clone(), options),
        entries: EntryService::new(storage.clone(), notifier.clone()),
        winners: WinnerService::new(storage.clone(), notifier),
        stats: StatsService::new(storage.clone()),
        progress: ProgressService::new(storage.clone()),
        roles: RoleService::new(storage.clone(), role_ids, RoleRegistry::with_builtin()),
        storage,
        cache,
    }
}

/// 准备评审引擎
/// 包括存储（含迁移）、缓存与各业务服务
pub async fn prepare_engine_startup(config: &AppConfig) -> Result<EngineContext> {
    register_builtin_plugins();
    if cfg!(debug_assertions) {
        debug_object_cache_registry();
        debug!("Debug mode: Cache registry is enabled");
    }

    let storage = crate::storage::create_storage(&config.database).await?;
    warn!("Storage backend initialized and migrations completed");

    let cache = create_cache(&config.cache).await?;
    warn!("Cache backend initialized");

    let options = JudgingOptions::from(&config.judging);
    info!(
        "Judging options: fan-out concurrency {}, notifications {}",
        options.fan_out_concurrency,
        if options.notifications_enabled {
            "enabled"
        } else {
            "disabled"
        }
    );

    Ok(build_services(
        storage,
        cache,
        options,
        config.cache.default_ttl,
    ))
}
