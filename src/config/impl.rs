use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // 内置默认值，保证没有配置文件也能启动
            .set_default("app.system_name", "Judging Engine")?
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "info")?
            .set_default("database.url", "judging.db")?
            .set_default("database.pool_size", 10)?
            .set_default("database.timeout", 30)?
            .set_default("cache.type", "moka")?
            .set_default("cache.default_ttl", 3600)?
            .set_default("cache.memory.max_capacity", 10_000)?
            .set_default("judging.fan_out_concurrency", 0)?
            .set_default("judging.notifications_enabled", true)?
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("JUDGING")
                    .separator("_")
                    .try_parsing(true),
            );

        // 支持从环境变量加载
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?;

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        // 处理分发并发数
        if app_config.judging.fan_out_concurrency == 0 {
            app_config.judging.fan_out_concurrency = num_cpus::get();
        }

        app_config.validate()?;
        Ok(app_config)
    }

    /// 校验加载后的配置
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.pool_size == 0 {
            return Err(ConfigError::Message(
                "database.pool_size 必须大于 0".to_string(),
            ));
        }
        if self.cache.memory.max_capacity == 0 {
            return Err(ConfigError::Message(
                "cache.memory.max_capacity 必须大于 0".to_string(),
            ));
        }
        // 内存库在进程退出后丢失全部评审数据
        if self.is_production() && self.database.url.contains(":memory:") {
            return Err(ConfigError::Message(
                "生产环境不能使用内存数据库".to_string(),
            ));
        }
        Ok(())
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppSettings, CacheConfig, DatabaseConfig, JudgingConfig, MemoryConfig};

    fn sample(environment: &str, url: &str) -> AppConfig {
        AppConfig {
            app: AppSettings {
                system_name: "Judging Engine".to_string(),
                environment: environment.to_string(),
                log_level: "info".to_string(),
            },
            database: DatabaseConfig {
                url: url.to_string(),
                pool_size: 4,
                timeout: 30,
            },
            cache: CacheConfig {
                cache_type: "moka".to_string(),
                default_ttl: 3600,
                memory: MemoryConfig { max_capacity: 100 },
            },
            judging: JudgingConfig {
                fan_out_concurrency: 2,
                notifications_enabled: true,
            },
        }
    }

    #[test]
    fn test_validate_accepts_defaults() {
        let config = sample("development", "sqlite::memory:");
        assert!(config.validate().is_ok());
        assert!(config.is_development());
    }

    #[test]
    fn test_validate_rejects_zero_pool() {
        let mut config = sample("development", "judging.db");
        config.database.pool_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_production_rejects_memory_database() {
        let config = sample("production", "sqlite::memory:");
        assert!(config.is_production());
        assert!(config.validate().is_err());
        assert!(sample("production", "judging.db").validate().is_ok());
    }
}
