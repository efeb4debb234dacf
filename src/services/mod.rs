//! 业务逻辑层
//!
//! 每个服务持有一个 `Storage`，按操作拆分到子模块中，返回普通的 `Result`，
//! 不涉及任何传输层细节。

pub mod entries;
pub mod fan_out;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod notifications;
pub mod progress;
pub mod roles;
pub mod stats;
pub mod winners;

pub use entries::EntryService;
pub use fan_out::FanOutService;
pub use progress::ProgressService;
pub use roles::RoleService;
pub use stats::StatsService;
pub use winners::WinnerService;

use crate::config::JudgingConfig;

/// 服务运行参数，由配置构造
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JudgingOptions {
    // 基准分并行分发数
    pub fan_out_concurrency: usize,
    pub notifications_enabled: bool,
}

impl Default for JudgingOptions {
    fn default() -> Self {
        Self {
            fan_out_concurrency: 4,
            notifications_enabled: true,
        }
    }
}

impl From<&JudgingConfig> for JudgingOptions {
    fn from(config: &JudgingConfig) -> Self {
        Self {
            fan_out_concurrency: config.fan_out_concurrency.max(1),
            notifications_enabled: config.notifications_enabled,
        }
    }
}
