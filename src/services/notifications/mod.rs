//! 评审事件通知
//!
//! 通知只在状态已持久化之后发出，投递失败只记录日志，不影响评审操作本身。

use std::sync::Arc;

use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::errors::{JudgingError, Result};

/// 评审引擎对外发出的事件
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum JudgingEvent {
    ReviewCompleted {
        entry_id: i64,
        judging_id: i64,
        project_id: i64,
        challenge_id: i64,
    },
    WinnersAnnounced {
        challenge_id: i64,
        project_ids: Vec<i64>,
    },
}

#[async_trait::async_trait]
pub trait NotificationDispatcher: Send + Sync {
    async fn dispatch(&self, event: &JudgingEvent) -> Result<()>;
}

/// 只写日志的默认实现
#[derive(Debug, Default)]
pub struct LogDispatcher;

#[async_trait::async_trait]
impl NotificationDispatcher for LogDispatcher {
    async fn dispatch(&self, event: &JudgingEvent) -> Result<()> {
        let payload = serde_json::to_string(event).map_err(|e| {
            JudgingError::notification_delivery(format!("无法编码事件: {e}"))
        })?;
        info!("Judging event: {}", payload);
        Ok(())
    }
}

/// 在后台任务中发送通知，调用方不等待投递完成
///
/// 失败只在任务内记录日志。返回任务句柄，未启用通知时为 None。
pub fn notify_quietly(
    dispatcher: Option<&Arc<dyn NotificationDispatcher>>,
    event: JudgingEvent,
) -> Option<JoinHandle<()>> {
    let dispatcher = Arc::clone(dispatcher?);
    Some(tokio::spawn(async move {
        if let Err(e) = dispatcher.dispatch(&event).await {
            warn!("Failed to dispatch judging event {:?}: {}", event, e);
        }
    }))
}
