//! 批量操作结果
//!
//! 分发与增删评委都是"收集并继续"：单项失败只记录，不中断其余项。

use serde::Serialize;
use ts_rs::TS;

use crate::errors::JudgingError;

/// 单项结果
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export, export_to = "outcome.ts")]
pub enum ItemOutcome {
    Created { entry_id: i64 },
    Removed { entry_id: i64 },
    Skipped { reason: String },
    Failed { error: String },
}

impl From<JudgingError> for ItemOutcome {
    // 资源不存在记为跳过，其余错误记为失败
    fn from(err: JudgingError) -> Self {
        if err.is_skippable() {
            ItemOutcome::Skipped {
                reason: err.message().to_string(),
            }
        } else {
            ItemOutcome::Failed {
                error: err.to_string(),
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "outcome.ts")]
pub struct ItemResult {
    pub project_id: i64,
    pub challenge_id: i64,
    pub outcome: ItemOutcome,
}

/// 按 (项目, 赛道) 逐项返回的批量结果
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[ts(export, export_to = "outcome.ts")]
pub struct BatchOutcome {
    pub succeeded: i64,
    pub skipped: i64,
    pub failed: i64,
    pub items: Vec<ItemResult>,
}

impl BatchOutcome {
    pub fn push(&mut self, project_id: i64, challenge_id: i64, outcome: ItemOutcome) {
        match outcome {
            ItemOutcome::Created { .. } | ItemOutcome::Removed { .. } => self.succeeded += 1,
            ItemOutcome::Skipped { .. } => self.skipped += 1,
            ItemOutcome::Failed { .. } => self.failed += 1,
        }
        self.items.push(ItemResult {
            project_id,
            challenge_id,
            outcome,
        });
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "outcome.ts")]
pub struct FanOutError {
    pub baseline_score_id: i64,
    pub message: String,
}

/// 基准分分发汇总
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[ts(export, export_to = "outcome.ts")]
pub struct FanOutSummary {
    pub created: i64,
    pub skipped: i64,
    pub errors: Vec<FanOutError>,
}

impl FanOutSummary {
    pub fn merge(&mut self, other: FanOutSummary) {
        self.created += other.created;
        self.skipped += other.skipped;
        self.errors.extend(other.errors);
    }
}
