use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::{EntryPatch, ReviewStatus};

/// 更新评审条目请求，所有字段可选
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "entry.ts")]
pub struct UpdateEntryRequest {
    pub technical_score: Option<f64>,
    pub technical_feedback: Option<String>,
    pub business_score: Option<f64>,
    pub business_feedback: Option<String>,
    pub innovation_score: Option<f64>,
    pub innovation_feedback: Option<String>,
    pub ux_score: Option<f64>,
    pub ux_feedback: Option<String>,
    pub score: Option<f64>,
    pub general_comments: Option<String>,
    pub review_status: Option<ReviewStatus>,
}

impl UpdateEntryRequest {
    /// 是否修改了评审内容（分数、反馈、评语）
    pub fn touches_content(&self) -> bool {
        self.technical_score.is_some()
            || self.technical_feedback.is_some()
            || self.business_score.is_some()
            || self.business_feedback.is_some()
            || self.innovation_score.is_some()
            || self.innovation_feedback.is_some()
            || self.ux_score.is_some()
            || self.ux_feedback.is_some()
            || self.score.is_some()
            || self.general_comments.is_some()
    }

    pub fn into_patch(self) -> EntryPatch {
        EntryPatch {
            technical_score: self.technical_score,
            technical_feedback: self.technical_feedback,
            business_score: self.business_score,
            business_feedback: self.business_feedback,
            innovation_score: self.innovation_score,
            innovation_feedback: self.innovation_feedback,
            ux_score: self.ux_score,
            ux_feedback: self.ux_feedback,
            score: self.score,
            general_comments: self.general_comments,
            review_status: self.review_status,
            ..Default::default()
        }
    }
}

// 标记动作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "entry.ts")]
pub enum FlagStatus {
    Flag,
    Unflag,
}

/// 标记/取消标记项目，范围限定在单个 (项目, 赛道)
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "entry.ts")]
pub struct FlagEntryRequest {
    pub project_id: i64,
    pub challenge_id: i64,
    pub status: FlagStatus,
    pub reason: Option<String>,
    pub comment: Option<String>,
}
