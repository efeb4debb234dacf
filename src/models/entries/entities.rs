use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::scores::entities::DimensionScores;

// 评审状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "entry.ts")]
pub enum ReviewStatus {
    NeedsReview, // 待评审
    Judged,      // 已评审
}

impl ReviewStatus {
    pub const NEEDS_REVIEW: &'static str = "needs_review";
    pub const JUDGED: &'static str = "judged";
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewStatus::NeedsReview => write!(f, "{}", Self::NEEDS_REVIEW),
            ReviewStatus::Judged => write!(f, "{}", Self::JUDGED),
        }
    }
}

impl std::str::FromStr for ReviewStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::NEEDS_REVIEW => Ok(ReviewStatus::NeedsReview),
            Self::JUDGED => Ok(ReviewStatus::Judged),
            _ => Err(format!("Invalid review status: {s}")),
        }
    }
}

/// 单个评委对单个 (项目, 赛道) 的评审记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "entry.ts")]
pub struct JudgingEntry {
    pub id: i64,
    // 所属评委分配 ID
    pub judging_id: i64,
    pub project_id: i64,
    pub challenge_id: i64,
    // 种子基准分
    pub baseline_score_id: Option<i64>,
    // 是否由 AI 基准分生成
    pub ai_judged: bool,
    #[serde(flatten)]
    pub dimensions: DimensionScores,
    pub score: Option<f64>,
    pub general_comments: Option<String>,
    pub review_status: ReviewStatus,
    pub flag_reason: Option<String>,
    pub flag_comment: Option<String>,
    // 赛道内最终名次
    pub standing: Option<i32>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 待插入的评审条目
#[derive(Debug, Clone, PartialEq)]
pub struct NewJudgingEntry {
    pub judging_id: i64,
    pub project_id: i64,
    pub challenge_id: i64,
    pub baseline_score_id: Option<i64>,
    pub ai_judged: bool,
    pub dimensions: DimensionScores,
}

impl NewJudgingEntry {
    /// 由基准分生成，只复制维度分数
    pub fn seeded_from(
        judging_id: i64,
        baseline: &crate::models::scores::entities::BaselineScore,
    ) -> Self {
        Self {
            judging_id,
            project_id: baseline.project_id,
            challenge_id: baseline.challenge_id,
            baseline_score_id: Some(baseline.id),
            ai_judged: baseline.ai_judged,
            dimensions: baseline.dimensions.scores_only(),
        }
    }
}

/// 插入或忽略的结果
#[derive(Debug, Clone, PartialEq)]
pub enum EntryInsertOutcome {
    Created(JudgingEntry),
    AlreadyExists,
}

/// 存储层的部分更新，None 表示不修改
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryPatch {
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
    // Some(None) 表示清除
    pub flag_reason: Option<Option<String>>,
    pub flag_comment: Option<Option<String>>,
}

impl EntryPatch {
    /// 将补丁应用到内存中的条目
    pub fn apply_to(&self, entry: &mut JudgingEntry) {
        let dims = &mut entry.dimensions;
        if let Some(v) = self.technical_score {
            dims.technical_score = Some(v);
        }
        if let Some(v) = &self.technical_feedback {
            dims.technical_feedback = Some(v.clone());
        }
        if let Some(v) = self.business_score {
            dims.business_score = Some(v);
        }
        if let Some(v) = &self.business_feedback {
            dims.business_feedback = Some(v.clone());
        }
        if let Some(v) = self.innovation_score {
            dims.innovation_score = Some(v);
        }
        if let Some(v) = &self.innovation_feedback {
            dims.innovation_feedback = Some(v.clone());
        }
        if let Some(v) = self.ux_score {
            dims.ux_score = Some(v);
        }
        if let Some(v) = &self.ux_feedback {
            dims.ux_feedback = Some(v.clone());
        }
        if let Some(v) = self.score {
            entry.score = Some(v);
        }
        if let Some(v) = &self.general_comments {
            entry.general_comments = Some(v.clone());
        }
        if let Some(v) = self.review_status {
            entry.review_status = v;
        }
        if let Some(v) = &self.flag_reason {
            entry.flag_reason = v.clone();
        }
        if let Some(v) = &self.flag_comment {
            entry.flag_comment = v.clone();
        }
    }
}
