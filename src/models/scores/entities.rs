use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 四个维度的分数与反馈
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "score.ts")]
pub struct DimensionScores {
    pub technical_score: Option<f64>,
    pub technical_feedback: Option<String>,
    pub business_score: Option<f64>,
    pub business_feedback: Option<String>,
    pub innovation_score: Option<f64>,
    pub innovation_feedback: Option<String>,
    pub ux_score: Option<f64>,
    pub ux_feedback: Option<String>,
}

impl DimensionScores {
    /// 只保留分数，丢弃反馈文本
    pub fn scores_only(&self) -> Self {
        Self {
            technical_score: self.technical_score,
            business_score: self.business_score,
            innovation_score: self.innovation_score,
            ux_score: self.ux_score,
            ..Default::default()
        }
    }

    /// 技术维度是否已有反馈
    pub fn has_technical_feedback(&self) -> bool {
        self.technical_feedback
            .as_deref()
            .is_some_and(|feedback| !feedback.trim().is_empty())
    }
}

/// 机器生成的基准分，每个 (项目, 赛道) 一条
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "score.ts")]
pub struct BaselineScore {
    pub id: i64,
    pub project_id: i64,
    pub challenge_id: i64,
    pub score: Option<f64>,
    pub ai_judged: bool,
    #[serde(flatten)]
    pub dimensions: DimensionScores,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateBaselineScoreRequest {
    pub project_id: i64,
    pub challenge_id: i64,
    pub score: Option<f64>,
    #[serde(default = "default_ai_judged")]
    pub ai_judged: bool,
    #[serde(flatten)]
    pub dimensions: DimensionScores,
}

fn default_ai_judged() -> bool {
    true
}
