use serde::{Serialize, Serializer};
use ts_rs::TS;

/// 评委评审状态标签
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JudgingStatusLabel {
    NotLive,
    Submitted,
    InProgress,
}

impl JudgingStatusLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            JudgingStatusLabel::NotLive => "Judging not live",
            JudgingStatusLabel::Submitted => "Submitted",
            JudgingStatusLabel::InProgress => "In progress",
        }
    }
}

impl Serialize for JudgingStatusLabel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "progress.ts")]
pub struct JudgeProgress {
    pub judging_id: i64,
    pub user_id: i64,
    pub display_name: String,
    pub challenge_id: i64,
    pub is_winner_assigner: bool,
    pub total_entries: i64,
    pub judged_entries: i64,
    pub progress_percentage: f64,
    #[ts(type = "\"Judging not live\" | \"Submitted\" | \"In progress\"")]
    pub status: JudgingStatusLabel,
}
