use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "judge.ts")]
pub struct User {
    pub id: i64,
    pub display_name: String,
}

/// 评委分配（每个评委在每个黑客松一条）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "judge.ts")]
pub struct JudgeAssignment {
    pub id: i64,
    pub user_id: i64,
    pub hackathon_id: i64,
    // 评委是否已完成全部评审
    pub submitted: bool,
}

/// 评委对赛道的覆盖关系
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "judge.ts")]
pub struct ChallengeCoverage {
    pub id: i64,
    pub judging_id: i64,
    pub challenge_id: i64,
    // 评委分配所属的用户
    pub user_id: i64,
    pub is_winner_assigner: bool,
    // 赛道级别标记，通过每一条覆盖记录透出
    pub submitted_winners: bool,
}
