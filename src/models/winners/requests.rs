use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 单条获奖三元组
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "winner.ts")]
pub struct WinnerTriple {
    pub challenge_id: i64,
    pub project_id: i64,
    pub prize_id: i64,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "winner.ts")]
pub struct CommitWinnersRequest {
    pub winners: Vec<WinnerTriple>,
}
