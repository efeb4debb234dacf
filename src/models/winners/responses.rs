use serde::Serialize;
use ts_rs::TS;

use super::entities::{WinnerAssignerStatus, WinnerCommit};

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "winner.ts")]
pub struct CommitWinnersResponse {
    // 本次提交涉及的赛道
    pub challenge_ids: Vec<i64>,
    pub committed: Vec<WinnerCommit>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "winner.ts")]
pub struct WinnerAssignerStatusResponse {
    pub hackathon_id: i64,
    #[ts(type = "boolean | \"view-winners\"")]
    pub status: WinnerAssignerStatus,
}
