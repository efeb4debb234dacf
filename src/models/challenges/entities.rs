use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "challenge.ts")]
pub struct Hackathon {
    pub id: i64,
    pub name: String,
    // 提交截止时间，评审在此之后开放
    pub submission_deadline: Option<chrono::DateTime<chrono::Utc>>,
}

impl Hackathon {
    /// 提交是否已截止（未设置截止时间视为尚未截止）
    pub fn submissions_closed(&self, now: chrono::DateTime<chrono::Utc>) -> bool {
        self.submission_deadline
            .is_some_and(|deadline| deadline <= now)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "challenge.ts")]
pub struct Challenge {
    pub id: i64,
    pub hackathon_id: i64,
    pub name: String,
    // 是否已提交获奖结果（赛道级别）
    pub winners_submitted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "challenge.ts")]
pub struct Prize {
    pub id: i64,
    pub challenge_id: i64,
    pub rank: i32,
    // 奖金金额或自定义奖励，二选一
    pub amount: Option<f64>,
    pub custom_value: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "challenge.ts")]
pub struct Project {
    pub id: i64,
    pub hackathon_id: i64,
    pub name: String,
}

/// 项目-赛道关联，获奖决定落在这里
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "challenge.ts")]
pub struct ProjectChallenge {
    pub id: i64,
    pub project_id: i64,
    pub challenge_id: i64,
    pub prize_id: Option<i64>,
    pub rank: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "challenge.ts")]
pub struct ProjectChallengePair {
    pub project_id: i64,
    pub challenge_id: i64,
}
