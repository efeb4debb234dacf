use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 排行榜排序方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "stats.ts")]
pub enum LeaderboardSort {
    #[default]
    Standing, // 名次升序，空值排最后
    Score,     // 平均分降序
    Challenge, // 赛道名称升序
}

impl std::str::FromStr for LeaderboardSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standing" => Ok(LeaderboardSort::Standing),
            "score" => Ok(LeaderboardSort::Score),
            "challenge" => Ok(LeaderboardSort::Challenge),
            _ => Err(format!("Invalid leaderboard sort: {s}")),
        }
    }
}
