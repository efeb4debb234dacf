use serde::Serialize;
use ts_rs::TS;

/// 均值 / 中位数 / 众数
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, TS)]
#[ts(export, export_to = "stats.ts")]
pub struct ScoreSummary {
    pub count: i64,
    pub mean: f64,
    pub median: f64,
    pub mode: f64,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "stats.ts")]
pub struct ChallengeScoreSummary {
    pub challenge_id: i64,
    pub challenge_name: String,
    pub summary: ScoreSummary,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "stats.ts")]
pub struct ScoreStatisticsResponse {
    // 所有赛道汇总的评委分数
    pub overall: ScoreSummary,
    // 所有赛道汇总的基准分
    pub bot: ScoreSummary,
    pub per_challenge: Vec<ChallengeScoreSummary>,
}

/// 半开区间 [lower, upper)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export, export_to = "stats.ts")]
pub struct HistogramBucket {
    pub lower: i32,
    pub upper: i32,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "stats.ts")]
pub struct ScoreHistogramResponse {
    pub judge: Vec<HistogramBucket>,
    pub bot: Vec<HistogramBucket>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export, export_to = "stats.ts")]
pub struct BotJudgeDeltaResponse {
    // 基准分减评委分的平均差值
    pub delta: f64,
    // 双方都打过分的 (项目, 赛道) 数
    pub compared_pairs: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "stats.ts")]
pub struct LeaderboardRow {
    pub project_id: i64,
    pub project_name: String,
    pub challenge_id: i64,
    pub challenge_name: String,
    pub standing: Option<i32>,
    pub average_score: f64,
    pub bot_score: Option<f64>,
    pub prize_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export, export_to = "stats.ts")]
pub struct ProjectAverageResponse {
    pub project_id: i64,
    pub challenge_id: i64,
    pub average_score: f64,
    pub judge_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bindings_stay_inside_export_dir() {
        let path = ScoreSummary::output_path().unwrap();
        assert!(!path.starts_with(".."));
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("stats.ts"));
    }
}
