//! 分数统计
//!
//! 所有基准分与平均分在比较或展示前都经过 [`rounding::round_half_up`]。

pub mod average;
pub mod delta;
pub mod histogram;
pub mod leaderboard;
pub mod rounding;
pub mod summary;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::entries::entities::{JudgingEntry, ReviewStatus};
use crate::models::stats::requests::LeaderboardSort;
use crate::models::stats::responses::{
    BotJudgeDeltaResponse, LeaderboardRow, ProjectAverageResponse, ScoreHistogramResponse,
    ScoreStatisticsResponse,
};
use crate::storage::Storage;

pub struct StatsService {
    storage: Arc<dyn Storage>,
}

impl StatsService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub async fn get_score_statistics(
        &self,
        challenge_ids: &[i64],
    ) -> Result<ScoreStatisticsResponse> {
        summary::get_score_statistics(self, challenge_ids).await
    }

    pub async fn get_score_histogram(
        &self,
        challenge_ids: &[i64],
    ) -> Result<ScoreHistogramResponse> {
        histogram::get_score_histogram(self, challenge_ids).await
    }

    pub async fn get_bot_vs_judge_delta(
        &self,
        challenge_ids: &[i64],
    ) -> Result<BotJudgeDeltaResponse> {
        delta::get_bot_vs_judge_delta(self, challenge_ids).await
    }

    pub async fn get_leaderboard(
        &self,
        challenge_ids: &[i64],
        sort_by: LeaderboardSort,
    ) -> Result<Vec<LeaderboardRow>> {
        leaderboard::get_leaderboard(self, challenge_ids, sort_by).await
    }

    pub async fn get_project_average(
        &self,
        project_id: i64,
        challenge_id: i64,
    ) -> Result<ProjectAverageResponse> {
        average::get_project_average(self, project_id, challenge_id).await
    }
}

/// 已评审且打了总分的条目分数
pub(crate) fn judged_score(entry: &JudgingEntry) -> Option<f64> {
    if entry.review_status == ReviewStatus::Judged {
        entry.score
    } else {
        None
    }
}
