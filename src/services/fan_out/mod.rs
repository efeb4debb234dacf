pub mod adhoc;
pub mod assign;
pub mod coverage;

use std::sync::Arc;

use super::JudgingOptions;
use crate::errors::Result;
use crate::models::challenges::entities::ProjectChallengePair;
use crate::models::{BatchOutcome, FanOutSummary};
use crate::storage::Storage;

/// 基准分分发与评委增删
pub struct FanOutService {
    storage: Arc<dyn Storage>,
    options: JudgingOptions,
}

impl FanOutService {
    pub fn new(storage: Arc<dyn Storage>, options: JudgingOptions) -> Self {
        Self { storage, options }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub async fn assign_baselines_to_judges(
        &self,
        baseline_score_ids: &[i64],
    ) -> Result<FanOutSummary> {
        assign::assign_baselines_to_judges(self, baseline_score_ids).await
    }

    pub async fn add_judge_to_projects(
        &self,
        judging_id: i64,
        pairs: &[ProjectChallengePair],
    ) -> Result<BatchOutcome> {
        adhoc::add_judge_to_projects(self, judging_id, pairs).await
    }

    pub async fn remove_judge_from_projects(
        &self,
        judging_id: i64,
        pairs: &[ProjectChallengePair],
    ) -> Result<BatchOutcome> {
        adhoc::remove_judge_from_projects(self, judging_id, pairs).await
    }

    pub async fn add_judge_to_challenge(
        &self,
        judging_id: i64,
        challenge_id: i64,
    ) -> Result<FanOutSummary> {
        coverage::add_judge_to_challenge(self, judging_id, challenge_id).await
    }

    pub async fn remove_judge_from_challenge(
        &self,
        judging_id: i64,
        challenge_id: i64,
    ) -> Result<u64> {
        coverage::remove_judge_from_challenge(self, judging_id, challenge_id).await
    }
}
