pub mod challenge;
pub mod judge;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::progress::responses::JudgeProgress;
use crate::storage::Storage;

/// 评审进度
pub struct ProgressService {
    storage: Arc<dyn Storage>,
}

impl ProgressService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub async fn get_judge_progress(
        &self,
        judging_id: i64,
        challenge_id: i64,
    ) -> Result<JudgeProgress> {
        judge::get_judge_progress(self, judging_id, challenge_id).await
    }

    pub async fn get_challenge_progress(&self, challenge_id: i64) -> Result<Vec<JudgeProgress>> {
        challenge::get_challenge_progress(self, challenge_id).await
    }
}
