pub mod commit;
pub mod elect;
pub mod status;

use std::sync::Arc;

use super::notifications::NotificationDispatcher;
use crate::errors::Result;
use crate::models::winners::requests::CommitWinnersRequest;
use crate::models::winners::responses::{CommitWinnersResponse, WinnerAssignerStatusResponse};
use crate::storage::Storage;

/// 评奖人选举与获奖结果提交
pub struct WinnerService {
    storage: Arc<dyn Storage>,
    notifier: Option<Arc<dyn NotificationDispatcher>>,
}

impl WinnerService {
    pub fn new(
        storage: Arc<dyn Storage>,
        notifier: Option<Arc<dyn NotificationDispatcher>>,
    ) -> Self {
        Self { storage, notifier }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub async fn elect_winner_assigner(&self, challenge_id: i64, judging_id: i64) -> Result<()> {
        elect::elect_winner_assigner(self, challenge_id, judging_id).await
    }

    pub async fn get_winner_assigner_status(
        &self,
        caller_user_id: i64,
        hackathon_id: i64,
    ) -> Result<WinnerAssignerStatusResponse> {
        status::get_winner_assigner_status(self, caller_user_id, hackathon_id).await
    }

    pub async fn commit_winners(
        &self,
        caller_user_id: i64,
        req: CommitWinnersRequest,
    ) -> Result<CommitWinnersResponse> {
        commit::commit_winners(self, caller_user_id, req).await
    }
}
