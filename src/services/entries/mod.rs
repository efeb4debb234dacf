pub mod flag;
pub mod get;
pub mod rules;
pub mod submit;
pub mod update;

use std::sync::Arc;

use super::notifications::NotificationDispatcher;
use crate::errors::Result;
use crate::models::entries::entities::JudgingEntry;
use crate::models::entries::requests::{FlagEntryRequest, UpdateEntryRequest};
use crate::models::judges::entities::JudgeAssignment;
use crate::storage::Storage;

/// 评审条目生命周期
pub struct EntryService {
    storage: Arc<dyn Storage>,
    notifier: Option<Arc<dyn NotificationDispatcher>>,
}

impl EntryService {
    pub fn new(
        storage: Arc<dyn Storage>,
        notifier: Option<Arc<dyn NotificationDispatcher>>,
    ) -> Self {
        Self { storage, notifier }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub async fn get_entry(&self, caller_user_id: i64, entry_id: i64) -> Result<JudgingEntry> {
        get::get_entry(self, caller_user_id, entry_id).await
    }

    pub async fn list_entries_for_judge(
        &self,
        caller_user_id: i64,
        judging_id: i64,
        challenge_id: i64,
    ) -> Result<Vec<JudgingEntry>> {
        get::list_entries_for_judge(self, caller_user_id, judging_id, challenge_id).await
    }

    pub async fn update_entry(
        &self,
        caller_user_id: i64,
        entry_id: i64,
        req: UpdateEntryRequest,
    ) -> Result<JudgingEntry> {
        update::update_entry(self, caller_user_id, entry_id, req).await
    }

    pub async fn submit_entry(&self, caller_user_id: i64, entry_id: i64) -> Result<JudgingEntry> {
        submit::submit_entry(self, caller_user_id, entry_id).await
    }

    pub async fn submit_reviews(
        &self,
        caller_user_id: i64,
        judging_id: i64,
    ) -> Result<JudgeAssignment> {
        submit::submit_reviews(self, caller_user_id, judging_id).await
    }

    pub async fn flag_entry(
        &self,
        caller_user_id: i64,
        req: FlagEntryRequest,
    ) -> Result<JudgingEntry> {
        flag::flag_entry(self, caller_user_id, req).await
    }
}
