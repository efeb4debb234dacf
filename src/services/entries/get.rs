use super::EntryService;
use super::rules::{ensure_owner, load_owned_entry};
use crate::errors::Result;
use crate::models::entries::entities::JudgingEntry;

pub async fn get_entry(
    service: &EntryService,
    caller_user_id: i64,
    entry_id: i64,
) -> Result<JudgingEntry> {
    load_owned_entry(service.storage(), caller_user_id, entry_id).await
}

/// 评委在某赛道下的全部条目
pub async fn list_entries_for_judge(
    service: &EntryService,
    caller_user_id: i64,
    judging_id: i64,
    challenge_id: i64,
) -> Result<Vec<JudgingEntry>> {
    let storage = service.storage();
    ensure_owner(storage, caller_user_id, judging_id).await?;
    storage.list_entries_for_judge(judging_id, challenge_id).await
}
