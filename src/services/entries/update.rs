use tracing::info;

use super::EntryService;
use super::rules::{ensure_content_editable, load_owned_entry, validate_scores};
use crate::errors::{JudgingError, Result};
use crate::models::entries::entities::{JudgingEntry, ReviewStatus};
use crate::models::entries::requests::UpdateEntryRequest;
use crate::services::notifications::{JudgingEvent, notify_quietly};

/// 更新评审条目
///
/// 修改内容需要条目仍处于可编辑窗口；只改状态（提交或重开）总是允许。
pub async fn update_entry(
    service: &EntryService,
    caller_user_id: i64,
    entry_id: i64,
    req: UpdateEntryRequest,
) -> Result<JudgingEntry> {
    let storage = service.storage();
    let entry = load_owned_entry(storage, caller_user_id, entry_id).await?;

    let touches_content = req.touches_content();
    if !touches_content && req.review_status.is_none() {
        return Err(JudgingError::validation("没有需要更新的字段"));
    }
    if touches_content {
        ensure_content_editable(&entry)?;
        validate_scores(&req)?;
    }

    let completes = req.review_status == Some(ReviewStatus::Judged)
        && entry.review_status != ReviewStatus::Judged;

    let updated = storage
        .update_entry(entry.id, req.into_patch())
        .await?
        .ok_or_else(|| JudgingError::not_found(format!("评审条目不存在: {entry_id}")))?;

    info!(
        "Entry {} updated by user {} (status: {})",
        updated.id, caller_user_id, updated.review_status
    );

    if completes {
        notify_quietly(
            service.notifier.as_ref(),
            JudgingEvent::ReviewCompleted {
                entry_id: updated.id,
                judging_id: updated.judging_id,
                project_id: updated.project_id,
                challenge_id: updated.challenge_id,
            },
        );
    }

    Ok(updated)
}
