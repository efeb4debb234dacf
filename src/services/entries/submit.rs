use tracing::info;

use super::EntryService;
use super::rules::{ensure_owner, load_owned_entry};
use crate::errors::{JudgingError, Result};
use crate::models::entries::entities::{EntryPatch, JudgingEntry, ReviewStatus};
use crate::models::judges::entities::JudgeAssignment;
use crate::services::notifications::{JudgingEvent, notify_quietly};

/// 提交单个条目（只改状态，不受编辑窗口限制）
pub async fn submit_entry(
    service: &EntryService,
    caller_user_id: i64,
    entry_id: i64,
) -> Result<JudgingEntry> {
    let storage = service.storage();
    let entry = load_owned_entry(storage, caller_user_id, entry_id).await?;

    if entry.review_status == ReviewStatus::Judged {
        return Ok(entry);
    }

    let patch = EntryPatch {
        review_status: Some(ReviewStatus::Judged),
        ..Default::default()
    };
    let updated = storage
        .update_entry(entry.id, patch)
        .await?
        .ok_or_else(|| JudgingError::not_found(format!("评审条目不存在: {entry_id}")))?;

    info!("Entry {} judged by user {}", updated.id, caller_user_id);

    notify_quietly(
        service.notifier.as_ref(),
        JudgingEvent::ReviewCompleted {
            entry_id: updated.id,
            judging_id: updated.judging_id,
            project_id: updated.project_id,
            challenge_id: updated.challenge_id,
        },
    );

    Ok(updated)
}

/// 评委完成全部评审
///
/// 仍有待评审条目时拒绝。
pub async fn submit_reviews(
    service: &EntryService,
    caller_user_id: i64,
    judging_id: i64,
) -> Result<JudgeAssignment> {
    let storage = service.storage();
    let assignment = ensure_owner(storage, caller_user_id, judging_id).await?;
    if assignment.submitted {
        return Ok(assignment);
    }

    let mut pending = 0usize;
    for coverage in storage.list_coverages_for_judge(judging_id).await? {
        pending += storage
            .list_entries_for_judge(judging_id, coverage.challenge_id)
            .await?
            .iter()
            .filter(|e| e.review_status == ReviewStatus::NeedsReview)
            .count();
    }
    if pending > 0 {
        return Err(JudgingError::validation(format!(
            "还有 {pending} 个条目待评审"
        )));
    }

    let submitted = storage
        .mark_judge_submitted(judging_id)
        .await?
        .ok_or_else(|| JudgingError::not_found(format!("评委分配不存在: {judging_id}")))?;

    info!("Judge {} submitted all reviews", judging_id);
    Ok(submitted)
}
