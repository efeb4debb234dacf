use tracing::info;

use super::EntryService;
use crate::errors::{JudgingError, Result};
use crate::models::entries::entities::{EntryPatch, JudgingEntry};
use crate::models::entries::requests::{FlagEntryRequest, FlagStatus};

/// 标记或取消标记 (项目, 赛道)
///
/// 条目通过调用者在该黑客松的评委分配定位，不改变评审状态。
pub async fn flag_entry(
    service: &EntryService,
    caller_user_id: i64,
    req: FlagEntryRequest,
) -> Result<JudgingEntry> {
    let storage = service.storage();

    let challenge = storage
        .get_challenge_by_id(req.challenge_id)
        .await?
        .ok_or_else(|| JudgingError::not_found(format!("赛道不存在: {}", req.challenge_id)))?;

    let assignment = storage
        .get_judge_assignment_by_user(caller_user_id, challenge.hackathon_id)
        .await?
        .ok_or_else(|| {
            JudgingError::authorization(format!(
                "用户 {caller_user_id} 不是该黑客松的评委"
            ))
        })?;

    let entry = storage
        .find_entry(assignment.id, req.project_id, req.challenge_id)
        .await?
        .ok_or_else(|| {
            JudgingError::not_found(format!(
                "评审条目不存在: 项目 {} / 赛道 {}",
                req.project_id, req.challenge_id
            ))
        })?;

    let patch = match req.status {
        FlagStatus::Flag => {
            let reason = req
                .reason
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty())
                .ok_or_else(|| JudgingError::validation("标记项目必须填写原因"))?;
            EntryPatch {
                flag_reason: Some(Some(reason)),
                flag_comment: Some(req.comment.filter(|c| !c.trim().is_empty())),
                ..Default::default()
            }
        }
        FlagStatus::Unflag => EntryPatch {
            flag_reason: Some(None),
            flag_comment: Some(None),
            ..Default::default()
        },
    };

    let updated = storage
        .update_entry(entry.id, patch)
        .await?
        .ok_or_else(|| JudgingError::not_found(format!("评审条目不存在: {}", entry.id)))?;

    info!(
        "Project {} / challenge {} {:?} by judge {}",
        req.project_id, req.challenge_id, req.status, assignment.id
    );
    Ok(updated)
}
