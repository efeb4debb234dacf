//! 条目归属与可编辑规则

use std::sync::Arc;

use crate::errors::{JudgingError, Result};
use crate::models::entries::entities::{JudgingEntry, ReviewStatus};
use crate::models::entries::requests::UpdateEntryRequest;
use crate::models::judges::entities::JudgeAssignment;
use crate::storage::Storage;

pub const MAX_SCORE: f64 = 10.0;

/// 调用者必须是评委分配的所有者
pub async fn ensure_owner(
    storage: &Arc<dyn Storage>,
    caller_user_id: i64,
    judging_id: i64,
) -> Result<JudgeAssignment> {
    let assignment = storage
        .get_judge_assignment_by_id(judging_id)
        .await?
        .ok_or_else(|| JudgingError::not_found(format!("评委分配不存在: {judging_id}")))?;

    if assignment.user_id != caller_user_id {
        return Err(JudgingError::authorization(format!(
            "用户 {caller_user_id} 无权操作评委分配 {judging_id}"
        )));
    }

    Ok(assignment)
}

/// 读取条目并校验归属
pub async fn load_owned_entry(
    storage: &Arc<dyn Storage>,
    caller_user_id: i64,
    entry_id: i64,
) -> Result<JudgingEntry> {
    let entry = storage
        .get_entry_by_id(entry_id)
        .await?
        .ok_or_else(|| JudgingError::not_found(format!("评审条目不存在: {entry_id}")))?;

    ensure_owner(storage, caller_user_id, entry.judging_id).await?;
    Ok(entry)
}

/// 内容是否仍可编辑
///
/// 只有待评审的条目可以改内容；AI 种子条目一旦写了技术反馈就冻结。
pub fn content_editable(entry: &JudgingEntry) -> bool {
    if entry.review_status != ReviewStatus::NeedsReview {
        return false;
    }
    !(entry.ai_judged && entry.dimensions.has_technical_feedback())
}

/// 分数范围 [0, 10]
pub fn validate_scores(req: &UpdateEntryRequest) -> Result<()> {
    let scores = [
        ("technical_score", req.technical_score),
        ("business_score", req.business_score),
        ("innovation_score", req.innovation_score),
        ("ux_score", req.ux_score),
        ("score", req.score),
    ];
    for (field, value) in scores {
        if let Some(v) = value
            && !(0.0..=MAX_SCORE).contains(&v)
        {
            return Err(JudgingError::validation(format!(
                "{field} 必须在 0 到 {MAX_SCORE} 之间: {v}"
            )));
        }
    }
    Ok(())
}

pub fn ensure_content_editable(entry: &JudgingEntry) -> Result<()> {
    if content_editable(entry) {
        return Ok(());
    }
    Err(JudgingError::edit_window_closed(format!(
        "评审条目 {} 已不可编辑",
        entry.id
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::scores::entities::DimensionScores;

    fn entry(ai_judged: bool, status: ReviewStatus, technical_feedback: Option<&str>) -> JudgingEntry {
        let now = chrono::Utc::now();
        JudgingEntry {
            id: 1,
            judging_id: 2,
            project_id: 3,
            challenge_id: 4,
            baseline_score_id: Some(5),
            ai_judged,
            dimensions: DimensionScores {
                technical_feedback: technical_feedback.map(str::to_string),
                ..Default::default()
            },
            score: None,
            general_comments: None,
            review_status: status,
            flag_reason: None,
            flag_comment: None,
            standing: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_needs_review_entry_is_editable() {
        assert!(content_editable(&entry(false, ReviewStatus::NeedsReview, None)));
        assert!(content_editable(&entry(true, ReviewStatus::NeedsReview, None)));
    }

    #[test]
    fn test_judged_entry_is_frozen() {
        assert!(!content_editable(&entry(false, ReviewStatus::Judged, None)));
    }

    #[test]
    fn test_ai_entry_frozen_after_technical_feedback() {
        assert!(!content_editable(&entry(
            true,
            ReviewStatus::NeedsReview,
            Some("needs better tests")
        )));
        // 非 AI 条目不受技术反馈影响
        assert!(content_editable(&entry(
            false,
            ReviewStatus::NeedsReview,
            Some("needs better tests")
        )));
        // 空白反馈不算
        assert!(content_editable(&entry(true, ReviewStatus::NeedsReview, Some("  "))));
    }

    #[test]
    fn test_validate_scores_range() {
        let ok = UpdateEntryRequest {
            technical_score: Some(10.0),
            score: Some(0.0),
            ..Default::default()
        };
        assert!(validate_scores(&ok).is_ok());

        let too_high = UpdateEntryRequest {
            ux_score: Some(10.5),
            ..Default::default()
        };
        assert_eq!(validate_scores(&too_high).unwrap_err().code(), "E007");

        let nan = UpdateEntryRequest {
            score: Some(f64::NAN),
            ..Default::default()
        };
        assert!(validate_scores(&nan).is_err());
    }

    #[test]
    fn test_edit_window_error_code() {
        let err = ensure_content_editable(&entry(false, ReviewStatus::Judged, None)).unwrap_err();
        assert_eq!(err.code(), "E011");
    }
}
