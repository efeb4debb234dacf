use chrono::{DateTime, Utc};

use super::ProgressService;
use crate::errors::{JudgingError, Result};
use crate::models::challenges::entities::Hackathon;
use crate::models::entries::entities::{JudgingEntry, ReviewStatus};
use crate::models::judges::entities::{ChallengeCoverage, JudgeAssignment};
use crate::models::progress::responses::{JudgeProgress, JudgingStatusLabel};
use crate::services::stats::rounding::round_to;

/// 已评审条目占比，保留一位小数
pub fn progress_percentage(judged: i64, total: i64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_to(judged as f64 / total as f64 * 100.0, 1)
}

/// 提交未截止时评审尚未开放
pub fn status_label(
    hackathon: &Hackathon,
    assignment: &JudgeAssignment,
    now: DateTime<Utc>,
) -> JudgingStatusLabel {
    if !hackathon.submissions_closed(now) {
        JudgingStatusLabel::NotLive
    } else if assignment.submitted {
        JudgingStatusLabel::Submitted
    } else {
        JudgingStatusLabel::InProgress
    }
}

pub(super) fn build_progress(
    coverage: &ChallengeCoverage,
    display_name: String,
    entries: &[JudgingEntry],
    status: JudgingStatusLabel,
) -> JudgeProgress {
    let total_entries = entries.len() as i64;
    let judged_entries = entries
        .iter()
        .filter(|e| e.review_status == ReviewStatus::Judged)
        .count() as i64;

    JudgeProgress {
        judging_id: coverage.judging_id,
        user_id: coverage.user_id,
        display_name,
        challenge_id: coverage.challenge_id,
        is_winner_assigner: coverage.is_winner_assigner,
        total_entries,
        judged_entries,
        progress_percentage: progress_percentage(judged_entries, total_entries),
        status,
    }
}

pub async fn get_judge_progress(
    service: &ProgressService,
    judging_id: i64,
    challenge_id: i64,
) -> Result<JudgeProgress> {
    let storage = service.storage();

    let assignment = storage
        .get_judge_assignment_by_id(judging_id)
        .await?
        .ok_or_else(|| JudgingError::not_found(format!("评委分配不存在: {judging_id}")))?;
    let hackathon = storage
        .get_hackathon_by_id(assignment.hackathon_id)
        .await?
        .ok_or_else(|| {
            JudgingError::not_found(format!("黑客松不存在: {}", assignment.hackathon_id))
        })?;
    let coverage = storage
        .list_coverages_for_judge(judging_id)
        .await?
        .into_iter()
        .find(|c| c.challenge_id == challenge_id)
        .ok_or_else(|| {
            JudgingError::not_found(format!("评委 {judging_id} 未覆盖赛道 {challenge_id}"))
        })?;

    let display_name = storage
        .get_users_by_ids(&[assignment.user_id])
        .await?
        .into_iter()
        .next()
        .map(|u| u.display_name)
        .unwrap_or_default();
    let entries = storage
        .list_entries_for_judge(judging_id, challenge_id)
        .await?;

    let status = status_label(&hackathon, &assignment, Utc::now());
    Ok(build_progress(&coverage, display_name, &entries, status))
}
