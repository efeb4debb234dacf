use std::collections::HashMap;

use chrono::Utc;

use super::ProgressService;
use super::judge::{build_progress, status_label};
use crate::errors::{JudgingError, Result};
use crate::models::progress::responses::JudgeProgress;

/// 覆盖某赛道的所有评委进度
///
/// 评奖人排第一，其余按显示名排序。
pub async fn get_challenge_progress(
    service: &ProgressService,
    challenge_id: i64,
) -> Result<Vec<JudgeProgress>> {
    let storage = service.storage();

    let challenge = storage
        .get_challenge_by_id(challenge_id)
        .await?
        .ok_or_else(|| JudgingError::not_found(format!("赛道不存在: {challenge_id}")))?;
    let hackathon = storage
        .get_hackathon_by_id(challenge.hackathon_id)
        .await?
        .ok_or_else(|| {
            JudgingError::not_found(format!("黑客松不存在: {}", challenge.hackathon_id))
        })?;

    let coverages = storage.get_coverage_for_challenge(challenge_id).await?;
    let user_ids: Vec<i64> = coverages.iter().map(|c| c.user_id).collect();
    let names: HashMap<i64, String> = storage
        .get_users_by_ids(&user_ids)
        .await?
        .into_iter()
        .map(|u| (u.id, u.display_name))
        .collect();

    let now = Utc::now();
    let mut listing = Vec::with_capacity(coverages.len());
    for coverage in &coverages {
        let Some(assignment) = storage
            .get_judge_assignment_by_id(coverage.judging_id)
            .await?
        else {
            continue;
        };
        let entries = storage
            .list_entries_for_judge(coverage.judging_id, challenge_id)
            .await?;
        let display_name = names.get(&coverage.user_id).cloned().unwrap_or_default();
        listing.push(build_progress(
            coverage,
            display_name,
            &entries,
            status_label(&hackathon, &assignment, now),
        ));
    }

    listing.sort_by(|a, b| {
        b.is_winner_assigner
            .cmp(&a.is_winner_assigner)
            .then_with(|| a.display_name.cmp(&b.display_name))
    });
    Ok(listing)
}
