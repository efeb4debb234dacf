use tracing::info;

use super::FanOutService;
use super::assign::seed_entries;
use crate::errors::{JudgingError, Result};
use crate::models::FanOutSummary;

/// 让评委覆盖一个赛道，并为该赛道已有的基准分补齐条目
pub async fn add_judge_to_challenge(
    service: &FanOutService,
    judging_id: i64,
    challenge_id: i64,
) -> Result<FanOutSummary> {
    let storage = service.storage();

    let assignment = storage
        .get_judge_assignment_by_id(judging_id)
        .await?
        .ok_or_else(|| JudgingError::not_found(format!("评委分配不存在: {judging_id}")))?;
    let challenge = storage
        .get_challenge_by_id(challenge_id)
        .await?
        .ok_or_else(|| JudgingError::not_found(format!("赛道不存在: {challenge_id}")))?;

    if challenge.hackathon_id != assignment.hackathon_id {
        return Err(JudgingError::validation(format!(
            "赛道 {challenge_id} 不属于评委所在的黑客松"
        )));
    }

    storage.add_coverage(judging_id, challenge_id).await?;

    let mut summary = FanOutSummary::default();
    for baseline in storage.list_baseline_scores(&[challenge_id]).await? {
        summary.merge(seed_entries(storage.as_ref(), &baseline, &[judging_id]).await);
    }

    info!(
        "Judge {} now covers challenge {} ({} entries created)",
        judging_id, challenge_id, summary.created
    );
    Ok(summary)
}

/// 取消评委对赛道的覆盖，连同该赛道下的条目
pub async fn remove_judge_from_challenge(
    service: &FanOutService,
    judging_id: i64,
    challenge_id: i64,
) -> Result<u64> {
    let removed = service
        .storage()
        .remove_coverage(judging_id, challenge_id)
        .await?;

    info!(
        "Judge {} removed from challenge {} ({} entries deleted)",
        judging_id, challenge_id, removed
    );
    Ok(removed)
}
