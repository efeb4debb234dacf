use futures_util::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use super::FanOutService;
use crate::errors::{JudgingError, Result};
use crate::models::entries::entities::{EntryInsertOutcome, NewJudgingEntry};
use crate::models::scores::entities::BaselineScore;
use crate::models::{FanOutError, FanOutSummary};
use crate::storage::Storage;

/// 把一批基准分分发给覆盖对应赛道的所有评委
///
/// 不同基准分之间并行处理；单个基准分失败只记入 `errors`，不影响其余基准分。
pub async fn assign_baselines_to_judges(
    service: &FanOutService,
    baseline_score_ids: &[i64],
) -> Result<FanOutSummary> {
    let storage = service.storage();
    let concurrency = service.options.fan_out_concurrency.max(1);

    let results: Vec<(i64, Result<FanOutSummary>)> = stream::iter(baseline_score_ids.iter().copied())
        .map(|baseline_score_id| async move {
            (
                baseline_score_id,
                fan_out_baseline(storage.as_ref(), baseline_score_id).await,
            )
        })
        .buffer_unordered(concurrency)
        .collect()
        .await;

    let mut summary = FanOutSummary::default();
    for (baseline_score_id, result) in results {
        match result {
            Ok(partial) => summary.merge(partial),
            Err(e) => {
                warn!("Fan-out of baseline score {} failed: {}", baseline_score_id, e);
                summary.errors.push(FanOutError {
                    baseline_score_id,
                    message: e.to_string(),
                });
            }
        }
    }

    info!(
        "Fan-out finished: {} created, {} skipped, {} errors",
        summary.created,
        summary.skipped,
        summary.errors.len()
    );
    Ok(summary)
}

async fn fan_out_baseline(storage: &dyn Storage, baseline_score_id: i64) -> Result<FanOutSummary> {
    let baseline = storage
        .get_baseline_score_by_id(baseline_score_id)
        .await?
        .ok_or_else(|| JudgingError::not_found(format!("基准分不存在: {baseline_score_id}")))?;

    let coverages = storage
        .get_coverage_for_challenge(baseline.challenge_id)
        .await?;
    let judging_ids: Vec<i64> = coverages.iter().map(|c| c.judging_id).collect();

    Ok(seed_entries(storage, &baseline, &judging_ids).await)
}

/// 为给定评委逐个插入种子条目
///
/// 同一基准分内按评委顺序执行，去重依赖存储层的插入或忽略。
pub(super) async fn seed_entries(
    storage: &dyn Storage,
    baseline: &BaselineScore,
    judging_ids: &[i64],
) -> FanOutSummary {
    let mut summary = FanOutSummary::default();

    for &judging_id in judging_ids {
        let entry = NewJudgingEntry::seeded_from(judging_id, baseline);
        match storage.insert_entry_if_absent(entry).await {
            Ok(EntryInsertOutcome::Created(created)) => {
                debug!(
                    "Created entry {} for judge {} on project {} / challenge {}",
                    created.id, judging_id, baseline.project_id, baseline.challenge_id
                );
                summary.created += 1;
            }
            Ok(EntryInsertOutcome::AlreadyExists) => summary.skipped += 1,
            Err(e) => summary.errors.push(FanOutError {
                baseline_score_id: baseline.id,
                message: format!("评委 {judging_id}: {e}"),
            }),
        }
    }

    summary
}
