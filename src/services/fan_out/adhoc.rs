use tracing::{debug, info};

use super::FanOutService;
use crate::errors::{JudgingError, Result};
use crate::models::challenges::entities::ProjectChallengePair;
use crate::models::entries::entities::{EntryInsertOutcome, NewJudgingEntry};
use crate::models::{BatchOutcome, ItemOutcome};

/// 把评委临时加到指定的 (项目, 赛道) 上
///
/// 没有基准分的组合记为跳过；单项失败不会中断整批。
pub async fn add_judge_to_projects(
    service: &FanOutService,
    judging_id: i64,
    pairs: &[ProjectChallengePair],
) -> Result<BatchOutcome> {
    let storage = service.storage();

    if storage.get_judge_assignment_by_id(judging_id).await?.is_none() {
        return Err(JudgingError::not_found(format!(
            "评委分配不存在: {judging_id}"
        )));
    }

    let mut outcome = BatchOutcome::default();
    for pair in pairs {
        let item = match storage
            .get_baseline_score(pair.project_id, pair.challenge_id)
            .await
        {
            Ok(Some(baseline)) => {
                let entry = NewJudgingEntry::seeded_from(judging_id, &baseline);
                match storage.insert_entry_if_absent(entry).await {
                    Ok(EntryInsertOutcome::Created(created)) => ItemOutcome::Created {
                        entry_id: created.id,
                    },
                    Ok(EntryInsertOutcome::AlreadyExists) => ItemOutcome::Skipped {
                        reason: "评委已分配到该项目".to_string(),
                    },
                    Err(e) => ItemOutcome::from(e),
                }
            }
            Ok(None) => ItemOutcome::Skipped {
                reason: "项目在该赛道下没有基准分".to_string(),
            },
            Err(e) => ItemOutcome::from(e),
        };
        debug!(
            "Add judge {} to project {} / challenge {}: {:?}",
            judging_id, pair.project_id, pair.challenge_id, item
        );
        outcome.push(pair.project_id, pair.challenge_id, item);
    }

    info!(
        "Added judge {} to {} of {} projects",
        judging_id,
        outcome.succeeded,
        pairs.len()
    );
    Ok(outcome)
}

/// 把评委从指定的 (项目, 赛道) 上移除
pub async fn remove_judge_from_projects(
    service: &FanOutService,
    judging_id: i64,
    pairs: &[ProjectChallengePair],
) -> Result<BatchOutcome> {
    let storage = service.storage();

    let mut outcome = BatchOutcome::default();
    for pair in pairs {
        let item = match storage
            .find_entry(judging_id, pair.project_id, pair.challenge_id)
            .await
        {
            Ok(Some(entry)) => match storage.delete_entry(entry.id).await {
                Ok(true) => ItemOutcome::Removed { entry_id: entry.id },
                Ok(false) => ItemOutcome::Skipped {
                    reason: "评审条目已被删除".to_string(),
                },
                Err(e) => ItemOutcome::from(e),
            },
            Ok(None) => ItemOutcome::Skipped {
                reason: "评委未分配到该项目".to_string(),
            },
            Err(e) => ItemOutcome::from(e),
        };
        outcome.push(pair.project_id, pair.challenge_id, item);
    }

    info!(
        "Removed judge {} from {} of {} projects",
        judging_id,
        outcome.succeeded,
        pairs.len()
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::JudgingOptions;
    use crate::services::fixtures::Fixture;

    fn pair(project_id: i64, challenge_id: i64) -> ProjectChallengePair {
        ProjectChallengePair {
            project_id,
            challenge_id,
        }
    }

    #[tokio::test]
    async fn test_add_judge_skips_pairs_without_baseline() {
        let fx = Fixture::new();
        let (_, judging_id) = fx.judge_on("Ada", &[]).await;
        let scored = fx.project("Rocket");
        let unscored = fx.project("Lantern");
        fx.baseline(scored, fx.challenge_id, 7.0, false).await;

        let service = FanOutService::new(fx.dyn_storage(), JudgingOptions::default());
        let outcome = service
            .add_judge_to_projects(
                judging_id,
                &[pair(scored, fx.challenge_id), pair(unscored, fx.challenge_id)],
            )
            .await
            .unwrap();

        assert_eq!(outcome.succeeded, 1);
        assert_eq!(outcome.skipped, 1);
        assert_eq!(outcome.failed, 0);
        assert!(matches!(
            outcome.items[0].outcome,
            ItemOutcome::Created { .. }
        ));
        assert!(matches!(
            outcome.items[1].outcome,
            ItemOutcome::Skipped { .. }
        ));
        assert_eq!(fx.storage.all_entries().len(), 1);
    }

    #[tokio::test]
    async fn test_add_judge_twice_reports_skip() {
        let fx = Fixture::new();
        let (_, judging_id) = fx.judge_on("Ada", &[]).await;
        let project = fx.project("Rocket");
        fx.baseline(project, fx.challenge_id, 7.0, false).await;

        let service = FanOutService::new(fx.dyn_storage(), JudgingOptions::default());
        let pairs = [pair(project, fx.challenge_id)];
        service.add_judge_to_projects(judging_id, &pairs).await.unwrap();
        let again = service.add_judge_to_projects(judging_id, &pairs).await.unwrap();

        assert_eq!(again.skipped, 1);
        assert_eq!(fx.storage.all_entries().len(), 1);
    }

    #[tokio::test]
    async fn test_add_judge_unknown_assignment_is_not_found() {
        let fx = Fixture::new();
        let service = FanOutService::new(fx.dyn_storage(), JudgingOptions::default());

        let err = service
            .add_judge_to_projects(4242, &[pair(1, fx.challenge_id)])
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E008");
    }

    #[tokio::test]
    async fn test_remove_judge_from_projects() {
        let fx = Fixture::new();
        let (_, judging_id) = fx.judge_on("Ada", &[]).await;
        let project = fx.project("Rocket");
        let other = fx.project("Lantern");
        fx.baseline(project, fx.challenge_id, 7.0, false).await;

        let service = FanOutService::new(fx.dyn_storage(), JudgingOptions::default());
        service
            .add_judge_to_projects(judging_id, &[pair(project, fx.challenge_id)])
            .await
            .unwrap();

        let outcome = service
            .remove_judge_from_projects(
                judging_id,
                &[pair(project, fx.challenge_id), pair(other, fx.challenge_id)],
            )
            .await
            .unwrap();

        assert_eq!(outcome.succeeded, 1);
        assert_eq!(outcome.skipped, 1);
        assert!(fx.storage.all_entries().is_empty());
    }
}
