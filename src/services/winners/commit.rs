use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::{info, warn};

use super::WinnerService;
use crate::errors::{JudgingError, Result};
use crate::models::challenges::entities::Prize;
use crate::models::winners::entities::WinnerCommit;
use crate::models::winners::requests::{CommitWinnersRequest, WinnerTriple};
use crate::models::winners::responses::CommitWinnersResponse;
use crate::services::notifications::{JudgingEvent, notify_quietly};

/// 提交获奖结果
///
/// 整批先校验后写入：任一三元组不合法则全部拒绝，错误信息列出所有问题项。
/// 存储层在写入事务内会再次校验评奖人身份。
pub async fn commit_winners(
    service: &WinnerService,
    caller_user_id: i64,
    req: CommitWinnersRequest,
) -> Result<CommitWinnersResponse> {
    let storage = service.storage();
    let triples = req.winners;

    if triples.is_empty() {
        return Err(JudgingError::validation("获奖列表不能为空"));
    }

    let challenge_ids: BTreeSet<i64> = triples.iter().map(|t| t.challenge_id).collect();

    // 调用者必须是每个涉及赛道的评奖人
    for &challenge_id in &challenge_ids {
        let coverages = storage.get_coverage_for_challenge(challenge_id).await?;
        let is_assigner = coverages
            .iter()
            .any(|c| c.is_winner_assigner && c.user_id == caller_user_id);
        if !is_assigner {
            warn!(
                "User {} tried to commit winners for challenge {} without being the assigner",
                caller_user_id, challenge_id
            );
            return Err(JudgingError::authorization(format!(
                "用户 {caller_user_id} 不是赛道 {challenge_id} 的评奖人"
            )));
        }
    }

    let mut prizes: HashMap<i64, Vec<Prize>> = HashMap::new();
    for &challenge_id in &challenge_ids {
        prizes.insert(
            challenge_id,
            storage.get_prizes_for_challenge(challenge_id).await?,
        );
    }

    let mut offenders: Vec<String> = Vec::new();
    let mut commits: Vec<WinnerCommit> = Vec::with_capacity(triples.len());
    let mut seen_prizes: HashSet<(i64, i64)> = HashSet::new();
    let mut seen_projects: HashSet<(i64, i64)> = HashSet::new();

    for triple in &triples {
        let mut problems: Vec<&str> = Vec::new();

        if storage
            .get_project_challenge(triple.project_id, triple.challenge_id)
            .await?
            .is_none()
        {
            problems.push("项目未参加该赛道");
        }

        let prize = prizes
            .get(&triple.challenge_id)
            .and_then(|list| list.iter().find(|p| p.id == triple.prize_id));
        if prize.is_none() {
            problems.push("奖项不属于该赛道");
        }

        if !seen_prizes.insert((triple.challenge_id, triple.prize_id)) {
            problems.push("同一奖项重复分配");
        }
        if !seen_projects.insert((triple.challenge_id, triple.project_id)) {
            problems.push("同一项目在赛道内重复获奖");
        }

        match (problems.is_empty(), prize) {
            (true, Some(prize)) => commits.push(WinnerCommit {
                challenge_id: triple.challenge_id,
                project_id: triple.project_id,
                prize_id: prize.id,
                rank: prize.rank,
            }),
            _ => offenders.push(describe(triple, &problems)),
        }
    }

    if !offenders.is_empty() {
        return Err(JudgingError::validation(format!(
            "获奖结果校验失败: {}",
            offenders.join("; ")
        )));
    }

    storage
        .commit_winner_batch(caller_user_id, &commits)
        .await?;

    info!(
        "User {} committed {} winners across {} challenges",
        caller_user_id,
        commits.len(),
        challenge_ids.len()
    );

    for &challenge_id in &challenge_ids {
        let project_ids = commits
            .iter()
            .filter(|c| c.challenge_id == challenge_id)
            .map(|c| c.project_id)
            .collect();
        notify_quietly(
            service.notifier.as_ref(),
            JudgingEvent::WinnersAnnounced {
                challenge_id,
                project_ids,
            },
        );
    }

    Ok(CommitWinnersResponse {
        challenge_ids: challenge_ids.into_iter().collect(),
        committed: commits,
    })
}

fn describe(triple: &WinnerTriple, problems: &[&str]) -> String {
    format!(
        "(赛道 {}, 项目 {}, 奖项 {}): {}",
        triple.challenge_id,
        triple.project_id,
        triple.prize_id,
        problems.join(", ")
    )
}
