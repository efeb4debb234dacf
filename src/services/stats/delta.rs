use std::collections::HashMap;

use super::rounding::{round_half_up, round_to};
use super::{StatsService, judged_score};
use crate::errors::Result;
use crate::models::challenges::entities::ProjectChallengePair;
use crate::models::stats::responses::BotJudgeDeltaResponse;

/// 基准分与评委平均分之差的均值
///
/// 只比较双方都有分数的 (项目, 赛道)；每对的差值为
/// `round(基准分) - round(评委平均分)`。
pub fn compute_delta(
    bot: &HashMap<ProjectChallengePair, f64>,
    judges: &HashMap<ProjectChallengePair, Vec<f64>>,
) -> BotJudgeDeltaResponse {
    let differences: Vec<f64> = bot
        .iter()
        .filter_map(|(pair, &bot_score)| {
            let scores = judges.get(pair).filter(|s| !s.is_empty())?;
            let judge_average = scores.iter().sum::<f64>() / scores.len() as f64;
            Some(round_half_up(bot_score) - round_half_up(judge_average))
        })
        .collect();

    if differences.is_empty() {
        return BotJudgeDeltaResponse {
            delta: 0.0,
            compared_pairs: 0,
        };
    }

    BotJudgeDeltaResponse {
        delta: round_to(
            differences.iter().sum::<f64>() / differences.len() as f64,
            2,
        ),
        compared_pairs: differences.len() as i64,
    }
}

pub async fn get_bot_vs_judge_delta(
    service: &StatsService,
    challenge_ids: &[i64],
) -> Result<BotJudgeDeltaResponse> {
    let storage = service.storage();

    let bot: HashMap<ProjectChallengePair, f64> = storage
        .list_baseline_scores(challenge_ids)
        .await?
        .into_iter()
        .filter_map(|b| {
            b.score.map(|score| {
                (
                    ProjectChallengePair {
                        project_id: b.project_id,
                        challenge_id: b.challenge_id,
                    },
                    score,
                )
            })
        })
        .collect();

    let mut judges: HashMap<ProjectChallengePair, Vec<f64>> = HashMap::new();
    for entry in storage.list_entries_for_challenges(challenge_ids).await? {
        if let Some(score) = judged_score(&entry) {
            judges
                .entry(ProjectChallengePair {
                    project_id: entry.project_id,
                    challenge_id: entry.challenge_id,
                })
                .or_default()
                .push(score);
        }
    }

    Ok(compute_delta(&bot, &judges))
}
