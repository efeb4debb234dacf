use std::collections::HashMap;

use super::rounding::{round_half_up, round_to};
use super::{StatsService, judged_score};
use crate::errors::Result;
use crate::models::stats::responses::{
    ChallengeScoreSummary, ScoreStatisticsResponse, ScoreSummary,
};

/// 均值、中位数与众数
///
/// 汇总统计与分赛道统计共用这一个实现。空集合全部为 0。
pub fn summarize_scores(scores: &[f64]) -> ScoreSummary {
    if scores.is_empty() {
        return ScoreSummary::default();
    }

    let count = scores.len();
    let mean = round_to(scores.iter().sum::<f64>() / count as f64, 2);

    let mut sorted = scores.to_vec();
    sorted.sort_by(f64::total_cmp);
    let median = if count % 2 == 0 {
        (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
    } else {
        sorted[count / 2]
    };

    // 按首次出现的顺序计数，并列时取最先出现的值
    let mut frequencies: Vec<(f64, usize)> = Vec::new();
    for &score in scores {
        match frequencies.iter_mut().find(|(value, _)| *value == score) {
            Some((_, n)) => *n += 1,
            None => frequencies.push((score, 1)),
        }
    }
    let mut mode = frequencies[0];
    for &candidate in &frequencies[1..] {
        if candidate.1 > mode.1 {
            mode = candidate;
        }
    }

    ScoreSummary {
        count: count as i64,
        mean,
        median,
        mode: mode.0,
    }
}

pub async fn get_score_statistics(
    service: &StatsService,
    challenge_ids: &[i64],
) -> Result<ScoreStatisticsResponse> {
    let storage = service.storage();

    let challenges = storage.list_challenges_by_ids(challenge_ids).await?;
    let entries = storage.list_entries_for_challenges(challenge_ids).await?;
    let baselines = storage.list_baseline_scores(challenge_ids).await?;

    let mut overall = Vec::new();
    let mut per_challenge: HashMap<i64, Vec<f64>> = HashMap::new();
    for entry in &entries {
        if let Some(score) = judged_score(entry) {
            overall.push(score);
            per_challenge
                .entry(entry.challenge_id)
                .or_default()
                .push(score);
        }
    }

    let bot: Vec<f64> = baselines
        .iter()
        .filter_map(|b| b.score)
        .map(round_half_up)
        .collect();

    let per_challenge = challenges
        .into_iter()
        .map(|c| ChallengeScoreSummary {
            summary: summarize_scores(per_challenge.get(&c.id).map_or(&[][..], Vec::as_slice)),
            challenge_id: c.id,
            challenge_name: c.name,
        })
        .collect();

    Ok(ScoreStatisticsResponse {
        overall: summarize_scores(&overall),
        bot: summarize_scores(&bot),
        per_challenge,
    })
}
