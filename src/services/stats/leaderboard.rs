use std::cmp::Ordering;
use std::collections::HashMap;

use super::StatsService;
use super::average::project_average;
use super::rounding::round_half_up;
use crate::errors::Result;
use crate::models::entries::entities::JudgingEntry;
use crate::models::stats::requests::LeaderboardSort;
use crate::models::stats::responses::LeaderboardRow;

/// 名次升序且空值最后
fn cmp_standing(a: Option<i32>, b: Option<i32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// 稳定排序，键相同的行保持输入顺序
pub fn sort_leaderboard(rows: &mut [LeaderboardRow], sort_by: LeaderboardSort) {
    match sort_by {
        LeaderboardSort::Standing => rows.sort_by(|a, b| cmp_standing(a.standing, b.standing)),
        LeaderboardSort::Score => {
            rows.sort_by(|a, b| b.average_score.total_cmp(&a.average_score))
        }
        LeaderboardSort::Challenge => rows.sort_by(|a, b| a.challenge_name.cmp(&b.challenge_name)),
    }
}

pub async fn get_leaderboard(
    service: &StatsService,
    challenge_ids: &[i64],
    sort_by: LeaderboardSort,
) -> Result<Vec<LeaderboardRow>> {
    let storage = service.storage();

    let links = storage.list_project_challenges(challenge_ids).await?;
    let project_ids: Vec<i64> = links.iter().map(|l| l.project_id).collect();

    let projects: HashMap<i64, String> = storage
        .get_projects_by_ids(&project_ids)
        .await?
        .into_iter()
        .map(|p| (p.id, p.name))
        .collect();
    let challenges: HashMap<i64, String> = storage
        .list_challenges_by_ids(challenge_ids)
        .await?
        .into_iter()
        .map(|c| (c.id, c.name))
        .collect();
    let bot_scores: HashMap<(i64, i64), f64> = storage
        .list_baseline_scores(challenge_ids)
        .await?
        .into_iter()
        .filter_map(|b| b.score.map(|s| ((b.project_id, b.challenge_id), round_half_up(s))))
        .collect();

    let entries = storage.list_entries_for_challenges(challenge_ids).await?;
    let mut by_pair: HashMap<(i64, i64), Vec<&JudgingEntry>> = HashMap::new();
    for entry in &entries {
        by_pair
            .entry((entry.project_id, entry.challenge_id))
            .or_default()
            .push(entry);
    }

    let mut rows: Vec<LeaderboardRow> = links
        .into_iter()
        .map(|link| {
            let key = (link.project_id, link.challenge_id);
            let (average_score, _) =
                project_average(by_pair.get(&key).map_or(&[][..], Vec::as_slice));
            LeaderboardRow {
                project_id: link.project_id,
                project_name: projects.get(&link.project_id).cloned().unwrap_or_default(),
                challenge_id: link.challenge_id,
                challenge_name: challenges
                    .get(&link.challenge_id)
                    .cloned()
                    .unwrap_or_default(),
                standing: link.rank,
                average_score,
                bot_score: bot_scores.get(&key).copied(),
                prize_id: link.prize_id,
            }
        })
        .collect();

    sort_leaderboard(&mut rows, sort_by);
    Ok(rows)
}
