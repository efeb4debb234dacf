use super::StatsService;
use super::rounding::round_half_up;
use crate::errors::Result;
use crate::models::entries::entities::JudgingEntry;
use crate::models::stats::responses::ProjectAverageResponse;

/// 项目在赛道内的平均分
///
/// 只取评委条目上的非空总分，基准分不参与。没有评委分时为 0。
pub fn project_average(entries: &[&JudgingEntry]) -> (f64, i64) {
    let scores: Vec<f64> = entries.iter().filter_map(|e| e.score).collect();
    if scores.is_empty() {
        return (0.0, 0);
    }
    let average = scores.iter().sum::<f64>() / scores.len() as f64;
    (round_half_up(average), scores.len() as i64)
}

pub async fn get_project_average(
    service: &StatsService,
    project_id: i64,
    challenge_id: i64,
) -> Result<ProjectAverageResponse> {
    let entries = service
        .storage()
        .list_entries_for_challenges(&[challenge_id])
        .await?;
    let for_project: Vec<&JudgingEntry> =
        entries.iter().filter(|e| e.project_id == project_id).collect();

    let (average_score, judge_count) = project_average(&for_project);
    Ok(ProjectAverageResponse {
        project_id,
        challenge_id,
        average_score,
        judge_count,
    })
}
