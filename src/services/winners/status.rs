use super::WinnerService;
use crate::errors::Result;
use crate::models::judges::entities::ChallengeCoverage;
use crate::models::winners::entities::WinnerAssignerStatus;
use crate::models::winners::responses::WinnerAssignerStatusResponse;

/// 评奖按钮状态
pub async fn get_winner_assigner_status(
    service: &WinnerService,
    caller_user_id: i64,
    hackathon_id: i64,
) -> Result<WinnerAssignerStatusResponse> {
    let storage = service.storage();

    let coverages = match storage
        .get_judge_assignment_by_user(caller_user_id, hackathon_id)
        .await?
    {
        Some(assignment) => storage.list_coverages_for_judge(assignment.id).await?,
        None => Vec::new(),
    };

    Ok(WinnerAssignerStatusResponse {
        hackathon_id,
        status: resolve_status(&coverages),
    })
}

/// 未当选任何赛道为 `NotAssigner`，全部提交后为 `ViewWinners`
pub fn resolve_status(coverages: &[ChallengeCoverage]) -> WinnerAssignerStatus {
    let elected: Vec<&ChallengeCoverage> =
        coverages.iter().filter(|c| c.is_winner_assigner).collect();

    if elected.is_empty() {
        WinnerAssignerStatus::NotAssigner
    } else if elected.iter().all(|c| c.submitted_winners) {
        WinnerAssignerStatus::ViewWinners
    } else {
        WinnerAssignerStatus::Pending
    }
}
