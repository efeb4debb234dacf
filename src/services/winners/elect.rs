use tracing::info;

use super::WinnerService;
use crate::errors::{JudgingError, Result};

/// 选出赛道唯一的评奖人
///
/// 目标评委必须已覆盖该赛道；清除旧评奖人与设置新评奖人在同一事务内完成。
pub async fn elect_winner_assigner(
    service: &WinnerService,
    challenge_id: i64,
    judging_id: i64,
) -> Result<()> {
    let storage = service.storage();

    if storage.get_challenge_by_id(challenge_id).await?.is_none() {
        return Err(JudgingError::not_found(format!("赛道不存在: {challenge_id}")));
    }

    storage.set_winner_assigner(challenge_id, judging_id).await?;

    info!(
        "Judge {} elected winner assigner for challenge {}",
        judging_id, challenge_id
    );
    Ok(())
}
