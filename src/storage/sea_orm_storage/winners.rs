//! 评奖存储操作

use std::collections::BTreeSet;

use super::SeaOrmStorage;
use crate::entity::challenge_coverages::{Column as CoverageColumn, Entity as ChallengeCoverages};
use crate::entity::challenges::{Column as ChallengeColumn, Entity as Challenges};
use crate::entity::judge_assignments::Entity as JudgeAssignments;
use crate::entity::judging_entries::{Column as EntryColumn, Entity as JudgingEntries};
use crate::entity::prizes::Entity as Prizes;
use crate::entity::project_challenges::{Column as LinkColumn, Entity as ProjectChallenges};
use crate::errors::{JudgingError, Result};
use crate::models::winners::entities::WinnerCommit;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter, TransactionTrait};

impl SeaOrmStorage {
    /// 设置赛道唯一的评奖人
    pub async fn set_winner_assigner_impl(&self, challenge_id: i64, judging_id: i64) -> Result<()> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| JudgingError::database_operation(format!("开启事务失败: {e}")))?;

        let target = ChallengeCoverages::find()
            .filter(
                Condition::all()
                    .add(CoverageColumn::JudgingId.eq(judging_id))
                    .add(CoverageColumn::ChallengeId.eq(challenge_id)),
            )
            .one(&txn)
            .await
            .map_err(|e| JudgingError::database_operation(format!("查询赛道覆盖失败: {e}")))?;

        if target.is_none() {
            return Err(JudgingError::validation(format!(
                "评委 {judging_id} 未覆盖赛道 {challenge_id}"
            )));
        }

        ChallengeCoverages::update_many()
            .col_expr(CoverageColumn::IsWinnerAssigner, Expr::value(false))
            .filter(CoverageColumn::ChallengeId.eq(challenge_id))
            .exec(&txn)
            .await
            .map_err(|e| JudgingError::database_operation(format!("清除评奖人失败: {e}")))?;

        ChallengeCoverages::update_many()
            .col_expr(CoverageColumn::IsWinnerAssigner, Expr::value(true))
            .filter(
                Condition::all()
                    .add(CoverageColumn::JudgingId.eq(judging_id))
                    .add(CoverageColumn::ChallengeId.eq(challenge_id)),
            )
            .exec(&txn)
            .await
            .map_err(|e| JudgingError::database_operation(format!("设置评奖人失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| JudgingError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(())
    }

    /// 在一个事务中写入整批获奖结果
    ///
    /// 写入前在事务内重新校验调用者的评奖人身份以及项目、奖项关联，
    /// 任何一步失败都会回滚。
    pub async fn commit_winner_batch_impl(
        &self,
        caller_user_id: i64,
        commits: &[WinnerCommit],
    ) -> Result<()> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| JudgingError::database_operation(format!("开启事务失败: {e}")))?;

        let challenge_ids: BTreeSet<i64> = commits.iter().map(|c| c.challenge_id).collect();

        for &challenge_id in &challenge_ids {
            ensure_elected_assigner(&txn, caller_user_id, challenge_id).await?;
        }

        for commit in commits {
            ensure_commit_targets(&txn, commit).await?;
        }

        for &challenge_id in &challenge_ids {
            mark_challenge_winners_submitted(&txn, challenge_id).await?;
        }

        for commit in commits {
            commit_winner(&txn, commit).await?;
        }

        txn.commit()
            .await
            .map_err(|e| JudgingError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(())
    }
}

/// 调用者必须持有该赛道当选评奖人的覆盖行
async fn ensure_elected_assigner<C: ConnectionTrait>(
    conn: &C,
    caller_user_id: i64,
    challenge_id: i64,
) -> Result<()> {
    let elected = ChallengeCoverages::find()
        .filter(
            Condition::all()
                .add(CoverageColumn::ChallengeId.eq(challenge_id))
                .add(CoverageColumn::IsWinnerAssigner.eq(true)),
        )
        .find_also_related(JudgeAssignments)
        .one(conn)
        .await
        .map_err(|e| JudgingError::database_operation(format!("查询评奖人失败: {e}")))?;

    match elected {
        Some((_, Some(assignment))) if assignment.user_id == caller_user_id => Ok(()),
        _ => Err(JudgingError::authorization(format!(
            "用户 {caller_user_id} 不是赛道 {challenge_id} 的评奖人"
        ))),
    }
}

async fn ensure_commit_targets<C: ConnectionTrait>(conn: &C, commit: &WinnerCommit) -> Result<()> {
    let link = ProjectChallenges::find()
        .filter(
            Condition::all()
                .add(LinkColumn::ProjectId.eq(commit.project_id))
                .add(LinkColumn::ChallengeId.eq(commit.challenge_id)),
        )
        .one(conn)
        .await
        .map_err(|e| JudgingError::database_operation(format!("查询项目关联失败: {e}")))?;
    if link.is_none() {
        return Err(JudgingError::validation(format!(
            "项目 {} 未参加赛道 {}",
            commit.project_id, commit.challenge_id
        )));
    }

    let prize = Prizes::find_by_id(commit.prize_id)
        .one(conn)
        .await
        .map_err(|e| JudgingError::database_operation(format!("查询奖项失败: {e}")))?;
    match prize {
        Some(p) if p.challenge_id == commit.challenge_id => Ok(()),
        _ => Err(JudgingError::validation(format!(
            "奖项 {} 不属于赛道 {}",
            commit.prize_id, commit.challenge_id
        ))),
    }
}

async fn mark_challenge_winners_submitted<C: ConnectionTrait>(
    conn: &C,
    challenge_id: i64,
) -> Result<()> {
    Challenges::update_many()
        .col_expr(ChallengeColumn::WinnersSubmitted, Expr::value(true))
        .filter(ChallengeColumn::Id.eq(challenge_id))
        .exec(conn)
        .await
        .map_err(|e| JudgingError::database_operation(format!("更新赛道评奖状态失败: {e}")))?;

    Ok(())
}

async fn commit_winner<C: ConnectionTrait>(conn: &C, commit: &WinnerCommit) -> Result<()> {
    // 同一奖项只能有一个获奖项目，先找出原获奖项目
    let previous_holders: Vec<i64> = ProjectChallenges::find()
        .filter(
            Condition::all()
                .add(LinkColumn::ChallengeId.eq(commit.challenge_id))
                .add(LinkColumn::PrizeId.eq(commit.prize_id))
                .add(LinkColumn::ProjectId.ne(commit.project_id)),
        )
        .all(conn)
        .await
        .map_err(|e| JudgingError::database_operation(format!("查询原获奖项目失败: {e}")))?
        .into_iter()
        .map(|link| link.project_id)
        .collect();

    if !previous_holders.is_empty() {
        ProjectChallenges::update_many()
            .col_expr(LinkColumn::PrizeId, Expr::value(Option::<i64>::None))
            .col_expr(LinkColumn::Rank, Expr::value(Option::<i32>::None))
            .filter(
                Condition::all()
                    .add(LinkColumn::ChallengeId.eq(commit.challenge_id))
                    .add(LinkColumn::ProjectId.is_in(previous_holders.clone())),
            )
            .exec(conn)
            .await
            .map_err(|e| JudgingError::database_operation(format!("清除旧获奖结果失败: {e}")))?;

        JudgingEntries::update_many()
            .col_expr(EntryColumn::Standing, Expr::value(Option::<i32>::None))
            .filter(
                Condition::all()
                    .add(EntryColumn::ChallengeId.eq(commit.challenge_id))
                    .add(EntryColumn::ProjectId.is_in(previous_holders)),
            )
            .exec(conn)
            .await
            .map_err(|e| JudgingError::database_operation(format!("清除旧条目名次失败: {e}")))?;
    }

    ProjectChallenges::update_many()
        .col_expr(LinkColumn::PrizeId, Expr::value(commit.prize_id))
        .col_expr(LinkColumn::Rank, Expr::value(commit.rank))
        .filter(
            Condition::all()
                .add(LinkColumn::ProjectId.eq(commit.project_id))
                .add(LinkColumn::ChallengeId.eq(commit.challenge_id)),
        )
        .exec(conn)
        .await
        .map_err(|e| JudgingError::database_operation(format!("写入获奖结果失败: {e}")))?;

    JudgingEntries::update_many()
        .col_expr(EntryColumn::Standing, Expr::value(commit.rank))
        .filter(
            Condition::all()
                .add(EntryColumn::ProjectId.eq(commit.project_id))
                .add(EntryColumn::ChallengeId.eq(commit.challenge_id)),
        )
        .exec(conn)
        .await
        .map_err(|e| JudgingError::database_operation(format!("更新条目名次失败: {e}")))?;

    Ok(())
}
