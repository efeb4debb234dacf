//! 评委分配与赛道覆盖存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::challenge_coverages::{
    ActiveModel as CoverageActiveModel, Column as CoverageColumn, Entity as ChallengeCoverages,
};
use crate::entity::challenges::{Column as ChallengeColumn, Entity as Challenges};
use crate::entity::judge_assignments::{
    ActiveModel as AssignmentActiveModel, Column as AssignmentColumn, Entity as JudgeAssignments,
};
use crate::entity::judging_entries::{Column as EntryColumn, Entity as JudgingEntries};
use crate::errors::{JudgingError, Result};
use crate::models::judges::entities::{ChallengeCoverage, JudgeAssignment};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 通过 ID 获取评委分配
    pub async fn get_judge_assignment_by_id_impl(
        &self,
        judging_id: i64,
    ) -> Result<Option<JudgeAssignment>> {
        let result = JudgeAssignments::find_by_id(judging_id)
            .one(&self.db)
            .await
            .map_err(|e| JudgingError::database_operation(format!("查询评委分配失败: {e}")))?;

        Ok(result.map(|m| m.into_judge_assignment()))
    }

    /// 通过用户与黑客松获取评委分配
    pub async fn get_judge_assignment_by_user_impl(
        &self,
        user_id: i64,
        hackathon_id: i64,
    ) -> Result<Option<JudgeAssignment>> {
        let result = JudgeAssignments::find()
            .filter(
                Condition::all()
                    .add(AssignmentColumn::UserId.eq(user_id))
                    .add(AssignmentColumn::HackathonId.eq(hackathon_id)),
            )
            .one(&self.db)
            .await
            .map_err(|e| JudgingError::database_operation(format!("查询评委分配失败: {e}")))?;

        Ok(result.map(|m| m.into_judge_assignment()))
    }

    /// 创建评委分配，已存在时直接返回
    pub async fn create_judge_assignment_impl(
        &self,
        user_id: i64,
        hackathon_id: i64,
    ) -> Result<JudgeAssignment> {
        if let Some(existing) = self
            .get_judge_assignment_by_user_impl(user_id, hackathon_id)
            .await?
        {
            return Ok(existing);
        }

        let model = AssignmentActiveModel {
            user_id: Set(user_id),
            hackathon_id: Set(hackathon_id),
            submitted: Set(false),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        match model.insert(&self.db).await {
            Ok(result) => Ok(result.into_judge_assignment()),
            // 并发创建时唯一约束冲突，读回对方写入的记录
            Err(e) if is_unique_violation(&e) => self
                .get_judge_assignment_by_user_impl(user_id, hackathon_id)
                .await?
                .ok_or_else(|| JudgingError::database_operation(format!("创建评委分配失败: {e}"))),
            Err(e) => Err(JudgingError::database_operation(format!(
                "创建评委分配失败: {e}"
            ))),
        }
    }

    /// 删除评委分配，连同其覆盖关系与评审条目
    pub async fn delete_judge_assignment_impl(&self, judging_id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| JudgingError::database_operation(format!("开启事务失败: {e}")))?;

        JudgingEntries::delete_many()
            .filter(EntryColumn::JudgingId.eq(judging_id))
            .exec(&txn)
            .await
            .map_err(|e| JudgingError::database_operation(format!("删除评审条目失败: {e}")))?;

        ChallengeCoverages::delete_many()
            .filter(CoverageColumn::JudgingId.eq(judging_id))
            .exec(&txn)
            .await
            .map_err(|e| JudgingError::database_operation(format!("删除赛道覆盖失败: {e}")))?;

        let result = JudgeAssignments::delete_by_id(judging_id)
            .exec(&txn)
            .await
            .map_err(|e| JudgingError::database_operation(format!("删除评委分配失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| JudgingError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 标记评委已完成评审
    pub async fn mark_judge_submitted_impl(
        &self,
        judging_id: i64,
    ) -> Result<Option<JudgeAssignment>> {
        if self.get_judge_assignment_by_id_impl(judging_id).await?.is_none() {
            return Ok(None);
        }

        let model = AssignmentActiveModel {
            id: Set(judging_id),
            submitted: Set(true),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| JudgingError::database_operation(format!("更新评委分配失败: {e}")))?;

        Ok(Some(result.into_judge_assignment()))
    }

    /// 获取覆盖某赛道的所有评委
    pub async fn get_coverage_for_challenge_impl(
        &self,
        challenge_id: i64,
    ) -> Result<Vec<ChallengeCoverage>> {
        let challenge = Challenges::find_by_id(challenge_id)
            .one(&self.db)
            .await
            .map_err(|e| JudgingError::database_operation(format!("查询赛道失败: {e}")))?;
        let Some(challenge) = challenge else {
            return Ok(Vec::new());
        };

        let rows = ChallengeCoverages::find()
            .filter(CoverageColumn::ChallengeId.eq(challenge_id))
            .order_by_asc(CoverageColumn::Id)
            .find_also_related(JudgeAssignments)
            .all(&self.db)
            .await
            .map_err(|e| JudgingError::database_operation(format!("查询赛道覆盖失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(coverage, assignment)| {
                assignment.map(|a| coverage.into_coverage(a.user_id, challenge.winners_submitted))
            })
            .collect())
    }

    /// 获取某评委覆盖的所有赛道
    pub async fn list_coverages_for_judge_impl(
        &self,
        judging_id: i64,
    ) -> Result<Vec<ChallengeCoverage>> {
        let Some(assignment) = self.get_judge_assignment_by_id_impl(judging_id).await? else {
            return Ok(Vec::new());
        };

        let coverages = ChallengeCoverages::find()
            .filter(CoverageColumn::JudgingId.eq(judging_id))
            .order_by_asc(CoverageColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| JudgingError::database_operation(format!("查询赛道覆盖失败: {e}")))?;

        let challenge_ids: Vec<i64> = coverages.iter().map(|c| c.challenge_id).collect();
        let submitted: HashMap<i64, bool> = Challenges::find()
            .filter(ChallengeColumn::Id.is_in(challenge_ids))
            .all(&self.db)
            .await
            .map_err(|e| JudgingError::database_operation(format!("查询赛道失败: {e}")))?
            .into_iter()
            .map(|c| (c.id, c.winners_submitted))
            .collect();

        Ok(coverages
            .into_iter()
            .map(|c| {
                let flag = submitted.get(&c.challenge_id).copied().unwrap_or(false);
                c.into_coverage(assignment.user_id, flag)
            })
            .collect())
    }

    /// 添加赛道覆盖，已存在时直接返回
    pub async fn add_coverage_impl(
        &self,
        judging_id: i64,
        challenge_id: i64,
    ) -> Result<ChallengeCoverage> {
        let existing = self.find_coverage(judging_id, challenge_id).await?;
        if existing.is_none() {
            let model = CoverageActiveModel {
                judging_id: Set(judging_id),
                challenge_id: Set(challenge_id),
                is_winner_assigner: Set(false),
                ..Default::default()
            };

            if let Err(e) = model.insert(&self.db).await
                && !is_unique_violation(&e)
            {
                return Err(JudgingError::database_operation(format!(
                    "添加赛道覆盖失败: {e}"
                )));
            }
        }

        self.list_coverages_for_judge_impl(judging_id)
            .await?
            .into_iter()
            .find(|c| c.challenge_id == challenge_id)
            .ok_or_else(|| JudgingError::not_found("赛道覆盖不存在"))
    }

    /// 删除赛道覆盖及该评委在此赛道下的全部条目
    pub async fn remove_coverage_impl(&self, judging_id: i64, challenge_id: i64) -> Result<u64> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| JudgingError::database_operation(format!("开启事务失败: {e}")))?;

        let removed = JudgingEntries::delete_many()
            .filter(
                Condition::all()
                    .add(EntryColumn::JudgingId.eq(judging_id))
                    .add(EntryColumn::ChallengeId.eq(challenge_id)),
            )
            .exec(&txn)
            .await
            .map_err(|e| JudgingError::database_operation(format!("删除评审条目失败: {e}")))?;

        ChallengeCoverages::delete_many()
            .filter(
                Condition::all()
                    .add(CoverageColumn::JudgingId.eq(judging_id))
                    .add(CoverageColumn::ChallengeId.eq(challenge_id)),
            )
            .exec(&txn)
            .await
            .map_err(|e| JudgingError::database_operation(format!("删除赛道覆盖失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| JudgingError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(removed.rows_affected)
    }

    async fn find_coverage(
        &self,
        judging_id: i64,
        challenge_id: i64,
    ) -> Result<Option<crate::entity::challenge_coverages::Model>> {
        ChallengeCoverages::find()
            .filter(
                Condition::all()
                    .add(CoverageColumn::JudgingId.eq(judging_id))
                    .add(CoverageColumn::ChallengeId.eq(challenge_id)),
            )
            .one(&self.db)
            .await
            .map_err(|e| JudgingError::database_operation(format!("查询赛道覆盖失败: {e}")))
    }
}

/// 是否为唯一约束冲突
pub(super) fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
    matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    )
}
