//! 评审条目存储操作

use super::SeaOrmStorage;
use super::judges::is_unique_violation;
use crate::entity::judging_entries::{ActiveModel, Column, Entity as JudgingEntries};
use crate::errors::{JudgingError, Result};
use crate::models::entries::entities::{
    EntryInsertOutcome, EntryPatch, JudgingEntry, NewJudgingEntry, ReviewStatus,
};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 通过 (评委, 项目, 赛道) 查找条目
    pub async fn find_entry_impl(
        &self,
        judging_id: i64,
        project_id: i64,
        challenge_id: i64,
    ) -> Result<Option<JudgingEntry>> {
        let result = JudgingEntries::find()
            .filter(
                Condition::all()
                    .add(Column::JudgingId.eq(judging_id))
                    .add(Column::ProjectId.eq(project_id))
                    .add(Column::ChallengeId.eq(challenge_id)),
            )
            .one(&self.db)
            .await
            .map_err(|e| JudgingError::database_operation(format!("查询评审条目失败: {e}")))?;

        Ok(result.map(|m| m.into_judging_entry()))
    }

    /// 通过 ID 获取条目
    pub async fn get_entry_by_id_impl(&self, entry_id: i64) -> Result<Option<JudgingEntry>> {
        let result = JudgingEntries::find_by_id(entry_id)
            .one(&self.db)
            .await
            .map_err(|e| JudgingError::database_operation(format!("查询评审条目失败: {e}")))?;

        Ok(result.map(|m| m.into_judging_entry()))
    }

    /// 插入或忽略
    ///
    /// 去重由 (judging_id, project_id, challenge_id) 唯一索引保证，
    /// 存在性检查与插入是同一条语句。
    pub async fn insert_entry_if_absent_impl(
        &self,
        entry: NewJudgingEntry,
    ) -> Result<EntryInsertOutcome> {
        let now = chrono::Utc::now().timestamp();
        let (judging_id, project_id, challenge_id) =
            (entry.judging_id, entry.project_id, entry.challenge_id);
        let dims = entry.dimensions;

        let model = ActiveModel {
            judging_id: Set(judging_id),
            project_id: Set(project_id),
            challenge_id: Set(challenge_id),
            baseline_score_id: Set(entry.baseline_score_id),
            ai_judged: Set(entry.ai_judged),
            technical_score: Set(dims.technical_score),
            technical_feedback: Set(dims.technical_feedback),
            business_score: Set(dims.business_score),
            business_feedback: Set(dims.business_feedback),
            innovation_score: Set(dims.innovation_score),
            innovation_feedback: Set(dims.innovation_feedback),
            ux_score: Set(dims.ux_score),
            ux_feedback: Set(dims.ux_feedback),
            score: Set(None),
            general_comments: Set(None),
            review_status: Set(ReviewStatus::NeedsReview.to_string()),
            flag_reason: Set(None),
            flag_comment: Set(None),
            standing: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let inserted = JudgingEntries::insert(model)
            .on_conflict(
                OnConflict::columns([Column::JudgingId, Column::ProjectId, Column::ChallengeId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec(&self.db)
            .await;

        match inserted {
            Ok(result) => {
                let created = self
                    .get_entry_by_id_impl(result.last_insert_id)
                    .await?
                    .ok_or_else(|| JudgingError::database_operation("新建评审条目读回失败"))?;
                Ok(EntryInsertOutcome::Created(created))
            }
            Err(DbErr::RecordNotInserted) => Ok(EntryInsertOutcome::AlreadyExists),
            Err(e) if is_unique_violation(&e) => Ok(EntryInsertOutcome::AlreadyExists),
            Err(e) => Err(JudgingError::database_operation(format!(
                "创建评审条目失败: {e}"
            ))),
        }
    }

    /// 部分更新条目
    pub async fn update_entry_impl(
        &self,
        entry_id: i64,
        patch: EntryPatch,
    ) -> Result<Option<JudgingEntry>> {
        // 先检查条目是否存在
        if self.get_entry_by_id_impl(entry_id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(entry_id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(v) = patch.technical_score {
            model.technical_score = Set(Some(v));
        }
        if let Some(v) = patch.technical_feedback {
            model.technical_feedback = Set(Some(v));
        }
        if let Some(v) = patch.business_score {
            model.business_score = Set(Some(v));
        }
        if let Some(v) = patch.business_feedback {
            model.business_feedback = Set(Some(v));
        }
        if let Some(v) = patch.innovation_score {
            model.innovation_score = Set(Some(v));
        }
        if let Some(v) = patch.innovation_feedback {
            model.innovation_feedback = Set(Some(v));
        }
        if let Some(v) = patch.ux_score {
            model.ux_score = Set(Some(v));
        }
        if let Some(v) = patch.ux_feedback {
            model.ux_feedback = Set(Some(v));
        }
        if let Some(v) = patch.score {
            model.score = Set(Some(v));
        }
        if let Some(v) = patch.general_comments {
            model.general_comments = Set(Some(v));
        }
        if let Some(status) = patch.review_status {
            model.review_status = Set(status.to_string());
        }
        if let Some(reason) = patch.flag_reason {
            model.flag_reason = Set(reason);
        }
        if let Some(comment) = patch.flag_comment {
            model.flag_comment = Set(comment);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| JudgingError::database_operation(format!("更新评审条目失败: {e}")))?;

        self.get_entry_by_id_impl(entry_id).await
    }

    /// 删除条目
    pub async fn delete_entry_impl(&self, entry_id: i64) -> Result<bool> {
        let result = JudgingEntries::delete_by_id(entry_id)
            .exec(&self.db)
            .await
            .map_err(|e| JudgingError::database_operation(format!("删除评审条目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 列出评委在某赛道下的条目
    pub async fn list_entries_for_judge_impl(
        &self,
        judging_id: i64,
        challenge_id: i64,
    ) -> Result<Vec<JudgingEntry>> {
        let entries = JudgingEntries::find()
            .filter(
                Condition::all()
                    .add(Column::JudgingId.eq(judging_id))
                    .add(Column::ChallengeId.eq(challenge_id)),
            )
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| JudgingError::database_operation(format!("查询评审条目失败: {e}")))?;

        Ok(entries
            .into_iter()
            .map(|m| m.into_judging_entry())
            .collect())
    }

    /// 列出若干赛道下的全部条目
    pub async fn list_entries_for_challenges_impl(
        &self,
        challenge_ids: &[i64],
    ) -> Result<Vec<JudgingEntry>> {
        if challenge_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entries = JudgingEntries::find()
            .filter(Column::ChallengeId.is_in(challenge_ids.iter().copied()))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| JudgingError::database_operation(format!("查询评审条目失败: {e}")))?;

        Ok(entries
            .into_iter()
            .map(|m| m.into_judging_entry())
            .collect())
    }
}
