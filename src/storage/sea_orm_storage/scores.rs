//! 基准分存储操作

use super::SeaOrmStorage;
use crate::entity::baseline_scores::{ActiveModel, Column, Entity as BaselineScores};
use crate::errors::{JudgingError, Result};
use crate::models::scores::entities::{BaselineScore, CreateBaselineScoreRequest};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建基准分
    pub async fn create_baseline_score_impl(
        &self,
        req: CreateBaselineScoreRequest,
    ) -> Result<BaselineScore> {
        let dims = req.dimensions;
        let model = ActiveModel {
            project_id: Set(req.project_id),
            challenge_id: Set(req.challenge_id),
            score: Set(req.score),
            ai_judged: Set(req.ai_judged),
            technical_score: Set(dims.technical_score),
            technical_feedback: Set(dims.technical_feedback),
            business_score: Set(dims.business_score),
            business_feedback: Set(dims.business_feedback),
            innovation_score: Set(dims.innovation_score),
            innovation_feedback: Set(dims.innovation_feedback),
            ux_score: Set(dims.ux_score),
            ux_feedback: Set(dims.ux_feedback),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| JudgingError::database_operation(format!("创建基准分失败: {e}")))?;

        Ok(result.into_baseline_score())
    }

    /// 通过 ID 获取基准分
    pub async fn get_baseline_score_by_id_impl(&self, id: i64) -> Result<Option<BaselineScore>> {
        let result = BaselineScores::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| JudgingError::database_operation(format!("查询基准分失败: {e}")))?;

        Ok(result.map(|m| m.into_baseline_score()))
    }

    /// 通过 (项目, 赛道) 获取基准分
    pub async fn get_baseline_score_impl(
        &self,
        project_id: i64,
        challenge_id: i64,
    ) -> Result<Option<BaselineScore>> {
        let result = BaselineScores::find()
            .filter(
                Condition::all()
                    .add(Column::ProjectId.eq(project_id))
                    .add(Column::ChallengeId.eq(challenge_id)),
            )
            .one(&self.db)
            .await
            .map_err(|e| JudgingError::database_operation(format!("查询基准分失败: {e}")))?;

        Ok(result.map(|m| m.into_baseline_score()))
    }

    /// 列出若干赛道下的基准分
    pub async fn list_baseline_scores_impl(
        &self,
        challenge_ids: &[i64],
    ) -> Result<Vec<BaselineScore>> {
        if challenge_ids.is_empty() {
            return Ok(Vec::new());
        }

        let scores = BaselineScores::find()
            .filter(Column::ChallengeId.is_in(challenge_ids.iter().copied()))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| JudgingError::database_operation(format!("查询基准分列表失败: {e}")))?;

        Ok(scores
            .into_iter()
            .map(|m| m.into_baseline_score())
            .collect())
    }
}
