//! 用户、黑客松、赛道、项目与奖项的只读查询

use super::SeaOrmStorage;
use crate::entity::challenges::{Column as ChallengeColumn, Entity as Challenges};
use crate::entity::hackathons::Entity as Hackathons;
use crate::entity::prizes::{Column as PrizeColumn, Entity as Prizes};
use crate::entity::project_challenges::{
    Column as ProjectChallengeColumn, Entity as ProjectChallenges,
};
use crate::entity::projects::{Column as ProjectColumn, Entity as Projects};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{JudgingError, Result};
use crate::models::{
    challenges::entities::{Challenge, Hackathon, Prize, Project, ProjectChallenge},
    judges::entities::User,
};
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    /// 批量获取用户
    pub async fn get_users_by_ids_impl(&self, ids: &[i64]) -> Result<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let users = Users::find()
            .filter(UserColumn::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .map_err(|e| JudgingError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(users.into_iter().map(|m| m.into_user()).collect())
    }

    /// 通过 ID 获取黑客松
    pub async fn get_hackathon_by_id_impl(&self, hackathon_id: i64) -> Result<Option<Hackathon>> {
        let result = Hackathons::find_by_id(hackathon_id)
            .one(&self.db)
            .await
            .map_err(|e| JudgingError::database_operation(format!("查询黑客松失败: {e}")))?;

        Ok(result.map(|m| m.into_hackathon()))
    }

    /// 通过 ID 获取赛道
    pub async fn get_challenge_by_id_impl(&self, challenge_id: i64) -> Result<Option<Challenge>> {
        let result = Challenges::find_by_id(challenge_id)
            .one(&self.db)
            .await
            .map_err(|e| JudgingError::database_operation(format!("查询赛道失败: {e}")))?;

        Ok(result.map(|m| m.into_challenge()))
    }

    /// 批量获取赛道
    pub async fn list_challenges_by_ids_impl(
        &self,
        challenge_ids: &[i64],
    ) -> Result<Vec<Challenge>> {
        if challenge_ids.is_empty() {
            return Ok(Vec::new());
        }

        let challenges = Challenges::find()
            .filter(ChallengeColumn::Id.is_in(challenge_ids.iter().copied()))
            .order_by_asc(ChallengeColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| JudgingError::database_operation(format!("查询赛道列表失败: {e}")))?;

        Ok(challenges.into_iter().map(|m| m.into_challenge()).collect())
    }

    /// 批量获取项目
    pub async fn get_projects_by_ids_impl(&self, project_ids: &[i64]) -> Result<Vec<Project>> {
        if project_ids.is_empty() {
            return Ok(Vec::new());
        }

        let projects = Projects::find()
            .filter(ProjectColumn::Id.is_in(project_ids.iter().copied()))
            .all(&self.db)
            .await
            .map_err(|e| JudgingError::database_operation(format!("查询项目失败: {e}")))?;

        Ok(projects.into_iter().map(|m| m.into_project()).collect())
    }

    /// 获取项目-赛道关联
    pub async fn get_project_challenge_impl(
        &self,
        project_id: i64,
        challenge_id: i64,
    ) -> Result<Option<ProjectChallenge>> {
        let result = ProjectChallenges::find()
            .filter(
                Condition::all()
                    .add(ProjectChallengeColumn::ProjectId.eq(project_id))
                    .add(ProjectChallengeColumn::ChallengeId.eq(challenge_id)),
            )
            .one(&self.db)
            .await
            .map_err(|e| JudgingError::database_operation(format!("查询项目关联失败: {e}")))?;

        Ok(result.map(|m| m.into_project_challenge()))
    }

    /// 列出赛道下的项目关联
    pub async fn list_project_challenges_impl(
        &self,
        challenge_ids: &[i64],
    ) -> Result<Vec<ProjectChallenge>> {
        if challenge_ids.is_empty() {
            return Ok(Vec::new());
        }

        let links = ProjectChallenges::find()
            .filter(ProjectChallengeColumn::ChallengeId.is_in(challenge_ids.iter().copied()))
            .order_by_asc(ProjectChallengeColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| JudgingError::database_operation(format!("查询项目关联失败: {e}")))?;

        Ok(links
            .into_iter()
            .map(|m| m.into_project_challenge())
            .collect())
    }

    /// 获取赛道奖项，按名次排序
    pub async fn get_prizes_for_challenge_impl(&self, challenge_id: i64) -> Result<Vec<Prize>> {
        let prizes = Prizes::find()
            .filter(PrizeColumn::ChallengeId.eq(challenge_id))
            .order_by_asc(PrizeColumn::Rank)
            .all(&self.db)
            .await
            .map_err(|e| JudgingError::database_operation(format!("查询奖项失败: {e}")))?;

        Ok(prizes.into_iter().map(|m| m.into_prize()).collect())
    }
}
