//! 数据存储层
//!
//! 评审引擎只通过 `Storage` trait 访问持久化数据，不关心具体查询方式。

use std::sync::Arc;

use crate::errors::Result;
use crate::models::{
    challenges::entities::{Challenge, Hackathon, Prize, Project, ProjectChallenge},
    entries::entities::{EntryInsertOutcome, EntryPatch, JudgingEntry, NewJudgingEntry},
    judges::entities::{ChallengeCoverage, JudgeAssignment, User},
    roles::entities::Role,
    scores::entities::{BaselineScore, CreateBaselineScoreRequest},
    winners::entities::WinnerCommit,
};

#[cfg(test)]
pub(crate) mod memory_storage;
pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户与黑客松
    // 批量获取用户
    async fn get_users_by_ids(&self, ids: &[i64]) -> Result<Vec<User>>;
    // 通过ID获取黑客松
    async fn get_hackathon_by_id(&self, hackathon_id: i64) -> Result<Option<Hackathon>>;

    /// 赛道、项目与奖项
    // 通过ID获取赛道
    async fn get_challenge_by_id(&self, challenge_id: i64) -> Result<Option<Challenge>>;
    // 批量获取赛道
    async fn list_challenges_by_ids(&self, challenge_ids: &[i64]) -> Result<Vec<Challenge>>;
    // 批量获取项目
    async fn get_projects_by_ids(&self, project_ids: &[i64]) -> Result<Vec<Project>>;
    // 获取项目-赛道关联
    async fn get_project_challenge(
        &self,
        project_id: i64,
        challenge_id: i64,
    ) -> Result<Option<ProjectChallenge>>;
    // 列出赛道下的所有项目关联
    async fn list_project_challenges(&self, challenge_ids: &[i64])
    -> Result<Vec<ProjectChallenge>>;
    // 获取赛道奖项
    async fn get_prizes_for_challenge(&self, challenge_id: i64) -> Result<Vec<Prize>>;

    /// 评委分配
    async fn get_judge_assignment_by_id(&self, judging_id: i64)
    -> Result<Option<JudgeAssignment>>;
    async fn get_judge_assignment_by_user(
        &self,
        user_id: i64,
        hackathon_id: i64,
    ) -> Result<Option<JudgeAssignment>>;
    // 创建评委分配，已存在时返回现有记录
    async fn create_judge_assignment(
        &self,
        user_id: i64,
        hackathon_id: i64,
    ) -> Result<JudgeAssignment>;
    // 删除评委分配（级联删除覆盖关系与评审条目）
    async fn delete_judge_assignment(&self, judging_id: i64) -> Result<bool>;
    // 标记评委已完成评审
    async fn mark_judge_submitted(&self, judging_id: i64) -> Result<Option<JudgeAssignment>>;

    /// 赛道覆盖
    async fn get_coverage_for_challenge(&self, challenge_id: i64)
    -> Result<Vec<ChallengeCoverage>>;
    async fn list_coverages_for_judge(&self, judging_id: i64) -> Result<Vec<ChallengeCoverage>>;
    // 添加覆盖关系，已存在时返回现有记录
    async fn add_coverage(&self, judging_id: i64, challenge_id: i64)
    -> Result<ChallengeCoverage>;
    // 删除覆盖关系及该评委在此赛道下的全部条目，返回删除的条目数
    async fn remove_coverage(&self, judging_id: i64, challenge_id: i64) -> Result<u64>;

    /// 基准分
    async fn create_baseline_score(&self, req: CreateBaselineScoreRequest)
    -> Result<BaselineScore>;
    async fn get_baseline_score_by_id(&self, id: i64) -> Result<Option<BaselineScore>>;
    async fn get_baseline_score(
        &self,
        project_id: i64,
        challenge_id: i64,
    ) -> Result<Option<BaselineScore>>;
    async fn list_baseline_scores(&self, challenge_ids: &[i64]) -> Result<Vec<BaselineScore>>;

    /// 评审条目
    async fn find_entry(
        &self,
        judging_id: i64,
        project_id: i64,
        challenge_id: i64,
    ) -> Result<Option<JudgingEntry>>;
    async fn get_entry_by_id(&self, entry_id: i64) -> Result<Option<JudgingEntry>>;
    // 插入或忽略：依赖 (评委, 项目, 赛道) 唯一约束
    async fn insert_entry_if_absent(&self, entry: NewJudgingEntry) -> Result<EntryInsertOutcome>;
    async fn update_entry(&self, entry_id: i64, patch: EntryPatch)
    -> Result<Option<JudgingEntry>>;
    async fn delete_entry(&self, entry_id: i64) -> Result<bool>;
    async fn list_entries_for_judge(
        &self,
        judging_id: i64,
        challenge_id: i64,
    ) -> Result<Vec<JudgingEntry>>;
    async fn list_entries_for_challenges(&self, challenge_ids: &[i64])
    -> Result<Vec<JudgingEntry>>;

    /// 评奖
    // 在同一事务中清除赛道其他评奖人并设置目标
    async fn set_winner_assigner(&self, challenge_id: i64, judging_id: i64) -> Result<()>;
    // 在同一事务中重新校验评奖人身份并写入整批获奖结果
    async fn commit_winner_batch(&self, caller_user_id: i64, commits: &[WinnerCommit])
    -> Result<()>;

    /// 角色
    async fn get_role_by_name(&self, name: &str) -> Result<Option<Role>>;
    async fn create_role(&self, name: &str) -> Result<Role>;
    async fn grant_hackathon_role(
        &self,
        user_id: i64,
        hackathon_id: i64,
        role_id: i64,
    ) -> Result<()>;
    async fn revoke_hackathon_role(
        &self,
        user_id: i64,
        hackathon_id: i64,
        role_id: i64,
    ) -> Result<bool>;
}

pub async fn create_storage(
    config: &crate::config::DatabaseConfig,
) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async(config).await?;
    Ok(Arc::new(storage))
}
