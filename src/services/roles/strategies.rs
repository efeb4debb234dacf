//! 各角色授予/收回时的后置动作

use std::sync::Arc;

use tracing::info;

use crate::errors::Result;
use crate::models::roles::entities::RoleGrant;
use crate::storage::Storage;

#[async_trait::async_trait]
pub trait RoleStrategy: Send + Sync {
    fn role_name(&self) -> &'static str;

    async fn apply_role(&self, storage: &Arc<dyn Storage>, grant: &RoleGrant) -> Result<()>;

    async fn retract_role(&self, storage: &Arc<dyn Storage>, grant: &RoleGrant) -> Result<()>;
}

/// 评委：授予时建立评委分配，收回时连同覆盖与条目一起删除
pub struct JudgeRole;

#[async_trait::async_trait]
impl RoleStrategy for JudgeRole {
    fn role_name(&self) -> &'static str {
        "judge"
    }

    async fn apply_role(&self, storage: &Arc<dyn Storage>, grant: &RoleGrant) -> Result<()> {
        storage
            .grant_hackathon_role(grant.user_id, grant.hackathon_id, grant.role_id)
            .await?;
        let assignment = storage
            .create_judge_assignment(grant.user_id, grant.hackathon_id)
            .await?;
        info!(
            "User {} is now judging hackathon {} (assignment {})",
            grant.user_id, grant.hackathon_id, assignment.id
        );
        Ok(())
    }

    async fn retract_role(&self, storage: &Arc<dyn Storage>, grant: &RoleGrant) -> Result<()> {
        if let Some(assignment) = storage
            .get_judge_assignment_by_user(grant.user_id, grant.hackathon_id)
            .await?
        {
            storage.delete_judge_assignment(assignment.id).await?;
        }
        storage
            .revoke_hackathon_role(grant.user_id, grant.hackathon_id, grant.role_id)
            .await?;
        info!(
            "User {} no longer judges hackathon {}",
            grant.user_id, grant.hackathon_id
        );
        Ok(())
    }
}

/// 嘉宾：只有成员关系
pub struct VipRole;

#[async_trait::async_trait]
impl RoleStrategy for VipRole {
    fn role_name(&self) -> &'static str {
        "vip"
    }

    async fn apply_role(&self, storage: &Arc<dyn Storage>, grant: &RoleGrant) -> Result<()> {
        storage
            .grant_hackathon_role(grant.user_id, grant.hackathon_id, grant.role_id)
            .await
    }

    async fn retract_role(&self, storage: &Arc<dyn Storage>, grant: &RoleGrant) -> Result<()> {
        storage
            .revoke_hackathon_role(grant.user_id, grant.hackathon_id, grant.role_id)
            .await?;
        Ok(())
    }
}
