//! 角色存储操作

use super::SeaOrmStorage;
use super::judges::is_unique_violation;
use crate::entity::hackathon_roles::{
    ActiveModel as MemberActiveModel, Column as MemberColumn, Entity as HackathonRoles,
};
use crate::entity::roles::{ActiveModel as RoleActiveModel, Column as RoleColumn, Entity as Roles};
use crate::errors::{JudgingError, Result};
use crate::models::roles::entities::Role;
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 按名称查询角色
    pub async fn get_role_by_name_impl(&self, name: &str) -> Result<Option<Role>> {
        let result = Roles::find()
            .filter(RoleColumn::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| JudgingError::database_operation(format!("查询角色失败: {e}")))?;

        Ok(result.map(|m| m.into_role()))
    }

    /// 创建角色
    pub async fn create_role_impl(&self, name: &str) -> Result<Role> {
        if self.get_role_by_name_impl(name).await?.is_some() {
            return Err(JudgingError::conflict(format!("角色已存在: {name}")));
        }

        let model = RoleActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        };

        match model.insert(&self.db).await {
            Ok(result) => Ok(result.into_role()),
            Err(e) if is_unique_violation(&e) => {
                Err(JudgingError::conflict(format!("角色已存在: {name}")))
            }
            Err(e) => Err(JudgingError::database_operation(format!("创建角色失败: {e}"))),
        }
    }

    /// 授予黑客松角色，重复授予不报错
    pub async fn grant_hackathon_role_impl(
        &self,
        user_id: i64,
        hackathon_id: i64,
        role_id: i64,
    ) -> Result<()> {
        let model = MemberActiveModel {
            user_id: Set(user_id),
            hackathon_id: Set(hackathon_id),
            role_id: Set(role_id),
            ..Default::default()
        };

        match model.insert(&self.db).await {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Ok(()),
            Err(e) => Err(JudgingError::database_operation(format!("授予角色失败: {e}"))),
        }
    }

    /// 收回黑客松角色
    pub async fn revoke_hackathon_role_impl(
        &self,
        user_id: i64,
        hackathon_id: i64,
        role_id: i64,
    ) -> Result<bool> {
        let result = HackathonRoles::delete_many()
            .filter(
                Condition::all()
                    .add(MemberColumn::UserId.eq(user_id))
                    .add(MemberColumn::HackathonId.eq(hackathon_id))
                    .add(MemberColumn::RoleId.eq(role_id)),
            )
            .exec(&self.db)
            .await
            .map_err(|e| JudgingError::database_operation(format!("收回角色失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
