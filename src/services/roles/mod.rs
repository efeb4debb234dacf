pub mod registry;
pub mod role_cache;
pub mod strategies;

use std::sync::Arc;

use tracing::info;

use crate::errors::Result;
use crate::models::roles::entities::{Role, RoleGrant};
use crate::storage::Storage;
use registry::RoleRegistry;
use role_cache::RoleIdCache;

/// 黑客松角色授予与收回
pub struct RoleService {
    storage: Arc<dyn Storage>,
    role_ids: RoleIdCache,
    registry: RoleRegistry,
}

impl RoleService {
    pub fn new(storage: Arc<dyn Storage>, role_ids: RoleIdCache, registry: RoleRegistry) -> Self {
        Self {
            storage,
            role_ids,
            registry,
        }
    }

    async fn grant_for(&self, role_name: &str, user_id: i64, hackathon_id: i64) -> Result<RoleGrant> {
        Ok(RoleGrant {
            role_id: self.role_ids.role_id(role_name).await?,
            user_id,
            hackathon_id,
        })
    }

    pub async fn apply_role(&self, role_name: &str, user_id: i64, hackathon_id: i64) -> Result<()> {
        let strategy = self.registry.get(role_name)?;
        let grant = self.grant_for(role_name, user_id, hackathon_id).await?;
        strategy.apply_role(&self.storage, &grant).await
    }

    pub async fn retract_role(
        &self,
        role_name: &str,
        user_id: i64,
        hackathon_id: i64,
    ) -> Result<()> {
        let strategy = self.registry.get(role_name)?;
        let grant = self.grant_for(role_name, user_id, hackathon_id).await?;
        strategy.retract_role(&self.storage, &grant).await
    }

    /// 已注册策略的角色名
    pub fn role_names(&self) -> Vec<&'static str> {
        self.registry.role_names()
    }

    /// 新建角色并使缓存中的同名项失效
    pub async fn create_role(&self, name: &str) -> Result<Role> {
        let role = self.storage.create_role(name).await?;
        self.role_ids.invalidate(name).await;
        info!("Role {} created with id {}", role.name, role.id);
        Ok(role)
    }
}
