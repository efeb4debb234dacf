use std::collections::HashMap;
use std::sync::Arc;

use super::strategies::{JudgeRole, RoleStrategy, VipRole};
use crate::errors::{JudgingError, Result};

/// 按角色名选择策略
pub struct RoleRegistry {
    strategies: HashMap<&'static str, Arc<dyn RoleStrategy>>,
}

impl RoleRegistry {
    pub fn empty() -> Self {
        Self {
            strategies: HashMap::new(),
        }
    }

    pub fn with_builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(Arc::new(JudgeRole));
        registry.register(Arc::new(VipRole));
        registry
    }

    pub fn register(&mut self, strategy: Arc<dyn RoleStrategy>) {
        self.strategies.insert(strategy.role_name(), strategy);
    }

    pub fn get(&self, role_name: &str) -> Result<Arc<dyn RoleStrategy>> {
        self.strategies
            .get(role_name)
            .cloned()
            .ok_or_else(|| JudgingError::validation(format!("未知角色: {role_name}")))
    }

    pub fn role_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.strategies.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for RoleRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}
