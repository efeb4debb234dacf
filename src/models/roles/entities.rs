use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "role.ts")]
pub struct Role {
    pub id: i64,
    pub name: String,
}

/// 授予/收回角色时的上下文
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleGrant {
    pub role_id: i64,
    pub user_id: i64,
    pub hackathon_id: i64,
}
