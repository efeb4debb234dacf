//! 用户实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub display_name: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::judge_assignments::Entity")]
    JudgeAssignments,
}

impl Related<super::judge_assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JudgeAssignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_user(self) -> crate::models::judges::entities::User {
        crate::models::judges::entities::User {
            id: self.id,
            display_name: self.display_name,
        }
    }
}
