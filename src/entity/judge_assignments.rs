//! 评委分配实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "judge_assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub hackathon_id: i64,
    pub submitted: bool,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::challenge_coverages::Entity")]
    Coverages,
    #[sea_orm(has_many = "super::judging_entries::Entity")]
    Entries,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::challenge_coverages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Coverages.def()
    }
}

impl Related<super::judging_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Entries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_judge_assignment(self) -> crate::models::judges::entities::JudgeAssignment {
        crate::models::judges::entities::JudgeAssignment {
            id: self.id,
            user_id: self.user_id,
            hackathon_id: self.hackathon_id,
            submitted: self.submitted,
        }
    }
}
