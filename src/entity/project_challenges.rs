//! 项目-赛道关联实体（获奖结果）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "project_challenges")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub project_id: i64,
    pub challenge_id: i64,
    pub prize_id: Option<i64>,
    pub rank: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::projects::Entity",
        from = "Column::ProjectId",
        to = "super::projects::Column::Id"
    )]
    Project,
    #[sea_orm(
        belongs_to = "super::challenges::Entity",
        from = "Column::ChallengeId",
        to = "super::challenges::Column::Id"
    )]
    Challenge,
}

impl Related<super::projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl Related<super::challenges::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Challenge.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_project_challenge(self) -> crate::models::challenges::entities::ProjectChallenge {
        crate::models::challenges::entities::ProjectChallenge {
            id: self.id,
            project_id: self.project_id,
            challenge_id: self.challenge_id,
            prize_id: self.prize_id,
            rank: self.rank,
        }
    }
}
