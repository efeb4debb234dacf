//! 评委-赛道覆盖实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "challenge_coverages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub judging_id: i64,
    pub challenge_id: i64,
    pub is_winner_assigner: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::judge_assignments::Entity",
        from = "Column::JudgingId",
        to = "super::judge_assignments::Column::Id"
    )]
    JudgeAssignment,
    #[sea_orm(
        belongs_to = "super::challenges::Entity",
        from = "Column::ChallengeId",
        to = "super::challenges::Column::Id"
    )]
    Challenge,
}

impl Related<super::judge_assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JudgeAssignment.def()
    }
}

impl Related<super::challenges::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Challenge.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// 覆盖行本身不存 submitted_winners 与 user_id，需要由调用方从关联表补齐
    pub fn into_coverage(
        self,
        user_id: i64,
        submitted_winners: bool,
    ) -> crate::models::judges::entities::ChallengeCoverage {
        crate::models::judges::entities::ChallengeCoverage {
            id: self.id,
            judging_id: self.judging_id,
            challenge_id: self.challenge_id,
            user_id,
            is_winner_assigner: self.is_winner_assigner,
            submitted_winners,
        }
    }
}
