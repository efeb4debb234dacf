//! 奖项实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "prizes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub challenge_id: i64,
    pub rank: i32,
    pub amount: Option<f64>,
    pub custom_value: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::challenges::Entity",
        from = "Column::ChallengeId",
        to = "super::challenges::Column::Id"
    )]
    Challenge,
}

impl Related<super::challenges::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Challenge.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_prize(self) -> crate::models::challenges::entities::Prize {
        crate::models::challenges::entities::Prize {
            id: self.id,
            challenge_id: self.challenge_id,
            rank: self.rank,
            amount: self.amount,
            custom_value: self.custom_value,
        }
    }
}
