//! 赛道实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "challenges")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub hackathon_id: i64,
    pub name: String,
    pub winners_submitted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hackathons::Entity",
        from = "Column::HackathonId",
        to = "super::hackathons::Column::Id"
    )]
    Hackathon,
    #[sea_orm(has_many = "super::prizes::Entity")]
    Prizes,
    #[sea_orm(has_many = "super::challenge_coverages::Entity")]
    Coverages,
}

impl Related<super::hackathons::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hackathon.def()
    }
}

impl Related<super::prizes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Prizes.def()
    }
}

impl Related<super::challenge_coverages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Coverages.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_challenge(self) -> crate::models::challenges::entities::Challenge {
        crate::models::challenges::entities::Challenge {
            id: self.id,
            hackathon_id: self.hackathon_id,
            name: self.name,
            winners_submitted: self.winners_submitted,
        }
    }
}
