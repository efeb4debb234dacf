//! 基准分实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "baseline_scores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub project_id: i64,
    pub challenge_id: i64,
    pub score: Option<f64>,
    pub ai_judged: bool,
    pub technical_score: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub technical_feedback: Option<String>,
    pub business_score: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub business_feedback: Option<String>,
    pub innovation_score: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub innovation_feedback: Option<String>,
    pub ux_score: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub ux_feedback: Option<String>,
    pub created_at: i64,
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
    pub fn into_baseline_score(self) -> crate::models::scores::entities::BaselineScore {
        use crate::models::scores::entities::{BaselineScore, DimensionScores};
        use chrono::{DateTime, Utc};

        BaselineScore {
            id: self.id,
            project_id: self.project_id,
            challenge_id: self.challenge_id,
            score: self.score,
            ai_judged: self.ai_judged,
            dimensions: DimensionScores {
                technical_score: self.technical_score,
                technical_feedback: self.technical_feedback,
                business_score: self.business_score,
                business_feedback: self.business_feedback,
                innovation_score: self.innovation_score,
                innovation_feedback: self.innovation_feedback,
                ux_score: self.ux_score,
                ux_feedback: self.ux_feedback,
            },
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
