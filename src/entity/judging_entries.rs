//! 评审条目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "judging_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub judging_id: i64,
    pub project_id: i64,
    pub challenge_id: i64,
    pub baseline_score_id: Option<i64>,
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
    pub score: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub general_comments: Option<String>,
    pub review_status: String,
    pub flag_reason: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub flag_comment: Option<String>,
    pub standing: Option<i32>,
    pub created_at: i64,
    pub updated_at: i64,
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
        belongs_to = "super::baseline_scores::Entity",
        from = "Column::BaselineScoreId",
        to = "super::baseline_scores::Column::Id"
    )]
    BaselineScore,
}

impl Related<super::judge_assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JudgeAssignment.def()
    }
}

impl Related<super::baseline_scores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BaselineScore.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_judging_entry(self) -> crate::models::entries::entities::JudgingEntry {
        use crate::models::entries::entities::{JudgingEntry, ReviewStatus};
        use crate::models::scores::entities::DimensionScores;
        use chrono::{DateTime, Utc};

        JudgingEntry {
            id: self.id,
            judging_id: self.judging_id,
            project_id: self.project_id,
            challenge_id: self.challenge_id,
            baseline_score_id: self.baseline_score_id,
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
            score: self.score,
            general_comments: self.general_comments,
            review_status: self
                .review_status
                .parse::<ReviewStatus>()
                .unwrap_or(ReviewStatus::NeedsReview),
            flag_reason: self.flag_reason,
            flag_comment: self.flag_comment,
            standing: self.standing,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
