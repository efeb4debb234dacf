use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::DisplayName).string().not_null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建黑客松表
        manager
            .create_table(
                Table::create()
                    .table(Hackathons::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Hackathons::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Hackathons::Name).string().not_null())
                    .col(
                        ColumnDef::new(Hackathons::SubmissionDeadline)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Hackathons::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建赛道表，winners_submitted 是赛道级别的标记
        manager
            .create_table(
                Table::create()
                    .table(Challenges::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Challenges::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Challenges::HackathonId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Challenges::Name).string().not_null())
                    .col(
                        ColumnDef::new(Challenges::WinnersSubmitted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Challenges::Table, Challenges::HackathonId)
                            .to(Hackathons::Table, Hackathons::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建奖项表
        manager
            .create_table(
                Table::create()
                    .table(Prizes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Prizes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Prizes::ChallengeId).big_integer().not_null())
                    .col(ColumnDef::new(Prizes::Rank).integer().not_null())
                    .col(ColumnDef::new(Prizes::Amount).double().null())
                    .col(ColumnDef::new(Prizes::CustomValue).string().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Prizes::Table, Prizes::ChallengeId)
                            .to(Challenges::Table, Challenges::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建项目表
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Projects::HackathonId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Projects::Name).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Projects::Table, Projects::HackathonId)
                            .to(Hackathons::Table, Hackathons::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建项目-赛道关联表（获奖结果落在这里）
        manager
            .create_table(
                Table::create()
                    .table(ProjectChallenges::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectChallenges::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProjectChallenges::ProjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectChallenges::ChallengeId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectChallenges::PrizeId)
                            .big_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(ProjectChallenges::Rank).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(ProjectChallenges::Table, ProjectChallenges::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ProjectChallenges::Table, ProjectChallenges::ChallengeId)
                            .to(Challenges::Table, Challenges::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ProjectChallenges::Table, ProjectChallenges::PrizeId)
                            .to(Prizes::Table, Prizes::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建评委分配表（每个评委每个黑客松一条）
        manager
            .create_table(
                Table::create()
                    .table(JudgeAssignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JudgeAssignments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(JudgeAssignments::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JudgeAssignments::HackathonId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JudgeAssignments::Submitted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(JudgeAssignments::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(JudgeAssignments::Table, JudgeAssignments::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(JudgeAssignments::Table, JudgeAssignments::HackathonId)
                            .to(Hackathons::Table, Hackathons::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建评委-赛道覆盖表
        manager
            .create_table(
                Table::create()
                    .table(ChallengeCoverages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ChallengeCoverages::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ChallengeCoverages::JudgingId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChallengeCoverages::ChallengeId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChallengeCoverages::IsWinnerAssigner)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ChallengeCoverages::Table, ChallengeCoverages::JudgingId)
                            .to(JudgeAssignments::Table, JudgeAssignments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ChallengeCoverages::Table, ChallengeCoverages::ChallengeId)
                            .to(Challenges::Table, Challenges::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建基准分表（机器评分）
        manager
            .create_table(
                Table::create()
                    .table(BaselineScores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BaselineScores::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(BaselineScores::ProjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BaselineScores::ChallengeId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(BaselineScores::Score).double().null())
                    .col(
                        ColumnDef::new(BaselineScores::AiJudged)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(BaselineScores::TechnicalScore).double().null())
                    .col(ColumnDef::new(BaselineScores::TechnicalFeedback).text().null())
                    .col(ColumnDef::new(BaselineScores::BusinessScore).double().null())
                    .col(ColumnDef::new(BaselineScores::BusinessFeedback).text().null())
                    .col(ColumnDef::new(BaselineScores::InnovationScore).double().null())
                    .col(ColumnDef::new(BaselineScores::InnovationFeedback).text().null())
                    .col(ColumnDef::new(BaselineScores::UxScore).double().null())
                    .col(ColumnDef::new(BaselineScores::UxFeedback).text().null())
                    .col(
                        ColumnDef::new(BaselineScores::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(BaselineScores::Table, BaselineScores::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(BaselineScores::Table, BaselineScores::ChallengeId)
                            .to(Challenges::Table, Challenges::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建评审条目表
        manager
            .create_table(
                Table::create()
                    .table(JudgingEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JudgingEntries::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(JudgingEntries::JudgingId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JudgingEntries::ProjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JudgingEntries::ChallengeId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JudgingEntries::BaselineScoreId)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(JudgingEntries::AiJudged)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(JudgingEntries::TechnicalScore).double().null())
                    .col(ColumnDef::new(JudgingEntries::TechnicalFeedback).text().null())
                    .col(ColumnDef::new(JudgingEntries::BusinessScore).double().null())
                    .col(ColumnDef::new(JudgingEntries::BusinessFeedback).text().null())
                    .col(ColumnDef::new(JudgingEntries::InnovationScore).double().null())
                    .col(ColumnDef::new(JudgingEntries::InnovationFeedback).text().null())
                    .col(ColumnDef::new(JudgingEntries::UxScore).double().null())
                    .col(ColumnDef::new(JudgingEntries::UxFeedback).text().null())
                    .col(ColumnDef::new(JudgingEntries::Score).double().null())
                    .col(ColumnDef::new(JudgingEntries::GeneralComments).text().null())
                    .col(
                        ColumnDef::new(JudgingEntries::ReviewStatus)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(JudgingEntries::FlagReason).string().null())
                    .col(ColumnDef::new(JudgingEntries::FlagComment).text().null())
                    .col(ColumnDef::new(JudgingEntries::Standing).integer().null())
                    .col(
                        ColumnDef::new(JudgingEntries::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JudgingEntries::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(JudgingEntries::Table, JudgingEntries::JudgingId)
                            .to(JudgeAssignments::Table, JudgeAssignments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(JudgingEntries::Table, JudgingEntries::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(JudgingEntries::Table, JudgingEntries::ChallengeId)
                            .to(Challenges::Table, Challenges::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(JudgingEntries::Table, JudgingEntries::BaselineScoreId)
                            .to(BaselineScores::Table, BaselineScores::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 唯一索引 ====================
        // 评审条目在 (评委, 项目, 赛道) 上唯一，分发时的插入去重依赖它
        manager
            .create_index(
                Index::create()
                    .name("uq_judging_entries_triple")
                    .table(JudgingEntries::Table)
                    .col(JudgingEntries::JudgingId)
                    .col(JudgingEntries::ProjectId)
                    .col(JudgingEntries::ChallengeId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_challenge_coverages_judge_challenge")
                    .table(ChallengeCoverages::Table)
                    .col(ChallengeCoverages::JudgingId)
                    .col(ChallengeCoverages::ChallengeId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_baseline_scores_project_challenge")
                    .table(BaselineScores::Table)
                    .col(BaselineScores::ProjectId)
                    .col(BaselineScores::ChallengeId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_judge_assignments_user_hackathon")
                    .table(JudgeAssignments::Table)
                    .col(JudgeAssignments::UserId)
                    .col(JudgeAssignments::HackathonId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_project_challenges_project_challenge")
                    .table(ProjectChallenges::Table)
                    .col(ProjectChallenges::ProjectId)
                    .col(ProjectChallenges::ChallengeId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // ==================== 查询索引 ====================
        manager
            .create_index(
                Index::create()
                    .name("idx_judging_entries_challenge")
                    .table(JudgingEntries::Table)
                    .col(JudgingEntries::ChallengeId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_challenge_coverages_challenge")
                    .table(ChallengeCoverages::Table)
                    .col(ChallengeCoverages::ChallengeId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(JudgingEntries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BaselineScores::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ChallengeCoverages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(JudgeAssignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProjectChallenges::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Prizes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Challenges::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Hackathons::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    DisplayName,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Hackathons {
    #[sea_orm(iden = "hackathons")]
    Table,
    Id,
    Name,
    SubmissionDeadline,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Challenges {
    #[sea_orm(iden = "challenges")]
    Table,
    Id,
    HackathonId,
    Name,
    WinnersSubmitted,
}

#[derive(DeriveIden)]
enum Prizes {
    #[sea_orm(iden = "prizes")]
    Table,
    Id,
    ChallengeId,
    Rank,
    Amount,
    CustomValue,
}

#[derive(DeriveIden)]
enum Projects {
    #[sea_orm(iden = "projects")]
    Table,
    Id,
    HackathonId,
    Name,
}

#[derive(DeriveIden)]
enum ProjectChallenges {
    #[sea_orm(iden = "project_challenges")]
    Table,
    Id,
    ProjectId,
    ChallengeId,
    PrizeId,
    Rank,
}

#[derive(DeriveIden)]
enum JudgeAssignments {
    #[sea_orm(iden = "judge_assignments")]
    Table,
    Id,
    UserId,
    HackathonId,
    Submitted,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ChallengeCoverages {
    #[sea_orm(iden = "challenge_coverages")]
    Table,
    Id,
    JudgingId,
    ChallengeId,
    IsWinnerAssigner,
}

#[derive(DeriveIden)]
enum BaselineScores {
    #[sea_orm(iden = "baseline_scores")]
    Table,
    Id,
    ProjectId,
    ChallengeId,
    Score,
    AiJudged,
    TechnicalScore,
    TechnicalFeedback,
    BusinessScore,
    BusinessFeedback,
    InnovationScore,
    InnovationFeedback,
    UxScore,
    UxFeedback,
    CreatedAt,
}

#[derive(DeriveIden)]
enum JudgingEntries {
    #[sea_orm(iden = "judging_entries")]
    Table,
    Id,
    JudgingId,
    ProjectId,
    ChallengeId,
    BaselineScoreId,
    AiJudged,
    TechnicalScore,
    TechnicalFeedback,
    BusinessScore,
    BusinessFeedback,
    InnovationScore,
    InnovationFeedback,
    UxScore,
    UxFeedback,
    Score,
    GeneralComments,
    ReviewStatus,
    FlagReason,
    FlagComment,
    Standing,
    CreatedAt,
    UpdatedAt,
}
