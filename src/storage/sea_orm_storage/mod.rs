//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod catalog;
mod entries;
mod judges;
mod roles;
mod scores;
mod winners;

use crate::config::DatabaseConfig;
use crate::errors::{JudgingError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| JudgingError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| JudgingError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .foreign_keys(true)
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| JudgingError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| JudgingError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(JudgingError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    challenges::entities::{Challenge, Hackathon, Prize, Project, ProjectChallenge},
    entries::entities::{EntryInsertOutcome, EntryPatch, JudgingEntry, NewJudgingEntry},
    judges::entities::{ChallengeCoverage, JudgeAssignment, User},
    roles::entities::Role,
    scores::entities::{BaselineScore, CreateBaselineScoreRequest},
    winners::entities::WinnerCommit,
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户与黑客松
    async fn get_users_by_ids(&self, ids: &[i64]) -> Result<Vec<User>> {
        self.get_users_by_ids_impl(ids).await
    }

    async fn get_hackathon_by_id(&self, hackathon_id: i64) -> Result<Option<Hackathon>> {
        self.get_hackathon_by_id_impl(hackathon_id).await
    }

    // 赛道模块
    async fn get_challenge_by_id(&self, challenge_id: i64) -> Result<Option<Challenge>> {
        self.get_challenge_by_id_impl(challenge_id).await
    }

    async fn list_challenges_by_ids(&self, challenge_ids: &[i64]) -> Result<Vec<Challenge>> {
        self.list_challenges_by_ids_impl(challenge_ids).await
    }

    async fn get_projects_by_ids(&self, project_ids: &[i64]) -> Result<Vec<Project>> {
        self.get_projects_by_ids_impl(project_ids).await
    }

    async fn get_project_challenge(
        &self,
        project_id: i64,
        challenge_id: i64,
    ) -> Result<Option<ProjectChallenge>> {
        self.get_project_challenge_impl(project_id, challenge_id)
            .await
    }

    async fn list_project_challenges(
        &self,
        challenge_ids: &[i64],
    ) -> Result<Vec<ProjectChallenge>> {
        self.list_project_challenges_impl(challenge_ids).await
    }

    async fn get_prizes_for_challenge(&self, challenge_id: i64) -> Result<Vec<Prize>> {
        self.get_prizes_for_challenge_impl(challenge_id).await
    }

    // 评委模块
    async fn get_judge_assignment_by_id(
        &self,
        judging_id: i64,
    ) -> Result<Option<JudgeAssignment>> {
        self.get_judge_assignment_by_id_impl(judging_id).await
    }

    async fn get_judge_assignment_by_user(
        &self,
        user_id: i64,
        hackathon_id: i64,
    ) -> Result<Option<JudgeAssignment>> {
        self.get_judge_assignment_by_user_impl(user_id, hackathon_id)
            .await
    }

    async fn create_judge_assignment(
        &self,
        user_id: i64,
        hackathon_id: i64,
    ) -> Result<JudgeAssignment> {
        self.create_judge_assignment_impl(user_id, hackathon_id)
            .await
    }

    async fn delete_judge_assignment(&self, judging_id: i64) -> Result<bool> {
        self.delete_judge_assignment_impl(judging_id).await
    }

    async fn mark_judge_submitted(&self, judging_id: i64) -> Result<Option<JudgeAssignment>> {
        self.mark_judge_submitted_impl(judging_id).await
    }

    async fn get_coverage_for_challenge(
        &self,
        challenge_id: i64,
    ) -> Result<Vec<ChallengeCoverage>> {
        self.get_coverage_for_challenge_impl(challenge_id).await
    }

    async fn list_coverages_for_judge(&self, judging_id: i64) -> Result<Vec<ChallengeCoverage>> {
        self.list_coverages_for_judge_impl(judging_id).await
    }

    async fn add_coverage(
        &self,
        judging_id: i64,
        challenge_id: i64,
    ) -> Result<ChallengeCoverage> {
        self.add_coverage_impl(judging_id, challenge_id).await
    }

    async fn remove_coverage(&self, judging_id: i64, challenge_id: i64) -> Result<u64> {
        self.remove_coverage_impl(judging_id, challenge_id).await
    }

    // 基准分模块
    async fn create_baseline_score(
        &self,
        req: CreateBaselineScoreRequest,
    ) -> Result<BaselineScore> {
        self.create_baseline_score_impl(req).await
    }

    async fn get_baseline_score_by_id(&self, id: i64) -> Result<Option<BaselineScore>> {
        self.get_baseline_score_by_id_impl(id).await
    }

    async fn get_baseline_score(
        &self,
        project_id: i64,
        challenge_id: i64,
    ) -> Result<Option<BaselineScore>> {
        self.get_baseline_score_impl(project_id, challenge_id).await
    }

    async fn list_baseline_scores(&self, challenge_ids: &[i64]) -> Result<Vec<BaselineScore>> {
        self.list_baseline_scores_impl(challenge_ids).await
    }

    // 评审条目模块
    async fn find_entry(
        &self,
        judging_id: i64,
        project_id: i64,
        challenge_id: i64,
    ) -> Result<Option<JudgingEntry>> {
        self.find_entry_impl(judging_id, project_id, challenge_id)
            .await
    }

    async fn get_entry_by_id(&self, entry_id: i64) -> Result<Option<JudgingEntry>> {
        self.get_entry_by_id_impl(entry_id).await
    }

    async fn insert_entry_if_absent(&self, entry: NewJudgingEntry) -> Result<EntryInsertOutcome> {
        self.insert_entry_if_absent_impl(entry).await
    }

    async fn update_entry(
        &self,
        entry_id: i64,
        patch: EntryPatch,
    ) -> Result<Option<JudgingEntry>> {
        self.update_entry_impl(entry_id, patch).await
    }

    async fn delete_entry(&self, entry_id: i64) -> Result<bool> {
        self.delete_entry_impl(entry_id).await
    }

    async fn list_entries_for_judge(
        &self,
        judging_id: i64,
        challenge_id: i64,
    ) -> Result<Vec<JudgingEntry>> {
        self.list_entries_for_judge_impl(judging_id, challenge_id)
            .await
    }

    async fn list_entries_for_challenges(
        &self,
        challenge_ids: &[i64],
    ) -> Result<Vec<JudgingEntry>> {
        self.list_entries_for_challenges_impl(challenge_ids).await
    }

    // 评奖模块
    async fn set_winner_assigner(&self, challenge_id: i64, judging_id: i64) -> Result<()> {
        self.set_winner_assigner_impl(challenge_id, judging_id)
            .await
    }

    async fn commit_winner_batch(
        &self,
        caller_user_id: i64,
        commits: &[WinnerCommit],
    ) -> Result<()> {
        self.commit_winner_batch_impl(caller_user_id, commits)
            .await
    }

    // 角色模块
    async fn get_role_by_name(&self, name: &str) -> Result<Option<Role>> {
        self.get_role_by_name_impl(name).await
    }

    async fn create_role(&self, name: &str) -> Result<Role> {
        self.create_role_impl(name).await
    }

    async fn grant_hackathon_role(
        &self,
        user_id: i64,
        hackathon_id: i64,
        role_id: i64,
    ) -> Result<()> {
        self.grant_hackathon_role_impl(user_id, hackathon_id, role_id)
            .await
    }

    async fn revoke_hackathon_role(
        &self,
        user_id: i64,
        hackathon_id: i64,
        role_id: i64,
    ) -> Result<bool> {
        self.revoke_hackathon_role_impl(user_id, hackathon_id, role_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::prelude::*;
    use crate::models::entries::entities::ReviewStatus;
    use crate::models::scores::entities::DimensionScores;
    use crate::services::{FanOutService, JudgingOptions};
    use crate::storage::Storage;
    use sea_orm::{ActiveModelTrait, EntityTrait, Set};
    use std::sync::Arc;

    // 单连接保证所有查询落在同一个内存库上
    async fn memory_storage() -> SeaOrmStorage {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            pool_size: 1,
            timeout: 5,
        };
        SeaOrmStorage::new_async(&config).await.unwrap()
    }

    // 文件库配合多连接池，用于并发写入
    struct FileDb {
        path: std::path::PathBuf,
    }

    impl FileDb {
        fn new(name: &str) -> Self {
            let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
            let path = std::env::temp_dir().join(format!(
                "judging-{name}-{}-{nanos}.db",
                std::process::id()
            ));
            Self { path }
        }

        async fn open(&self, pool_size: u32) -> SeaOrmStorage {
            let config = DatabaseConfig {
                url: self.path.to_string_lossy().into_owned(),
                pool_size,
                timeout: 10,
            };
            SeaOrmStorage::new_async(&config).await.unwrap()
        }
    }

    impl Drop for FileDb {
        fn drop(&mut self) {
            for suffix in ["", "-wal", "-shm"] {
                let mut file = self.path.clone().into_os_string();
                file.push(suffix);
                let _ = std::fs::remove_file(file);
            }
        }
    }

    struct Seeded {
        user_id: i64,
        judging_id: i64,
        hackathon_id: i64,
        challenge_id: i64,
        project_id: i64,
        prize_id: i64,
    }

    async fn add_judge(
        storage: &SeaOrmStorage,
        hackathon_id: i64,
        challenge_id: i64,
        name: &str,
    ) -> (i64, i64) {
        let user = UserActiveModel {
            display_name: Set(name.to_string()),
            created_at: Set(0),
            ..Default::default()
        }
        .insert(&storage.db)
        .await
        .unwrap();
        let assignment = storage
            .create_judge_assignment(user.id, hackathon_id)
            .await
            .unwrap();
        storage
            .add_coverage(assignment.id, challenge_id)
            .await
            .unwrap();
        (user.id, assignment.id)
    }

    async fn add_project(
        storage: &SeaOrmStorage,
        hackathon_id: i64,
        challenge_id: i64,
        name: &str,
    ) -> i64 {
        let project = ProjectActiveModel {
            hackathon_id: Set(hackathon_id),
            name: Set(name.to_string()),
            ..Default::default()
        }
        .insert(&storage.db)
        .await
        .unwrap();
        ProjectChallengeActiveModel {
            project_id: Set(project.id),
            challenge_id: Set(challenge_id),
            prize_id: Set(None),
            rank: Set(None),
            ..Default::default()
        }
        .insert(&storage.db)
        .await
        .unwrap();
        project.id
    }

    async fn add_baseline(
        storage: &SeaOrmStorage,
        project_id: i64,
        challenge_id: i64,
    ) -> crate::models::scores::entities::BaselineScore {
        storage
            .create_baseline_score(CreateBaselineScoreRequest {
                project_id,
                challenge_id,
                score: Some(7.0),
                ai_judged: true,
                dimensions: DimensionScores {
                    technical_score: Some(7.0),
                    technical_feedback: Some("solid".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap()
    }

    async fn add_entry(
        storage: &SeaOrmStorage,
        judging_id: i64,
        baseline: &crate::models::scores::entities::BaselineScore,
    ) -> JudgingEntry {
        match storage
            .insert_entry_if_absent(NewJudgingEntry::seeded_from(judging_id, baseline))
            .await
            .unwrap()
        {
            EntryInsertOutcome::Created(entry) => entry,
            EntryInsertOutcome::AlreadyExists => panic!("entry already seeded"),
        }
    }

    async fn seed(storage: &SeaOrmStorage) -> Seeded {
        let db = &storage.db;
        let hackathon = HackathonActiveModel {
            name: Set("Spring Hack".to_string()),
            submission_deadline: Set(None),
            created_at: Set(0),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();
        let challenge = ChallengeActiveModel {
            hackathon_id: Set(hackathon.id),
            name: Set("Infra".to_string()),
            winners_submitted: Set(false),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();
        let project_id = add_project(storage, hackathon.id, challenge.id, "Rocket").await;
        let prize = PrizeActiveModel {
            challenge_id: Set(challenge.id),
            rank: Set(1),
            amount: Set(Some(500.0)),
            custom_value: Set(None),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();

        let (user_id, judging_id) = add_judge(storage, hackathon.id, challenge.id, "Ada").await;

        Seeded {
            user_id,
            judging_id,
            hackathon_id: hackathon.id,
            challenge_id: challenge.id,
            project_id,
            prize_id: prize.id,
        }
    }

    #[tokio::test]
    async fn test_insert_entry_if_absent_is_idempotent() {
        let storage = memory_storage().await;
        let seeded = seed(&storage).await;

        let baseline = add_baseline(&storage, seeded.project_id, seeded.challenge_id).await;

        let first = storage
            .insert_entry_if_absent(NewJudgingEntry::seeded_from(seeded.judging_id, &baseline))
            .await
            .unwrap();
        let EntryInsertOutcome::Created(entry) = first else {
            panic!("expected a new entry");
        };
        assert_eq!(entry.baseline_score_id, Some(baseline.id));
        assert!(entry.dimensions.technical_feedback.is_none());
        assert!(entry.score.is_none());

        let second = storage
            .insert_entry_if_absent(NewJudgingEntry::seeded_from(seeded.judging_id, &baseline))
            .await
            .unwrap();
        assert_eq!(second, EntryInsertOutcome::AlreadyExists);

        let entries = storage
            .list_entries_for_judge(seeded.judging_id, seeded.challenge_id)
            .await
            .unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn test_commit_winner_batch_persists_in_transaction() {
        let storage = memory_storage().await;
        let seeded = seed(&storage).await;
        storage
            .set_winner_assigner(seeded.challenge_id, seeded.judging_id)
            .await
            .unwrap();

        let foreign_prize = WinnerCommit {
            challenge_id: seeded.challenge_id,
            project_id: seeded.project_id,
            prize_id: seeded.prize_id + 100,
            rank: 1,
        };
        let err = storage
            .commit_winner_batch(seeded.user_id, &[foreign_prize])
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E007");
        let untouched = Challenges::find_by_id(seeded.challenge_id)
            .one(&storage.db)
            .await
            .unwrap()
            .unwrap();
        assert!(!untouched.winners_submitted);

        let commit = WinnerCommit {
            prize_id: seeded.prize_id,
            ..foreign_prize
        };
        storage
            .commit_winner_batch(seeded.user_id, &[commit])
            .await
            .unwrap();

        let link = storage
            .get_project_challenge(seeded.project_id, seeded.challenge_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(link.prize_id, Some(seeded.prize_id));
        assert_eq!(link.rank, Some(1));
        let challenge = storage
            .get_challenge_by_id(seeded.challenge_id)
            .await
            .unwrap()
            .unwrap();
        assert!(challenge.winners_submitted);
    }

    #[tokio::test]
    async fn test_commit_rejects_caller_who_is_not_assigner() {
        let storage = memory_storage().await;
        let seeded = seed(&storage).await;

        let err = storage
            .commit_winner_batch(
                seeded.user_id,
                &[WinnerCommit {
                    challenge_id: seeded.challenge_id,
                    project_id: seeded.project_id,
                    prize_id: seeded.prize_id,
                    rank: 1,
                }],
            )
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E010");
    }

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("judging.db").unwrap(),
            "sqlite://judging.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("postgres://u:p@localhost/judging").unwrap(),
            "postgres://u:p@localhost/judging"
        );
        assert!(SeaOrmStorage::build_database_url("redis://localhost").is_err());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_fan_out_never_duplicates_entries() {
        let db = FileDb::new("fan-out");
        let storage = db.open(8).await;
        let seeded = seed(&storage).await;
        for name in ["Grace", "Linus", "Barbara", "Ken"] {
            add_judge(&storage, seeded.hackathon_id, seeded.challenge_id, name).await;
        }
        let baseline = add_baseline(&storage, seeded.project_id, seeded.challenge_id).await;

        let storage: Arc<dyn Storage> = Arc::new(storage);
        let service = Arc::new(FanOutService::new(
            storage.clone(),
            JudgingOptions::default(),
        ));

        let mut handles = Vec::new();
        for _ in 0..6 {
            let service = service.clone();
            let baseline_id = baseline.id;
            handles.push(tokio::spawn(async move {
                service.assign_baselines_to_judges(&[baseline_id]).await
            }));
        }

        let mut created = 0;
        for handle in handles {
            let summary = handle.await.unwrap().unwrap();
            assert!(summary.errors.is_empty(), "{:?}", summary.errors);
            created += summary.created;
        }
        assert_eq!(created, 5);

        let entries = storage
            .list_entries_for_challenges(&[seeded.challenge_id])
            .await
            .unwrap();
        assert_eq!(entries.len(), 5);
    }

    #[tokio::test]
    async fn test_repeated_election_leaves_one_assigner() {
        let storage = memory_storage().await;
        let seeded = seed(&storage).await;
        let (_, grace) =
            add_judge(&storage, seeded.hackathon_id, seeded.challenge_id, "Grace").await;

        for judging_id in [seeded.judging_id, grace, seeded.judging_id, grace] {
            storage
                .set_winner_assigner(seeded.challenge_id, judging_id)
                .await
                .unwrap();
        }

        let flagged: Vec<i64> = storage
            .get_coverage_for_challenge(seeded.challenge_id)
            .await
            .unwrap()
            .into_iter()
            .filter(|c| c.is_winner_assigner)
            .map(|c| c.judging_id)
            .collect();
        assert_eq!(flagged, vec![grace]);
    }

    #[tokio::test]
    async fn test_flag_and_unflag_round_trip() {
        let storage = memory_storage().await;
        let seeded = seed(&storage).await;
        let baseline = add_baseline(&storage, seeded.project_id, seeded.challenge_id).await;
        let entry = add_entry(&storage, seeded.judging_id, &baseline).await;

        let flagged = storage
            .update_entry(
                entry.id,
                EntryPatch {
                    flag_reason: Some(Some("plagiarism".to_string())),
                    flag_comment: Some(Some("same repo as team 4".to_string())),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(flagged.flag_reason.as_deref(), Some("plagiarism"));
        assert_eq!(flagged.flag_comment.as_deref(), Some("same repo as team 4"));
        assert_eq!(flagged.review_status, ReviewStatus::NeedsReview);

        let cleared = storage
            .update_entry(
                entry.id,
                EntryPatch {
                    flag_reason: Some(None),
                    flag_comment: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert!(cleared.flag_reason.is_none());
        assert!(cleared.flag_comment.is_none());
        assert_eq!(cleared.review_status, ReviewStatus::NeedsReview);
    }

    #[tokio::test]
    async fn test_remove_coverage_drops_entries() {
        let storage = memory_storage().await;
        let seeded = seed(&storage).await;
        let baseline = add_baseline(&storage, seeded.project_id, seeded.challenge_id).await;
        add_entry(&storage, seeded.judging_id, &baseline).await;

        let removed = storage
            .remove_coverage(seeded.judging_id, seeded.challenge_id)
            .await
            .unwrap();
        assert_eq!(removed, 1);
        assert!(
            storage
                .get_coverage_for_challenge(seeded.challenge_id)
                .await
                .unwrap()
                .is_empty()
        );
        assert!(
            storage
                .list_entries_for_judge(seeded.judging_id, seeded.challenge_id)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_recommit_clears_previous_holder_standing() {
        let storage = memory_storage().await;
        let seeded = seed(&storage).await;
        let rival = add_project(&storage, seeded.hackathon_id, seeded.challenge_id, "Lantern").await;
        let first_entry = {
            let baseline = add_baseline(&storage, seeded.project_id, seeded.challenge_id).await;
            add_entry(&storage, seeded.judging_id, &baseline).await
        };
        let rival_entry = {
            let baseline = add_baseline(&storage, rival, seeded.challenge_id).await;
            add_entry(&storage, seeded.judging_id, &baseline).await
        };
        storage
            .set_winner_assigner(seeded.challenge_id, seeded.judging_id)
            .await
            .unwrap();

        for project_id in [seeded.project_id, rival] {
            storage
                .commit_winner_batch(
                    seeded.user_id,
                    &[WinnerCommit {
                        challenge_id: seeded.challenge_id,
                        project_id,
                        prize_id: seeded.prize_id,
                        rank: 1,
                    }],
                )
                .await
                .unwrap();
        }

        let old_link = storage
            .get_project_challenge(seeded.project_id, seeded.challenge_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(old_link.prize_id, None);
        assert_eq!(old_link.rank, None);

        let old = storage.get_entry_by_id(first_entry.id).await.unwrap().unwrap();
        let new = storage.get_entry_by_id(rival_entry.id).await.unwrap().unwrap();
        assert_eq!(old.standing, None);
        assert_eq!(new.standing, Some(1));
    }
}
