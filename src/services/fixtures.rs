//! 服务测试共用的数据准备

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::models::scores::entities::{BaselineScore, CreateBaselineScoreRequest, DimensionScores};
use crate::storage::Storage;
use crate::storage::memory_storage::MemoryStorage;

pub struct Fixture {
    pub storage: Arc<MemoryStorage>,
    pub hackathon_id: i64,
    pub challenge_id: i64,
}

impl Fixture {
    /// 提交已截止的黑客松，带一个赛道
    pub fn new() -> Self {
        Self::with_deadline(Some(Utc::now() - Duration::days(1)))
    }

    pub fn with_deadline(deadline: Option<chrono::DateTime<Utc>>) -> Self {
        let storage = Arc::new(MemoryStorage::new());
        let hackathon_id = storage.seed_hackathon(deadline);
        let challenge_id = storage.seed_challenge(hackathon_id, "Best AI Hack");
        Self {
            storage,
            hackathon_id,
            challenge_id,
        }
    }

    pub fn dyn_storage(&self) -> Arc<dyn Storage> {
        self.storage.clone()
    }

    pub fn challenge(&self, name: &str) -> i64 {
        self.storage.seed_challenge(self.hackathon_id, name)
    }

    pub fn project(&self, name: &str) -> i64 {
        self.storage
            .seed_project(self.hackathon_id, name, &[self.challenge_id])
    }

    /// 创建评委并覆盖给定赛道，返回 (user_id, judging_id)
    pub async fn judge_on(&self, name: &str, challenge_ids: &[i64]) -> (i64, i64) {
        let user_id = self.storage.seed_user(name);
        let assignment = self
            .storage
            .create_judge_assignment(user_id, self.hackathon_id)
            .await
            .unwrap();
        for &challenge_id in challenge_ids {
            self.storage
                .add_coverage(assignment.id, challenge_id)
                .await
                .unwrap();
        }
        (user_id, assignment.id)
    }

    pub async fn judge(&self, name: &str) -> (i64, i64) {
        self.judge_on(name, &[self.challenge_id]).await
    }

    pub async fn baseline(
        &self,
        project_id: i64,
        challenge_id: i64,
        score: f64,
        ai_judged: bool,
    ) -> BaselineScore {
        self.storage
            .create_baseline_score(CreateBaselineScoreRequest {
                project_id,
                challenge_id,
                score: Some(score),
                ai_judged,
                dimensions: DimensionScores {
                    technical_score: Some(score),
                    technical_feedback: Some("solid architecture".to_string()),
                    business_score: Some(score - 1.0),
                    business_feedback: Some("clear market".to_string()),
                    innovation_score: Some(score),
                    innovation_feedback: None,
                    ux_score: Some(score - 2.0),
                    ux_feedback: None,
                },
            })
            .await
            .unwrap()
    }
}

impl Fixture {
    /// 直接为评委生成一条种子条目
    pub async fn entry_for(
        &self,
        judging_id: i64,
        baseline: &BaselineScore,
    ) -> crate::models::entries::entities::JudgingEntry {
        use crate::models::entries::entities::{EntryInsertOutcome, NewJudgingEntry};

        match self
            .storage
            .insert_entry_if_absent(NewJudgingEntry::seeded_from(judging_id, baseline))
            .await
            .unwrap()
        {
            EntryInsertOutcome::Created(entry) => entry,
            EntryInsertOutcome::AlreadyExists => panic!("entry already exists"),
        }
    }
}
