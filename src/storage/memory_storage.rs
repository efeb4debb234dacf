//! 内存存储，仅用于测试
//!
//! 与数据库实现保持相同的唯一性与事务语义：条目按 (评委, 项目, 赛道) 去重，
//! 获奖批次在持锁期间先整体校验再整体写入。

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use super::Storage;
use crate::errors::{JudgingError, Result};
use crate::models::{
    challenges::entities::{Challenge, Hackathon, Prize, Project, ProjectChallenge},
    entries::entities::{
        EntryInsertOutcome, EntryPatch, JudgingEntry, NewJudgingEntry, ReviewStatus,
    },
    judges::entities::{ChallengeCoverage, JudgeAssignment, User},
    roles::entities::Role,
    scores::entities::{BaselineScore, CreateBaselineScoreRequest},
    winners::entities::WinnerCommit,
};

#[derive(Debug, Clone)]
struct CoverageRow {
    id: i64,
    judging_id: i64,
    challenge_id: i64,
    is_winner_assigner: bool,
}

#[derive(Default)]
struct State {
    next_id: i64,
    users: Vec<User>,
    hackathons: Vec<Hackathon>,
    challenges: Vec<Challenge>,
    prizes: Vec<Prize>,
    projects: Vec<Project>,
    links: Vec<ProjectChallenge>,
    assignments: Vec<JudgeAssignment>,
    coverages: Vec<CoverageRow>,
    baselines: Vec<BaselineScore>,
    entries: Vec<JudgingEntry>,
    roles: Vec<Role>,
    memberships: HashSet<(i64, i64, i64)>,
    // 查询这些赛道的覆盖关系时返回错误，用于模拟单项失败
    failing_challenges: HashSet<i64>,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn coverage(&self, row: &CoverageRow) -> Option<ChallengeCoverage> {
        let user_id = self
            .assignments
            .iter()
            .find(|a| a.id == row.judging_id)?
            .user_id;
        let submitted_winners = self
            .challenges
            .iter()
            .find(|c| c.id == row.challenge_id)
            .is_some_and(|c| c.winners_submitted);
        Some(ChallengeCoverage {
            id: row.id,
            judging_id: row.judging_id,
            challenge_id: row.challenge_id,
            user_id,
            is_winner_assigner: row.is_winner_assigner,
            submitted_winners,
        })
    }
}

#[derive(Default)]
pub struct MemoryStorage {
    state: Mutex<State>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn seed_user(&self, display_name: &str) -> i64 {
        let mut state = self.lock();
        let id = state.next_id();
        state.users.push(User {
            id,
            display_name: display_name.to_string(),
        });
        id
    }

    pub fn seed_hackathon(&self, submission_deadline: Option<DateTime<Utc>>) -> i64 {
        let mut state = self.lock();
        let id = state.next_id();
        state.hackathons.push(Hackathon {
            id,
            name: format!("hackathon-{id}"),
            submission_deadline,
        });
        id
    }

    pub fn seed_challenge(&self, hackathon_id: i64, name: &str) -> i64 {
        let mut state = self.lock();
        let id = state.next_id();
        state.challenges.push(Challenge {
            id,
            hackathon_id,
            name: name.to_string(),
            winners_submitted: false,
        });
        id
    }

    pub fn seed_prize(&self, challenge_id: i64, rank: i32) -> i64 {
        let mut state = self.lock();
        let id = state.next_id();
        state.prizes.push(Prize {
            id,
            challenge_id,
            rank,
            amount: Some(1000.0 / f64::from(rank)),
            custom_value: None,
        });
        id
    }

    /// 创建项目并关联到给定赛道
    pub fn seed_project(&self, hackathon_id: i64, name: &str, challenge_ids: &[i64]) -> i64 {
        let mut state = self.lock();
        let id = state.next_id();
        state.projects.push(Project {
            id,
            hackathon_id,
            name: name.to_string(),
        });
        for &challenge_id in challenge_ids {
            let link_id = state.next_id();
            state.links.push(ProjectChallenge {
                id: link_id,
                project_id: id,
                challenge_id,
                prize_id: None,
                rank: None,
            });
        }
        id
    }

    pub fn fail_coverage_lookups_for(&self, challenge_id: i64) {
        self.lock().failing_challenges.insert(challenge_id);
    }

    pub fn coverage_rows(&self, challenge_id: i64) -> Vec<ChallengeCoverage> {
        let state = self.lock();
        state
            .coverages
            .iter()
            .filter(|c| c.challenge_id == challenge_id)
            .filter_map(|c| state.coverage(c))
            .collect()
    }

    pub fn all_entries(&self) -> Vec<JudgingEntry> {
        self.lock().entries.clone()
    }

    pub fn all_links(&self) -> Vec<ProjectChallenge> {
        self.lock().links.clone()
    }

    pub fn has_membership(&self, user_id: i64, hackathon_id: i64, role_id: i64) -> bool {
        self.lock()
            .memberships
            .contains(&(user_id, hackathon_id, role_id))
    }

    /// 直接改写条目，绕过业务规则
    pub fn patch_entry(&self, entry_id: i64, patch: EntryPatch) {
        let mut state = self.lock();
        if let Some(entry) = state.entries.iter_mut().find(|e| e.id == entry_id) {
            patch.apply_to(entry);
        }
    }
}

#[async_trait::async_trait]
impl Storage for MemoryStorage {
    async fn get_users_by_ids(&self, ids: &[i64]) -> Result<Vec<User>> {
        let state = self.lock();
        Ok(state
            .users
            .iter()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect())
    }

    async fn get_hackathon_by_id(&self, hackathon_id: i64) -> Result<Option<Hackathon>> {
        let state = self.lock();
        Ok(state
            .hackathons
            .iter()
            .find(|h| h.id == hackathon_id)
            .cloned())
    }

    async fn get_challenge_by_id(&self, challenge_id: i64) -> Result<Option<Challenge>> {
        let state = self.lock();
        Ok(state
            .challenges
            .iter()
            .find(|c| c.id == challenge_id)
            .cloned())
    }

    async fn list_challenges_by_ids(&self, challenge_ids: &[i64]) -> Result<Vec<Challenge>> {
        let state = self.lock();
        Ok(state
            .challenges
            .iter()
            .filter(|c| challenge_ids.contains(&c.id))
            .cloned()
            .collect())
    }

    async fn get_projects_by_ids(&self, project_ids: &[i64]) -> Result<Vec<Project>> {
        let state = self.lock();
        Ok(state
            .projects
            .iter()
            .filter(|p| project_ids.contains(&p.id))
            .cloned()
            .collect())
    }

    async fn get_project_challenge(
        &self,
        project_id: i64,
        challenge_id: i64,
    ) -> Result<Option<ProjectChallenge>> {
        let state = self.lock();
        Ok(state
            .links
            .iter()
            .find(|l| l.project_id == project_id && l.challenge_id == challenge_id)
            .cloned())
    }

    async fn list_project_challenges(
        &self,
        challenge_ids: &[i64],
    ) -> Result<Vec<ProjectChallenge>> {
        let state = self.lock();
        Ok(state
            .links
            .iter()
            .filter(|l| challenge_ids.contains(&l.challenge_id))
            .cloned()
            .collect())
    }

    async fn get_prizes_for_challenge(&self, challenge_id: i64) -> Result<Vec<Prize>> {
        let state = self.lock();
        let mut prizes: Vec<Prize> = state
            .prizes
            .iter()
            .filter(|p| p.challenge_id == challenge_id)
            .cloned()
            .collect();
        prizes.sort_by_key(|p| p.rank);
        Ok(prizes)
    }

    async fn get_judge_assignment_by_id(
        &self,
        judging_id: i64,
    ) -> Result<Option<JudgeAssignment>> {
        let state = self.lock();
        Ok(state
            .assignments
            .iter()
            .find(|a| a.id == judging_id)
            .cloned())
    }

    async fn get_judge_assignment_by_user(
        &self,
        user_id: i64,
        hackathon_id: i64,
    ) -> Result<Option<JudgeAssignment>> {
        let state = self.lock();
        Ok(state
            .assignments
            .iter()
            .find(|a| a.user_id == user_id && a.hackathon_id == hackathon_id)
            .cloned())
    }

    async fn create_judge_assignment(
        &self,
        user_id: i64,
        hackathon_id: i64,
    ) -> Result<JudgeAssignment> {
        let mut state = self.lock();
        if let Some(existing) = state
            .assignments
            .iter()
            .find(|a| a.user_id == user_id && a.hackathon_id == hackathon_id)
        {
            return Ok(existing.clone());
        }
        let assignment = JudgeAssignment {
            id: state.next_id(),
            user_id,
            hackathon_id,
            submitted: false,
        };
        state.assignments.push(assignment.clone());
        Ok(assignment)
    }

    async fn delete_judge_assignment(&self, judging_id: i64) -> Result<bool> {
        let mut state = self.lock();
        state.entries.retain(|e| e.judging_id != judging_id);
        state.coverages.retain(|c| c.judging_id != judging_id);
        let before = state.assignments.len();
        state.assignments.retain(|a| a.id != judging_id);
        Ok(state.assignments.len() < before)
    }

    async fn mark_judge_submitted(&self, judging_id: i64) -> Result<Option<JudgeAssignment>> {
        let mut state = self.lock();
        Ok(state
            .assignments
            .iter_mut()
            .find(|a| a.id == judging_id)
            .map(|a| {
                a.submitted = true;
                a.clone()
            }))
    }

    async fn get_coverage_for_challenge(
        &self,
        challenge_id: i64,
    ) -> Result<Vec<ChallengeCoverage>> {
        let state = self.lock();
        if state.failing_challenges.contains(&challenge_id) {
            return Err(JudgingError::database_operation(format!(
                "模拟查询失败: 赛道 {challenge_id}"
            )));
        }
        Ok(state
            .coverages
            .iter()
            .filter(|c| c.challenge_id == challenge_id)
            .filter_map(|c| state.coverage(c))
            .collect())
    }

    async fn list_coverages_for_judge(&self, judging_id: i64) -> Result<Vec<ChallengeCoverage>> {
        let state = self.lock();
        Ok(state
            .coverages
            .iter()
            .filter(|c| c.judging_id == judging_id)
            .filter_map(|c| state.coverage(c))
            .collect())
    }

    async fn add_coverage(&self, judging_id: i64, challenge_id: i64) -> Result<ChallengeCoverage> {
        let mut state = self.lock();
        if !state
            .coverages
            .iter()
            .any(|c| c.judging_id == judging_id && c.challenge_id == challenge_id)
        {
            let id = state.next_id();
            state.coverages.push(CoverageRow {
                id,
                judging_id,
                challenge_id,
                is_winner_assigner: false,
            });
        }
        state
            .coverages
            .iter()
            .find(|c| c.judging_id == judging_id && c.challenge_id == challenge_id)
            .and_then(|c| state.coverage(c))
            .ok_or_else(|| JudgingError::not_found("赛道覆盖不存在"))
    }

    async fn remove_coverage(&self, judging_id: i64, challenge_id: i64) -> Result<u64> {
        let mut state = self.lock();
        let before = state.entries.len();
        state
            .entries
            .retain(|e| !(e.judging_id == judging_id && e.challenge_id == challenge_id));
        let removed = (before - state.entries.len()) as u64;
        state
            .coverages
            .retain(|c| !(c.judging_id == judging_id && c.challenge_id == challenge_id));
        Ok(removed)
    }

    async fn create_baseline_score(
        &self,
        req: CreateBaselineScoreRequest,
    ) -> Result<BaselineScore> {
        let mut state = self.lock();
        if state
            .baselines
            .iter()
            .any(|b| b.project_id == req.project_id && b.challenge_id == req.challenge_id)
        {
            return Err(JudgingError::conflict("基准分已存在"));
        }
        let baseline = BaselineScore {
            id: state.next_id(),
            project_id: req.project_id,
            challenge_id: req.challenge_id,
            score: req.score,
            ai_judged: req.ai_judged,
            dimensions: req.dimensions,
            created_at: Utc::now(),
        };
        state.baselines.push(baseline.clone());
        Ok(baseline)
    }

    async fn get_baseline_score_by_id(&self, id: i64) -> Result<Option<BaselineScore>> {
        let state = self.lock();
        Ok(state.baselines.iter().find(|b| b.id == id).cloned())
    }

    async fn get_baseline_score(
        &self,
        project_id: i64,
        challenge_id: i64,
    ) -> Result<Option<BaselineScore>> {
        let state = self.lock();
        Ok(state
            .baselines
            .iter()
            .find(|b| b.project_id == project_id && b.challenge_id == challenge_id)
            .cloned())
    }

    async fn list_baseline_scores(&self, challenge_ids: &[i64]) -> Result<Vec<BaselineScore>> {
        let state = self.lock();
        Ok(state
            .baselines
            .iter()
            .filter(|b| challenge_ids.contains(&b.challenge_id))
            .cloned()
            .collect())
    }

    async fn find_entry(
        &self,
        judging_id: i64,
        project_id: i64,
        challenge_id: i64,
    ) -> Result<Option<JudgingEntry>> {
        let state = self.lock();
        Ok(state
            .entries
            .iter()
            .find(|e| {
                e.judging_id == judging_id
                    && e.project_id == project_id
                    && e.challenge_id == challenge_id
            })
            .cloned())
    }

    async fn get_entry_by_id(&self, entry_id: i64) -> Result<Option<JudgingEntry>> {
        let state = self.lock();
        Ok(state.entries.iter().find(|e| e.id == entry_id).cloned())
    }

    async fn insert_entry_if_absent(&self, entry: NewJudgingEntry) -> Result<EntryInsertOutcome> {
        let mut state = self.lock();
        if state.entries.iter().any(|e| {
            e.judging_id == entry.judging_id
                && e.project_id == entry.project_id
                && e.challenge_id == entry.challenge_id
        }) {
            return Ok(EntryInsertOutcome::AlreadyExists);
        }
        let now = Utc::now();
        let created = JudgingEntry {
            id: state.next_id(),
            judging_id: entry.judging_id,
            project_id: entry.project_id,
            challenge_id: entry.challenge_id,
            baseline_score_id: entry.baseline_score_id,
            ai_judged: entry.ai_judged,
            dimensions: entry.dimensions,
            score: None,
            general_comments: None,
            review_status: ReviewStatus::NeedsReview,
            flag_reason: None,
            flag_comment: None,
            standing: None,
            created_at: now,
            updated_at: now,
        };
        state.entries.push(created.clone());
        Ok(EntryInsertOutcome::Created(created))
    }

    async fn update_entry(&self, entry_id: i64, patch: EntryPatch) -> Result<Option<JudgingEntry>> {
        let mut state = self.lock();
        Ok(state
            .entries
            .iter_mut()
            .find(|e| e.id == entry_id)
            .map(|entry| {
                patch.apply_to(entry);
                entry.updated_at = Utc::now();
                entry.clone()
            }))
    }

    async fn delete_entry(&self, entry_id: i64) -> Result<bool> {
        let mut state = self.lock();
        let before = state.entries.len();
        state.entries.retain(|e| e.id != entry_id);
        Ok(state.entries.len() < before)
    }

    async fn list_entries_for_judge(
        &self,
        judging_id: i64,
        challenge_id: i64,
    ) -> Result<Vec<JudgingEntry>> {
        let state = self.lock();
        Ok(state
            .entries
            .iter()
            .filter(|e| e.judging_id == judging_id && e.challenge_id == challenge_id)
            .cloned()
            .collect())
    }

    async fn list_entries_for_challenges(
        &self,
        challenge_ids: &[i64],
    ) -> Result<Vec<JudgingEntry>> {
        let state = self.lock();
        Ok(state
            .entries
            .iter()
            .filter(|e| challenge_ids.contains(&e.challenge_id))
            .cloned()
            .collect())
    }

    async fn set_winner_assigner(&self, challenge_id: i64, judging_id: i64) -> Result<()> {
        let mut state = self.lock();
        if !state
            .coverages
            .iter()
            .any(|c| c.judging_id == judging_id && c.challenge_id == challenge_id)
        {
            return Err(JudgingError::validation(format!(
                "评委 {judging_id} 未覆盖赛道 {challenge_id}"
            )));
        }
        for row in state
            .coverages
            .iter_mut()
            .filter(|c| c.challenge_id == challenge_id)
        {
            row.is_winner_assigner = row.judging_id == judging_id;
        }
        Ok(())
    }

    async fn commit_winner_batch(
        &self,
        caller_user_id: i64,
        commits: &[WinnerCommit],
    ) -> Result<()> {
        let mut state = self.lock();

        // 整体校验
        for commit in commits {
            let elected = state
                .coverages
                .iter()
                .find(|c| c.challenge_id == commit.challenge_id && c.is_winner_assigner)
                .and_then(|c| state.coverage(c));
            if elected.is_none_or(|c| c.user_id != caller_user_id) {
                return Err(JudgingError::authorization(format!(
                    "用户 {caller_user_id} 不是赛道 {} 的评奖人",
                    commit.challenge_id
                )));
            }
            if !state
                .links
                .iter()
                .any(|l| l.project_id == commit.project_id && l.challenge_id == commit.challenge_id)
            {
                return Err(JudgingError::validation("项目未参加该赛道"));
            }
            if !state
                .prizes
                .iter()
                .any(|p| p.id == commit.prize_id && p.challenge_id == commit.challenge_id)
            {
                return Err(JudgingError::validation("奖项不属于该赛道"));
            }
        }

        // 整体写入
        for commit in commits {
            let previous_holders: Vec<i64> = state
                .links
                .iter()
                .filter(|l| {
                    l.challenge_id == commit.challenge_id
                        && l.prize_id == Some(commit.prize_id)
                        && l.project_id != commit.project_id
                })
                .map(|l| l.project_id)
                .collect();
            for entry in state.entries.iter_mut().filter(|e| {
                e.challenge_id == commit.challenge_id && previous_holders.contains(&e.project_id)
            }) {
                entry.standing = None;
            }
            if let Some(challenge) = state
                .challenges
                .iter_mut()
                .find(|c| c.id == commit.challenge_id)
            {
                challenge.winners_submitted = true;
            }
            for link in state
                .links
                .iter_mut()
                .filter(|l| l.challenge_id == commit.challenge_id)
            {
                if link.project_id == commit.project_id {
                    link.prize_id = Some(commit.prize_id);
                    link.rank = Some(commit.rank);
                } else if link.prize_id == Some(commit.prize_id) {
                    link.prize_id = None;
                    link.rank = None;
                }
            }
            for entry in state.entries.iter_mut().filter(|e| {
                e.project_id == commit.project_id && e.challenge_id == commit.challenge_id
            }) {
                entry.standing = Some(commit.rank);
            }
        }
        Ok(())
    }

    async fn get_role_by_name(&self, name: &str) -> Result<Option<Role>> {
        let state = self.lock();
        Ok(state.roles.iter().find(|r| r.name == name).cloned())
    }

    async fn create_role(&self, name: &str) -> Result<Role> {
        let mut state = self.lock();
        if state.roles.iter().any(|r| r.name == name) {
            return Err(JudgingError::conflict(format!("角色已存在: {name}")));
        }
        let role = Role {
            id: state.next_id(),
            name: name.to_string(),
        };
        state.roles.push(role.clone());
        Ok(role)
    }

    async fn grant_hackathon_role(
        &self,
        user_id: i64,
        hackathon_id: i64,
        role_id: i64,
    ) -> Result<()> {
        self.lock()
            .memberships
            .insert((user_id, hackathon_id, role_id));
        Ok(())
    }

    async fn revoke_hackathon_role(
        &self,
        user_id: i64,
        hackathon_id: i64,
        role_id: i64,
    ) -> Result<bool> {
        Ok(self
            .lock()
            .memberships
            .remove(&(user_id, hackathon_id, role_id)))
    }
}
