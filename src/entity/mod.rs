//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod baseline_scores;
pub mod challenge_coverages;
pub mod challenges;
pub mod hackathon_roles;
pub mod hackathons;
pub mod judge_assignments;
pub mod judging_entries;
pub mod prizes;
pub mod project_challenges;
pub mod projects;
pub mod roles;
pub mod users;
