//! 数据模型定义
//!
//! 业务实体与请求/响应结构，与 entity 模块中的数据库模型分离。

pub mod challenges;
pub mod common;
pub mod entries;
pub mod judges;
pub mod progress;
pub mod roles;
pub mod scores;
pub mod stats;
pub mod winners;

pub use common::outcome::{BatchOutcome, FanOutError, FanOutSummary, ItemOutcome, ItemResult};
