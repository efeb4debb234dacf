//! Judging Engine - 黑客松评审分配与计分引擎
//!
//! 基于 SeaORM 构建，负责把基准分分发给评委、管理评审条目的生命周期、
//! 原子地提交获奖结果，并提供分数统计与评审进度。
//!
//! # 架构
//! - `cache`: 缓存层（Moka）
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `runtime`: 日志与启动装配
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）

pub mod cache;
pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod runtime;
pub mod services;
pub mod storage;
