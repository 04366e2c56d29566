//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Revenue Matrix,
//! including data models, configuration, the seed catalog, query rules,
//! response shape checks and the sequential matrix runner.
//!
//! 此模块包含 Revenue Matrix 的核心功能，
//! 包括数据模型、配置、种子目录、查询规则、响应结构检查和顺序矩阵运行器。

pub mod catalog;
pub mod checks;
pub mod config;
pub mod execution;
pub mod models;
pub mod planner;
pub mod query;
pub mod verification;

// Re-exports
pub use config::RunConfig;
pub use execution::run_matrix;
pub use models::{TestCase, TestResult};
