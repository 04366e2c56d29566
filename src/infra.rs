//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for Revenue Matrix,
//! including the HTTP client, artifact file operations, and i18n support.
//!
//! 此模块为 Revenue Matrix 提供基础设施服务，
//! 包括 HTTP 客户端、结果文件操作和国际化支持。

pub mod fs;
pub mod http;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
