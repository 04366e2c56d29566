//! # Revenue Matrix Library / Revenue Matrix 库
//!
//! This library provides the core functionality for the Revenue Matrix tool,
//! a configuration-driven harness that runs a catalog of query-parameter
//! combinations against a revenue reporting endpoint.
//!
//! 此库为 Revenue Matrix 工具提供核心功能，
//! 这是一个配置驱动的测试工具，针对收入报表接口运行查询参数组合目录。
//!
//! ## Modules / 模块
//!
//! - `core` - Data models, the seed catalog, query rules and the matrix runner
//! - `infra` - Infrastructure services like the HTTP client and artifact files
//! - `reporting` - Detailed log, summary artifact and console output
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 数据模型、种子目录、查询规则和矩阵运行器
//! - `infra` - 基础设施服务，如 HTTP 客户端和结果文件
//! - `reporting` - 详细日志、摘要文件和控制台输出
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use self::core::config;
pub use self::core::execution;
pub use self::core::models;

/// Initializes the application's internationalization (i18n) based on the system locale.
///
/// This function detects the user's system locale and sets the appropriate
/// language for the application's user interface. It attempts to match the full
/// locale (e.g., "zh-CN"), then just the language code (e.g., "en"), and
/// finally falls back to the default language ("en").
pub fn init() {
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    rust_i18n::set_locale(resolve_locale(&locale));
}

/// Maps a requested locale onto one of the bundled locales.
/// 将请求的语言区域映射到内置的语言区域之一。
pub fn resolve_locale(requested: &str) -> &'static str {
    let available_locales = rust_i18n::available_locales!();

    // Full locale first ("zh-CN"), then the language part ("en" from "en-US").
    if let Some(found) = available_locales.iter().find(|l| **l == requested) {
        return *found;
    }
    requested
        .split(['-', '_'])
        .next()
        .and_then(|lang_code| {
            available_locales
                .iter()
                .find(|l| l.split('-').next() == Some(lang_code))
        })
        .copied()
        .unwrap_or("en")
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
