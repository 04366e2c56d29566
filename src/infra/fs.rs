//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides utilities for the run artifacts: timestamped file
//! names, output directory expansion and writing.
//!
//! 此模块为运行产物提供实用功能：带时间戳的文件名、输出目录展开和写入。

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

/// File name prefix of the detailed log.
pub const RESULTS_PREFIX: &str = "revenue_api_test_results";
/// File name prefix of the summary.
pub const SUMMARY_PREFIX: &str = "revenue_api_test_summary";

/// Formats a run timestamp for use in file names, e.g. `20250416_093015`.
pub fn timestamp_slug(at: &DateTime<Local>) -> String {
    at.format("%Y%m%d_%H%M%S").to_string()
}

/// Builds `<dir>/<prefix>_<timestamp>.txt`.
///
/// # Arguments
/// * `dir` - Output directory
/// * `prefix` - One of [`RESULTS_PREFIX`] or [`SUMMARY_PREFIX`]
/// * `at` - Run timestamp shared by both artifacts of a run
pub fn artifact_path(dir: &Path, prefix: &str, at: &DateTime<Local>) -> PathBuf {
    dir.join(format!("{prefix}_{}.txt", timestamp_slug(at)))
}

/// Expands `~` and environment variables in a directory setting.
pub fn expand_dir(raw: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(raw)
        .with_context(|| format!("Failed to expand output directory: {raw}"))?;
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Writes an artifact, creating its parent directory if needed.
///
/// 写入结果文件，必要时创建其父目录。
pub fn write_artifact(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(path, contents)
        .with_context(|| format!("Failed to write artifact: {}", path.display()))
}
