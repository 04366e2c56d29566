//! # Plain-Text Reporting Module / 纯文本报告模块
//!
//! Writes the two artifacts of a run: the detailed log with one block per
//! result, and the summary with counts and the non-200 results. Every result
//! appears exactly once in each.
//!
//! 写入一次运行的两个产物：每个结果一个块的详细日志，以及包含计数和非 200
//! 结果的摘要。每个结果在两者中都恰好出现一次。

use anyhow::Result;
use chrono::{DateTime, Local};
use std::fmt::Write;
use std::path::{Path, PathBuf};

use crate::core::models::TestResult;
use crate::infra::fs::{self, RESULTS_PREFIX, SUMMARY_PREFIX};

const SEPARATOR_WIDTH: usize = 80;

/// Renders the detailed log.
///
/// # Output Format / 输出格式
/// ```text
/// REVENUE API TEST RESULTS
/// ========================
///
/// Test run at: 2025-04-16 09:30:15
///
/// TEST #1: Default, all data
/// URL: /revenue
/// Status Code: 200
/// Check: 3 group(s)
/// Response:
/// { ... }
///
/// ================================================================================
/// ```
pub fn render_detailed_log(results: &[TestResult], run_at: &DateTime<Local>) -> String {
    let mut out = String::new();
    out.push_str("REVENUE API TEST RESULTS\n");
    out.push_str("========================\n\n");
    let _ = writeln!(out, "Test run at: {}\n", run_at.format("%Y-%m-%d %H:%M:%S"));

    for (i, result) in results.iter().enumerate() {
        let _ = writeln!(out, "TEST #{}: {}", i + 1, result.test_name);
        let _ = writeln!(out, "URL: {}", result.url);
        let _ = writeln!(out, "Status Code: {}", result.status);
        if let Some(shape) = result.shape {
            let _ = writeln!(out, "Check: {}", shape.describe());
        }
        out.push_str("Response:\n");
        out.push_str(&result.response);
        let _ = write!(out, "\n\n{}\n\n", "=".repeat(SEPARATOR_WIDTH));
    }

    out
}

/// Renders the summary.
///
/// `Error responses` counts everything that is not a 200, `ERROR` included,
/// so the two counts always add up to the total.
pub fn render_summary(results: &[TestResult]) -> String {
    let success_count = results.iter().filter(|r| r.is_success()).count();
    let error_count = results.len() - success_count;

    let mut out = String::new();
    out.push_str("REVENUE API TEST SUMMARY\n");
    out.push_str("========================\n\n");
    let _ = writeln!(out, "Total tests: {}", results.len());
    let _ = writeln!(out, "Successful tests (200): {success_count}");
    let _ = writeln!(out, "Error responses: {error_count}\n");

    out.push_str("Error details:\n");
    for (i, result) in results.iter().enumerate() {
        if !result.is_success() {
            let _ = writeln!(
                out,
                "  - Test #{}: {} (Status: {})",
                i + 1,
                result.test_name,
                result.status
            );
        }
    }

    let mismatches: Vec<_> = results
        .iter()
        .enumerate()
        .filter(|(_, r)| !r.meets_expectation())
        .collect();
    let _ = writeln!(out, "\nExpectation mismatches: {}", mismatches.len());
    for (i, result) in mismatches {
        let _ = writeln!(
            out,
            "  - Test #{}: {} (expected {}, got {})",
            i + 1,
            result.test_name,
            result.expectation,
            result.status
        );
    }

    let anomalies: Vec<_> = results
        .iter()
        .enumerate()
        .filter(|(_, r)| r.has_anomaly())
        .collect();
    let _ = writeln!(out, "\nShape anomalies: {}", anomalies.len());
    for (i, result) in anomalies {
        if let Some(shape) = result.shape {
            let _ = writeln!(
                out,
                "  - Test #{}: {} ({})",
                i + 1,
                result.test_name,
                shape.describe()
            );
        }
    }

    out
}

/// Writes the detailed log into `output_dir` and returns its path.
pub fn write_detailed_log(
    results: &[TestResult],
    output_dir: &Path,
    run_at: &DateTime<Local>,
) -> Result<PathBuf> {
    let path = fs::artifact_path(output_dir, RESULTS_PREFIX, run_at);
    fs::write_artifact(&path, &render_detailed_log(results, run_at))?;
    Ok(path)
}

/// Writes the summary into `output_dir` and returns its path.
pub fn write_summary(
    results: &[TestResult],
    output_dir: &Path,
    run_at: &DateTime<Local>,
) -> Result<PathBuf> {
    let path = fs::artifact_path(output_dir, SUMMARY_PREFIX, run_at);
    fs::write_artifact(&path, &render_summary(results))?;
    Ok(path)
}
