//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints the run summary and the verification outcomes to the
//! console, with color coding and internationalization support.
//!
//! 此模块在控制台打印运行摘要和验证结果，支持颜色编码和国际化。

use colored::*;

use crate::core::models::TestResult;
use crate::core::verification::{Verdict, VerificationCheck, VerificationOutcome};
use crate::infra::t;

/// Prints a formatted summary of test results to the console.
/// Displays a table with status, name and expectation verdict,
/// using color coding to highlight different statuses.
///
/// 在控制台打印格式化的测试结果摘要。
/// 显示一个包含状态、名称和预期判定的表格，使用颜色编码突出显示不同的状态。
///
/// # Output Format / 输出格式
/// ```text
/// --- Test Summary ---
///   - 200    | Default, all data                             | expected 200
///   - 400    | Invalid timeframe                             | expected 4xx
///   - 200    | Non-existent movie ID                         | expected empty groups (MISMATCH)
///   - ERROR  | Filter by May                                 | expected 200 (MISMATCH)
/// ```
pub fn print_summary(results: &[TestResult], locale: &str) {
    println!("\n{}", t!("test_summary_banner", locale = locale).bold());

    for result in results {
        let status_str = result.get_status_str(locale);
        let status_colored = if result.is_success() {
            status_str.green()
        } else if result.status.is_client_error() {
            status_str.yellow()
        } else {
            status_str.red()
        };

        let mut verdict = t!(
            "report.expected",
            locale = locale,
            expectation = result.expectation.label(locale)
        )
        .to_string();
        if !result.meets_expectation() {
            verdict = format!("{verdict} {}", t!("report.mismatch", locale = locale));
        }
        let verdict_colored = if result.meets_expectation() {
            verdict.dimmed()
        } else {
            verdict.red()
        };

        println!(
            "  - {:<6} | {:<45} | {}",
            status_colored, result.test_name, verdict_colored
        );
    }

    let success_count = results.iter().filter(|r| r.is_success()).count();
    let mismatch_count = results.iter().filter(|r| !r.meets_expectation()).count();
    let anomaly_count = results.iter().filter(|r| r.has_anomaly()).count();

    println!(
        "\n{}",
        t!(
            "report.counts",
            locale = locale,
            total = results.len(),
            success = success_count,
            errors = results.len() - success_count
        )
        .bold()
    );

    if mismatch_count > 0 {
        println!(
            "{}",
            t!("report.mismatch_count", locale = locale, count = mismatch_count).red()
        );
    } else {
        println!("{}", t!("report.all_expectations_met", locale = locale).green());
    }
    if anomaly_count > 0 {
        println!(
            "{}",
            t!("report.anomaly_count", locale = locale, count = anomaly_count).red()
        );
    }
}

/// Prints one PASSED/FAILED line per verification outcome.
/// 为每个验证结果打印一行 PASSED/FAILED。
pub fn print_verification(outcomes: &[VerificationOutcome], locale: &str) {
    for outcome in outcomes {
        let line = verification_line(outcome, locale);
        if outcome.passed() {
            println!("{} {}", "✅".green(), line.green());
        } else {
            println!("{} {}", "❌".red(), line.red());
        }
    }
}

/// Renders the console text of a verification outcome.
pub fn verification_line(outcome: &VerificationOutcome, locale: &str) -> String {
    let label = match outcome.check {
        VerificationCheck::ParameterOrder => t!("verify.order_label", locale = locale),
        VerificationCheck::EmptyResults => t!("verify.empty_label", locale = locale),
    };
    let detail = match &outcome.verdict {
        Verdict::Passed => match outcome.check {
            VerificationCheck::ParameterOrder => t!("verify.passed", locale = locale).to_string(),
            VerificationCheck::EmptyResults => {
                t!("verify.empty_passed", locale = locale).to_string()
            }
        },
        Verdict::TotalsDiffer { first, second } => t!(
            "verify.order_failed",
            locale = locale,
            first = first,
            second = second
        )
        .to_string(),
        Verdict::Unavailable(reason) => {
            t!("verify.unavailable", locale = locale, reason = reason).to_string()
        }
        Verdict::GroupsNull => t!("verify.empty_null", locale = locale).to_string(),
        Verdict::GroupsUnexpected => t!("verify.empty_unexpected", locale = locale).to_string(),
        Verdict::StructureMissing => t!("verify.empty_missing", locale = locale).to_string(),
    };
    format!("{label}: {detail}")
}
