//! # Matrix Execution Module / 矩阵执行模块
//!
//! This module runs the catalog: one GET per test case, strictly in order,
//! with a fixed pause between requests. Every case yields exactly one
//! [`TestResult`], transport failures included; nothing here aborts a run.
//!
//! 此模块运行目录：每个测试用例一次 GET 请求，严格按顺序执行，请求之间有固定暂停。
//! 每个用例（包括传输失败）都恰好产生一个 [`TestResult`]；此处不会中止运行。

use colored::*;
use serde_json::Value;
use std::time::Duration;

use crate::{
    core::{
        checks::{self, GroupsShape},
        models::{ResponseStatus, TestCase, TestResult},
    },
    infra::{
        http::{HttpClient, HttpReply},
        t,
    },
};

/// Runs every case in catalog order and returns one result per case.
///
/// # Arguments
/// * `cases` - The ordered catalog
/// * `client` - Client carrying the run's credentials
/// * `base_url` - Prefix concatenated with each case's relative URL
/// * `delay` - Pause between two consecutive requests, not after the last one
///
/// # Returns
/// The results, in the same order as `cases`
pub async fn run_matrix(
    cases: &[TestCase],
    client: &HttpClient,
    base_url: &str,
    delay: Duration,
) -> Vec<TestResult> {
    let total = cases.len();
    let mut results = Vec::with_capacity(total);

    for (i, case) in cases.iter().enumerate() {
        println!(
            "{}",
            t!("run.running_test", index = i + 1, total = total, name = &case.name).blue()
        );

        results.push(run_test_case(case, client, base_url, i + 1).await);

        if i + 1 < total && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    results
}

/// Executes a single case. `test_number` is its 1-based position, used in diagnostics.
pub async fn run_test_case(
    case: &TestCase,
    client: &HttpClient,
    base_url: &str,
    test_number: usize,
) -> TestResult {
    // No normalization: duplicated or conflicting parameters are sent as written.
    let full_url = format!("{base_url}{}", case.url);

    match client.get(&full_url).await {
        Ok(reply) => {
            let (response, shape) = format_reply(&reply);
            if let Some(message) = shape.and_then(|s| s.anomaly_message(test_number, &rust_i18n::locale())) {
                println!("  {}", message.red());
            }
            TestResult {
                test_name: case.name.clone(),
                url: case.url.clone(),
                status: ResponseStatus::Http(reply.status),
                response,
                shape,
                expectation: case.effective_expectation(),
            }
        }
        Err(e) => {
            let message = format!("{e:#}");
            println!(
                "  {}",
                t!("run.transport_error", error = &message).red()
            );
            TestResult::transport_error(case, message)
        }
    }
}

/// Turns a reply into the stored response text and its shape verdict.
///
/// Only a 200 response is parsed: a JSON body is pretty-printed and
/// classified, any other body is stored raw with the `NotJson` verdict.
/// Non-200 bodies are stored raw and carry no verdict.
///
/// 将响应转换为存储的响应文本及其结构判定。只有 200 响应会被解析：
/// JSON 响应体被格式化并分类，其他响应体原样存储并标记为 `NotJson`。
/// 非 200 响应体原样存储，没有判定。
pub fn format_reply(reply: &HttpReply) -> (String, Option<GroupsShape>) {
    if reply.status != 200 {
        return (reply.body.clone(), None);
    }
    match serde_json::from_str::<Value>(&reply.body) {
        Ok(value) => (checks::pretty_json(&value), Some(checks::classify_groups(&value))),
        Err(_) => (reply.body.clone(), Some(GroupsShape::NotJson)),
    }
}
