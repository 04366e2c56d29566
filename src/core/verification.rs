//! # Consistency Verification Module / 一致性验证模块
//!
//! Two targeted checks that issue their own requests, outside the matrix:
//! parameter-order invariance of the revenue total and the shape of an
//! empty result. Both degrade to a failed verdict instead of erroring.
//!
//! 两个独立发起请求、不属于矩阵的专项检查：收入总额的参数顺序不变性，
//! 以及空结果的结构。两者在出错时都降级为失败判定，而不是返回错误。

use serde_json::Value;
use std::time::Duration;

use crate::{
    core::checks::{self, GroupsShape},
    infra::{http::HttpClient, t},
};

/// The same logical filter set in two query-string orders.
pub const ORDER_INVARIANCE_URLS: [&str; 2] = [
    "/revenue?movie_id=tt6823368&genre=Crime",
    "/revenue?genre=Crime&movie_id=tt6823368",
];

/// A filter guaranteed to match nothing.
pub const EMPTY_RESULT_URL: &str = "/revenue?movie_id=nonexistent";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationCheck {
    ParameterOrder,
    EmptyResults,
}

/// Outcome of one check.
/// 单个检查的结果。
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Passed,
    TotalsDiffer { first: f64, second: f64 },
    /// A request or its body could not be used; carries the reason.
    Unavailable(String),
    GroupsNull,
    GroupsUnexpected,
    StructureMissing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VerificationOutcome {
    pub check: VerificationCheck,
    pub verdict: Verdict,
}

impl VerificationOutcome {
    pub fn passed(&self) -> bool {
        self.verdict == Verdict::Passed
    }
}

/// Runs both checks, parameter order first.
pub async fn run_verification(
    client: &HttpClient,
    base_url: &str,
    delay: Duration,
) -> Vec<VerificationOutcome> {
    vec![
        verify_parameter_order(client, base_url, delay).await,
        verify_empty_results(client, base_url).await,
    ]
}

/// Requests both orderings and compares `data.total_revenue` numerically.
/// 请求两种顺序并按数值比较 `data.total_revenue`。
pub async fn verify_parameter_order(
    client: &HttpClient,
    base_url: &str,
    delay: Duration,
) -> VerificationOutcome {
    let mut totals = Vec::with_capacity(ORDER_INVARIANCE_URLS.len());
    for url in ORDER_INVARIANCE_URLS {
        totals.push(fetch_total_revenue(client, &format!("{base_url}{url}")).await);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
    let second = totals.pop().unwrap_or_else(|| Err(String::new()));
    let first = totals.pop().unwrap_or_else(|| Err(String::new()));
    evaluate_parameter_order(first, second)
}

async fn fetch_total_revenue(client: &HttpClient, url: &str) -> Result<f64, String> {
    let reply = client.get(url).await.map_err(|e| format!("{e:#}"))?;
    let body: Value = serde_json::from_str(&reply.body)
        .map_err(|_| t!("verify.body_not_json", url = url).to_string())?;
    checks::total_revenue(&body)
        .ok_or_else(|| t!("verify.total_missing", url = url).to_string())
}

/// Decides the order check from the two fetched totals.
pub fn evaluate_parameter_order(
    first: Result<f64, String>,
    second: Result<f64, String>,
) -> VerificationOutcome {
    let verdict = match (first, second) {
        (Ok(first), Ok(second)) if first == second => Verdict::Passed,
        (Ok(first), Ok(second)) => Verdict::TotalsDiffer { first, second },
        (Err(reason), _) | (_, Err(reason)) => Verdict::Unavailable(reason),
    };
    VerificationOutcome {
        check: VerificationCheck::ParameterOrder,
        verdict,
    }
}

/// Requests a query that matches nothing and checks `data.groups == []`.
/// 请求一个不匹配任何数据的查询，并检查 `data.groups == []`。
pub async fn verify_empty_results(client: &HttpClient, base_url: &str) -> VerificationOutcome {
    match client.get(&format!("{base_url}{EMPTY_RESULT_URL}")).await {
        Ok(reply) => evaluate_empty_results(&reply.body),
        Err(e) => VerificationOutcome {
            check: VerificationCheck::EmptyResults,
            verdict: Verdict::Unavailable(format!("{e:#}")),
        },
    }
}

/// Decides the empty-result check from a raw body.
pub fn evaluate_empty_results(body: &str) -> VerificationOutcome {
    let verdict = match checks::classify_body(body) {
        GroupsShape::Empty => Verdict::Passed,
        GroupsShape::Null => Verdict::GroupsNull,
        GroupsShape::Populated(_) | GroupsShape::Unexpected => Verdict::GroupsUnexpected,
        GroupsShape::NoData | GroupsShape::Missing | GroupsShape::NotJson => {
            Verdict::StructureMissing
        }
    };
    VerificationOutcome {
        check: VerificationCheck::EmptyResults,
        verdict,
    }
}
