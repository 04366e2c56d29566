//! # Query Rules / 查询规则
//!
//! Derives the status class a revenue query is expected to produce from its
//! query string alone: parameter validation and mutual exclusivity are
//! independent of the data behind the endpoint.
//!
//! 仅根据查询字符串推导收入查询的预期状态类别：
//! 参数校验和互斥规则与接口背后的数据无关。

use reqwest::Url;
use std::fmt;

use crate::core::models::Expectation;

/// Accepted values of the `timeframe` parameter.
pub const TIMEFRAMES: [&str; 5] = ["all", "daily", "weekly", "monthly", "yearly"];

/// Parameters that must be integers.
const INTEGER_PARAMS: [&str; 3] = ["month", "year", "slot_id"];

/// A reason for which the endpoint rejects a query with a 400-class response.
/// 接口以 400 类响应拒绝查询的原因。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryViolation {
    InvalidTimeframe(String),
    MonthOutOfRange(i64),
    NonNumeric { param: String, value: String },
    /// `timeframe` combined with `month` or `year`.
    MutuallyExclusive { param: String },
}

impl fmt::Display for QueryViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryViolation::InvalidTimeframe(value) => {
                write!(f, "invalid timeframe '{value}'")
            }
            QueryViolation::MonthOutOfRange(month) => {
                write!(f, "month {month} outside 1..=12")
            }
            QueryViolation::NonNumeric { param, value } => {
                write!(f, "{param} '{value}' is not an integer")
            }
            QueryViolation::MutuallyExclusive { param } => {
                write!(f, "timeframe cannot be combined with {param}")
            }
        }
    }
}

/// Extracts the decoded query pairs of a relative URL such as `/revenue?month=4`.
/// Parameters with an empty value are treated as absent.
///
/// 提取相对 URL（如 `/revenue?month=4`）中解码后的查询参数对。
/// 值为空的参数视为不存在。
pub fn query_pairs(relative_url: &str) -> Vec<(String, String)> {
    let Ok(base) = Url::parse("http://revenue-matrix.invalid/") else {
        return Vec::new();
    };
    match base.join(relative_url) {
        Ok(url) => url
            .query_pairs()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect(),
        Err(_) => Vec::new(),
    }
}

/// Lists every rule the query string of `relative_url` breaks.
/// 列出 `relative_url` 查询字符串违反的所有规则。
pub fn violations(relative_url: &str) -> Vec<QueryViolation> {
    let pairs = query_pairs(relative_url);
    let mut found = Vec::new();

    for (key, value) in &pairs {
        if key == "timeframe" && !TIMEFRAMES.contains(&value.as_str()) {
            found.push(QueryViolation::InvalidTimeframe(value.clone()));
        }
        if INTEGER_PARAMS.contains(&key.as_str()) {
            match value.parse::<i64>() {
                Ok(month) if key == "month" && !(1..=12).contains(&month) => {
                    found.push(QueryViolation::MonthOutOfRange(month));
                }
                Ok(_) => {}
                Err(_) => found.push(QueryViolation::NonNumeric {
                    param: key.clone(),
                    value: value.clone(),
                }),
            }
        }
    }

    let has_timeframe = pairs.iter().any(|(key, _)| key == "timeframe");
    if has_timeframe {
        for param in ["month", "year"] {
            if pairs.iter().any(|(key, _)| key == param) {
                found.push(QueryViolation::MutuallyExclusive {
                    param: param.to_string(),
                });
            }
        }
    }

    found
}

/// `BadRequest` when any rule is broken, `Success` otherwise.
/// Emptiness of a result cannot be inferred and is never returned here.
pub fn infer_expectation(relative_url: &str) -> Expectation {
    if violations(relative_url).is_empty() {
        Expectation::Success
    } else {
        Expectation::BadRequest
    }
}
