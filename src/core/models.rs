//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the matrix runner:
//! the catalog's test cases, their expectations, the response status and the
//! per-case test result.
//!
//! 此模块定义了整个矩阵运行器中使用的核心数据结构：
//! 目录中的测试用例、其预期结果、响应状态以及每个用例的测试结果。

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::checks::GroupsShape;
use crate::core::query;
use crate::infra::t;

/// The status class a test case is expected to produce.
/// 测试用例预期产生的状态类别。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expectation {
    /// HTTP 200.
    Success,
    /// Any 4xx response, typically a 400 from parameter validation.
    /// 任意 4xx 响应，通常是参数校验返回的 400。
    BadRequest,
    /// HTTP 200 with `data.groups` being an empty array.
    /// HTTP 200 且 `data.groups` 为空数组。
    Empty,
}

impl Expectation {
    /// Checks whether an observed status and shape satisfy this expectation.
    /// An `ERROR` status never does.
    pub fn is_met(&self, status: ResponseStatus, shape: Option<GroupsShape>) -> bool {
        match self {
            Expectation::Success => status.is_ok(),
            Expectation::BadRequest => status.is_client_error(),
            Expectation::Empty => status.is_ok() && shape == Some(GroupsShape::Empty),
        }
    }

    /// Localized label for console output.
    pub fn label(&self, locale: &str) -> String {
        match self {
            Expectation::Success => t!("expect.success", locale = locale).to_string(),
            Expectation::BadRequest => t!("expect.bad_request", locale = locale).to_string(),
            Expectation::Empty => t!("expect.empty", locale = locale).to_string(),
        }
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Expectation::Success => "success",
            Expectation::BadRequest => "bad_request",
            Expectation::Empty => "empty",
        };
        f.write_str(name)
    }
}

/// A single entry of the query matrix.
/// 查询矩阵中的单个条目。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TestCase {
    /// Human readable name, used in logs and artifacts.
    /// 可读名称，用于日志和结果文件。
    pub name: String,
    /// Path plus query string, appended verbatim to the base URL.
    /// 路径加查询字符串，原样拼接到基础 URL 之后。
    pub url: String,
    /// Explicit expectation. When absent it is inferred from the query string.
    /// 显式预期。缺省时从查询字符串推断。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expect: Option<Expectation>,
}

impl TestCase {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            expect: None,
        }
    }

    /// Sets an explicit expectation on the case.
    pub fn expecting(mut self, expectation: Expectation) -> Self {
        self.expect = Some(expectation);
        self
    }

    /// The explicit expectation if any, otherwise the one implied by the query rules.
    /// 若有显式预期则返回之，否则返回查询规则推断出的预期。
    pub fn effective_expectation(&self) -> Expectation {
        self.expect
            .unwrap_or_else(|| query::infer_expectation(&self.url))
    }
}

/// The status recorded for a test case: an HTTP status code, or the `ERROR`
/// sentinel when the request never produced a response.
/// 为测试用例记录的状态：HTTP 状态码，或请求未得到响应时的 `ERROR` 标记。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStatus {
    Http(u16),
    Error,
}

impl ResponseStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, ResponseStatus::Http(200))
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self, ResponseStatus::Http(code) if (400..500).contains(code))
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseStatus::Http(code) => write!(f, "{code}"),
            ResponseStatus::Error => f.write_str("ERROR"),
        }
    }
}

/// The outcome of executing one test case. Created once, never mutated.
/// 执行一个测试用例的结果。只创建一次，之后不再修改。
#[derive(Debug, Clone, PartialEq)]
pub struct TestResult {
    pub test_name: String,
    pub url: String,
    pub status: ResponseStatus,
    /// Pretty-printed JSON for parseable 200 responses, the raw body otherwise,
    /// or the transport error description.
    /// 可解析的 200 响应为格式化 JSON，否则为原始响应体或传输错误描述。
    pub response: String,
    /// Shape verdict of `data.groups`, only present for 200 responses.
    /// `data.groups` 的结构判定，仅对 200 响应存在。
    pub shape: Option<GroupsShape>,
    pub expectation: Expectation,
}

impl TestResult {
    /// Builds the result for a request that failed before any response arrived.
    pub fn transport_error(case: &TestCase, message: impl Into<String>) -> Self {
        Self {
            test_name: case.name.clone(),
            url: case.url.clone(),
            status: ResponseStatus::Error,
            response: message.into(),
            shape: None,
            expectation: case.effective_expectation(),
        }
    }

    /// `true` for an HTTP 200 response.
    pub fn is_success(&self) -> bool {
        self.status.is_ok()
    }

    pub fn meets_expectation(&self) -> bool {
        self.expectation.is_met(self.status, self.shape)
    }

    /// `true` when the response shape was flagged as a structural anomaly.
    pub fn has_anomaly(&self) -> bool {
        self.shape.is_some_and(|shape| shape.is_anomaly())
    }

    /// Gets the status of the test result as a string for display.
    /// 以字符串形式获取测试结果的状态以供显示。
    pub fn get_status_str(&self, locale: &str) -> String {
        match self.status {
            ResponseStatus::Error => t!("report.status_error", locale = locale).to_string(),
            status => status.to_string(),
        }
    }
}
