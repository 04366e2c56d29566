//! # Response Shape Checks / 响应结构检查
//!
//! Classifies the `data.groups` field of a revenue response. The runner uses
//! the classification to flag structural anomalies, the verifier uses it to
//! decide the empty-result check.
//!
//! 对收入响应中的 `data.groups` 字段进行分类。运行器用它标记结构异常，
//! 验证器用它判定空结果检查。

use serde::Serialize;
use serde_json::Value;

use crate::infra::t;

/// Classification of the `data.groups` field of a response body.
/// 响应体中 `data.groups` 字段的分类。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupsShape {
    /// No top-level `data` field. Nothing to check.
    NoData,
    /// `data` is present but has no `groups` field (or is not an object).
    Missing,
    /// `groups` is `null` instead of an array.
    Null,
    /// `groups` is an empty array.
    Empty,
    /// `groups` is a non-empty array of the given length.
    Populated(usize),
    /// `groups` is neither an array nor `null`.
    Unexpected,
    /// The body of a 200 response did not parse as JSON.
    NotJson,
}

impl GroupsShape {
    /// Shapes that are reported as structural anomalies by the runner.
    /// 运行器报告为结构异常的形态。
    pub fn is_anomaly(&self) -> bool {
        matches!(
            self,
            GroupsShape::Missing | GroupsShape::Null | GroupsShape::NotJson
        )
    }

    /// Short English label used in the plain-text artifacts.
    pub fn describe(&self) -> String {
        match self {
            GroupsShape::NoData => "no data field".to_string(),
            GroupsShape::Missing => "groups missing".to_string(),
            GroupsShape::Null => "groups is null".to_string(),
            GroupsShape::Empty => "groups is empty".to_string(),
            GroupsShape::Populated(count) => format!("{count} group(s)"),
            GroupsShape::Unexpected => "groups has an unexpected type".to_string(),
            GroupsShape::NotJson => "body is not valid JSON".to_string(),
        }
    }

    /// Localized anomaly message for the console, `None` for non-anomalies.
    /// 控制台使用的本地化异常消息，非异常返回 `None`。
    pub fn anomaly_message(&self, test_number: usize, locale: &str) -> Option<String> {
        let message = match self {
            GroupsShape::Missing => t!("anomaly.groups_missing", locale = locale, index = test_number),
            GroupsShape::Null => t!("anomaly.groups_null", locale = locale, index = test_number),
            GroupsShape::NotJson => t!("anomaly.not_json", locale = locale, index = test_number),
            _ => return None,
        };
        Some(message.to_string())
    }
}

/// Classifies the `data.groups` field of a parsed response body.
/// 对已解析响应体中的 `data.groups` 字段进行分类。
pub fn classify_groups(body: &Value) -> GroupsShape {
    let Some(data) = body.get("data") else {
        return GroupsShape::NoData;
    };
    let Some(data) = data.as_object() else {
        return GroupsShape::Missing;
    };
    match data.get("groups") {
        None => GroupsShape::Missing,
        Some(Value::Null) => GroupsShape::Null,
        Some(Value::Array(items)) if items.is_empty() => GroupsShape::Empty,
        Some(Value::Array(items)) => GroupsShape::Populated(items.len()),
        Some(_) => GroupsShape::Unexpected,
    }
}

/// Parses a raw body and classifies it, `NotJson` when it does not parse.
pub fn classify_body(body: &str) -> GroupsShape {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => classify_groups(&value),
        Err(_) => GroupsShape::NotJson,
    }
}

/// Reads `data.total_revenue` as a number.
/// 以数值形式读取 `data.total_revenue`。
pub fn total_revenue(body: &Value) -> Option<f64> {
    body.pointer("/data/total_revenue").and_then(Value::as_f64)
}

/// Pretty-prints a JSON value with 4-space indentation, keys in the order received.
/// 以 4 空格缩进格式化 JSON 值，键保持接收时的顺序。
pub fn pretty_json(value: &Value) -> String {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    if value.serialize(&mut serializer).is_err() {
        return value.to_string();
    }
    String::from_utf8_lossy(&buf).into_owned()
}
