//! # Test Execution Planner Module / 测试执行计划模块
//!
//! This module narrows the catalog to the cases selected for a run,
//! keeping catalog order.
//!
//! 此模块将目录缩小为本次运行选中的用例，并保持目录顺序。

use crate::core::models::{Expectation, TestCase};

/// Represents a complete execution plan for a run.
/// 表示一次运行的完整执行计划。
#[derive(Debug)]
pub struct ExecutionPlan {
    /// The cases to execute, in catalog order.
    /// 要执行的用例，按目录顺序。
    pub cases_to_run: Vec<TestCase>,
    /// The number of cases removed by the name filter.
    /// 被名称过滤器移除的用例数量。
    pub filtered_count: usize,
    /// The number of selected cases expected to be rejected with a 4xx.
    /// 选中用例中预期被 4xx 拒绝的数量。
    pub expected_rejections: usize,
}

/// Creates an execution plan.
///
/// # Arguments
/// * `cases` - The full catalog
/// * `filter` - Optional case-insensitive substring matched against case names
pub fn plan_execution(cases: Vec<TestCase>, filter: Option<&str>) -> ExecutionPlan {
    let needle = filter
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_lowercase);

    let total = cases.len();
    let cases_to_run: Vec<TestCase> = match needle {
        Some(needle) => cases
            .into_iter()
            .filter(|case| case.name.to_lowercase().contains(&needle))
            .collect(),
        None => cases,
    };

    let expected_rejections = cases_to_run
        .iter()
        .filter(|case| case.effective_expectation() == Expectation::BadRequest)
        .count();

    ExecutionPlan {
        filtered_count: total - cases_to_run.len(),
        cases_to_run,
        expected_rejections,
    }
}
