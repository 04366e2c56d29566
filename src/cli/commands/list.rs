//! # List Command Module / 列表命令模块
//!
//! Prints the effective catalog with the expectation of each case and,
//! for cases expected to be rejected, the rules their query breaks.
//!
//! 打印生效的目录及每个用例的预期；对于预期被拒绝的用例，同时打印其查询违反的规则。

use anyhow::Result;
use colored::*;
use std::path::PathBuf;

use crate::{
    cli::commands::load_config,
    core::{planner, query},
    infra::t,
};

pub fn execute(config: Option<PathBuf>, filter: Option<String>, explicit_language: bool) -> Result<()> {
    let (file, _) = load_config(config.as_deref(), explicit_language)?;
    let locale = rust_i18n::locale().to_string();
    let plan = planner::plan_execution(file.effective_cases(), filter.as_deref());

    println!(
        "{}",
        t!("list_banner", locale = locale, count = plan.cases_to_run.len()).bold()
    );

    for (i, case) in plan.cases_to_run.iter().enumerate() {
        let expectation = case.effective_expectation().label(&locale);
        println!(
            "{:>3}. {:<45} {:<20} {}",
            i + 1,
            case.name,
            expectation.cyan(),
            case.url.dimmed()
        );
        for violation in query::violations(&case.url) {
            println!("       - {}", violation.to_string().yellow());
        }
    }

    println!(
        "\n{}",
        t!("expected_rejections", locale = locale, count = plan.expected_rejections).dimmed()
    );
    Ok(())
}
