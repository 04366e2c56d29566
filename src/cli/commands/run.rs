//! # Run Command Module / 运行命令模块
//!
//! This module implements the `run` command, which executes the query matrix,
//! writes the result artifacts and then runs the consistency checks.
//! It is also what a bare `revenue-matrix` invocation does.
//!
//! 此模块实现 `run` 命令：执行查询矩阵、写入结果文件，然后运行一致性检查。
//! 不带参数调用 `revenue-matrix` 时执行的也是它。

use anyhow::Result;
use chrono::Local;
use colored::*;
use std::path::PathBuf;

use crate::{
    cli::commands::{load_config, resolve_credentials},
    core::{
        config::{Overrides, RunConfig},
        execution::run_matrix,
        planner::{self, ExecutionPlan},
        verification::run_verification,
    },
    infra::{http::HttpClient, t},
    reporting::{
        console::{print_summary, print_verification},
        text::{write_detailed_log, write_summary},
    },
};

/// Arguments of the `run` and `verify` commands. All optional.
#[derive(Debug, Clone, Default)]
pub struct RunArgs {
    pub config: Option<PathBuf>,
    pub base_url: Option<String>,
    pub token: Option<String>,
    pub api_key: Option<String>,
    pub delay_secs: Option<u64>,
    pub verify_delay_secs: Option<u64>,
    pub output_dir: Option<PathBuf>,
    pub filter: Option<String>,
    pub skip_verify: bool,
}

impl RunArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            base_url: self.base_url.clone(),
            delay_secs: self.delay_secs,
            verify_delay_secs: self.verify_delay_secs,
            output_dir: self.output_dir.clone(),
        }
    }
}

/// Executes the run command with the provided arguments.
///
/// Test outcomes never turn into an error: a run that completes returns
/// `Ok` even if every request failed. Only setup problems (configuration,
/// credentials, unwritable output directory) are returned as errors.
///
/// 使用提供的参数执行 run 命令。测试结果不会变成错误：完成的运行即使所有请求
/// 都失败也返回 `Ok`。只有准备阶段的问题（配置、凭据、输出目录不可写）才会返回错误。
pub async fn execute(args: RunArgs, explicit_language: bool) -> Result<()> {
    let (mut file, config_path) = load_config(args.config.as_deref(), explicit_language)?;
    let locale = rust_i18n::locale().to_string();
    file.apply(&args.overrides());

    match &config_path {
        Some(path) => println!(
            "{}",
            t!("loading_config", locale = locale, path = path.display())
        ),
        None => println!("{}", t!("using_default_config", locale = locale).dimmed()),
    }

    let plan = planner::plan_execution(file.effective_cases(), args.filter.as_deref());

    if plan.filtered_count > 0 {
        println!(
            "{}",
            t!(
                "filtered_cases",
                locale = locale,
                filtered = plan.filtered_count,
                total = plan.cases_to_run.len()
            )
            .cyan()
        );
    }

    let credentials = resolve_credentials(args.token.clone(), args.api_key.clone())?;
    let config = RunConfig::new(&file, credentials)?;
    let client = HttpClient::new(config.credentials.clone(), config.request_timeout)?;

    if plan.cases_to_run.is_empty() {
        println!("{}", t!("no_cases_to_run", locale = locale).yellow());
    } else {
        run_cases(&plan, &config, &client, &locale).await?;
    }

    if !args.skip_verify {
        println!("\n{}", t!("verify_banner", locale = locale).bold());
        let outcomes = run_verification(&client, &config.base_url, config.verify_delay).await;
        print_verification(&outcomes, &locale);
    }

    println!("\n{}", t!("testing_complete", locale = locale).green().bold());
    Ok(())
}

/// Executes the planned cases, prints the summary and writes both artifacts.
async fn run_cases(
    plan: &ExecutionPlan,
    config: &RunConfig,
    client: &HttpClient,
    locale: &str,
) -> Result<()> {
    println!("{}", t!("starting_tests", locale = locale).bold());
    println!(
        "{}",
        t!(
            "run_target",
            locale = locale,
            url = &config.base_url,
            count = plan.cases_to_run.len(),
            delay = config.request_delay.as_secs()
        )
        .cyan()
    );
    if plan.expected_rejections > 0 {
        println!(
            "{}",
            t!("expected_rejections", locale = locale, count = plan.expected_rejections).dimmed()
        );
    }

    let results = run_matrix(
        &plan.cases_to_run,
        client,
        &config.base_url,
        config.request_delay,
    )
    .await;

    print_summary(&results, locale);

    let written_at = Local::now();
    let log_path = write_detailed_log(&results, &config.output_dir, &written_at)?;
    let summary_path = write_summary(&results, &config.output_dir, &written_at)?;
    println!(
        "\n{}",
        t!("results_written", locale = locale, path = log_path.display())
    );
    println!(
        "{}",
        t!("summary_written", locale = locale, path = summary_path.display())
    );
    Ok(())
}
