//! # Verify Command Module / 验证命令模块
//!
//! Runs only the consistency checks, without the matrix.
//!
//! 仅运行一致性检查，不运行矩阵。

use anyhow::Result;
use colored::*;

use crate::{
    cli::commands::{load_config, resolve_credentials, run::RunArgs},
    core::{config::RunConfig, verification::run_verification},
    infra::{http::HttpClient, t},
    reporting::console::print_verification,
};

pub async fn execute(args: RunArgs, explicit_language: bool) -> Result<()> {
    let (mut file, _) = load_config(args.config.as_deref(), explicit_language)?;
    let locale = rust_i18n::locale().to_string();
    file.apply(&args.overrides());

    let credentials = resolve_credentials(args.token.clone(), args.api_key.clone())?;
    let config = RunConfig::new(&file, credentials)?;
    let client = HttpClient::new(config.credentials.clone(), config.request_timeout)?;

    println!("{}", t!("verify_banner", locale = locale).bold());
    let outcomes = run_verification(&client, &config.base_url, config.verify_delay).await;
    print_verification(&outcomes, &locale);

    Ok(())
}
