//! # Commands Module / 命令模块
//!
//! Implementations of the CLI subcommands, plus the setup steps they share:
//! loading the configuration and obtaining credentials.
//!
//! CLI 子命令的实现，以及它们共享的准备步骤：加载配置和获取凭据。

use anyhow::{Context, Result, bail};
use dialoguer::{Password, theme::ColorfulTheme};
use std::env;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use crate::core::config::{self, API_KEY_ENV, Credentials, MatrixFile, TOKEN_ENV};
use crate::infra::t;

pub mod init;
pub mod list;
pub mod run;
pub mod verify;

/// Loads the configuration and switches to its language unless `--lang` was given.
/// 加载配置；若未给出 `--lang`，则切换到配置中的语言。
pub(crate) fn load_config(
    explicit: Option<&Path>,
    explicit_language: bool,
) -> Result<(MatrixFile, Option<PathBuf>)> {
    let (file, path) = config::discover(explicit)
        .with_context(|| t!("config_load_failed").to_string())?;

    if !explicit_language {
        if let Some(language) = &file.language {
            rust_i18n::set_locale(crate::resolve_locale(language));
        }
    }

    Ok((file, path))
}

/// Resolves the bearer token and API key: flag, then environment, then an
/// interactive hidden prompt when stdin is a terminal.
///
/// 解析 bearer token 和 API key：先取命令行参数，再取环境变量，
/// 当标准输入是终端时最后进行隐藏输入的交互式提示。
pub(crate) fn resolve_credentials(
    token: Option<String>,
    api_key: Option<String>,
) -> Result<Credentials> {
    let token = resolve_secret(token, TOKEN_ENV, &t!("prompt_token"))?;
    let api_key = resolve_secret(api_key, API_KEY_ENV, &t!("prompt_api_key"))?;
    Ok(Credentials { token, api_key })
}

fn resolve_secret(flag: Option<String>, env_var: &str, prompt: &str) -> Result<String> {
    if let Some(value) = flag {
        return Ok(value);
    }
    if let Ok(value) = env::var(env_var) {
        if !value.is_empty() {
            return Ok(value);
        }
    }
    if io::stdin().is_terminal() {
        return Password::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .with_context(|| t!("prompt_failed").to_string());
    }
    bail!(t!("credentials_missing", env = env_var).to_string())
}
