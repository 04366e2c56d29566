//! # Configuration Initialization Module / 配置初始化模块
//!
//! Creates a `RevenueMatrix.toml` file, either through a short interactive
//! wizard or, with `--non-interactive`, straight from the defaults.
//!
//! 创建 `RevenueMatrix.toml` 文件：通过简短的交互式向导，
//! 或在 `--non-interactive` 模式下直接使用默认值。
//!
//! Credentials are never written to the file.
//! 凭据永远不会写入该文件。

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use std::fs;
use std::path::Path;

use crate::core::{catalog::seed_catalog, config::MatrixFile};
use crate::infra::t;

const FILE_HEADER: &str = "# Revenue query matrix configuration / 收入查询矩阵配置\n\
# Credentials are read from --token/--api-key, REVENUE_MATRIX_TOKEN/REVENUE_MATRIX_API_KEY or a prompt.\n\
# 凭据来自 --token/--api-key、REVENUE_MATRIX_TOKEN/REVENUE_MATRIX_API_KEY 或交互式提示。\n\
# Without [[cases]] the built-in catalog is used. / 未配置 [[cases]] 时使用内置目录。\n\n";

/// Runs the wizard and writes the configuration to `output`.
///
/// In non-interactive mode an existing file is only replaced when `force` is set.
/// 非交互模式下，只有设置了 `force` 才会替换已有文件。
pub fn run_init_wizard(
    output: &Path,
    language: &str,
    non_interactive: bool,
    force: bool,
) -> Result<()> {
    let theme = ColorfulTheme::default();
    let path_str = output.display().to_string();

    if non_interactive {
        if output.exists() && !force {
            println!(
                "{}",
                t!("init.file_exists", locale = language, path = path_str).red()
            );
            println!("{}", t!("init.use_force", locale = language).yellow());
            return Ok(());
        }
        let matrix = MatrixFile {
            language: Some(language.to_string()),
            ..MatrixFile::default()
        };
        return write_config(output, &matrix, language);
    }

    println!("\n{}", t!("init.welcome", locale = language).cyan().bold());
    println!("{}", t!("init.description", locale = language));

    if output.exists() && !force {
        let confirmation = Confirm::with_theme(&theme)
            .with_prompt(t!("init.overwrite_prompt", locale = language, path = path_str))
            .default(false)
            .interact()
            .context(t!("init.confirmation_failed", locale = language).to_string())?;
        if !confirmation {
            println!("{}", t!("init.aborted", locale = language));
            return Ok(());
        }
    }

    let defaults = MatrixFile::default();

    let base_url: String = Input::with_theme(&theme)
        .with_prompt(t!("init.base_url_prompt", locale = language))
        .default(defaults.base_url.clone())
        .interact_text()
        .context(t!("init.confirmation_failed", locale = language).to_string())?;

    let request_delay_secs: u64 = Input::with_theme(&theme)
        .with_prompt(t!("init.delay_prompt", locale = language))
        .default(defaults.request_delay_secs)
        .interact_text()
        .context(t!("init.confirmation_failed", locale = language).to_string())?;

    let include_catalog = Confirm::with_theme(&theme)
        .with_prompt(t!("init.catalog_prompt", locale = language))
        .default(false)
        .interact()
        .context(t!("init.confirmation_failed", locale = language).to_string())?;

    let matrix = MatrixFile {
        language: Some(language.to_string()),
        base_url,
        request_delay_secs,
        cases: if include_catalog { seed_catalog() } else { vec![] },
        ..defaults
    };

    write_config(output, &matrix, language)
}

/// Serializes `matrix` under the comment header and writes it to `path`.
/// 将 `matrix` 序列化并连同注释头写入 `path`。
pub fn write_config(path: &Path, matrix: &MatrixFile, language: &str) -> Result<()> {
    let path_str = path.display().to_string();
    let body = toml::to_string_pretty(matrix)
        .context(t!("init.serialize_failed", locale = language).to_string())?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                t!("init.create_parent_dir_failed", locale = language, path = parent.display())
                    .to_string()
            })?;
        }
    }

    fs::write(path, format!("{FILE_HEADER}{body}")).with_context(|| {
        t!("init.write_failed", locale = language, path = path_str).to_string()
    })?;

    println!(
        "\n{} {}",
        "✔".green(),
        t!("init.success", locale = language, path = path_str).bold()
    );
    println!("{}", t!("init.usage_hint", locale = language));

    Ok(())
}
