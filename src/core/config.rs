//! # Configuration Module / 配置模块
//!
//! Loads the `RevenueMatrix.toml` file, applies command-line overrides and
//! resolves everything into the [`RunConfig`] a run needs.
//!
//! 加载 `RevenueMatrix.toml` 文件，应用命令行覆盖项，
//! 并将所有内容解析为一次运行所需的 [`RunConfig`]。

use anyhow::{Context, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::catalog::seed_catalog;
use crate::core::models::TestCase;
use crate::infra;

/// File name looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "RevenueMatrix.toml";

pub const TOKEN_ENV: &str = "REVENUE_MATRIX_TOKEN";
pub const API_KEY_ENV: &str = "REVENUE_MATRIX_API_KEY";

/// Represents the configuration file, loaded from TOML.
/// Every field has a default, so an empty file is valid.
///
/// 代表从 TOML 加载的配置文件。每个字段都有默认值，因此空文件也是合法的。
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MatrixFile {
    /// The language for the runner's output messages (e.g., "en", "zh-CN").
    /// Falls back to the system locale when not specified.
    ///
    /// 运行器输出消息的语言（例如 "en", "zh-CN"）。
    /// 如果未指定，则使用系统语言。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Scheme, host and port of the service, without the endpoint path.
    /// 服务的协议、主机和端口，不含接口路径。
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Pause between two consecutive matrix requests.
    /// 两个连续矩阵请求之间的暂停时间。
    #[serde(default = "default_request_delay")]
    pub request_delay_secs: u64,

    /// Pause after each request of the consistency checks.
    /// 一致性检查中每个请求之后的暂停时间。
    #[serde(default = "default_verify_delay")]
    pub verify_delay_secs: u64,

    /// Optional per-request timeout. No timeout when absent.
    /// 可选的单请求超时时间。缺省时不设超时。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// Directory receiving the result and summary files. `~` and `$VARS` are expanded.
    /// 存放结果和摘要文件的目录。支持 `~` 和 `$VARS` 展开。
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Custom catalog. The seed catalog is used when empty.
    /// 自定义目录。为空时使用种子目录。
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cases: Vec<TestCase>,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_request_delay() -> u64 {
    3
}

fn default_verify_delay() -> u64 {
    1
}

fn default_output_dir() -> String {
    ".".to_string()
}

impl Default for MatrixFile {
    fn default() -> Self {
        Self {
            language: None,
            base_url: default_base_url(),
            request_delay_secs: default_request_delay(),
            verify_delay_secs: default_verify_delay(),
            request_timeout_secs: None,
            output_dir: default_output_dir(),
            cases: vec![],
        }
    }
}

impl MatrixFile {
    /// The configured cases, or the seed catalog when none are configured.
    /// 已配置的用例；若未配置则为种子目录。
    pub fn effective_cases(&self) -> Vec<TestCase> {
        if self.cases.is_empty() {
            seed_catalog()
        } else {
            self.cases.clone()
        }
    }

    /// Applies command-line overrides on top of the file values.
    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(base_url) = &overrides.base_url {
            self.base_url = base_url.clone();
        }
        if let Some(delay) = overrides.delay_secs {
            self.request_delay_secs = delay;
        }
        if let Some(delay) = overrides.verify_delay_secs {
            self.verify_delay_secs = delay;
        }
        if let Some(output_dir) = &overrides.output_dir {
            self.output_dir = output_dir.to_string_lossy().into_owned();
        }
    }
}

/// Values given on the command line that take precedence over the file.
/// 命令行给出的、优先于配置文件的值。
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub delay_secs: Option<u64>,
    pub verify_delay_secs: Option<u64>,
    pub output_dir: Option<PathBuf>,
}

/// Loads and parses a configuration file.
pub fn load_matrix_file(path: &Path) -> Result<MatrixFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolves the configuration to use.
///
/// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is read
/// from the working directory if present, otherwise defaults are used.
///
/// 解析要使用的配置。显式路径必须存在；未给出时，若工作目录中存在
/// [`DEFAULT_CONFIG_FILE`] 则读取之，否则使用默认值。
pub fn discover(explicit: Option<&Path>) -> Result<(MatrixFile, Option<PathBuf>)> {
    match explicit {
        Some(path) => Ok((load_matrix_file(path)?, Some(path.to_path_buf()))),
        None => {
            let candidate = Path::new(DEFAULT_CONFIG_FILE);
            if candidate.is_file() {
                Ok((load_matrix_file(candidate)?, Some(candidate.to_path_buf())))
            } else {
                Ok((MatrixFile::default(), None))
            }
        }
    }
}

/// Operator-supplied credentials sent with every request.
/// 操作者提供的、随每个请求发送的凭据。
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Sent as `Authorization: Bearer <token>`.
    pub token: String,
    /// Sent as `X-Api-Key: <key>`.
    pub api_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Everything a run needs, fully resolved.
/// 一次运行所需的全部已解析配置。
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Base URL without trailing slash.
    pub base_url: String,
    pub credentials: Credentials,
    pub request_delay: Duration,
    pub verify_delay: Duration,
    pub request_timeout: Option<Duration>,
    pub output_dir: PathBuf,
}

impl RunConfig {
    pub fn new(file: &MatrixFile, credentials: Credentials) -> Result<Self> {
        let base_url = file.base_url.trim().trim_end_matches('/').to_string();
        Url::parse(&base_url).with_context(|| format!("Invalid base URL: {base_url}"))?;

        Ok(Self {
            base_url,
            credentials,
            request_delay: Duration::from_secs(file.request_delay_secs),
            verify_delay: Duration::from_secs(file.verify_delay_secs),
            request_timeout: file.request_timeout_secs.map(Duration::from_secs),
            output_dir: infra::fs::expand_dir(&file.output_dir)?,
        })
    }
}
