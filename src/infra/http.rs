//! # HTTP Client Module / HTTP 客户端模块
//!
//! A thin wrapper around `reqwest` that sends GET requests carrying the
//! bearer token and API key of the run.
//!
//! 对 `reqwest` 的轻量封装，发送携带本次运行的 bearer token 和 API key 的 GET 请求。

use anyhow::{Context, Result};
use std::time::Duration;

use crate::core::config::Credentials;

/// Header carrying the API gateway key.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Status code and body text of a received response.
/// 已接收响应的状态码和响应体文本。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    credentials: Credentials,
}

impl HttpClient {
    pub fn new(credentials: Credentials, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("revenue-matrix/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            credentials,
        })
    }

    /// Sends one GET request to `url` exactly as given.
    ///
    /// Any response, whatever its status, is `Ok`. `Err` means no response was
    /// received (connection refused, DNS failure, timeout, unreadable body).
    ///
    /// 按原样向 `url` 发送一次 GET 请求。任何响应（无论状态码）都返回 `Ok`；
    /// `Err` 表示未收到响应（连接被拒、DNS 失败、超时、响应体不可读）。
    pub async fn get(&self, url: &str) -> Result<HttpReply> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.credentials.token)
            .header(API_KEY_HEADER, self.credentials.api_key.as_str())
            .send()
            .await
            .with_context(|| format!("GET {url} failed"))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {url}"))?;

        Ok(HttpReply { status, body })
    }
}
