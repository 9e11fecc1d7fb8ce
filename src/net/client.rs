//! # 成绩站点 HTTP 客户端
//!
//! 基于 `reqwest` 阻塞客户端实现 `ResultSource`。
//!
//! ## 依赖关系
//! - 被 `commands/fetch.rs` 创建
//! - 实现 `net::ResultSource`

use super::ResultSource;
use crate::error::{Result, ScrapeError};

use reqwest::blocking::Client;
use std::time::Duration;

/// 浏览器 User-Agent（站点会拒绝非浏览器请求）
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// 成绩站点客户端
pub struct BoardClient {
    client: Client,
    url: String,
}

impl BoardClient {
    /// 创建客户端；`timeout` 为 `None` 时使用库默认超时
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let url = url.into();

        let mut builder = Client::builder().user_agent(BROWSER_USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| ScrapeError::NetworkError {
            url: url.clone(),
            source: e,
        })?;

        Ok(BoardClient { client, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn network_error(&self, source: reqwest::Error) -> ScrapeError {
        ScrapeError::NetworkError {
            url: self.url.clone(),
            source,
        }
    }
}

impl ResultSource for BoardClient {
    fn load_form(&self) -> Result<String> {
        self.client
            .get(&self.url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.text())
            .map_err(|e| self.network_error(e))
    }

    fn submit_form(&self, fields: &[(&'static str, String)]) -> Result<String> {
        self.client
            .post(&self.url)
            .form(fields)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.text())
            .map_err(|e| self.network_error(e))
    }
}
