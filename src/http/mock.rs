//! 测试用的内存 HTTP 拉取器

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::fetcher::{FetchedResponse, HttpFetcher};
use crate::error::{FavResult, RsFavError};

/// 按 URL 返回预设响应；未登记的 URL 视为连接失败
#[derive(Debug, Default)]
pub struct MockFetcher {
    routes: HashMap<String, FetchedResponse>,
    requests: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, url: &str, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.routes.insert(
            url.to_string(),
            FetchedResponse {
                status,
                body: body.into(),
            },
        );
        self
    }

    /// 已发出的请求（`GET url` / `HEAD url`）
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    fn record(&self, method: &str, url: &str) {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(format!("{} {}", method, url));
        }
    }

    fn lookup(&self, url: &str) -> FavResult<&FetchedResponse> {
        self.routes
            .get(url)
            .ok_or_else(|| RsFavError::NetworkError(format!("connection refused: {}", url)))
    }
}

#[async_trait]
impl HttpFetcher for MockFetcher {
    async fn get(&self, url: &str) -> FavResult<FetchedResponse> {
        self.record("GET", url);
        self.lookup(url).cloned()
    }

    async fn head(&self, url: &str) -> FavResult<u16> {
        self.record("HEAD", url);
        self.lookup(url).map(|r| r.status)
    }
}
