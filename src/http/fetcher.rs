//! HTTP 拉取抽象
//! 定位器、扫描器、指纹库下载的所有网络调用都经过 `HttpFetcher`，便于替换与测试

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::GlobalConfig;
use crate::error::FavResult;

/// 一次 GET 请求的结果（状态码 + 完整响应体）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl FetchedResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP 拉取接口
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    /// GET 请求，读取完整响应体（不校验状态码）
    async fn get(&self, url: &str) -> FavResult<FetchedResponse>;

    /// HEAD 请求，仅返回状态码
    async fn head(&self, url: &str) -> FavResult<u16>;
}

/// 基于 reqwest 的默认实现
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    /// 按全局配置构建客户端：超时、User-Agent、证书校验策略
    pub fn new(config: &GlobalConfig) -> FavResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout))
            .user_agent(config.user_agent.as_str())
            // 侦察用途：默认接受无效/自签名证书，优先保证目标可达
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn get(&self, url: &str) -> FavResult<FetchedResponse> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        debug!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(FetchedResponse { status, body })
    }

    async fn head(&self, url: &str) -> FavResult<u16> {
        let response = self.client.head(url).send().await?;
        let status = response.status().as_u16();

        debug!("HEAD {} -> {}", url, status);
        Ok(status)
    }
}
