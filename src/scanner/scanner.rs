//! 扫描器核心：定位 → 拉取 → 哈希 → 指纹匹配
use std::sync::Arc;

use tracing::{debug, warn};

use super::model::{CandidateFailure, FaviconRecord, ScanReport};
use crate::error::FavResult;
use crate::fingerprint::FingerprintTable;
use crate::hasher::FaviconHasher;
use crate::http::HttpFetcher;
use crate::locator::{FaviconCandidate, FaviconLocator};
use crate::utils::TargetNormalizer;

/// 图标扫描器
///
/// 各输入URL之间无共享可变状态，指纹库只读共享，可在多个任务间并发使用。
#[derive(Clone)]
pub struct FaviconScanner {
    fetcher: Arc<dyn HttpFetcher>,
    locator: FaviconLocator,
    table: Arc<FingerprintTable>,
}

impl FaviconScanner {
    pub fn new(fetcher: Arc<dyn HttpFetcher>, table: Arc<FingerprintTable>) -> Self {
        Self {
            locator: FaviconLocator::new(fetcher.clone()),
            fetcher,
            table,
        }
    }

    /// 将输入行规范化为URL（裸主机名探测 HTTPS/HTTP）
    pub async fn resolve_target(&self, target: &str) -> String {
        TargetNormalizer::normalize(self.fetcher.as_ref(), target).await
    }

    /// 扫描单个URL
    ///
    /// 页面不可达返回错误；单个候选图标拉取失败只记录到报告中，不影响其他候选。
    pub async fn scan_url(&self, url: &str) -> FavResult<ScanReport> {
        let candidates = self.locator.locate(url).await?;
        let mut report = ScanReport::empty(url);

        for candidate in candidates {
            match self.fetcher.get(&candidate.url).await {
                Ok(response) => {
                    let record = self.identify(url, candidate, &response.body);
                    debug!("{} -> {} [{}]", record.favicon_url, record.hash, record.technology);
                    report.favicons.push(record);
                }
                Err(e) => {
                    warn!("Failed to fetch favicon {}: {}", candidate.url, e);
                    report.failures.push(CandidateFailure {
                        favicon_url: candidate.url,
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(report)
    }

    /// 规范化输入后扫描
    pub async fn scan(&self, target: &str) -> FavResult<ScanReport> {
        let url = self.resolve_target(target).await;
        self.scan_url(&url).await
    }

    /// 计算哈希并匹配指纹
    pub fn identify(&self, url: &str, candidate: FaviconCandidate, content: &[u8]) -> FaviconRecord {
        let hash = FaviconHasher::hash(content);
        let technology = self.table.lookup(hash.murmur3);
        FaviconRecord::new(url, candidate, hash, technology)
    }
}
