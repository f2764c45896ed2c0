//! 扫描结果数据模型

use serde::{Deserialize, Serialize};

use crate::hasher::FaviconHash;
use crate::locator::{FaviconCandidate, IconOrigin};
use crate::output::SearchQueries;

/// 单个图标的识别结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaviconRecord {
    /// 输入URL（规范化后）
    pub url: String,
    pub favicon_url: String,
    pub source: IconOrigin,
    pub hash: i32,
    pub md5: String,
    pub sha256: String,
    pub technology: String,
    pub queries: SearchQueries,
}

impl FaviconRecord {
    pub fn new(url: &str, candidate: FaviconCandidate, hash: FaviconHash, technology: &str) -> Self {
        let queries = SearchQueries::from_hash(&hash);
        Self {
            url: url.to_string(),
            favicon_url: candidate.url,
            source: candidate.origin,
            hash: hash.murmur3,
            md5: hash.md5,
            sha256: hash.sha256,
            technology: technology.to_string(),
            queries,
        }
    }
}

/// 候选图标拉取失败记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFailure {
    pub favicon_url: String,
    pub reason: String,
}

/// 单个输入URL的扫描报告
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub url: String,
    pub favicons: Vec<FaviconRecord>,
    pub failures: Vec<CandidateFailure>,
}

impl ScanReport {
    /// 页面不可达时的空报告
    pub fn empty(url: &str) -> Self {
        Self {
            url: url.to_string(),
            ..Default::default()
        }
    }

    /// 所有图标的主哈希（按候选顺序）
    pub fn hashes(&self) -> Vec<i32> {
        self.favicons.iter().map(|f| f.hash).collect()
    }
}
