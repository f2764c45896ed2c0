//! 图标定位器
//! 页面声明的图标优先；无声明时探测同源 `/favicon.ico`

use std::sync::Arc;

use tracing::{debug, warn};
use url::Url;

use super::candidate::FaviconCandidate;
use crate::error::FavResult;
use crate::extractor::IconLinkExtractor;
use crate::http::HttpFetcher;
use crate::utils::UrlResolver;

/// 图标定位器
#[derive(Clone)]
pub struct FaviconLocator {
    fetcher: Arc<dyn HttpFetcher>,
}

impl FaviconLocator {
    pub fn new(fetcher: Arc<dyn HttpFetcher>) -> Self {
        Self { fetcher }
    }

    /// 定位页面的候选图标
    ///
    /// 页面不可达时返回错误；回落路径返回非 200 时返回空列表。
    pub async fn locate(&self, page_url: &str) -> FavResult<Vec<FaviconCandidate>> {
        let base = Url::parse(page_url)?;
        let response = self.fetcher.get(page_url).await?;
        let html = String::from_utf8_lossy(&response.body);

        let candidates = Self::declared_candidates(&base, &html);
        if !candidates.is_empty() {
            debug!("{} declares {} icon(s)", page_url, candidates.len());
            return Ok(candidates);
        }

        self.probe_fallback(&base).await
    }

    /// 从HTML中提取声明的图标（文档顺序，不去重）
    pub fn declared_candidates(base: &Url, html: &str) -> Vec<FaviconCandidate> {
        let extractor = IconLinkExtractor::new().extract(html);

        extractor
            .get_icon_hrefs()
            .into_iter()
            .filter_map(|href| match UrlResolver::resolve_href(base, &href) {
                Ok(resolved) => Some(FaviconCandidate::declared(UrlResolver::canonicalize(&resolved))),
                Err(e) => {
                    warn!("Skipping unresolvable icon href {:?} on {}: {}", href, base, e);
                    None
                }
            })
            .collect()
    }

    /// 探测 `<origin>/favicon.ico`，仅状态码恰为 200 时采用
    async fn probe_fallback(&self, base: &Url) -> FavResult<Vec<FaviconCandidate>> {
        let fallback_url = UrlResolver::fallback_icon_url(base)?;
        let response = self.fetcher.get(&fallback_url).await?;

        if response.status == 200 {
            debug!("No declared icon on {}, using {}", base, fallback_url);
            Ok(vec![FaviconCandidate::fallback(fallback_url)])
        } else {
            debug!("Fallback {} returned {}, no icon found", fallback_url, response.status);
            Ok(Vec::new())
        }
    }
}
