//! 输入目标规范化
//! 裸主机名先用 HTTPS HEAD 探测，失败再回落 HTTP

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::http::HttpFetcher;

/// 已带 http/https scheme 的输入
static SCHEME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^https?://").unwrap()
});

/// 输入目标规范化工具
pub struct TargetNormalizer;

impl TargetNormalizer {
    /// 输入是否已是 http(s) URL
    pub fn has_scheme(target: &str) -> bool {
        SCHEME_REGEX.is_match(target)
    }

    /// 将输入行规范化为可请求的URL
    pub async fn normalize(fetcher: &dyn HttpFetcher, target: &str) -> String {
        let target = target.trim();
        if Self::has_scheme(target) {
            return target.to_string();
        }

        let https_url = format!("https://{}", target);
        match fetcher.head(&https_url).await {
            Ok(status) if (200..300).contains(&status) => {
                debug!("HTTPS probe succeeded for {}", target);
                https_url
            }
            Ok(status) => {
                debug!("HTTPS probe for {} returned {}, falling back to HTTP", target, status);
                format!("http://{}", target)
            }
            Err(e) => {
                debug!("HTTPS probe for {} failed: {}, falling back to HTTP", target, e);
                format!("http://{}", target)
            }
        }
    }
}
