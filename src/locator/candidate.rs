//! 候选图标数据模型

use std::fmt;
use serde::{Deserialize, Serialize};

/// 候选图标来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconOrigin {
    /// 页面 `<link rel="icon">` 声明
    #[serde(rename = "scraped")]
    Declared,
    /// 无声明时补充的 `/favicon.ico`
    #[serde(rename = "added")]
    Fallback,
}

impl fmt::Display for IconOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconOrigin::Declared => write!(f, "scraped"),
            IconOrigin::Fallback => write!(f, "added"),
        }
    }
}

/// 候选图标URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaviconCandidate {
    pub url: String,
    pub origin: IconOrigin,
}

impl FaviconCandidate {
    pub fn declared(url: String) -> Self {
        Self { url, origin: IconOrigin::Declared }
    }

    pub fn fallback(url: String) -> Self {
        Self { url, origin: IconOrigin::Fallback }
    }
}
