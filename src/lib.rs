//! rsfavinfo - Rust 网站图标指纹识别工具
//! 发现页面图标，计算与 Shodan/FOFA 等兼容的 MurmurHash3 及 MD5/SHA-256 哈希，并匹配技术指纹

// 导出全局错误类型
pub use self::error::{RsFavError, FavResult};

// 导出配置模块
pub use self::config::{GlobalConfig, ConfigManager, CustomConfigBuilder, OutputMode};

// 导出指纹库模块核心接口
pub use self::fingerprint::{
    FingerprintTable, FingerprintLoader, FingerprintSearchPaths, FingerprintCacheManager,
    UNKNOWN_TECHNOLOGY,
};

// 导出提取、定位、哈希模块核心接口
pub use self::extractor::IconLinkExtractor;
pub use self::locator::{FaviconCandidate, FaviconLocator, IconOrigin};
pub use self::hasher::{FaviconHash, FaviconHasher, rewrap_base64};

// 导出网络模块核心接口
pub use self::http::{FetchedResponse, HttpFetcher, ReqwestFetcher};

// 导出工具模块核心接口
pub use self::utils::{TargetNormalizer, UrlResolver};

// 导出扫描、输出、运行模块核心接口
pub use self::scanner::{FaviconScanner, FaviconRecord, ScanReport, CandidateFailure};
pub use self::output::{OutputFormatter, SearchQueries};
pub use self::runner::Runner;

// 声明所有子模块
pub mod banner;
pub mod config;
pub mod error;
pub mod extractor;
pub mod fingerprint;
pub mod hasher;
pub mod http;
pub mod locator;
pub mod output;
pub mod runner;
pub mod scanner;
pub mod utils;
