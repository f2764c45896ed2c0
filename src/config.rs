//! 全局配置管理,存储所有可配置项

use std::path::PathBuf;

use tokio::sync::Semaphore;

/// 默认 User-Agent（桌面版 Chrome）
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/130.0.0.0 Safari/537.36";

/// 默认远程指纹库地址
pub const DEFAULT_FINGERPRINT_URL: &str =
    "https://raw.githubusercontent.com/rix4uni/favinfo/refs/heads/main/fingerprint.json";

/// 并发度上限（Tokio 信号量可容纳的最大许可数）
pub const MAX_CONCURRENCY: usize = Semaphore::MAX_PERMITS;

/// 输出模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// 人类可读：每个图标一个块，附带各搜索引擎查询语句
    #[default]
    Human,
    /// 精简：每个输入URL一行，`url [hash1,hash2]`
    Compact,
    /// 结构化：每个图标一行JSON
    Json,
}

/// 全局配置
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // 指纹库路径（显式指定时优先且必须可用）
    pub fingerprint_path: Option<PathBuf>,
    // 远程指纹库URL
    pub fingerprint_url: String,
    // 本地无指纹库时是否允许远程下载
    pub allow_download: bool,
    // 超时配置（单位：秒）
    pub http_timeout: u64,
    // 请求头 User-Agent
    pub user_agent: String,
    /// 是否跳过 TLS 证书校验。
    ///
    /// 默认开启：侦察场景下目标常见自签名或过期证书，优先保证可达。
    pub accept_invalid_certs: bool,
    // 并发处理的输入URL数量
    pub concurrency: usize,
    // 输出模式
    pub output_mode: OutputMode,
    // 是否输出图标来源（页面声明 / 根路径补充）
    pub show_source: bool,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            fingerprint_path: None,
            fingerprint_url: DEFAULT_FINGERPRINT_URL.to_string(),
            allow_download: true,
            http_timeout: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_invalid_certs: true,
            concurrency: 10,
            output_mode: OutputMode::Human,
            show_source: false,
            verbose: false,
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    pub fn fingerprint_path(mut self, path: Option<PathBuf>) -> Self {
        self.config.fingerprint_path = path;
        self
    }

    pub fn fingerprint_url(mut self, url: String) -> Self {
        self.config.fingerprint_url = url;
        self
    }

    pub fn allow_download(mut self, allow: bool) -> Self {
        self.config.allow_download = allow;
        self
    }

    pub fn http_timeout(mut self, timeout: u64) -> Self {
        self.config.http_timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: String) -> Self {
        self.config.user_agent = user_agent;
        self
    }

    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.config.accept_invalid_certs = accept;
        self
    }

    /// 并发度限制在 [1, MAX_CONCURRENCY]
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.config.concurrency = concurrency.clamp(1, MAX_CONCURRENCY);
        self
    }

    pub fn output_mode(mut self, mode: OutputMode) -> Self {
        self.config.output_mode = mode;
        self
    }

    pub fn show_source(mut self, show: bool) -> Self {
        self.config.show_source = show;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}
