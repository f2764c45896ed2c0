//! rsfavinfo 命令行入口
//! 从标准输入逐行读取URL或主机名，输出图标哈希、技术指纹与搜索引擎查询语句

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::BufReader;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use rsfavinfo::{
    ConfigManager, FaviconScanner, FingerprintLoader, GlobalConfig, OutputMode, ReqwestFetcher,
    Runner, banner,
};

/// 命令行参数
#[derive(Debug, Parser)]
#[command(name = "rsfavinfo", about = "Favicon hash fingerprinting: discover favicons, hash them and identify the web technology")]
struct Cli {
    /// 并发处理的URL数量
    #[arg(short = 'c', long, default_value_t = 10)]
    concurrency: usize,

    /// HTTP 请求超时（秒）
    #[arg(short = 't', long, default_value_t = 10)]
    timeout: u64,

    /// 请求使用的 User-Agent
    #[arg(short = 'H', long = "user-agent", default_value = rsfavinfo::config::DEFAULT_USER_AGENT)]
    user_agent: String,

    /// 指纹库路径（默认依次查找用户配置目录与当前目录）
    #[arg(short = 'f', long)]
    fingerprint: Option<PathBuf>,

    /// 远程指纹库地址
    #[arg(long = "fingerprint-url", default_value = rsfavinfo::config::DEFAULT_FINGERPRINT_URL)]
    fingerprint_url: String,

    /// 本地无指纹库时不从远程下载
    #[arg(long = "no-download")]
    no_download: bool,

    /// 校验 TLS 证书（默认跳过校验）
    #[arg(long = "verify-tls")]
    verify_tls: bool,

    /// 每个图标输出一行JSON
    #[arg(long, conflicts_with = "compact")]
    json: bool,

    /// 每个URL输出一行：url [hash1,hash2]
    #[arg(long)]
    compact: bool,

    /// 输出图标来源（scraped / added）
    #[arg(long)]
    source: bool,

    /// 不打印横幅
    #[arg(short = 's', long)]
    silent: bool,

    /// 输出调试日志
    #[arg(short = 'v', long)]
    verbose: bool,

    /// 打印版本并退出
    #[arg(long)]
    version: bool,
}

impl Cli {
    fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.compact {
            OutputMode::Compact
        } else {
            OutputMode::Human
        }
    }

    fn into_config(self) -> GlobalConfig {
        let mode = self.output_mode();
        ConfigManager::custom()
            .concurrency(self.concurrency)
            .http_timeout(self.timeout)
            .user_agent(self.user_agent)
            .fingerprint_path(self.fingerprint)
            .fingerprint_url(self.fingerprint_url)
            .allow_download(!self.no_download)
            .accept_invalid_certs(!self.verify_tls)
            .output_mode(mode)
            .show_source(self.source)
            .verbose(self.verbose)
            .build()
    }
}

/// 日志输出到 stderr；RUST_LOG 优先，其次按 -v 选择级别
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let (show_version, silent) = (cli.version, cli.silent);
    let config = cli.into_config();
    init_tracing(config.verbose);

    if show_version {
        banner::print_banner();
        banner::print_version();
        return Ok(());
    }
    if !silent {
        banner::print_banner();
    }
    debug!("Running with {:?}", config);

    let fetcher = Arc::new(ReqwestFetcher::new(&config).context("failed to build HTTP client")?);
    let table = FingerprintLoader::load(&config, &*fetcher)
        .await
        .context("failed to load fingerprint table")?;

    let scanner = Arc::new(FaviconScanner::new(fetcher, Arc::new(table)));
    Runner::new(scanner, &config)
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
        .context("failed to process input")?;

    Ok(())
}
