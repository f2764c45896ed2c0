//! 批量运行器
//! 逐行读取输入，按并发度上限为每个URL启动一个任务（Tokio + Semaphore），
//! 渲染后的输出块经通道交给唯一的写入任务，记录之间不会交错。

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::config::{GlobalConfig, MAX_CONCURRENCY};
use crate::error::{FavResult, RsFavError};
use crate::output::OutputFormatter;
use crate::scanner::{FaviconScanner, ScanReport};

/// 批量运行器
pub struct Runner {
    scanner: Arc<FaviconScanner>,
    formatter: OutputFormatter,
    concurrency: usize,
}

impl Runner {
    pub fn new(scanner: Arc<FaviconScanner>, config: &GlobalConfig) -> Self {
        Self {
            scanner,
            formatter: OutputFormatter::new(config.output_mode, config.show_source),
            concurrency: config.concurrency.clamp(1, MAX_CONCURRENCY),
        }
    }

    /// 处理全部输入直到 EOF，返回写出端
    ///
    /// 非 UTF-8 的行被跳过；读取失败视为输入结束，已启动的任务照常完成。
    pub async fn run<R, W>(&self, mut input: R, output: W) -> FavResult<W>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let buffer = self.concurrency.saturating_mul(2).min(MAX_CONCURRENCY);
        let (tx, rx) = mpsc::channel::<String>(buffer);
        let writer = tokio::spawn(Self::write_blocks(rx, output));

        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut tasks = JoinSet::new();
        let mut buf = Vec::new();
        let mut line_count = 0usize;

        loop {
            buf.clear();
            match input.read_until(b'\n', &mut buf).await {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    warn!("Failed to read input, stopping: {}", e);
                    break;
                }
            }
            let Ok(line) = std::str::from_utf8(&buf) else {
                warn!("Skipping input line that is not valid UTF-8");
                continue;
            };
            let target = line.trim().to_string();
            if target.is_empty() {
                continue;
            }
            line_count += 1;

            let permit = semaphore
                .clone()
                .acquire_owned()
                .await
                .map_err(|e| RsFavError::AsyncTaskError(e.to_string()))?;
            let scanner = self.scanner.clone();
            let formatter = self.formatter;
            let tx = tx.clone();

            tasks.spawn(async move {
                let _permit = permit; // 任务结束自动释放许可
                let report = Self::process(&scanner, &target).await;
                if let Some(block) = formatter.render(&report) {
                    if tx.send(block).await.is_err() {
                        warn!("Output writer closed, dropping result for {}", report.url);
                    }
                }
            });
        }
        debug!("Input exhausted after {} target(s), waiting for workers", line_count);

        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                warn!("Worker task failed: {}", e);
            }
        }
        drop(tx);

        writer
            .await
            .map_err(|e| RsFavError::AsyncTaskError(e.to_string()))?
    }

    /// 单个输入：页面不可达时记录诊断并返回空报告
    async fn process(scanner: &FaviconScanner, target: &str) -> ScanReport {
        let url = scanner.resolve_target(target).await;
        match scanner.scan_url(&url).await {
            Ok(report) => report,
            Err(e) => {
                warn!("Error fetching favicons for {}: {}", url, e);
                ScanReport::empty(&url)
            }
        }
    }

    /// 唯一写入任务：按到达顺序整块写出
    async fn write_blocks<W>(mut rx: mpsc::Receiver<String>, mut output: W) -> FavResult<W>
    where
        W: AsyncWrite + Unpin,
    {
        while let Some(block) = rx.recv().await {
            output.write_all(block.as_bytes()).await?;
        }
        output.flush().await?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use crate::config::{ConfigManager, OutputMode};
    use crate::fingerprint::FingerprintTable;
    use crate::http::mock::MockFetcher;

    const FIXTURE_ICO: &[u8] = include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/favicon.ico"
    ));

    /// 20 个站点：偶数站点声明两个图标，奇数站点无图标且根路径 404，另有一个不可达
    fn fixture_scanner() -> (Arc<FaviconScanner>, String) {
        let mut fetcher = MockFetcher::new();
        let mut input = String::new();

        for i in 0..20 {
            let base = format!("https://site{}.example.com/", i);
            if i % 2 == 0 {
                fetcher = fetcher
                    .route(&base, 200, r#"<link rel="icon" href="/a.ico"><link rel="icon" href="/b.png">"#)
                    .route(&format!("{}a.ico", base), 200, FIXTURE_ICO)
                    .route(&format!("{}b.png", base), 200, "hello favicon");
            } else {
                fetcher = fetcher
                    .route(&base, 200, "<html></html>")
                    .route(&format!("{}favicon.ico", base), 404, "");
            }
            input.push_str(&base);
            input.push('\n');
        }
        input.push_str("\n   \nhttps://down.example.com/\n");

        let mut entries = HashMap::new();
        entries.insert("-1366637387".to_string(), "fixture-cms".to_string());
        let scanner = FaviconScanner::new(Arc::new(fetcher), Arc::new(FingerprintTable::new(entries)));
        (Arc::new(scanner), input)
    }

    async fn run_with(mode: OutputMode, concurrency: usize) -> String {
        let (scanner, input) = fixture_scanner();
        let config = ConfigManager::custom()
            .output_mode(mode)
            .concurrency(concurrency)
            .build();

        let output = Runner::new(scanner, &config)
            .run(input.as_bytes(), Vec::new())
            .await
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn test_compact_line_count_matches_input() {
        for concurrency in [1, 4, 32] {
            let output = run_with(OutputMode::Compact, concurrency).await;
            let lines: Vec<&str> = output.lines().collect();

            assert_eq!(lines.len(), 21, "concurrency={}", concurrency);
            assert!(lines.contains(&"https://site0.example.com/ [-1366637387,508473084]"));
            assert!(lines.contains(&"https://site1.example.com/ []"));
            assert!(lines.contains(&"https://down.example.com/ []"));
        }
    }

    #[tokio::test]
    async fn test_json_records_are_not_interleaved() {
        let output = run_with(OutputMode::Json, 8).await;
        let lines: Vec<&str> = output.lines().collect();

        // 10 个站点 × 2 个图标
        assert_eq!(lines.len(), 20);
        for line in lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value["hash"].is_i64());
            assert!(value["queries"]["shodan"].is_string());
        }
    }

    #[tokio::test]
    async fn test_invalid_utf8_line_is_skipped() {
        let fetcher = MockFetcher::new()
            .route("https://a.example.com/", 200, "<html></html>")
            .route("https://a.example.com/favicon.ico", 404, "")
            .route("https://b.example.com/", 200, "<html></html>")
            .route("https://b.example.com/favicon.ico", 404, "");
        let scanner = FaviconScanner::new(Arc::new(fetcher), Arc::new(FingerprintTable::default()));
        let config = ConfigManager::custom().output_mode(OutputMode::Compact).build();

        let input: &[u8] = b"https://a.example.com/\n\xff\xfe\nhttps://b.example.com/\n";
        let output = Runner::new(Arc::new(scanner), &config)
            .run(input, Vec::new())
            .await
            .unwrap();

        let mut lines: Vec<String> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect();
        lines.sort();
        assert_eq!(lines, vec!["https://a.example.com/ []", "https://b.example.com/ []"]);
    }

    #[tokio::test]
    async fn test_human_blocks_are_whole() {
        let output = run_with(OutputMode::Human, 8).await;
        let blocks: Vec<&str> = output.split("\n\n").filter(|b| !b.is_empty()).collect();

        assert_eq!(blocks.len(), 20);
        for block in blocks {
            assert!(block.starts_with("[URL]: https://site"));
            assert_eq!(block.lines().count(), 9);
        }
    }
}
