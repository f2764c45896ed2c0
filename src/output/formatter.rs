//! 扫描结果渲染
//! 每个输出块渲染为完整字符串，由单一写入任务一次写出，保证记录不交错

use std::fmt::Write as _;

use tracing::warn;

use crate::config::OutputMode;
use crate::scanner::{FaviconRecord, ScanReport};

/// 输出格式化器
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputFormatter {
    mode: OutputMode,
    show_source: bool,
}

impl OutputFormatter {
    pub fn new(mode: OutputMode, show_source: bool) -> Self {
        Self { mode, show_source }
    }

    /// 渲染单个输入URL的报告；无内容可输出时返回 None
    ///
    /// 精简模式总是输出一行（无图标时为 `url []`）。
    pub fn render(&self, report: &ScanReport) -> Option<String> {
        let rendered = match self.mode {
            OutputMode::Compact => Self::render_compact(report),
            OutputMode::Human => report
                .favicons
                .iter()
                .map(|record| self.render_human(record))
                .collect(),
            OutputMode::Json => report
                .favicons
                .iter()
                .filter_map(Self::render_json)
                .collect(),
        };

        (!rendered.is_empty()).then_some(rendered)
    }

    /// `<url> [h1,h2]`
    pub fn render_compact(report: &ScanReport) -> String {
        let hashes: Vec<String> = report.hashes().iter().map(i32::to_string).collect();
        format!("{} [{}]\n", report.url, hashes.join(","))
    }

    /// 人类可读块，以空行结尾
    pub fn render_human(&self, record: &FaviconRecord) -> String {
        let mut block = String::new();
        let _ = writeln!(block, "[URL]: {}", record.favicon_url);
        if self.show_source {
            let _ = writeln!(block, "[Source]: {}", record.source);
        }
        let _ = writeln!(block, "[Technology]: {}", record.technology);
        let _ = writeln!(
            block,
            "[Hash]: {} [MD5]: {} [SHA256]: {}",
            record.hash, record.md5, record.sha256
        );
        for (engine, query) in record.queries.labeled() {
            let _ = writeln!(block, "[{}]: {}", engine, query);
        }
        block.push('\n');
        block
    }

    /// 单行JSON
    pub fn render_json(record: &FaviconRecord) -> Option<String> {
        match serde_json::to_string(record) {
            Ok(line) => Some(line + "\n"),
            Err(e) => {
                warn!("Failed to serialize record for {}: {}", record.favicon_url, e);
                None
            }
        }
    }
}
