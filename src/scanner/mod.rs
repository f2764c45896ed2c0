//! 扫描模块：单个输入URL的完整识别流程
pub mod model;
pub mod scanner;

// 导出核心接口
pub use self::model::{CandidateFailure, FaviconRecord, ScanReport};
pub use self::scanner::FaviconScanner;
