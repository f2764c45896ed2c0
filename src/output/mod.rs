//! 输出模块：查询语句生成与结果渲染
pub mod queries;
pub mod formatter;

pub use self::queries::SearchQueries;
pub use self::formatter::OutputFormatter;
