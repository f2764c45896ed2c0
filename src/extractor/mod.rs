//! 提取模块：从页面HTML中提取图标声明
pub mod html_extractor;

pub use self::html_extractor::IconLinkExtractor;
