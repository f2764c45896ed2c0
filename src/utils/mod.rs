//! 工具模块：URL解析、输入规范化
pub mod url_resolver;
pub mod target_normalizer;

pub use self::url_resolver::UrlResolver;
pub use self::target_normalizer::TargetNormalizer;
