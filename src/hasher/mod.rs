//! 哈希模块：图标内容哈希计算
pub mod base64_wrap;
pub mod favicon_hasher;

pub use self::base64_wrap::{BASE64_LINE_WIDTH, encode_wrapped, rewrap_base64};
pub use self::favicon_hasher::{FaviconHash, FaviconHasher};
