//! 指纹库模块：指纹库的数据模型、加载与缓存
pub mod model;
pub mod cache;
pub mod loader;

// 导出核心接口
pub use self::model::{FingerprintTable, UNKNOWN_TECHNOLOGY};
pub use self::loader::{FingerprintLoader, FingerprintSearchPaths};
pub use self::cache::FingerprintCacheManager;
