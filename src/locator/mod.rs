//! 定位模块：发现页面的候选图标URL
pub mod candidate;
pub mod favicon_locator;

pub use self::candidate::{FaviconCandidate, IconOrigin};
pub use self::favicon_locator::FaviconLocator;
