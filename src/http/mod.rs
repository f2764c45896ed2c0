//! HTTP模块：客户端构建与拉取抽象
pub mod fetcher;
#[cfg(test)]
pub mod mock;

pub use self::fetcher::{FetchedResponse, HttpFetcher, ReqwestFetcher};
