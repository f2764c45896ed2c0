//! 全局错误类型定义

use thiserror::Error;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use url::ParseError as UrlParseError;

#[derive(Error, Debug)]
pub enum RsFavError {
    // 指纹库相关错误
    #[error("指纹库加载失败：{0}")]
    FingerprintLoadError(String),
    #[error("指纹库解析失败：{0}")]
    FingerprintParseError(String),
    #[error("指纹库缓存失败：{0}")]
    FingerprintCacheError(String),

    // 网络相关错误
    #[error("网络请求失败：{0}")]
    HttpError(#[from] reqwest::Error),
    #[error("网络相关错误：{0}")]
    NetworkError(String),

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
    #[error("URL解析失败：{0}")]
    UrlError(#[from] UrlParseError),
    #[error("无效输入：{0}")]
    InvalidInput(String),

    #[error("异步任务执行失败：{0}")]
    AsyncTaskError(String),
}

// 全局Result类型
pub type FavResult<T> = Result<T, RsFavError>;
