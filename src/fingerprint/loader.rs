//! 指纹库加载管理器
//! 查找顺序：显式路径 > 用户配置目录 > 当前工作目录 > 远程下载（并缓存到用户配置目录）

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::cache::FingerprintCacheManager;
use super::model::FingerprintTable;
use crate::config::GlobalConfig;
use crate::error::{FavResult, RsFavError};
use crate::http::HttpFetcher;

/// 本地指纹库查找路径
#[derive(Debug, Clone)]
pub struct FingerprintSearchPaths {
    /// 用户配置目录（同时作为下载缓存位置）
    pub user_config: Option<PathBuf>,
    /// 当前工作目录
    pub working_dir: PathBuf,
}

impl Default for FingerprintSearchPaths {
    fn default() -> Self {
        Self {
            user_config: FingerprintCacheManager::user_config_path(),
            working_dir: FingerprintCacheManager::working_dir_path(),
        }
    }
}

impl FingerprintSearchPaths {
    /// 按优先级排列的本地候选路径
    fn local_candidates(&self) -> impl Iterator<Item = &PathBuf> {
        self.user_config.iter().chain(std::iter::once(&self.working_dir))
    }

    /// 下载后的缓存路径
    fn cache_target(&self) -> &Path {
        self.user_config.as_deref().unwrap_or(self.working_dir.as_path())
    }
}

/// 指纹库加载管理器
pub struct FingerprintLoader;

impl FingerprintLoader {
    /// 使用默认查找路径加载指纹库
    pub async fn load(config: &GlobalConfig, fetcher: &dyn HttpFetcher) -> FavResult<FingerprintTable> {
        Self::load_with_paths(config, fetcher, &FingerprintSearchPaths::default()).await
    }

    /// 按指定查找路径加载指纹库
    pub async fn load_with_paths(
        config: &GlobalConfig,
        fetcher: &dyn HttpFetcher,
        paths: &FingerprintSearchPaths,
    ) -> FavResult<FingerprintTable> {
        // 1. 显式指定的路径必须可用
        if let Some(path) = &config.fingerprint_path {
            return Self::load_file(path).await;
        }

        // 2. 本地文件
        for path in paths.local_candidates() {
            if tokio::fs::try_exists(path).await.unwrap_or(false) {
                return Self::load_file(path).await;
            }
        }

        // 3. 远程下载
        if !config.allow_download {
            return Err(RsFavError::FingerprintLoadError(
                "本地不存在指纹库，且已禁用远程下载".to_string(),
            ));
        }
        warn!("No local fingerprint table found, downloading from {}", config.fingerprint_url);
        Self::download(config, fetcher, paths.cache_target()).await
    }

    /// 读取并解析本地指纹库
    pub async fn load_file(path: &Path) -> FavResult<FingerprintTable> {
        let data = tokio::fs::read(path).await.map_err(|e| {
            RsFavError::FingerprintLoadError(format!("读取 {} 失败：{}", path.display(), e))
        })?;

        let table = FingerprintTable::from_json_slice(&data)?;
        debug!("Loaded {} fingerprints from {}", table.len(), path.display());
        Ok(table)
    }

    /// 下载远程指纹库并缓存到本地（缓存失败仅告警）
    async fn download(
        config: &GlobalConfig,
        fetcher: &dyn HttpFetcher,
        cache_path: &Path,
    ) -> FavResult<FingerprintTable> {
        let response = fetcher.get(&config.fingerprint_url).await.map_err(|e| {
            RsFavError::FingerprintLoadError(format!("下载 {} 失败：{}", config.fingerprint_url, e))
        })?;

        if !response.is_success() {
            return Err(RsFavError::FingerprintLoadError(format!(
                "URL {} 返回状态码 {}",
                config.fingerprint_url, response.status
            )));
        }

        let table = FingerprintTable::from_json_slice(&response.body)?;
        info!("Downloaded {} fingerprints", table.len());

        match FingerprintCacheManager::save_to_cache(cache_path, &response.body).await {
            Ok(()) => debug!("Fingerprint table cached at {}", cache_path.display()),
            Err(e) => warn!("Failed to cache fingerprint table: {}", e),
        }

        Ok(table)
    }
}
