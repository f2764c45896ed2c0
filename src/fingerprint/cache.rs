//! 指纹库本地缓存
//! 远程下载的原始JSON写入用户配置目录

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{FavResult, RsFavError};

/// 指纹库文件名
pub const FINGERPRINT_FILE_NAME: &str = "fingerprint.json";

/// 指纹库缓存管理器
pub struct FingerprintCacheManager;

impl FingerprintCacheManager {
    /// 用户配置目录下的指纹库路径（如 `~/.config/rsfavinfo/fingerprint.json`）
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "rsfavinfo")
            .map(|dirs| dirs.config_dir().join(FINGERPRINT_FILE_NAME))
    }

    /// 当前工作目录下的指纹库路径
    pub fn working_dir_path() -> PathBuf {
        PathBuf::from(FINGERPRINT_FILE_NAME)
    }

    /// 将指纹库原始内容写入缓存路径（自动创建父目录）
    pub async fn save_to_cache(path: &Path, data: &[u8]) -> FavResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    RsFavError::FingerprintCacheError(format!("创建目录 {} 失败：{}", parent.display(), e))
                })?;
            }
        }

        tokio::fs::write(path, data).await.map_err(|e| {
            RsFavError::FingerprintCacheError(format!("写入 {} 失败：{}", path.display(), e))
        })?;

        debug!("Fingerprint table cached to {} ({} bytes)", path.display(), data.len());
        Ok(())
    }
}
