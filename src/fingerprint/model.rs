//! 指纹库数据模型
//! `{"<十进制主哈希>": "<技术名称>"}`，加载后只读

use std::collections::HashMap;
use serde::{Deserialize, Serialize};

use crate::error::{FavResult, RsFavError};

/// 未命中指纹库时的技术名称
pub const UNKNOWN_TECHNOLOGY: &str = "unknown";

/// 图标指纹库
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FingerprintTable {
    entries: HashMap<String, String>,
}

impl FingerprintTable {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// 从JSON字节解析
    pub fn from_json_slice(bytes: &[u8]) -> FavResult<Self> {
        serde_json::from_slice(bytes)
            .map_err(|e| RsFavError::FingerprintParseError(format!("指纹库JSON格式错误：{}", e)))
    }

    /// 按主哈希的十进制字符串查找技术名称，未命中返回 `unknown`
    pub fn lookup(&self, hash: i32) -> &str {
        self.entries
            .get(&hash.to_string())
            .map(String::as_str)
            .unwrap_or(UNKNOWN_TECHNOLOGY)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_hit_and_miss() {
        let table = FingerprintTable::from_json_slice(
            br#"{"116323821": "spring-boot", "-1366637387": "fixture-tech"}"#,
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup(116323821), "spring-boot");
        assert_eq!(table.lookup(-1366637387), "fixture-tech");
        assert_eq!(table.lookup(42), UNKNOWN_TECHNOLOGY);
    }

    #[test]
    fn test_empty_table_is_all_unknown() {
        let table = FingerprintTable::default();
        assert!(table.is_empty());
        assert_eq!(table.lookup(0), "unknown");
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(FingerprintTable::from_json_slice(b"[1, 2, 3]").is_err());
        assert!(FingerprintTable::from_json_slice(br#"{"1": 2}"#).is_err());
    }
}
