//! 各资产搜索引擎的图标查询语句

use serde::{Deserialize, Serialize};

use crate::hasher::FaviconHash;

/// 搜索引擎查询语句
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQueries {
    pub shodan: String,
    pub fofa: String,
    pub zoomeye: String,
    pub censys: String,
    pub hunter: String,
    pub netlas: String,
}

impl SearchQueries {
    pub fn from_hash(hash: &FaviconHash) -> Self {
        Self {
            shodan: format!("http.favicon.hash:{}", hash.murmur3),
            fofa: format!("icon_hash=\"{}\"", hash.murmur3),
            zoomeye: format!("iconhash:\"{}\"", hash.md5),
            censys: format!("services.http.response.favicons.md5_hash:{}", hash.md5),
            hunter: format!("web.icon==\"{}\"", hash.md5),
            netlas: format!("http.favicon.hash_sha256:{}", hash.sha256),
        }
    }

    /// 人类可读输出使用的 (名称, 查询) 列表
    pub fn labeled(&self) -> [(&'static str, &str); 6] {
        [
            ("Shodan", self.shodan.as_str()),
            ("FOFA", self.fofa.as_str()),
            ("ZoomEye", self.zoomeye.as_str()),
            ("Censys", self.censys.as_str()),
            ("Hunter", self.hunter.as_str()),
            ("Netlas", self.netlas.as_str()),
        ]
    }
}
