//! 图标哈希计算
//! 主哈希：Base64 → 76列重排 → MurmurHash3 (x86, 32位, seed 0) → 有符号 i32
//! 辅助哈希：原始字节的 MD5 / SHA-256（小写十六进制）

use md5::Md5;
use murmurhash3::murmurhash3_x86_32;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::base64_wrap::encode_wrapped;

/// 图标哈希三元组
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaviconHash {
    /// 与 Shodan `http.favicon.hash` 兼容的有符号 32 位哈希
    pub murmur3: i32,
    pub md5: String,
    pub sha256: String,
}

/// 图标哈希计算器
pub struct FaviconHasher;

impl FaviconHasher {
    /// 计算完整哈希三元组，任意字节序列（含空）均可计算
    pub fn hash(bytes: &[u8]) -> FaviconHash {
        FaviconHash {
            murmur3: Self::murmur3(bytes),
            md5: Self::md5_hex(bytes),
            sha256: Self::sha256_hex(bytes),
        }
    }

    /// 主哈希：对重排后的 Base64 文本做 MurmurHash3，结果按补码解释为 i32
    pub fn murmur3(bytes: &[u8]) -> i32 {
        let wrapped = encode_wrapped(bytes);
        murmurhash3_x86_32(wrapped.as_bytes(), 0) as i32
    }

    pub fn md5_hex(bytes: &[u8]) -> String {
        hex::encode(Md5::digest(bytes))
    }

    pub fn sha256_hex(bytes: &[u8]) -> String {
        hex::encode(Sha256::digest(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE_ICO: &[u8] = include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/favicon.ico"
    ));

    #[test]
    fn test_fixture_golden_values() {
        let hash = FaviconHasher::hash(FIXTURE_ICO);
        assert_eq!(hash.murmur3, -1366637387);
        assert_eq!(hash.md5, "583e989437e88ef7d05cf0c04a0c21fd");
        assert_eq!(
            hash.sha256,
            "126c4a97a33b13f2dfab72fcba3e0f6ea2c7a435031e30a33e7f027f60f31d10"
        );
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(FaviconHasher::murmur3(b"hello favicon"), 508473084);
        assert_eq!(FaviconHasher::murmur3(b"\x00\x00\x01\x00"), -216455174);
        let all_bytes: Vec<u8> = (0..=255u8).collect();
        assert_eq!(FaviconHasher::murmur3(&all_bytes), -757223386);
        // 57 字节恰好一整行
        let one_line: Vec<u8> = (0..57u8).collect();
        assert_eq!(FaviconHasher::murmur3(&one_line), 459585070);
    }

    #[test]
    fn test_empty_input() {
        let hash = FaviconHasher::hash(b"");
        assert_eq!(hash.murmur3, 0);
        assert_eq!(hash.md5, "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(
            hash.sha256,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_deterministic() {
        let first = FaviconHasher::hash(FIXTURE_ICO);
        let second = FaviconHasher::hash(FIXTURE_ICO);
        assert_eq!(first, second);
    }

    #[test]
    fn test_differs_from_unwrapped_hash() {
        // 直接对未折行的 Base64 或原始字节做哈希，结果与主哈希不同
        use base64::{Engine as _, engine::general_purpose::STANDARD};
        let raw_b64 = STANDARD.encode(FIXTURE_ICO);
        let unwrapped = murmurhash3_x86_32(raw_b64.as_bytes(), 0) as i32;
        let raw = murmurhash3_x86_32(FIXTURE_ICO, 0) as i32;
        let primary = FaviconHasher::murmur3(FIXTURE_ICO);
        assert_ne!(primary, unwrapped);
        assert_ne!(primary, raw);
    }
}
