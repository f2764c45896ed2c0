//! Base64 换行重排
//! 按 76 列折行并为每行（含最后一行）追加换行符，与 Python `base64.encodebytes` 输出一致

use base64::{Engine as _, engine::general_purpose::STANDARD};

/// MIME 风格 Base64 每行字符数
pub const BASE64_LINE_WIDTH: usize = 76;

/// 将连续的 Base64 文本按 76 列重排，每行以 `\n` 结尾
///
/// 长度为 `L` 的输入得到 `ceil(L / 76)` 行；空输入返回空字符串。
pub fn rewrap_base64(encoded: &str) -> String {
    let line_count = encoded.len().div_ceil(BASE64_LINE_WIDTH);
    let mut wrapped = String::with_capacity(encoded.len() + line_count);

    for line in encoded.as_bytes().chunks(BASE64_LINE_WIDTH) {
        wrapped.push_str(&String::from_utf8_lossy(line));
        wrapped.push('\n');
    }

    wrapped
}

/// 标准字母表 + 填充编码后再重排
pub fn encode_wrapped(bytes: &[u8]) -> String {
    rewrap_base64(&STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count_is_ceil_of_width() {
        for len in [0usize, 1, 57, 58, 114, 1000] {
            let bytes: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
            let encoded = STANDARD.encode(&bytes);
            let wrapped = rewrap_base64(&encoded);

            let expected_lines = encoded.len().div_ceil(BASE64_LINE_WIDTH);
            assert_eq!(wrapped.matches('\n').count(), expected_lines, "len={}", len);
            assert!(wrapped.lines().all(|l| l.len() <= BASE64_LINE_WIDTH));
            assert_eq!(wrapped.replace('\n', ""), encoded);
        }
    }

    #[test]
    fn test_exact_width_has_single_newline() {
        // 57 字节 -> 恰好 76 个 Base64 字符
        let encoded = STANDARD.encode([0u8; 57]);
        assert_eq!(encoded.len(), BASE64_LINE_WIDTH);

        let wrapped = rewrap_base64(&encoded);
        assert_eq!(wrapped, format!("{}\n", encoded));
    }

    #[test]
    fn test_short_input_keeps_trailing_newline() {
        assert_eq!(encode_wrapped(b"\x00\x00\x01\x00"), "AAABAA==\n");
        assert_eq!(encode_wrapped(b""), "");
    }
}
