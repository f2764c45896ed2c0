//! 图标URL解析与规范化

use url::Url;

use crate::error::FavResult;

/// 规范化时截断的图片扩展名（按优先级）
const ICON_EXTENSIONS: [&str; 2] = [".png", ".ico"];

/// 图标URL解析工具
pub struct UrlResolver;

impl UrlResolver {
    /// 解析页面声明的 href
    ///
    /// 以字面量 `http` 开头的 href 原样使用（不做 scheme 解析）；
    /// 其余 href 只作为路径参与解析：丢弃页面的 query/fragment，
    /// href 中的 `?`、`#` 视为路径字符并被转义。
    pub fn resolve_href(page_url: &Url, href: &str) -> FavResult<String> {
        if href.starts_with("http") {
            return Ok(href.to_string());
        }

        let path = if href.starts_with('/') {
            href.to_string()
        } else {
            let page_path = page_url.path();
            let dir_end = page_path.rfind('/').map_or(0, |i| i + 1);
            format!("{}{}", &page_path[..dir_end], href)
        };

        let mut resolved = page_url.clone();
        resolved.set_query(None);
        resolved.set_fragment(None);
        resolved.set_path(&path);

        // 重新解析，规范化 `.`、`..` 路径段
        Ok(Url::parse(resolved.as_str())?.to_string())
    }

    /// 截断首个 `.png`（否则首个 `.ico`）之后的内容，去掉附加的查询串
    pub fn canonicalize(url: &str) -> String {
        for ext in ICON_EXTENSIONS {
            if let Some(idx) = url.find(ext) {
                return url[..idx + ext.len()].to_string();
            }
        }
        url.to_string()
    }

    /// 同源根路径图标：`<origin>/favicon.ico`
    pub fn fallback_icon_url(page_url: &Url) -> FavResult<String> {
        Ok(page_url.join("/favicon.ico")?.to_string())
    }
}
