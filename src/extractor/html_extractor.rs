//! HTML图标链接提取器
//! 基于 html5ever 流式分词，容忍不规范标签，按文档顺序提取 `<link rel="icon">` 的 href

use std::cell::RefCell;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts
};
use html5ever::tokenizer::states::RawKind;
use markup5ever::interface::Attribute;
use tendril::StrTendril;

/// 视为图标声明的 rel 取值（比较前统一转小写）
const ICON_RELS: [&str; 2] = ["icon", "shortcut icon"];

#[derive(Debug, Default, Clone)]
pub struct IconLinkExtractor {
    icon_hrefs: RefCell<Vec<String>>,
}

impl TokenSink for IconLinkExtractor {
    type Handle = ();

    fn process_token(&self, token: Token, _line: u64) -> TokenSinkResult<()> {
        if let Token::TagToken(Tag {
            kind: TagKind::StartTag,
            name,
            attrs,
            ..
        }) = token
        {
            match name.as_ref() {
                "link" => self.extract_icon_link(&attrs),
                // 原始文本元素：内容按文本处理，其中的 <link> 不是元素
                "script" => return TokenSinkResult::RawData(RawKind::ScriptData),
                "style" | "xmp" | "iframe" | "noembed" | "noframes" => {
                    return TokenSinkResult::RawData(RawKind::Rawtext);
                }
                "title" | "textarea" => return TokenSinkResult::RawData(RawKind::Rcdata),
                _ => {}
            }
        }
        TokenSinkResult::Continue
    }
}

impl IconLinkExtractor {
    /// 创建新的提取器
    pub fn new() -> Self {
        Self::default()
    }

    /// 从HTML字符串提取图标链接
    pub fn extract(&self, html: &str) -> Self {
        let tokenizer = Tokenizer::new(self.clone(), TokenizerOpts::default());
        let queue = BufferQueue::default();
        queue.push_back(StrTendril::from(html));

        let _ = tokenizer.feed(&queue);
        tokenizer.end();

        tokenizer.sink
    }

    /// rel 为图标且带 href 的 link 标签
    fn extract_icon_link(&self, attrs: &[Attribute]) {
        let mut is_icon = false;
        let mut href = None;

        for attr in attrs {
            match attr.name.local.as_ref() {
                "rel" => {
                    let rel = attr.value.to_lowercase();
                    is_icon = ICON_RELS.contains(&rel.as_str());
                }
                "href" => href = Some(attr.value.to_string()),
                _ => {}
            }
        }

        if let (true, Some(h)) = (is_icon, href) {
            self.icon_hrefs.borrow_mut().push(h);
        }
    }

    /// 获取提取到的图标 href 列表（文档顺序，不去重）
    pub fn get_icon_hrefs(&self) -> Vec<String> {
        self.icon_hrefs.borrow().clone()
    }
}
