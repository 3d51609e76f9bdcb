//! 源文档中显式出现的文档结构标签
//!
//! html5ever 的树构建器总会补全 `<html>`、`<head>` 和 `<body>`，解析后的 DOM 无法区分
//! 哪些元素真实存在于源文件中。这里只运行分词器，记录这三个开始标签是否出现过。

use std::cell::Cell;

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer,
};
use tracing::debug;

/// Which document-level elements the source markup spells out
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SourceOutline {
    pub has_html: bool,
    pub has_head: bool,
    pub has_body: bool,
}

impl SourceOutline {
    /// Tokenizes `source` and records the `<html>`, `<head>` and `<body>` start tags it contains
    pub fn scan(source: &str) -> SourceOutline {
        let input = BufferQueue::default();
        input.push_back(StrTendril::from_slice(source));

        let tokenizer = Tokenizer::new(OutlineSink::default(), Default::default());
        let _ = tokenizer.feed(&input);
        tokenizer.end();

        let outline = tokenizer.sink.outline.get();
        debug!("Source outline: {:?}", outline);
        outline
    }
}

#[derive(Default)]
struct OutlineSink {
    outline: Cell<SourceOutline>,
}

impl TokenSink for OutlineSink {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        let Token::TagToken(Tag {
            kind: TagKind::StartTag,
            name,
            ..
        }) = token
        else {
            return TokenSinkResult::Continue;
        };

        let mut outline = self.outline.get();
        match &*name {
            "html" => outline.has_html = true,
            "head" => outline.has_head = true,
            "body" => outline.has_body = true,
            // Without a tree builder the tokenizer has to be told where markup stops being markup
            "script" => return TokenSinkResult::RawData(RawKind::ScriptData),
            "style" | "xmp" | "iframe" | "noembed" | "noframes" => {
                return TokenSinkResult::RawData(RawKind::Rawtext)
            }
            "title" | "textarea" => return TokenSinkResult::RawData(RawKind::Rcdata),
            "plaintext" => return TokenSinkResult::Plaintext,
            _ => {}
        }
        self.outline.set(outline);

        TokenSinkResult::Continue
    }
}
