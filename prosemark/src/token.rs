//! Flat token stream model.
//!
//! The tokenizer represents a document as a flat, order-sensitive sequence of
//! tokens. Nesting is implied by paired `*Open`/`*Close` kinds, not by the
//! `children` field: only the single [`TokenKind::Inline`] token carries
//! children, holding the inline-level tokens of one block.

use serde::{Serialize, Serializer};

/// Open/close pairing marker for a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Nesting {
    Open,
    Close,
    SelfClosing,
}

/// The closed set of token kinds the tokenizer emits.
///
/// The tree builder matches the kinds it understands and skips the rest
/// without a diagnostic, so kinds can be added here without breaking
/// existing trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    HeadingOpen,
    HeadingClose,
    ParagraphOpen,
    ParagraphClose,
    BlockquoteOpen,
    BlockquoteClose,
    BulletListOpen,
    BulletListClose,
    OrderedListOpen,
    OrderedListClose,
    ListItemOpen,
    ListItemClose,
    TaskListOpen,
    TaskListClose,
    TaskItemOpen,
    TaskItemClose,
    TableOpen,
    TableClose,
    TheadOpen,
    TheadClose,
    TbodyOpen,
    TbodyClose,
    TrOpen,
    TrClose,
    ThOpen,
    ThClose,
    TdOpen,
    TdClose,
    /// Fenced or indented code block; `info` carries the fence info string.
    Fence,
    /// Block-level inline container; the only kind with `children`.
    Inline,
    Text,
    CodeInline,
    StrongOpen,
    StrongClose,
    EmOpen,
    EmClose,
    StrikeOpen,
    StrikeClose,
    LinkOpen,
    LinkClose,
    Image,
    HtmlInline,
    HtmlBlock,
    Hr,
}

impl TokenKind {
    /// Wire name of the kind, matching the tokenizer's vocabulary.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::HeadingOpen => "heading_open",
            TokenKind::HeadingClose => "heading_close",
            TokenKind::ParagraphOpen => "paragraph_open",
            TokenKind::ParagraphClose => "paragraph_close",
            TokenKind::BlockquoteOpen => "blockquote_open",
            TokenKind::BlockquoteClose => "blockquote_close",
            TokenKind::BulletListOpen => "bullet_list_open",
            TokenKind::BulletListClose => "bullet_list_close",
            TokenKind::OrderedListOpen => "ordered_list_open",
            TokenKind::OrderedListClose => "ordered_list_close",
            TokenKind::ListItemOpen => "list_item_open",
            TokenKind::ListItemClose => "list_item_close",
            TokenKind::TaskListOpen => "task_list_open",
            TokenKind::TaskListClose => "task_list_close",
            TokenKind::TaskItemOpen => "task_list_item_open",
            TokenKind::TaskItemClose => "task_list_item_close",
            TokenKind::TableOpen => "table_open",
            TokenKind::TableClose => "table_close",
            TokenKind::TheadOpen => "thead_open",
            TokenKind::TheadClose => "thead_close",
            TokenKind::TbodyOpen => "tbody_open",
            TokenKind::TbodyClose => "tbody_close",
            TokenKind::TrOpen => "tr_open",
            TokenKind::TrClose => "tr_close",
            TokenKind::ThOpen => "th_open",
            TokenKind::ThClose => "th_close",
            TokenKind::TdOpen => "td_open",
            TokenKind::TdClose => "td_close",
            TokenKind::Fence => "fence",
            TokenKind::Inline => "inline",
            TokenKind::Text => "text",
            TokenKind::CodeInline => "code_inline",
            TokenKind::StrongOpen => "strong_open",
            TokenKind::StrongClose => "strong_close",
            TokenKind::EmOpen => "em_open",
            TokenKind::EmClose => "em_close",
            TokenKind::StrikeOpen => "s_open",
            TokenKind::StrikeClose => "s_close",
            TokenKind::LinkOpen => "link_open",
            TokenKind::LinkClose => "link_close",
            TokenKind::Image => "image",
            TokenKind::HtmlInline => "html_inline",
            TokenKind::HtmlBlock => "html_block",
            TokenKind::Hr => "hr",
        }
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One unit of the flat markup stream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub tag: String,
    pub nesting: Nesting,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Token>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<(String, String)>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub info: String,
}

impl Token {
    pub fn new(kind: TokenKind, tag: impl Into<String>, nesting: Nesting) -> Self {
        Token {
            kind,
            tag: tag.into(),
            nesting,
            content: String::new(),
            children: Vec::new(),
            attrs: Vec::new(),
            info: String::new(),
        }
    }

    pub fn open(kind: TokenKind, tag: impl Into<String>) -> Self {
        Token::new(kind, tag, Nesting::Open)
    }

    pub fn close(kind: TokenKind, tag: impl Into<String>) -> Self {
        Token::new(kind, tag, Nesting::Close)
    }

    /// Plain text token.
    pub fn text(content: impl Into<String>) -> Self {
        let mut token = Token::new(TokenKind::Text, "", Nesting::SelfClosing);
        token.content = content.into();
        token
    }

    /// Block-level inline container holding the given inline tokens.
    pub fn inline(children: Vec<Token>) -> Self {
        let mut token = Token::new(TokenKind::Inline, "", Nesting::SelfClosing);
        token.children = children;
        token
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = info.into();
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// First value of the named attribute, if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value.as_str())
    }

    /// Replace the named attribute, removing any previous occurrences.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        self.attrs.retain(|(attr, _)| attr != name);
        self.attrs.push((name.to_string(), value.into()));
    }
}
