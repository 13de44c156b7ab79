//! Markdown tokenization (comrak adapter)
//!
//! The conversion core consumes a flat, order-sensitive token stream with
//! open/close nesting. We use the `comrak` crate for the actual Markdown
//! parsing and flatten its AST into that stream here; everything downstream
//! (pipeline, tree builder) treats the tokenizer as a black box.
//!
//! Flattening rules:
//! - Every block produces an `*_open` token, one `inline` token holding the
//!   block's inline children, and a `*_close` token.
//! - Tables group their rows under `thead`/`tbody` tokens; the first-row
//!   cells use `th`, the rest `td`.
//! - Task list items are emitted as *generic* list markup annotated with
//!   checkbox classes and an `html_inline` checkbox marker, the way HTML
//!   renderers emit them. Reclassifying them into task tokens is the
//!   post-processing pipeline's job, not the tokenizer's.
//! - Soft and hard line breaks become single-space text tokens.

use crate::token::{Nesting, Token, TokenKind};
use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};

/// Tokenizer switches. This is the handle extensions configure during
/// `setup`; every switch is off until an extension turns it on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenizerOptions {
    pub tables: bool,
    pub strikethrough: bool,
    pub tasklist: bool,
}

/// Tokenize Markdown source into the flat token stream.
pub fn tokenize(source: &str, options: &TokenizerOptions) -> Vec<Token> {
    let arena = Arena::new();
    let comrak_options = to_comrak_options(options);
    let root = parse_document(&arena, source, &comrak_options);

    let mut tokens = Vec::new();
    for child in root.children() {
        flatten_block(child, &mut tokens);
    }
    tokens
}

fn to_comrak_options(options: &TokenizerOptions) -> ComrakOptions<'static> {
    let mut out = ComrakOptions::default();
    out.extension.table = options.tables;
    out.extension.strikethrough = options.strikethrough;
    out.extension.tasklist = options.tasklist;
    out
}

fn flatten_block<'a>(node: &'a AstNode<'a>, tokens: &mut Vec<Token>) {
    let node_data = node.data.borrow();

    match &node_data.value {
        NodeValue::Heading(heading) => {
            let tag = format!("h{}", heading.level);
            tokens.push(Token::open(TokenKind::HeadingOpen, tag.clone()));
            tokens.push(inline_token(node));
            tokens.push(Token::close(TokenKind::HeadingClose, tag));
        }

        NodeValue::Paragraph => {
            tokens.push(Token::open(TokenKind::ParagraphOpen, "p"));
            tokens.push(inline_token(node));
            tokens.push(Token::close(TokenKind::ParagraphClose, "p"));
        }

        NodeValue::BlockQuote => {
            tokens.push(Token::open(TokenKind::BlockquoteOpen, "blockquote"));
            for child in node.children() {
                flatten_block(child, tokens);
            }
            tokens.push(Token::close(TokenKind::BlockquoteClose, "blockquote"));
        }

        NodeValue::List(list) => {
            let ordered = matches!(list.list_type, ListType::Ordered);
            let (open, close, tag) = if ordered {
                (TokenKind::OrderedListOpen, TokenKind::OrderedListClose, "ol")
            } else {
                (TokenKind::BulletListOpen, TokenKind::BulletListClose, "ul")
            };

            let mut open_token = Token::open(open, tag);
            let has_task_items = node
                .children()
                .any(|child| matches!(child.data.borrow().value, NodeValue::TaskItem(_)));
            if has_task_items {
                open_token = open_token.with_attr("class", "contains-task-list");
            }
            tokens.push(open_token);

            for child in node.children() {
                flatten_block(child, tokens);
            }
            tokens.push(Token::close(close, tag));
        }

        NodeValue::Item(_) => {
            tokens.push(Token::open(TokenKind::ListItemOpen, "li"));
            for child in node.children() {
                flatten_block(child, tokens);
            }
            tokens.push(Token::close(TokenKind::ListItemClose, "li"));
        }

        NodeValue::TaskItem(symbol) => {
            tokens.push(
                Token::open(TokenKind::ListItemOpen, "li").with_attr("class", "task-list-item"),
            );
            let start = tokens.len();
            for child in node.children() {
                flatten_block(child, tokens);
            }
            inject_checkbox(&mut tokens[start..], symbol.is_some());
            tokens.push(Token::close(TokenKind::ListItemClose, "li"));
        }

        NodeValue::CodeBlock(code_block) => {
            tokens.push(
                Token::new(TokenKind::Fence, "code", Nesting::SelfClosing)
                    .with_content(code_block.literal.clone())
                    .with_info(code_block.info.clone()),
            );
        }

        NodeValue::Table(_) => flatten_table(node, tokens),

        NodeValue::ThematicBreak => {
            tokens.push(Token::new(TokenKind::Hr, "hr", Nesting::SelfClosing));
        }

        NodeValue::HtmlBlock(html) => {
            tokens.push(
                Token::new(TokenKind::HtmlBlock, "", Nesting::SelfClosing)
                    .with_content(html.literal.clone()),
            );
        }

        _ => {
            // Unknown block type, skip
        }
    }
}

fn flatten_table<'a>(node: &'a AstNode<'a>, tokens: &mut Vec<Token>) {
    let rows: Vec<(&'a AstNode<'a>, bool)> = node
        .children()
        .filter_map(|child| match &child.data.borrow().value {
            NodeValue::TableRow(header) => Some((child, *header)),
            _ => None,
        })
        .collect();

    tokens.push(Token::open(TokenKind::TableOpen, "table"));

    let has_header = rows.iter().any(|(_, header)| *header);
    let has_body = rows.iter().any(|(_, header)| !header);

    if has_header {
        tokens.push(Token::open(TokenKind::TheadOpen, "thead"));
        for (row, header) in &rows {
            if *header {
                flatten_table_row(row, true, tokens);
            }
        }
        tokens.push(Token::close(TokenKind::TheadClose, "thead"));
    }

    if has_body {
        tokens.push(Token::open(TokenKind::TbodyOpen, "tbody"));
        for (row, header) in &rows {
            if !header {
                flatten_table_row(row, false, tokens);
            }
        }
        tokens.push(Token::close(TokenKind::TbodyClose, "tbody"));
    }

    tokens.push(Token::close(TokenKind::TableClose, "table"));
}

fn flatten_table_row<'a>(row: &'a AstNode<'a>, header: bool, tokens: &mut Vec<Token>) {
    let (open, close, tag) = if header {
        (TokenKind::ThOpen, TokenKind::ThClose, "th")
    } else {
        (TokenKind::TdOpen, TokenKind::TdClose, "td")
    };

    tokens.push(Token::open(TokenKind::TrOpen, "tr"));
    for cell in row.children() {
        tokens.push(Token::open(open, tag));
        tokens.push(inline_token(cell));
        tokens.push(Token::close(close, tag));
    }
    tokens.push(Token::close(TokenKind::TrClose, "tr"));
}

/// Build the single `inline` token carrying a block's inline children.
fn inline_token<'a>(node: &'a AstNode<'a>) -> Token {
    let mut children = Vec::new();
    for child in node.children() {
        flatten_inline(child, &mut children);
    }
    Token::inline(children)
}

fn flatten_inline<'a>(node: &'a AstNode<'a>, out: &mut Vec<Token>) {
    let node_data = node.data.borrow();

    match &node_data.value {
        NodeValue::Text(text) => out.push(Token::text(text.clone())),

        NodeValue::SoftBreak | NodeValue::LineBreak => out.push(Token::text(" ")),

        NodeValue::Code(code) => {
            out.push(
                Token::new(TokenKind::CodeInline, "code", Nesting::SelfClosing)
                    .with_content(code.literal.clone()),
            );
        }

        NodeValue::Strong => {
            out.push(Token::open(TokenKind::StrongOpen, "strong"));
            for child in node.children() {
                flatten_inline(child, out);
            }
            out.push(Token::close(TokenKind::StrongClose, "strong"));
        }

        NodeValue::Emph => {
            out.push(Token::open(TokenKind::EmOpen, "em"));
            for child in node.children() {
                flatten_inline(child, out);
            }
            out.push(Token::close(TokenKind::EmClose, "em"));
        }

        NodeValue::Strikethrough => {
            out.push(Token::open(TokenKind::StrikeOpen, "s"));
            for child in node.children() {
                flatten_inline(child, out);
            }
            out.push(Token::close(TokenKind::StrikeClose, "s"));
        }

        NodeValue::Link(link) => {
            let mut open = Token::open(TokenKind::LinkOpen, "a").with_attr("href", link.url.clone());
            if !link.title.is_empty() {
                open = open.with_attr("title", link.title.clone());
            }
            out.push(open);
            for child in node.children() {
                flatten_inline(child, out);
            }
            out.push(Token::close(TokenKind::LinkClose, "a"));
        }

        NodeValue::Image(link) => {
            let mut alt = String::new();
            collect_text(node, &mut alt);
            out.push(
                Token::new(TokenKind::Image, "img", Nesting::SelfClosing)
                    .with_attr("src", link.url.clone())
                    .with_attr("alt", alt),
            );
        }

        NodeValue::HtmlInline(html) => {
            out.push(
                Token::new(TokenKind::HtmlInline, "", Nesting::SelfClosing)
                    .with_content(html.clone()),
            );
        }

        _ => {
            // Skip unknown inline types
        }
    }
}

/// Collect the plain text under a node (used for image alt text).
fn collect_text<'a>(node: &'a AstNode<'a>, output: &mut String) {
    match &node.data.borrow().value {
        NodeValue::Text(text) => output.push_str(text),
        NodeValue::SoftBreak | NodeValue::LineBreak => output.push(' '),
        _ => {
            for child in node.children() {
                collect_text(child, output);
            }
        }
    }
}

/// Prepend the checkbox marker to the first inline run of a task item, the
/// same markup an HTML renderer would produce for it.
fn inject_checkbox(tokens: &mut [Token], checked: bool) {
    for token in tokens {
        if token.kind == TokenKind::Inline {
            let mut html = String::from("<input class=\"task-list-item-checkbox\"");
            if checked {
                html.push_str(" checked=\"\"");
            }
            html.push_str(" disabled=\"\" type=\"checkbox\">");

            let checkbox =
                Token::new(TokenKind::HtmlInline, "", Nesting::SelfClosing).with_content(html);
            token.children.insert(0, checkbox);
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn tokenizes_heading_with_level_tag() {
        let tokens = tokenize("## Title\n", &TokenizerOptions::default());
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::HeadingOpen,
                TokenKind::Inline,
                TokenKind::HeadingClose
            ]
        );
        assert_eq!(tokens[0].tag, "h2");
        assert_eq!(tokens[1].children[0].content, "Title");
    }

    #[test]
    fn tokenizes_inline_marks_as_open_close_pairs() {
        let tokens = tokenize("**bold** and *italic*\n", &TokenizerOptions::default());
        let inline = &tokens[1];
        assert_eq!(
            kinds(&inline.children),
            vec![
                TokenKind::StrongOpen,
                TokenKind::Text,
                TokenKind::StrongClose,
                TokenKind::Text,
                TokenKind::EmOpen,
                TokenKind::Text,
                TokenKind::EmClose,
            ]
        );
        assert_eq!(inline.children[3].content, " and ");
    }

    #[test]
    fn link_carries_href_attribute() {
        let tokens = tokenize("[here](https://example.com)\n", &TokenizerOptions::default());
        let inline = &tokens[1];
        assert_eq!(inline.children[0].kind, TokenKind::LinkOpen);
        assert_eq!(inline.children[0].attr("href"), Some("https://example.com"));
    }

    #[test]
    fn fence_keeps_info_string_and_literal() {
        let tokens = tokenize("```rust\nfn main() {}\n```\n", &TokenizerOptions::default());
        assert_eq!(tokens[0].kind, TokenKind::Fence);
        assert_eq!(tokens[0].info, "rust");
        assert_eq!(tokens[0].content, "fn main() {}\n");
    }

    #[test]
    fn task_items_surface_as_annotated_list_markup() {
        let options = TokenizerOptions {
            tasklist: true,
            ..TokenizerOptions::default()
        };
        let tokens = tokenize("- [x] Done\n- [ ] Pending\n", &options);

        assert_eq!(tokens[0].kind, TokenKind::BulletListOpen);
        assert_eq!(tokens[0].attr("class"), Some("contains-task-list"));
        assert_eq!(tokens[1].kind, TokenKind::ListItemOpen);
        assert_eq!(tokens[1].attr("class"), Some("task-list-item"));

        let first_inline = tokens
            .iter()
            .find(|t| t.kind == TokenKind::Inline)
            .expect("inline token");
        let checkbox = &first_inline.children[0];
        assert_eq!(checkbox.kind, TokenKind::HtmlInline);
        assert!(checkbox.content.contains("type=\"checkbox\""));
        assert!(checkbox.content.contains("checked=\"\""));
    }

    #[test]
    fn tables_group_rows_under_thead_and_tbody() {
        let options = TokenizerOptions {
            tables: true,
            ..TokenizerOptions::default()
        };
        let tokens = tokenize("| A | B |\n| --- | --- |\n| 1 | 2 |\n", &options);
        let sequence = kinds(&tokens);
        assert_eq!(sequence[0], TokenKind::TableOpen);
        assert_eq!(sequence[1], TokenKind::TheadOpen);
        assert!(sequence.contains(&TokenKind::ThOpen));
        assert!(sequence.contains(&TokenKind::TbodyOpen));
        assert!(sequence.contains(&TokenKind::TdOpen));
        assert_eq!(*sequence.last().unwrap(), TokenKind::TableClose);
    }

    #[test]
    fn soft_breaks_become_single_spaces() {
        let tokens = tokenize("one\ntwo\n", &TokenizerOptions::default());
        let inline = &tokens[1];
        let text: String = inline.children.iter().map(|t| t.content.as_str()).collect();
        assert_eq!(text, "one two");
    }
}
