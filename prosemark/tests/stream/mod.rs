//! Token stream robustness properties.
//!
//! The builder must hold its structural guarantees for *any* stream, not
//! just streams the tokenizer can produce: the stack never underflows, the
//! output is always rooted at a single `doc`, marks only ever appear on
//! leaf text nodes, and malformed nesting surfaces as defects instead of
//! panics.

use proptest::prelude::*;
use prosemark::builder::{build, StreamDefect};
use prosemark::token::{Token, TokenKind};
use prosemark::{Node, NodeKind};

fn arb_structural_token() -> impl Strategy<Value = Token> {
    (0usize..14).prop_map(|choice| match choice {
        0 => Token::open(TokenKind::ParagraphOpen, "p"),
        1 => Token::close(TokenKind::ParagraphClose, "p"),
        2 => Token::open(TokenKind::BlockquoteOpen, "blockquote"),
        3 => Token::close(TokenKind::BlockquoteClose, "blockquote"),
        4 => Token::open(TokenKind::BulletListOpen, "ul"),
        5 => Token::close(TokenKind::BulletListClose, "ul"),
        6 => Token::open(TokenKind::ListItemOpen, "li"),
        7 => Token::close(TokenKind::ListItemClose, "li"),
        8 => Token::open(TokenKind::StrongOpen, "strong"),
        9 => Token::close(TokenKind::StrongClose, "strong"),
        10 => Token::open(TokenKind::EmOpen, "em"),
        11 => Token::close(TokenKind::EmClose, "em"),
        12 => Token::open(TokenKind::LinkOpen, "a"),
        _ => Token::close(TokenKind::LinkClose, "a"),
    })
}

fn arb_token() -> impl Strategy<Value = Token> {
    prop_oneof![
        5 => arb_structural_token(),
        1 => "h[0-9]{0,2}".prop_map(|tag| Token::open(TokenKind::HeadingOpen, tag)),
        1 => Just(Token::close(TokenKind::HeadingClose, "h1")),
        2 => "[a-z ]{0,8}".prop_map(Token::text),
        1 => "[a-z ]{0,8}".prop_map(|content| Token::inline(vec![Token::text(content)])),
    ]
}

fn assert_marks_only_on_leaves(node: &Node) {
    if !node.marks.is_empty() {
        assert_eq!(node.kind, NodeKind::Text);
        assert!(node.content.is_empty());
    }
    for child in &node.content {
        assert_marks_only_on_leaves(child);
    }
}

proptest! {
    #[test]
    fn builder_survives_arbitrary_streams(tokens in prop::collection::vec(arb_token(), 0..64)) {
        let outcome = build(&tokens);
        prop_assert_eq!(&outcome.document.kind, &NodeKind::Doc);
        assert_marks_only_on_leaves(&outcome.document);
    }

    #[test]
    fn balanced_block_nesting_produces_no_defects(depth in 1usize..12) {
        let mut tokens = Vec::new();
        for _ in 0..depth {
            tokens.push(Token::open(TokenKind::BlockquoteOpen, "blockquote"));
        }
        tokens.push(Token::open(TokenKind::ParagraphOpen, "p"));
        tokens.push(Token::inline(vec![Token::text("leaf")]));
        tokens.push(Token::close(TokenKind::ParagraphClose, "p"));
        for _ in 0..depth {
            tokens.push(Token::close(TokenKind::BlockquoteClose, "blockquote"));
        }

        let outcome = build(&tokens);
        prop_assert!(outcome.defects.is_empty());

        // The nesting depth survives into the tree.
        let mut node = &outcome.document;
        for _ in 0..depth {
            prop_assert_eq!(&node.content[0].kind, &NodeKind::Blockquote);
            node = &node.content[0];
        }
    }

    #[test]
    fn extra_closes_always_surface_as_defects(extra in 1usize..8) {
        let mut tokens = Vec::new();
        for _ in 0..extra {
            tokens.push(Token::close(TokenKind::ParagraphClose, "p"));
        }
        let outcome = build(&tokens);
        prop_assert_eq!(outcome.defects.len(), extra);
        let all_unmatched_close = outcome
            .defects
            .iter()
            .all(|defect| matches!(defect, StreamDefect::UnmatchedClose { .. }));
        prop_assert!(all_unmatched_close);
    }

    #[test]
    fn unclosed_opens_finalize_with_one_defect(opens in 1usize..8) {
        let mut tokens = Vec::new();
        for _ in 0..opens {
            tokens.push(Token::open(TokenKind::BlockquoteOpen, "blockquote"));
        }
        let outcome = build(&tokens);
        prop_assert_eq!(outcome.defects, vec![StreamDefect::UnclosedFrames(opens)]);
        prop_assert_eq!(outcome.document.content.len(), 1);
    }
}
