//! Task list support (`- [ ] open`, `- [x] done`).
//!
//! The tokenizer emits task lists as plain bullet markup annotated with
//! checkbox classes and an `html_inline` checkbox marker, so the stream
//! alone carries everything needed to recognize them. This extension
//! reclassifies that markup into dedicated task tokens before tree
//! construction:
//!
//! - a `bullet_list_open` whose class marks a task container becomes a
//!   task-list open;
//! - a `list_item_open` whose class marks a task item becomes a task-item
//!   open, and a bounded forward scan inside the item decides its checked
//!   state, recorded as a `data-checked` attribute;
//! - close tokens are reclassified only when the immediately preceding
//!   token proves the container really was a task item, which keeps a
//!   sibling plain list from being swept along.

use crate::pipeline::Extension;
use crate::token::{Token, TokenKind};
use crate::tokenizer::TokenizerOptions;

pub struct TaskListExtension;

impl Extension for TaskListExtension {
    fn name(&self) -> &str {
        "task_list"
    }

    fn setup(&self, options: &mut TokenizerOptions) {
        options.tasklist = true;
    }

    fn post_process(&self, tokens: &mut Vec<Token>) -> Result<(), String> {
        for i in 0..tokens.len() {
            match tokens[i].kind {
                TokenKind::BulletListOpen if has_class(&tokens[i], "contains-task-list") => {
                    tokens[i].kind = TokenKind::TaskListOpen;
                }

                TokenKind::BulletListClose
                    if tokens[i].tag == "ul"
                        && i > 0
                        && tokens[i - 1].kind == TokenKind::TaskItemClose =>
                {
                    tokens[i].kind = TokenKind::TaskListClose;
                }

                TokenKind::ListItemOpen if has_class(&tokens[i], "task-list-item") => {
                    let checked = item_is_checked(tokens, i + 1);
                    tokens[i].kind = TokenKind::TaskItemOpen;
                    tokens[i].set_attr("data-checked", if checked { "true" } else { "false" });
                }

                TokenKind::ListItemClose
                    if i > 0
                        && matches!(
                            tokens[i - 1].kind,
                            TokenKind::TaskItemOpen | TokenKind::TaskItemClose
                        ) =>
                {
                    tokens[i].kind = TokenKind::TaskItemClose;
                }

                _ => {}
            }
        }

        Ok(())
    }
}

fn has_class(token: &Token, class: &str) -> bool {
    token
        .attr("class")
        .is_some_and(|value| value.contains(class))
}

/// Scan forward from `start` for a checked checkbox marker, stopping at the
/// matching item-close token. Only inline runs of the item itself are
/// inspected (depth 0); nested items decide their own state on their own
/// pass, and the bound keeps sibling items from contaminating each other.
fn item_is_checked(tokens: &[Token], start: usize) -> bool {
    let mut depth = 0usize;

    for token in &tokens[start..] {
        match token.kind {
            TokenKind::ListItemOpen | TokenKind::TaskItemOpen => depth += 1,
            TokenKind::ListItemClose | TokenKind::TaskItemClose => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            }
            TokenKind::Inline if depth == 0 => {
                if token.children.iter().any(is_checked_checkbox) {
                    return true;
                }
            }
            _ => {}
        }
    }

    false
}

fn is_checked_checkbox(token: &Token) -> bool {
    token.kind == TokenKind::HtmlInline
        && token.content.contains("type=\"checkbox\"")
        && token.content.contains("checked")
}
