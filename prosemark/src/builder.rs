//! Token stream to document tree construction.
//!
//! # The High-Level Concept
//!
//! The builder reconstructs a nested document from the flat open/close token
//! stream in a single pass, using a stack as its memory of open containers:
//! an open token pushes a frame, the matching close pops it and attaches the
//! finished node to the new top of stack (or to the root content when the
//! stack is empty).
//!
//! Two kinds of frame share the stack. *Block* frames become document nodes
//! when popped. *Mark* frames are transient: popping one re-emits its
//! accumulated children into the parent with the mark appended to each text
//! leaf, so marks never survive as tree levels. Link marks additionally
//! collapse their children into a single text run, because links are modeled
//! as a mark on one run rather than a node with children.
//!
//! # Malformed streams
//!
//! A close token with nothing open, or frames still open at end of stream,
//! is a defect in the (possibly rewritten) token stream. The builder never
//! panics on either: it finalizes using whatever is on the stack and reports
//! each defect in the outcome, so the facade can surface them instead of
//! silently truncating.

use crate::doc::{Mark, MarkKind, Node, NodeKind};
use crate::token::{Token, TokenKind};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Structural defect found while building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamDefect {
    /// Close token arrived with no matching open frame.
    UnmatchedClose { token: &'static str },
    /// A mark was still open when its enclosing block closed.
    DanglingMark,
    /// Open frames left on the stack at end of stream.
    UnclosedFrames(usize),
}

impl fmt::Display for StreamDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamDefect::UnmatchedClose { token } => {
                write!(f, "unmatched close token `{token}` with no open container")
            }
            StreamDefect::DanglingMark => {
                write!(f, "inline mark still open when its enclosing block closed")
            }
            StreamDefect::UnclosedFrames(count) => {
                write!(f, "{count} containers still open at end of stream")
            }
        }
    }
}

/// Result of building a document tree from a token stream.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildOutcome {
    pub document: Node,
    pub defects: Vec<StreamDefect>,
}

/// One in-progress container on the build stack.
enum Frame {
    Block {
        kind: NodeKind,
        attrs: BTreeMap<String, Value>,
        content: Vec<Node>,
    },
    Mark {
        mark: Mark,
        content: Vec<Node>,
    },
}

impl Frame {
    fn block(kind: NodeKind) -> Self {
        Frame::Block {
            kind,
            attrs: BTreeMap::new(),
            content: Vec::new(),
        }
    }

    fn block_with_attr(kind: NodeKind, name: &str, value: Value) -> Self {
        let mut attrs = BTreeMap::new();
        attrs.insert(name.to_string(), value);
        Frame::Block {
            kind,
            attrs,
            content: Vec::new(),
        }
    }

    fn mark(mark: Mark) -> Self {
        Frame::Mark {
            mark,
            content: Vec::new(),
        }
    }

    fn content_mut(&mut self) -> &mut Vec<Node> {
        match self {
            Frame::Block { content, .. } => content,
            Frame::Mark { content, .. } => content,
        }
    }
}

/// Build a document tree from a (possibly rewritten) token stream.
pub fn build(tokens: &[Token]) -> BuildOutcome {
    let mut defects = Vec::new();
    let content = build_nodes(tokens, &mut defects);
    let mut document = Node::doc(content);
    strip_empty_text(&mut document);
    BuildOutcome { document, defects }
}

fn build_nodes(tokens: &[Token], defects: &mut Vec<StreamDefect>) -> Vec<Node> {
    let mut root: Vec<Node> = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::HeadingOpen => {
                let level = heading_level(&token.tag);
                stack.push(Frame::block_with_attr(
                    NodeKind::Heading,
                    "level",
                    Value::from(level),
                ));
            }
            TokenKind::ParagraphOpen => stack.push(Frame::block(NodeKind::Paragraph)),
            TokenKind::BlockquoteOpen => stack.push(Frame::block(NodeKind::Blockquote)),
            TokenKind::BulletListOpen => stack.push(Frame::block(NodeKind::BulletList)),
            TokenKind::OrderedListOpen => stack.push(Frame::block(NodeKind::OrderedList)),
            TokenKind::ListItemOpen => stack.push(Frame::block(NodeKind::ListItem)),
            TokenKind::TaskListOpen => stack.push(Frame::block(NodeKind::TaskList)),
            TokenKind::TaskItemOpen => {
                let checked = token.attr("data-checked") == Some("true");
                stack.push(Frame::block_with_attr(
                    NodeKind::TaskItem,
                    "checked",
                    Value::from(checked),
                ));
            }
            TokenKind::TableOpen => stack.push(Frame::block(NodeKind::Table)),
            TokenKind::TrOpen => stack.push(Frame::block(NodeKind::TableRow)),
            TokenKind::ThOpen => stack.push(Frame::block(NodeKind::TableHeader)),
            TokenKind::TdOpen => stack.push(Frame::block(NodeKind::TableCell)),

            TokenKind::HeadingClose
            | TokenKind::ParagraphClose
            | TokenKind::BlockquoteClose
            | TokenKind::BulletListClose
            | TokenKind::OrderedListClose
            | TokenKind::ListItemClose
            | TokenKind::TaskListClose
            | TokenKind::TaskItemClose
            | TokenKind::TableClose
            | TokenKind::TrClose
            | TokenKind::ThClose
            | TokenKind::TdClose => {
                close_block(&mut stack, &mut root, defects, token.kind.as_str());
            }

            // The thead/tbody grouping tokens are structurally transparent:
            // consumed, but they produce no node.
            TokenKind::TheadOpen
            | TokenKind::TheadClose
            | TokenKind::TbodyOpen
            | TokenKind::TbodyClose => {}

            TokenKind::Inline => {
                // The inline token itself never appears as a node; its
                // children are built recursively and spliced into the
                // current frame.
                let children = build_nodes(&token.children, defects);
                extend_current(&mut stack, &mut root, children);
            }

            TokenKind::Text => {
                push_node(&mut stack, &mut root, Node::text(token.content.clone()));
            }

            TokenKind::CodeInline => {
                let node =
                    Node::text(token.content.clone()).with_marks(vec![Mark::new(MarkKind::Code)]);
                push_node(&mut stack, &mut root, node);
            }

            TokenKind::Fence => {
                let language = if token.info.is_empty() {
                    Value::Null
                } else {
                    Value::from(token.info.clone())
                };
                let node = Node::block(NodeKind::CodeBlock, vec![Node::text(token.content.clone())])
                    .with_attr("language", language);
                push_node(&mut stack, &mut root, node);
            }

            TokenKind::StrongOpen => stack.push(Frame::mark(Mark::new(MarkKind::Bold))),
            TokenKind::EmOpen => stack.push(Frame::mark(Mark::new(MarkKind::Italic))),
            TokenKind::StrikeOpen => stack.push(Frame::mark(Mark::new(MarkKind::Strike))),
            TokenKind::LinkOpen => {
                let href = token.attr("href").unwrap_or("");
                stack.push(Frame::mark(Mark::link(href)));
            }

            TokenKind::StrongClose | TokenKind::EmClose | TokenKind::StrikeClose => {
                close_mark(&mut stack, &mut root, defects, token.kind.as_str(), false);
            }
            TokenKind::LinkClose => {
                close_mark(&mut stack, &mut root, defects, token.kind.as_str(), true);
            }

            // Unrecognized content is skipped with no node and no
            // diagnostic; new token kinds must not break existing trees.
            TokenKind::Image | TokenKind::HtmlInline | TokenKind::HtmlBlock | TokenKind::Hr => {}
        }
    }

    if !stack.is_empty() {
        defects.push(StreamDefect::UnclosedFrames(stack.len()));
        while let Some(frame) = stack.pop() {
            let nodes = finish_frame(frame);
            extend_current(&mut stack, &mut root, nodes);
        }
    }

    root
}

/// Derive a heading level from the token's tag suffix, clamped to 1..=6 and
/// defaulting to 1 when the suffix does not parse.
fn heading_level(tag: &str) -> i64 {
    tag.strip_prefix('h')
        .and_then(|suffix| suffix.parse::<i64>().ok())
        .map(|level| level.clamp(1, 6))
        .unwrap_or(1)
}

fn push_node(stack: &mut Vec<Frame>, root: &mut Vec<Node>, node: Node) {
    match stack.last_mut() {
        Some(frame) => frame.content_mut().push(node),
        None => root.push(node),
    }
}

fn extend_current(stack: &mut Vec<Frame>, root: &mut Vec<Node>, nodes: Vec<Node>) {
    match stack.last_mut() {
        Some(frame) => frame.content_mut().extend(nodes),
        None => root.extend(nodes),
    }
}

/// Pop the innermost block frame and attach it to its parent. Mark frames
/// found on the way out were left open by a malformed stream; they are
/// folded into the block (marks applied) and reported.
fn close_block(
    stack: &mut Vec<Frame>,
    root: &mut Vec<Node>,
    defects: &mut Vec<StreamDefect>,
    token: &'static str,
) {
    loop {
        match stack.pop() {
            Some(Frame::Block {
                kind,
                attrs,
                content,
            }) => {
                let node = Node {
                    kind,
                    attrs,
                    content,
                    marks: Vec::new(),
                    text: None,
                };
                push_node(stack, root, node);
                return;
            }
            Some(Frame::Mark { mark, content }) => {
                defects.push(StreamDefect::DanglingMark);
                extend_current(stack, root, apply_mark(mark, content));
            }
            None => {
                defects.push(StreamDefect::UnmatchedClose { token });
                return;
            }
        }
    }
}

fn close_mark(
    stack: &mut Vec<Frame>,
    root: &mut Vec<Node>,
    defects: &mut Vec<StreamDefect>,
    token: &'static str,
    collapse: bool,
) {
    match stack.pop() {
        Some(Frame::Mark { mark, content }) => {
            let nodes = if collapse {
                collapse_marked(mark, content)
            } else {
                apply_mark(mark, content)
            };
            extend_current(stack, root, nodes);
        }
        Some(frame @ Frame::Block { .. }) => {
            // A mark close cannot finish a block frame; leave it in place.
            stack.push(frame);
            defects.push(StreamDefect::UnmatchedClose { token });
        }
        None => defects.push(StreamDefect::UnmatchedClose { token }),
    }
}

fn finish_frame(frame: Frame) -> Vec<Node> {
    match frame {
        Frame::Block {
            kind,
            attrs,
            content,
        } => vec![Node {
            kind,
            attrs,
            content,
            marks: Vec::new(),
            text: None,
        }],
        Frame::Mark { mark, content } => apply_mark(mark, content),
    }
}

/// Re-emit a mark frame's children with the mark appended to every text
/// leaf's existing mark list; non-text children pass through unchanged.
fn apply_mark(mark: Mark, content: Vec<Node>) -> Vec<Node> {
    content
        .into_iter()
        .map(|mut node| {
            if node.is_text() {
                node.marks.push(mark.clone());
            }
            node
        })
        .collect()
}

/// Collapse a mark frame's children into a single text run carrying only
/// the mark (used for links).
fn collapse_marked(mark: Mark, content: Vec<Node>) -> Vec<Node> {
    let text: String = content
        .iter()
        .filter_map(|node| node.text.as_deref())
        .collect();
    vec![Node::text(text).with_marks(vec![mark])]
}

/// Mark merging can leave empty placeholder leaves behind; strip them from
/// every content list.
fn strip_empty_text(node: &mut Node) {
    for child in &mut node.content {
        strip_empty_text(child);
    }
    node.content
        .retain(|child| !(child.is_text() && child.text.as_deref() == Some("")));
}
