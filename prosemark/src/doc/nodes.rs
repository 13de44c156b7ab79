//! Core data structures for the rich-text document tree.
//!
//! A document is a single `doc` root containing block nodes; inline
//! formatting lives on text leaves as marks, not as tree levels. Two
//! overlapping marks on the same run produce one text node with two marks in
//! array order, never nested nodes.
//!
//! The tree serializes to the editor-facing JSON shape
//! `{type, attrs?, content?, marks?, text?}`. Node and mark kinds are closed
//! enums with an `Other(String)` fallback so documents deserialized from JSON
//! keep unknown types intact and serializers can pass them through.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Kind of a document node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    Doc,
    Paragraph,
    Heading,
    Text,
    Blockquote,
    BulletList,
    OrderedList,
    ListItem,
    TaskList,
    TaskItem,
    CodeBlock,
    Table,
    TableRow,
    TableHeader,
    TableCell,
    /// A node type this crate does not know. Preserved verbatim so that
    /// round-tripping foreign documents is lossless.
    Other(String),
}

impl NodeKind {
    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::Doc => "doc",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Heading => "heading",
            NodeKind::Text => "text",
            NodeKind::Blockquote => "blockquote",
            NodeKind::BulletList => "bulletList",
            NodeKind::OrderedList => "orderedList",
            NodeKind::ListItem => "listItem",
            NodeKind::TaskList => "taskList",
            NodeKind::TaskItem => "taskItem",
            NodeKind::CodeBlock => "codeBlock",
            NodeKind::Table => "table",
            NodeKind::TableRow => "tableRow",
            NodeKind::TableHeader => "tableHeader",
            NodeKind::TableCell => "tableCell",
            NodeKind::Other(name) => name,
        }
    }
}

impl From<String> for NodeKind {
    fn from(name: String) -> Self {
        match name.as_str() {
            "doc" => NodeKind::Doc,
            "paragraph" => NodeKind::Paragraph,
            "heading" => NodeKind::Heading,
            "text" => NodeKind::Text,
            "blockquote" => NodeKind::Blockquote,
            "bulletList" => NodeKind::BulletList,
            "orderedList" => NodeKind::OrderedList,
            "listItem" => NodeKind::ListItem,
            "taskList" => NodeKind::TaskList,
            "taskItem" => NodeKind::TaskItem,
            "codeBlock" => NodeKind::CodeBlock,
            "table" => NodeKind::Table,
            "tableRow" => NodeKind::TableRow,
            "tableHeader" => NodeKind::TableHeader,
            "tableCell" => NodeKind::TableCell,
            _ => NodeKind::Other(name),
        }
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of an inline mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MarkKind {
    Bold,
    Italic,
    Code,
    Strike,
    Link,
    Other(String),
}

impl MarkKind {
    pub fn as_str(&self) -> &str {
        match self {
            MarkKind::Bold => "bold",
            MarkKind::Italic => "italic",
            MarkKind::Code => "code",
            MarkKind::Strike => "strike",
            MarkKind::Link => "link",
            MarkKind::Other(name) => name,
        }
    }
}

impl From<String> for MarkKind {
    fn from(name: String) -> Self {
        match name.as_str() {
            "bold" => MarkKind::Bold,
            "italic" => MarkKind::Italic,
            "code" => MarkKind::Code,
            "strike" => MarkKind::Strike,
            "link" => MarkKind::Link,
            _ => MarkKind::Other(name),
        }
    }
}

impl From<MarkKind> for String {
    fn from(kind: MarkKind) -> Self {
        kind.as_str().to_string()
    }
}

/// An inline annotation applied to a contiguous text run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    #[serde(rename = "type")]
    pub kind: MarkKind,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, Value>,
}

impl Mark {
    pub fn new(kind: MarkKind) -> Self {
        Mark {
            kind,
            attrs: BTreeMap::new(),
        }
    }

    /// Link mark carrying its target as an `href` attribute. Links are a
    /// mark on a single text run, not a node with children.
    pub fn link(href: impl Into<String>) -> Self {
        let mut mark = Mark::new(MarkKind::Link);
        mark.attrs.insert("href".to_string(), Value::from(href.into()));
        mark
    }

    pub fn attr_str(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).and_then(Value::as_str)
    }
}

/// A node of the document tree.
///
/// A node is either a leaf carrying `text` (and possibly `marks`) or a
/// container carrying `content`; only leaf text nodes may carry marks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<Node>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<Mark>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Node {
            kind,
            attrs: BTreeMap::new(),
            content: Vec::new(),
            marks: Vec::new(),
            text: None,
        }
    }

    /// Document root.
    pub fn doc(content: Vec<Node>) -> Self {
        let mut node = Node::new(NodeKind::Doc);
        node.content = content;
        node
    }

    /// Container node with the given children.
    pub fn block(kind: NodeKind, content: Vec<Node>) -> Self {
        let mut node = Node::new(kind);
        node.content = content;
        node
    }

    /// Text leaf.
    pub fn text(text: impl Into<String>) -> Self {
        let mut node = Node::new(NodeKind::Text);
        node.text = Some(text.into());
        node
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn with_marks(mut self, marks: Vec<Mark>) -> Self {
        self.marks = marks;
        self
    }

    pub fn is_text(&self) -> bool {
        self.kind == NodeKind::Text
    }

    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.attrs.get(name)
    }

    pub fn attr_str(&self, name: &str) -> Option<&str> {
        self.attr(name).and_then(Value::as_str)
    }

    pub fn attr_bool(&self, name: &str) -> Option<bool> {
        self.attr(name).and_then(Value::as_bool)
    }

    pub fn attr_u64(&self, name: &str) -> Option<u64> {
        self.attr(name).and_then(Value::as_u64)
    }
}
