//! The rich-text document tree: data model and shape validation.

pub mod nodes;
pub mod validate;

pub use nodes::{Mark, MarkKind, Node, NodeKind};
pub use validate::validate;
