//! Owned HTML document tree.
//!
//! The parser adapter builds this tree from html5ever's `RcDom`, the tree
//! cleaner mutates it, and the serializer adapter writes it back out through
//! html5ever's serializer. Every node kind is its own variant, so only
//! elements carry attributes and children.
//!
//! # Example
//!
//! ```
//! use html_skeleton::dom::{self, Node, ParseMode};
//!
//! let document = dom::parse("<p>Hi</p><!-- note -->", ParseMode::Auto);
//! assert_eq!(document.children.len(), 2);
//! assert!(matches!(document.children[1], Node::Comment(_)));
//! ```

mod parse;
mod serialize;

pub use parse::{parse, ParseMode};
pub use serialize::serialize;

use std::mem;

use html5ever::{Attribute, LocalName, Namespace, QualName};

/// The HTML namespace URL.
pub const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Root of a parsed document.
///
/// The root is not a [`Node`] variant: it can never be dropped by cleaning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub children: Vec<Node>,
}

impl Document {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes below the root, at any depth.
    pub fn node_count(&self) -> usize {
        self.children.iter().map(Node::node_count).sum()
    }
}

/// A single node in the document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
    /// A `<script>` element and its raw source.
    Script(RawText),
    /// A `<style>` element and its raw stylesheet.
    Style(RawText),
    Doctype(Doctype),
    ProcessingInstruction { target: String, data: String },
}

impl Node {
    /// Shorthand for an HTML element in the HTML namespace.
    pub fn element(local: &str, attrs: Vec<Attribute>, children: Vec<Node>) -> Self {
        Node::Element(Element::html(local, attrs, children))
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Node::Comment(text.into())
    }

    /// True for the kinds the cleaner removes with their whole subtree.
    pub fn is_script_or_style(&self) -> bool {
        matches!(self, Node::Script(_) | Node::Style(_))
    }

    /// Child nodes, for container kinds only.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Element(element) => Some(&element.children),
            _ => None,
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            if let Some(children) = node.children() {
                pending.extend(children);
            }
        }
        count
    }
}

/// An ordinary element.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: QualName,
    /// Attributes in source order.
    pub attrs: Vec<Attribute>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: QualName, attrs: Vec<Attribute>, children: Vec<Node>) -> Self {
        Self {
            name,
            attrs,
            children,
        }
    }

    pub fn html(local: &str, attrs: Vec<Attribute>, children: Vec<Node>) -> Self {
        Self::new(html_name(local), attrs, children)
    }

    pub fn local_name(&self) -> &str {
        &self.name.local
    }
}

// The derived drop would recurse once per nesting level.
impl Drop for Element {
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            if let Node::Element(element) = &mut node {
                pending.append(&mut element.children);
            }
        }
    }
}

/// A raw-text element (`<script>` or `<style>`): its content is never
/// parsed as markup.
#[derive(Debug, Clone, PartialEq)]
pub struct RawText {
    pub name: QualName,
    pub attrs: Vec<Attribute>,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Doctype {
    pub name: String,
    pub public_id: String,
    pub system_id: String,
}

/// Build a qualified name in the HTML namespace.
pub fn html_name(local: &str) -> QualName {
    QualName::new(None, Namespace::from(HTML_NAMESPACE), LocalName::from(local))
}

/// Build a plain (namespace-less) attribute.
pub fn attribute(name: &str, value: &str) -> Attribute {
    Attribute {
        name: QualName::new(None, Namespace::from(""), LocalName::from(name)),
        value: value.into(),
    }
}
