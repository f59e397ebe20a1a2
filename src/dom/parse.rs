//! Parser adapter: HTML text to an owned [`Document`].
//!
//! html5ever builds an `RcDom`, which is then converted into the owned
//! tree. Conversion classifies `<script>` and `<style>` elements and folds
//! `<template>` contents into the template's children.

use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{parse_document, parse_fragment, Attribute, ParseOpts, QualName};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use serde::Deserialize;
use tracing::debug;

use super::{html_name, Doctype, Document, Element, Node, RawText};

/// How the input is handed to html5ever.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Pick `Document` when the input starts with a doctype or an `<html>`,
    /// `<head>` or `<body>` tag, `Fragment` otherwise.
    #[default]
    Auto,
    /// Full document parse. Missing `<html>`, `<head>` and `<body>` are
    /// synthesized.
    Document,
    /// Fragment parse. Nothing is synthesized. The context element is
    /// `<body>`, or the table part that can hold the leading tag.
    Fragment,
}

impl ParseMode {
    /// Resolve `Auto` against the input.
    pub fn resolve(self, input: &str) -> ParseMode {
        match self {
            ParseMode::Auto if looks_like_document(input) => ParseMode::Document,
            ParseMode::Auto => ParseMode::Fragment,
            mode => mode,
        }
    }
}

/// Parse HTML text into an owned document tree.
///
/// Never fails: html5ever recovers from any malformed markup.
pub fn parse(input: &str, mode: ParseMode) -> Document {
    let mode = mode.resolve(input);
    let document = match mode {
        ParseMode::Fragment => parse_as_fragment(input),
        _ => parse_as_document(input),
    };
    debug!(?mode, nodes = document.node_count(), "parsed input");
    document
}

/// Scripting is off so `<noscript>` content is parsed as markup and
/// cleaned like everything else.
fn parse_opts() -> ParseOpts {
    ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..TreeBuilderOpts::default()
        },
        ..ParseOpts::default()
    }
}

fn parse_as_document(input: &str) -> Document {
    let dom = parse_document(RcDom::default(), parse_opts()).one(input);
    let children = convert_children(&dom.document);
    Document::new(children)
}

fn parse_as_fragment(input: &str) -> Document {
    let context = fragment_context(input);
    let dom = parse_fragment(RcDom::default(), parse_opts(), html_name(context), Vec::new())
        .one(input);

    // html5ever wraps fragment nodes in a synthetic <html> element.
    let children = dom
        .document
        .children
        .borrow()
        .first()
        .map(convert_children)
        .unwrap_or_default();
    Document::new(children)
}

/// Context element for a fragment. Table parts are only kept by the tree
/// builder inside the element that may contain them.
fn fragment_context(input: &str) -> &'static str {
    match leading_tag(input).as_deref() {
        Some("tr") => "tbody",
        Some("td" | "th") => "tr",
        Some("col") => "colgroup",
        Some("tbody" | "thead" | "tfoot" | "caption" | "colgroup") => "table",
        _ => "body",
    }
}

/// An element whose children are still being converted.
struct Frame {
    /// `None` for the root whose children are returned.
    element: Option<(QualName, Vec<Attribute>)>,
    /// Unconverted children, last child first.
    pending: Vec<Handle>,
    children: Vec<Node>,
}

impl Frame {
    fn new(handle: &Handle, element: Option<(QualName, Vec<Attribute>)>) -> Self {
        let mut pending = handle.children.borrow().clone();
        if let NodeData::Element {
            template_contents, ..
        } = &handle.data
        {
            if let Some(contents) = template_contents.borrow().as_ref() {
                pending.extend(contents.children.borrow().iter().cloned());
            }
        }
        pending.reverse();
        Self {
            element,
            pending,
            children: Vec::new(),
        }
    }
}

enum Converted {
    Node(Node),
    /// An element whose children still need converting.
    Element(QualName, Vec<Attribute>),
    Skip,
}

/// Convert the children of `root`, depth-first on an explicit stack.
fn convert_children(root: &Handle) -> Vec<Node> {
    let mut stack = vec![Frame::new(root, None)];
    loop {
        let Some(frame) = stack.last_mut() else {
            return Vec::new();
        };
        if let Some(child) = frame.pending.pop() {
            match convert(&child) {
                Converted::Node(node) => frame.children.push(node),
                Converted::Element(name, attrs) => {
                    stack.push(Frame::new(&child, Some((name, attrs))))
                }
                Converted::Skip => {}
            }
            continue;
        }

        let Some(finished) = stack.pop() else {
            return Vec::new();
        };
        match (finished.element, stack.last_mut()) {
            (Some((name, attrs)), Some(parent)) => parent
                .children
                .push(Node::Element(Element::new(name, attrs, finished.children))),
            _ => return finished.children,
        }
    }
}

fn convert(handle: &Handle) -> Converted {
    let node = match &handle.data {
        NodeData::Document => return Converted::Skip,
        NodeData::Doctype {
            name,
            public_id,
            system_id,
        } => Node::Doctype(Doctype {
            name: name.to_string(),
            public_id: public_id.to_string(),
            system_id: system_id.to_string(),
        }),
        NodeData::Text { contents } => Node::Text(contents.borrow().to_string()),
        NodeData::Comment { contents } => Node::Comment(contents.to_string()),
        NodeData::ProcessingInstruction { target, contents } => Node::ProcessingInstruction {
            target: target.to_string(),
            data: contents.to_string(),
        },
        NodeData::Element { name, attrs, .. } => {
            let attrs = attrs.borrow().clone();
            let raw = |name: &QualName, attrs: Vec<Attribute>| RawText {
                name: name.clone(),
                attrs,
                text: text_content(handle),
            };
            match &*name.local {
                "script" => Node::Script(raw(name, attrs)),
                "style" => Node::Style(raw(name, attrs)),
                _ => return Converted::Element(name.clone(), attrs),
            }
        }
    };
    Converted::Node(node)
}

/// Concatenated text of a raw-text element, in document order.
fn text_content(handle: &Handle) -> String {
    let mut text = String::new();
    let mut pending: Vec<Handle> = handle.children.borrow().iter().rev().cloned().collect();
    while let Some(node) = pending.pop() {
        match &node.data {
            NodeData::Text { contents } => text.push_str(&contents.borrow()),
            NodeData::Element { .. } => {
                pending.extend(node.children.borrow().iter().rev().cloned())
            }
            _ => {}
        }
    }
    text
}

/// True when the input opens with a doctype or an `<html>`, `<head>` or
/// `<body>` tag.
fn looks_like_document(input: &str) -> bool {
    let Some(rest) = leading_markup(input) else {
        return false;
    };
    starts_with_ignore_case(rest, "<!doctype")
        || matches!(leading_tag(input).as_deref(), Some("html" | "head" | "body"))
}

/// The input after a byte-order mark, leading whitespace and comments.
/// `None` when a leading comment is never closed.
fn leading_markup(input: &str) -> Option<&str> {
    let mut rest = input.trim_start_matches('\u{feff}').trim_start();
    while let Some(after_open) = rest.strip_prefix("<!--") {
        let end = after_open.find("-->")?;
        rest = after_open[end + 3..].trim_start();
    }
    Some(rest)
}

/// Lowercased name of the start tag the input opens with.
fn leading_tag(input: &str) -> Option<String> {
    let rest = leading_markup(input)?.strip_prefix('<')?;
    let len = rest
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(rest.len());
    let (name, after) = rest.split_at(len);
    let delimited = matches!(
        after.chars().next(),
        None | Some('>' | '/' | ' ' | '\t' | '\n' | '\r' | '\x0c')
    );
    let starts_alphabetic = name.starts_with(|c: char| c.is_ascii_alphabetic());
    (starts_alphabetic && delimited).then(|| name.to_ascii_lowercase())
}

fn starts_with_ignore_case(input: &str, prefix: &str) -> bool {
    input
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
