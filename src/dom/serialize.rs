//! Serializer adapter: owned [`Document`] back to HTML text.
//!
//! The tree implements html5ever's `Serialize` trait, so escaping, raw-text
//! handling and void elements all follow html5ever's `HtmlSerializer`.
//!
//! One exception: text inside the legacy raw-text elements (`<xmp>`,
//! `<iframe>`, `<noembed>`, `<noframes>`, `<plaintext>`) is escaped here,
//! since html5ever writes it verbatim and it could otherwise carry
//! `<script>` or attributes into the output.

use std::io;

use html5ever::serialize::{Serialize, SerializeOpts, Serializer, TraversalScope};
use html5ever::{Attribute, QualName};
use tracing::trace;

use super::{Doctype, Document, Element, Node, HTML_NAMESPACE};
use crate::error::HtmlError;

/// Serialize a document to an HTML string.
///
/// An empty document serializes to the empty string.
pub fn serialize(document: &Document) -> Result<String, HtmlError> {
    let opts = SerializeOpts {
        scripting_enabled: false,
        ..SerializeOpts::default()
    };
    let mut buffer = Vec::new();
    html5ever::serialize::serialize(&mut buffer, document, opts)?;
    let html = String::from_utf8(buffer)?;
    trace!(bytes = html.len(), "serialized document");
    Ok(html)
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: &mut S, _traversal_scope: TraversalScope) -> io::Result<()>
    where
        S: Serializer,
    {
        // The root has no tag of its own.
        write_steps(serializer, self.children.iter().rev().map(Step::Open).collect())
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: &mut S, traversal_scope: TraversalScope) -> io::Result<()>
    where
        S: Serializer,
    {
        match (traversal_scope, self) {
            (TraversalScope::IncludeNode, _) => write_steps(serializer, vec![Step::Open(self)]),
            (TraversalScope::ChildrenOnly(_), Node::Element(element)) => {
                write_steps(serializer, child_steps(element).collect())
            }
            (TraversalScope::ChildrenOnly(_), Node::Script(raw) | Node::Style(raw)) => {
                serializer.write_text(&raw.text)
            }
            (TraversalScope::ChildrenOnly(_), _) => Ok(()),
        }
    }
}

/// Pending serializer work, kept on an explicit stack so nesting depth is
/// bounded by memory rather than the call stack.
enum Step<'a> {
    Open(&'a Node),
    Close(&'a QualName),
    EscapedText(&'a str),
}

/// Run `pending`, which holds the last step first.
fn write_steps<S: Serializer>(serializer: &mut S, mut pending: Vec<Step<'_>>) -> io::Result<()> {
    while let Some(step) = pending.pop() {
        match step {
            Step::Open(Node::Element(element)) => {
                serializer.start_elem(element.name.clone(), attr_refs(&element.attrs))?;
                pending.push(Step::Close(&element.name));
                pending.extend(child_steps(element));
            }
            Step::Open(Node::Script(raw) | Node::Style(raw)) => {
                serializer.start_elem(raw.name.clone(), attr_refs(&raw.attrs))?;
                serializer.write_text(&raw.text)?;
                serializer.end_elem(raw.name.clone())?;
            }
            Step::Open(Node::Text(text)) => serializer.write_text(text)?,
            Step::Open(Node::Comment(text)) => serializer.write_comment(text)?,
            Step::Open(Node::Doctype(doctype)) => {
                serializer.write_doctype(&doctype_text(doctype))?
            }
            Step::Open(Node::ProcessingInstruction { target, data }) => {
                serializer.write_processing_instruction(target, data)?
            }
            Step::Close(name) => serializer.end_elem(name.clone())?,
            Step::EscapedText(text) => serializer.write_text(&escape(text))?,
        }
    }
    Ok(())
}

/// Steps for an element's children, last child first.
fn child_steps(element: &Element) -> impl Iterator<Item = Step<'_>> {
    let escape_text = holds_verbatim_text(element);
    element.children.iter().rev().map(move |child| match child {
        Node::Text(text) if escape_text => Step::EscapedText(text),
        _ => Step::Open(child),
    })
}

fn attr_refs(attrs: &[Attribute]) -> impl Iterator<Item = (&QualName, &str)> {
    attrs.iter().map(|attr| (&attr.name, &*attr.value))
}

/// Doctype body after `<!DOCTYPE `, with identifiers when present.
fn doctype_text(doctype: &Doctype) -> String {
    let Doctype {
        name,
        public_id,
        system_id,
    } = doctype;
    match (public_id.is_empty(), system_id.is_empty()) {
        (true, true) => name.clone(),
        (false, true) => format!("{name} PUBLIC \"{public_id}\""),
        (false, false) => format!("{name} PUBLIC \"{public_id}\" \"{system_id}\""),
        (true, false) => format!("{name} SYSTEM \"{system_id}\""),
    }
}

/// Elements whose text html5ever's serializer writes without escaping.
fn holds_verbatim_text(element: &Element) -> bool {
    &*element.name.ns == HTML_NAMESPACE
        && matches!(
            element.local_name(),
            "xmp" | "iframe" | "noembed" | "noframes" | "plaintext"
        )
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '\u{a0}' => escaped.push_str("&nbsp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            c => escaped.push(c),
        }
    }
    escaped
}
