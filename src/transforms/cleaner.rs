//! Script, style and attribute stripping.

use tracing::trace;

use super::Transform;
use crate::dom::Node;

/// Removes `<script>` and `<style>` subtrees and clears every element's
/// attributes, descending into surviving elements through a work stack
/// rather than call recursion.
///
/// - Script and style nodes are dropped without visiting their contents
/// - Every other node kind survives, in its original order
/// - Text and comments are never rewritten
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeCleaner;

impl Transform for TreeCleaner {
    fn transform(&mut self, nodes: &mut Vec<Node>) {
        let mut pending = vec![nodes];
        while let Some(siblings) = pending.pop() {
            let before = siblings.len();
            siblings.retain(|node| !node.is_script_or_style());
            if siblings.len() != before {
                trace!(removed = before - siblings.len(), "dropped script/style nodes");
            }

            for node in siblings {
                if let Node::Element(element) = node {
                    element.attrs.clear();
                    pending.push(&mut element.children);
                }
            }
        }
    }
}

/// Owned form of [`TreeCleaner`]: returns the surviving siblings.
pub fn clean(mut nodes: Vec<Node>) -> Vec<Node> {
    TreeCleaner.transform(&mut nodes);
    nodes
}
