//! Tree transforms applied between parsing and serialization.
//!
//! Transforms mutate a list of sibling nodes in place, the same way the
//! document root hands its children over:
//!
//! ```
//! use html_skeleton::dom::{attribute, Node};
//! use html_skeleton::transforms::{Transform, TreeCleaner};
//!
//! let mut nodes = vec![Node::element("p", vec![attribute("id", "x")], vec![Node::text("Hi")])];
//! TreeCleaner.transform(&mut nodes);
//!
//! assert_eq!(nodes, vec![Node::element("p", vec![], vec![Node::text("Hi")])]);
//! ```

mod cleaner;

pub use cleaner::{clean, TreeCleaner};

use crate::dom::Node;

/// A transformation that modifies sibling nodes in place.
///
/// Transforms are infallible. Nodes that should not survive are removed
/// from the vector, never reported as errors.
pub trait Transform {
    /// Apply this transformation to a list of siblings.
    fn transform(&mut self, nodes: &mut Vec<Node>);
}
