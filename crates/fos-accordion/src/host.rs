//! Host document contract
//!
//! The accordion never owns markup. Everything it knows about the tree,
//! attributes, listeners and focus comes through [`AccordionHost`].

use std::fmt::Debug;
use std::hash::Hash;

use crate::aria;
use crate::event::EventKind;

/// Markup layer the controller operates on.
///
/// `Node` is an opaque, cheap handle (an arena index, a pointer id, ...).
/// All methods take handles that may be stale; implementations answer
/// `None`/`false`/empty for nodes they do not know.
pub trait AccordionHost {
    type Node: Copy + Eq + Hash + Debug;

    /// Whether `node` is a live element of this document
    fn is_element(&self, node: Self::Node) -> bool;

    /// Direct element children, in document order
    fn children(&self, node: Self::Node) -> Vec<Self::Node>;

    /// Lowercase tag name of an element
    fn tag_name(&self, node: Self::Node) -> Option<String>;

    fn attribute(&self, node: Self::Node, name: &str) -> Option<String>;

    fn set_attribute(&mut self, node: Self::Node, name: &str, value: &str);

    fn remove_attribute(&mut self, node: Self::Node, name: &str);

    /// Resolve an id to an element
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    fn add_listener(&mut self, node: Self::Node, kind: EventKind, capture: bool);

    fn remove_listener(&mut self, node: Self::Node, kind: EventKind, capture: bool);

    /// Move logical focus to `node`
    fn focus(&mut self, node: Self::Node);

    fn active_element(&self) -> Option<Self::Node>;

    fn has_attribute(&self, node: Self::Node, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    /// ARIA boolean read; missing or anything but `"true"` is false
    fn bool_attribute(&self, node: Self::Node, name: &str) -> bool {
        aria::parse_bool(self.attribute(node, name).as_deref())
    }

    fn set_bool_attribute(&mut self, node: Self::Node, name: &str, value: bool) {
        self.set_attribute(node, name, aria::bool_str(value));
    }

    /// Element descendants of `node` in pre-order, excluding `node`
    fn descendants(&self, node: Self::Node) -> Vec<Self::Node> {
        let mut out = Vec::new();
        let mut stack: Vec<Self::Node> = self.children(node).into_iter().rev().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).into_iter().rev());
        }
        out
    }
}
