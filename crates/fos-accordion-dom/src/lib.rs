//! fOS Accordion DOM
//!
//! Small arena DOM that hosts [`fos_accordion::Accordion`] controllers:
//! element tree, attributes, id lookup, listener table, focus tracking
//! and event dispatch with capture/target/bubble phases.

mod dispatch;
mod document;
mod html;
mod node;
mod tree;

pub use dispatch::{dispatch, key_down, propagation_path};
pub use document::{Document, Listener};
pub use node::{Attribute, ElementData, Node, NodeData};
pub use tree::DomTree;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);
    /// Sentinel for missing links
    pub const NONE: NodeId = NodeId(u32::MAX);

    #[inline]
    pub fn is_valid(&self) -> bool {
        *self != Self::NONE
    }

    #[inline]
    pub(crate) fn index(&self) -> usize {
        self.0 as usize
    }
}

/// DOM error
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("HTML read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document has no <body> element")]
    NoBody,
}
