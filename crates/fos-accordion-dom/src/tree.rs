//! DOM Tree (arena-based allocation)

use crate::{Node, NodeId};

/// Arena-based DOM tree. Node 0 is always the document node.
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self { nodes: vec![Node::document()] }
    }

    /// Document node
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Allocate a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(Node::element(tag))
    }

    /// Allocate a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::text(content))
    }

    /// Append `child` as the last child of `parent`.
    /// Ignored if either id is unknown or `child` is already attached.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent == child || self.get(parent).is_none() {
            return;
        }
        match self.get(child) {
            Some(node) if !node.parent.is_valid() => {}
            _ => return,
        }

        let prev_last = self.nodes[parent.index()].last_child;
        if prev_last.is_valid() {
            self.nodes[prev_last.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        self.nodes[parent.index()].last_child = child;

        let node = &mut self.nodes[child.index()];
        node.parent = parent;
        node.prev_sibling = prev_last;
    }

    /// Iterate over direct children
    pub fn children(&self, parent: NodeId) -> Children<'_> {
        let next = self.get(parent).map_or(NodeId::NONE, |n| n.first_child);
        Children { tree: self, next }
    }

    /// Parent chain from `node` (exclusive) up to the document
    pub fn ancestors(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut cursor = self.get(node).map_or(NodeId::NONE, |n| n.parent);
        while cursor.is_valid() {
            out.push(cursor);
            cursor = self.nodes[cursor.index()].parent;
        }
        out
    }

    /// All nodes below `start` in pre-order
    pub fn descendants(&self, start: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(start).map(|(id, _)| id).collect();
        stack.reverse();
        while let Some(id) = stack.pop() {
            out.push(id);
            let before = stack.len();
            stack.extend(self.children(id).map(|(child, _)| child));
            stack[before..].reverse();
        }
        out
    }

    /// Concatenated text below `node`
    pub fn text_content(&self, node: NodeId) -> String {
        self.descendants(node)
            .into_iter()
            .filter_map(|id| self.get(id).and_then(Node::as_text))
            .collect()
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a node's children
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.next.is_valid() {
            return None;
        }
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_iterate() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let a = tree.create_element("h3");
        let b = tree.create_element("section");
        tree.append_child(tree.root(), div);
        tree.append_child(div, a);
        tree.append_child(div, b);

        let kids: Vec<NodeId> = tree.children(div).map(|(id, _)| id).collect();
        assert_eq!(kids, vec![a, b]);
        assert_eq!(tree.get(b).unwrap().prev_sibling, a);
        assert_eq!(tree.ancestors(b), vec![div, NodeId::ROOT]);
    }

    #[test]
    fn test_reattach_is_ignored() {
        let mut tree = DomTree::new();
        let a = tree.create_element("div");
        let b = tree.create_element("div");
        tree.append_child(tree.root(), a);
        tree.append_child(tree.root(), b);
        tree.append_child(a, b);

        assert_eq!(tree.children(a).count(), 0);
        assert_eq!(tree.children(tree.root()).count(), 2);
    }

    #[test]
    fn test_descendants_pre_order() {
        let mut tree = DomTree::new();
        let h = tree.create_element("h3");
        let button = tree.create_element("button");
        let label = tree.create_text("One");
        let panel = tree.create_element("div");
        tree.append_child(tree.root(), h);
        tree.append_child(h, button);
        tree.append_child(button, label);
        tree.append_child(tree.root(), panel);

        assert_eq!(tree.descendants(tree.root()), vec![h, button, label, panel]);
        assert_eq!(tree.text_content(h), "One");
    }
}
