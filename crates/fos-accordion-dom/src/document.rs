//! Document - High-level document API

use fos_accordion::{AccordionHost, EventKind};

use crate::{DomTree, NodeId};

/// A registered event listener
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listener {
    pub node: NodeId,
    pub kind: EventKind,
    pub capture: bool,
}

/// HTML Document
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Cached reference to <body> element
    body_element: NodeId,
    /// Element holding focus
    active_element: Option<NodeId>,
    /// Registered listeners, registration order
    listeners: Vec<Listener>,
}

impl Document {
    /// Create a new document with `<html><head/><body/></html>`
    pub fn new() -> Self {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        tree.append_child(tree.root(), html);
        tree.append_child(html, head);
        tree.append_child(html, body);

        Self {
            tree,
            body_element: body,
            active_element: None,
            listeners: Vec::new(),
        }
    }

    /// Create an empty document (no structure)
    pub fn empty() -> Self {
        Self {
            tree: DomTree::new(),
            body_element: NodeId::NONE,
            active_element: None,
            listeners: Vec::new(),
        }
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Locate `<body>` after the tree was filled externally
    pub(crate) fn finalize(&mut self) {
        self.body_element = self
            .tree
            .descendants(self.tree.root())
            .into_iter()
            .find(|&id| self.tag(id) == Some("body"))
            .unwrap_or(NodeId::NONE);
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// Create an element under `parent` with the given attributes
    pub fn append_element(&mut self, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let id = self.tree.create_element(tag);
        if let Some(elem) = self.tree.get_mut(id).and_then(|n| n.as_element_mut()) {
            for (name, value) in attrs {
                elem.set_attr(name, value);
            }
        }
        self.tree.append_child(parent, id);
        id
    }

    /// Append a text node under `parent`
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        let id = self.tree.create_text(text);
        self.tree.append_child(parent, id);
        id
    }

    /// Tag name of an element
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.tree.get(node)?.as_element().map(|e| e.tag.as_str())
    }

    /// Attribute value of an element
    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.tree.get(node)?.as_element()?.get_attr(name)
    }

    /// Get element by ID
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree
            .descendants(self.tree.root())
            .into_iter()
            .find(|&node| self.attr(node, "id") == Some(id))
    }

    /// Elements carrying `name`, in document order
    pub fn elements_with_attr(&self, name: &str) -> Vec<NodeId> {
        self.tree
            .descendants(self.tree.root())
            .into_iter()
            .filter(|&node| self.attr(node, name).is_some())
            .collect()
    }

    /// Element holding focus
    pub fn active(&self) -> Option<NodeId> {
        self.active_element
    }

    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    pub fn has_listener(&self, node: NodeId, kind: EventKind, capture: bool) -> bool {
        self.listeners.contains(&Listener { node, kind, capture })
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl AccordionHost for Document {
    type Node = NodeId;

    fn is_element(&self, node: NodeId) -> bool {
        self.tree.get(node).is_some_and(|n| n.is_element())
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.tree
            .children(node)
            .filter(|(_, n)| n.is_element())
            .map(|(id, _)| id)
            .collect()
    }

    fn tag_name(&self, node: NodeId) -> Option<String> {
        self.tag(node).map(str::to_string)
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.attr(node, name).map(str::to_string)
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(elem) = self.tree.get_mut(node).and_then(|n| n.as_element_mut()) {
            elem.set_attr(name, value);
        }
    }

    fn remove_attribute(&mut self, node: NodeId, name: &str) {
        if let Some(elem) = self.tree.get_mut(node).and_then(|n| n.as_element_mut()) {
            elem.remove_attr(name);
        }
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.get_element_by_id(id)
    }

    fn add_listener(&mut self, node: NodeId, kind: EventKind, capture: bool) {
        let listener = Listener { node, kind, capture };
        if !self.listeners.contains(&listener) {
            self.listeners.push(listener);
        }
    }

    fn remove_listener(&mut self, node: NodeId, kind: EventKind, capture: bool) {
        let listener = Listener { node, kind, capture };
        self.listeners.retain(|l| *l != listener);
    }

    fn focus(&mut self, node: NodeId) {
        if self.is_element(node) {
            tracing::trace!(?node, "focus");
            self.active_element = Some(node);
        }
    }

    fn active_element(&self) -> Option<NodeId> {
        self.active_element
    }
}
