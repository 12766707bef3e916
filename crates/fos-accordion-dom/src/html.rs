//! HTML loading
//!
//! Uses html5ever's RcDom and converts it into our arena tree.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

use crate::{Document, DomError, DomTree, NodeId};

impl Document {
    /// Parse an HTML document. Fragments get wrapped in html/head/body.
    pub fn parse_html(html: &str) -> Result<Document, DomError> {
        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())?;

        let mut document = Document::empty();
        convert_node(&dom.document, document.tree_mut(), NodeId::ROOT);
        document.finalize();

        if !document.body().is_valid() {
            return Err(DomError::NoBody);
        }

        tracing::debug!("Parsed {} nodes", document.tree().len());
        Ok(document)
    }
}

/// Convert an RcDom node to our DOM format
fn convert_node(handle: &Handle, tree: &mut DomTree, parent: NodeId) {
    match &handle.data {
        RcNodeData::Document => {
            for child in handle.children.borrow().iter() {
                convert_node(child, tree, parent);
            }
        }
        RcNodeData::Text { contents } => {
            let text = contents.borrow().to_string();
            if !text.trim().is_empty() {
                let id = tree.create_text(&text);
                tree.append_child(parent, id);
            }
        }
        RcNodeData::Element { name, attrs, .. } => {
            let id = tree.create_element(&name.local);

            if let Some(elem) = tree.get_mut(id).and_then(|n| n.as_element_mut()) {
                for attr in attrs.borrow().iter() {
                    elem.set_attr(&attr.name.local, &attr.value);
                }
            }
            tree.append_child(parent, id);

            for child in handle.children.borrow().iter() {
                convert_node(child, tree, id);
            }
        }
        // doctype, comments, processing instructions
        _ => {}
    }
}
