//! Event dispatch
//!
//! Runs a [`UiEvent`] through capture, target and bubble phases, handing
//! it to every listener at each node that registered for it.

use fos_accordion::{AccordionHost, EventKind, Key, Modifiers, UiEvent, UiListener};

use crate::{Document, NodeId};

/// Nodes whose listeners run for `kind` fired at `target`, in order.
/// Each entry is `(current_target, capture)`.
pub fn propagation_path(doc: &Document, kind: EventKind, target: NodeId) -> Vec<(NodeId, bool)> {
    let ancestors = doc.tree().ancestors(target);
    let mut path = Vec::new();

    // capture: document down to the parent
    for &node in ancestors.iter().rev() {
        if doc.has_listener(node, kind, true) {
            path.push((node, true));
        }
    }

    // target: capture listeners first
    if doc.has_listener(target, kind, true) {
        path.push((target, true));
    }
    if doc.has_listener(target, kind, false) {
        path.push((target, false));
    }

    if kind.bubbles() {
        for &node in &ancestors {
            if doc.has_listener(node, kind, false) {
                path.push((node, false));
            }
        }
    }

    path
}

/// Dispatch `event` to `listeners` along its propagation path.
///
/// Focus events move the document's active element before listeners run.
/// Returns whether any listener prevented the default action.
pub fn dispatch(doc: &mut Document, listeners: &mut [&mut dyn UiListener<Document>], mut event: UiEvent<NodeId>) -> bool {
    if event.kind == EventKind::Focus {
        doc.focus(event.target);
    }

    let path = propagation_path(doc, event.kind, event.target);
    tracing::trace!(kind = event.kind.name(), target = ?event.target, steps = path.len(), "dispatch");

    for (node, _) in path {
        event.current_target = node;
        for listener in listeners.iter_mut() {
            listener.handle_event(doc, &mut event);
        }
    }

    event.is_default_prevented()
}

/// Fire a keydown at the focused element (or `<body>`)
pub fn key_down(doc: &mut Document, listeners: &mut [&mut dyn UiListener<Document>], key: Key, modifiers: Modifiers) -> bool {
    let target = doc.active().unwrap_or_else(|| doc.body());
    dispatch(doc, listeners, UiEvent::key_down(target, key, modifiers))
}
