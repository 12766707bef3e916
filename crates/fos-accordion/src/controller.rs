//! Accordion Controller
//!
//! Expand/collapse state, roving header focus and ARIA attribute sync for
//! one accordion container. Every expansion change goes through
//! [`Accordion::toggle`]; every focus move goes through `switch_panel`.

use std::fmt;

use tracing::{debug, trace, warn};

use crate::aria::{self, AriaRole};
use crate::callbacks::{Callback, CallbackRegistry, Notification};
use crate::config::AccordionConfig;
use crate::event::{EventKind, Key, UiEvent, UiListener};
use crate::host::AccordionHost;
use crate::{AccordionError, Result};

/// A header control discovered at mount
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header<N> {
    /// The `button[aria-controls]` element
    pub node: N,
    /// `disabled` or `aria-disabled="true"` at mount time
    pub disabled: bool,
    /// Panel id from `aria-controls`
    pub controls: String,
}

/// An expanded header and its panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenPair<N> {
    pub header: N,
    pub panel: N,
}

#[derive(Debug)]
struct AccordionState<N> {
    headers: Vec<Header<N>>,
    /// Parallel to `headers`
    panels: Vec<N>,
    /// Open order
    opened_indexes: Vec<usize>,
    current_index: Option<usize>,
    /// Form control whose next focus event is swallowed
    suppressed_focus: Option<N>,
    mounted: bool,
}

impl<N> Default for AccordionState<N> {
    fn default() -> Self {
        Self {
            headers: Vec::new(),
            panels: Vec::new(),
            opened_indexes: Vec::new(),
            current_index: None,
            suppressed_focus: None,
            mounted: false,
        }
    }
}

/// WAI-ARIA accordion bound to a container element of host `H`
pub struct Accordion<H: AccordionHost> {
    container: H::Node,
    config: AccordionConfig,
    state: AccordionState<H::Node>,
    callbacks: CallbackRegistry<H::Node>,
}

impl<H: AccordionHost> Accordion<H> {
    /// Create an unmounted controller for `container`.
    ///
    /// Fails with [`AccordionError::InvalidContainer`] when `container` is
    /// not an element of `host`.
    pub fn new(host: &H, container: H::Node, config: AccordionConfig) -> Result<Self> {
        if !host.is_element(container) {
            return Err(AccordionError::InvalidContainer(format!("{container:?}")));
        }

        Ok(Self {
            container,
            config,
            state: AccordionState::default(),
            callbacks: CallbackRegistry::new(),
        })
    }

    /// Create a controller configured from the container's
    /// `data-multiselectable` attribute
    pub fn from_markup(host: &H, container: H::Node) -> Result<Self> {
        let config = AccordionConfig::from_container(host, container);
        Self::new(host, container, config)
    }

    pub fn container(&self) -> H::Node {
        self.container
    }

    pub fn config(&self) -> &AccordionConfig {
        &self.config
    }

    pub fn is_multiselectable(&self) -> bool {
        self.config.multiselectable
    }

    pub fn is_mounted(&self) -> bool {
        self.state.mounted
    }

    pub fn headers(&self) -> &[Header<H::Node>] {
        &self.state.headers
    }

    pub fn panels(&self) -> &[H::Node] {
        &self.state.panels
    }

    /// Number of header/panel pairs
    pub fn len(&self) -> usize {
        self.state.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.headers.is_empty()
    }

    /// Header last known to hold focus
    pub fn current_index(&self) -> Option<usize> {
        self.state.current_index
    }

    pub fn opened_indexes(&self) -> &[usize] {
        &self.state.opened_indexes
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.state.opened_indexes.contains(&index)
    }

    /// Open header/panel pairs in the order they were opened
    pub fn current(&self) -> Vec<OpenPair<H::Node>> {
        self.state
            .opened_indexes
            .iter()
            .map(|&index| OpenPair {
                header: self.state.headers[index].node,
                panel: self.state.panels[index],
            })
            .collect()
    }

    fn header_index(&self, node: H::Node) -> Option<usize> {
        self.state.headers.iter().position(|h| h.node == node)
    }

    fn panel_index(&self, node: H::Node) -> Option<usize> {
        self.state.panels.iter().position(|&p| p == node)
    }

    fn first_active_header(&self) -> Option<usize> {
        self.state.headers.iter().position(|h| !h.disabled)
    }

    fn last_active_header(&self) -> Option<usize> {
        self.state.headers.iter().rposition(|h| !h.disabled)
    }

    /// Parse the container's children into header/panel pairs, apply
    /// initial ARIA state and register listeners.
    ///
    /// Mounting an already mounted accordion unmounts it first. On
    /// [`AccordionError::MissingPanel`] the pairs found so far stay
    /// registered; call [`Accordion::unmount`] or mount again.
    pub fn mount(&mut self, host: &mut H) -> Result<()> {
        if self.state.mounted {
            self.unmount(host);
        }

        self.state = AccordionState::default();
        self.state.mounted = true;

        for child in host.children(self.container) {
            if !is_heading(&*host, child) {
                continue;
            }

            let Some(header) = find_control(&*host, child) else {
                trace!(?child, "heading without an aria-controls button");
                continue;
            };

            let controls = host.attribute(header, aria::ARIA_CONTROLS).unwrap_or_default();
            let Some(panel) = host.element_by_id(&controls) else {
                let header_id = host.attribute(header, aria::ID).unwrap_or_default();
                warn!(header = %header_id, controls = %controls, "accordion panel not found");
                return Err(AccordionError::MissingPanel { header: header_id, controls });
            };

            let disabled = host.has_attribute(header, aria::DISABLED)
                || host.bool_attribute(header, aria::ARIA_DISABLED);

            let index = self.state.headers.len();
            self.state.headers.push(Header { node: header, disabled, controls });
            self.state.panels.push(panel);

            let mut opened = false;
            if host.bool_attribute(header, aria::DATA_EXPAND) && !disabled {
                // single-select: only the first marked header opens
                if self.config.multiselectable || self.state.opened_indexes.is_empty() {
                    self.toggle(host, index, Some(true));
                    opened = true;
                }
            }

            host.remove_attribute(header, aria::DATA_EXPAND);

            host.set_attribute(header, aria::TABINDEX, aria::HEADER_TABINDEX);
            host.set_bool_attribute(header, aria::ARIA_EXPANDED, opened);
            host.set_bool_attribute(panel, aria::ARIA_HIDDEN, !opened);

            host.add_listener(header, EventKind::Click, false);
            host.add_listener(header, EventKind::Focus, false);
            host.add_listener(header, EventKind::KeyDown, false);
            host.add_listener(panel, EventKind::Focus, true);
            host.add_listener(panel, EventKind::KeyDown, false);
        }

        debug!(
            headers = self.state.headers.len(),
            opened = self.state.opened_indexes.len(),
            multiselectable = self.config.multiselectable,
            "accordion mounted"
        );
        Ok(())
    }

    /// Remove listeners and header attributes. Panels are left visible
    /// (`aria-hidden="false"`). The controller must be mounted again
    /// before further use.
    pub fn unmount(&mut self, host: &mut H) {
        if !self.state.mounted {
            return;
        }

        for (header, &panel) in self.state.headers.iter().zip(&self.state.panels) {
            host.remove_listener(header.node, EventKind::Click, false);
            host.remove_listener(header.node, EventKind::Focus, false);
            host.remove_listener(header.node, EventKind::KeyDown, false);

            host.remove_attribute(header.node, aria::TABINDEX);
            host.remove_attribute(header.node, aria::ARIA_EXPANDED);

            host.remove_listener(panel, EventKind::Focus, true);
            host.remove_listener(panel, EventKind::KeyDown, false);
            host.set_bool_attribute(panel, aria::ARIA_HIDDEN, false);
        }

        debug!(headers = self.state.headers.len(), "accordion unmounted");
        self.state = AccordionState::default();
    }

    /// Show or hide the panel at `index`; `None` flips its state.
    ///
    /// Requests matching the current state are ignored and fire nothing.
    /// Opening in single-select mode closes the open panel first.
    pub fn toggle(&mut self, host: &mut H, index: usize, show: Option<bool>) {
        let Some(header) = self.state.headers.get(index).map(|h| h.node) else {
            trace!(index, "toggle out of range");
            return;
        };
        let panel = self.state.panels[index];

        let displayed = self.is_open(index);
        let show = show.unwrap_or(!displayed);
        if show == displayed {
            return;
        }

        if show && !self.config.multiselectable {
            if let Some(&previous) = self.state.opened_indexes.first() {
                self.toggle(host, previous, Some(false));
            }
        }

        host.set_bool_attribute(header, aria::ARIA_EXPANDED, show);
        host.set_bool_attribute(panel, aria::ARIA_HIDDEN, !show);

        if show {
            self.state.opened_indexes.push(index);
            debug!(index, "accordion panel shown");
            self.callbacks.trigger(Notification::Show, header, panel);
        } else {
            self.state.opened_indexes.retain(|&i| i != index);
            debug!(index, "accordion panel hidden");
            self.callbacks.trigger(Notification::Hide, header, panel);
        }
    }

    /// Expand `panel`; unknown panels are ignored
    pub fn open(&mut self, host: &mut H, panel: H::Node) {
        if let Some(index) = self.panel_index(panel) {
            self.toggle(host, index, Some(true));
        }
    }

    /// Collapse `panel`; unknown panels are ignored
    pub fn close(&mut self, host: &mut H, panel: H::Node) {
        if let Some(index) = self.panel_index(panel) {
            self.toggle(host, index, Some(false));
        }
    }

    /// Expand every panel. Does nothing unless multiselectable.
    pub fn open_all(&mut self, host: &mut H) {
        if !self.config.multiselectable {
            return;
        }
        for index in 0..self.state.panels.len() {
            self.toggle(host, index, Some(true));
        }
    }

    pub fn close_all(&mut self, host: &mut H) {
        for index in 0..self.state.panels.len() {
            self.toggle(host, index, Some(false));
        }
    }

    /// Subscribe to `"show"` or `"hide"`. Other names are ignored.
    pub fn on(&mut self, event: &str, callback: Callback<H::Node>) {
        match event.parse::<Notification>() {
            Ok(kind) => {
                trace!(kind = kind.name(), "accordion subscription added");
                self.subscribe(kind, callback);
            }
            Err(err) => trace!(%err, "subscription ignored"),
        }
    }

    /// Remove a callback registered with [`Accordion::on`]
    pub fn off(&mut self, event: &str, callback: &Callback<H::Node>) {
        if let Ok(kind) = event.parse::<Notification>() {
            let removed = self.unsubscribe(kind, callback);
            trace!(kind = kind.name(), removed, "accordion subscription removed");
        }
    }

    pub fn subscribe(&mut self, kind: Notification, callback: Callback<H::Node>) {
        self.callbacks.subscribe(kind, callback);
    }

    pub fn unsubscribe(&mut self, kind: Notification, callback: &Callback<H::Node>) -> bool {
        self.callbacks.unsubscribe(kind, callback)
    }

    /// Move focus to the header at `target`, skipping disabled headers in
    /// the direction of travel and wrapping at both ends.
    fn switch_panel(&mut self, host: &mut H, target: isize) {
        let Some(first_active) = self.first_active_header() else {
            trace!("no enabled accordion header to focus");
            return;
        };
        let len = self.state.headers.len() as isize;

        let forward = self.state.current_index.is_some_and(|current| target > current as isize);
        let mut index = target;
        while (0..len).contains(&index) && self.state.headers[index as usize].disabled {
            index += if forward { 1 } else { -1 };
        }

        let current = if index < first_active as isize {
            self.last_active_header().unwrap_or(first_active)
        } else if index >= len {
            first_active
        } else {
            index as usize
        };

        trace!(requested = target, current, "accordion focus moved");
        self.state.current_index = Some(current);
        host.focus(self.state.headers[current].node);
    }

    fn step_from_current(&mut self, host: &mut H, delta: isize) {
        if let Some(current) = self.state.current_index {
            self.switch_panel(host, current as isize + delta);
        }
    }

    /// Click, Enter or Space on a header
    fn handle_display(&mut self, host: &mut H, event: &mut UiEvent<H::Node>) {
        event.prevent_default();

        let header = event.current_target;
        let Some(index) = self.header_index(header) else {
            return;
        };
        if self.state.headers[index].disabled {
            return;
        }

        if host.active_element() != Some(header) {
            host.focus(header);
        }
        self.state.current_index = Some(index);

        self.toggle(host, index, None);
    }

    fn handle_focus(&mut self, event: &UiEvent<H::Node>) {
        let Some(index) = self.header_index(event.current_target) else {
            return;
        };
        if self.state.headers[index].disabled {
            return;
        }
        self.state.current_index = Some(index);
    }

    fn handle_headers(&mut self, host: &mut H, event: &mut UiEvent<H::Node>) {
        if self.state.current_index.is_none() {
            self.handle_focus(event);
        }

        let Some(key) = event.key() else {
            return;
        };

        match key {
            Key::Space | Key::Enter => self.handle_display(host, event),
            Key::End => {
                event.prevent_default();
                self.switch_panel(host, self.state.headers.len() as isize - 1);
            }
            Key::Home => {
                event.prevent_default();
                if let Some(first) = self.first_active_header() {
                    self.switch_panel(host, first as isize);
                }
            }
            Key::ArrowLeft | Key::ArrowUp => {
                event.prevent_default();
                self.step_from_current(host, -1);
            }
            Key::ArrowRight | Key::ArrowDown => {
                event.prevent_default();
                self.step_from_current(host, 1);
            }
            Key::PageUp | Key::PageDown => {}
        }
    }

    fn handle_panel_focus(&mut self, host: &H, event: &mut UiEvent<H::Node>) {
        if self.state.suppressed_focus == Some(event.target) {
            event.prevent_default();
            self.state.suppressed_focus = None;
            return;
        }

        let Some(index) = self.panel_index(event.current_target) else {
            return;
        };
        self.state.current_index = Some(index);

        // radios and checkboxes re-fire focus when activated
        let tag = host.tag_name(event.target).unwrap_or_default();
        let input_type = host.attribute(event.target, aria::TYPE);
        if aria::is_toggle_input(&tag, input_type.as_deref()) {
            self.state.suppressed_focus = Some(event.target);
        }
    }

    fn handle_panel(&mut self, host: &mut H, event: &mut UiEvent<H::Node>) {
        if self.state.current_index.is_none() {
            self.handle_panel_focus(host, event);
        }

        if !event.modifiers.ctrl {
            return;
        }

        match event.key() {
            Some(Key::PageUp) => {
                event.prevent_default();
                self.step_from_current(host, -1);
            }
            Some(Key::PageDown) => {
                event.prevent_default();
                self.step_from_current(host, 1);
            }
            // back to the panel's own header
            Some(Key::ArrowUp) => {
                event.prevent_default();
                self.step_from_current(host, 0);
            }
            _ => {}
        }
    }
}

impl<H: AccordionHost> UiListener<H> for Accordion<H> {
    fn handle_event(&mut self, host: &mut H, event: &mut UiEvent<H::Node>) {
        if !self.state.mounted {
            return;
        }

        let node = event.current_target;
        if self.header_index(node).is_some() {
            match event.kind {
                EventKind::Click => self.handle_display(host, event),
                EventKind::Focus => self.handle_focus(event),
                EventKind::KeyDown => self.handle_headers(host, event),
            }
        } else if self.panel_index(node).is_some() {
            match event.kind {
                EventKind::Focus => self.handle_panel_focus(host, event),
                EventKind::KeyDown => self.handle_panel(host, event),
                EventKind::Click => {}
            }
        }
    }
}

impl<H: AccordionHost> fmt::Debug for Accordion<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accordion")
            .field("container", &self.container)
            .field("config", &self.config)
            .field("state", &self.state)
            .field("callbacks", &self.callbacks)
            .finish()
    }
}

/// `h1`-`h6`, `role="heading"` or anything carrying `aria-level`
fn is_heading<H: AccordionHost>(host: &H, node: H::Node) -> bool {
    host.tag_name(node).is_some_and(|tag| aria::is_heading_tag(&tag))
        || host.attribute(node, aria::ROLE).and_then(|r| AriaRole::parse(&r)) == Some(AriaRole::Heading)
        || host.has_attribute(node, aria::ARIA_LEVEL)
}

/// First `button[aria-controls]` or `[role="button"][aria-controls]` below `heading`
fn find_control<H: AccordionHost>(host: &H, heading: H::Node) -> Option<H::Node> {
    host.descendants(heading).into_iter().find(|&node| {
        host.has_attribute(node, aria::ARIA_CONTROLS)
            && (host.tag_name(node).as_deref() == Some("button")
                || host.attribute(node, aria::ROLE).and_then(|r| AriaRole::parse(&r)) == Some(AriaRole::Button))
    })
}
