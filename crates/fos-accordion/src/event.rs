//! UI Events
//!
//! The slice of the host's event model the accordion listens to.

use crate::host::AccordionHost;

/// Event types the controller subscribes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Focus,
    KeyDown,
}

impl EventKind {
    /// Focus does not bubble; capture listeners still see it
    pub fn bubbles(&self) -> bool {
        !matches!(self, EventKind::Focus)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Focus => "focus",
            Self::KeyDown => "keydown",
        }
    }
}

/// Modifier keys held during a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { ctrl: false, shift: false, alt: false, meta: false };
    pub const CTRL: Modifiers = Modifiers { ctrl: true, shift: false, alt: false, meta: false };
}

/// Keys with accordion semantics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    PageUp,
    PageDown,
    End,
    Home,
    ArrowLeft,
    ArrowUp,
    ArrowRight,
    ArrowDown,
}

impl Key {
    /// Decode a legacy `KeyboardEvent.keyCode`
    pub fn from_code(code: u32) -> Option<Self> {
        Some(match code {
            13 => Self::Enter,
            32 => Self::Space,
            33 => Self::PageUp,
            34 => Self::PageDown,
            35 => Self::End,
            36 => Self::Home,
            37 => Self::ArrowLeft,
            38 => Self::ArrowUp,
            39 => Self::ArrowRight,
            40 => Self::ArrowDown,
            _ => return None,
        })
    }

    /// Decode a `KeyboardEvent.key` name
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "Enter" => Self::Enter,
            " " | "Space" | "Spacebar" => Self::Space,
            "PageUp" => Self::PageUp,
            "PageDown" => Self::PageDown,
            "End" => Self::End,
            "Home" => Self::Home,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowRight" | "Right" => Self::ArrowRight,
            "ArrowDown" | "Down" => Self::ArrowDown,
            _ => return None,
        })
    }

    pub fn code(&self) -> u32 {
        match self {
            Self::Enter => 13,
            Self::Space => 32,
            Self::PageUp => 33,
            Self::PageDown => 34,
            Self::End => 35,
            Self::Home => 36,
            Self::ArrowLeft => 37,
            Self::ArrowUp => 38,
            Self::ArrowRight => 39,
            Self::ArrowDown => 40,
        }
    }
}

/// A dispatched UI event
#[derive(Debug, Clone)]
pub struct UiEvent<N> {
    pub kind: EventKind,
    /// Node the event originated on
    pub target: N,
    /// Node whose listener is being run
    pub current_target: N,
    pub key_code: u32,
    pub modifiers: Modifiers,
    default_prevented: bool,
}

impl<N: Copy> UiEvent<N> {
    fn new(kind: EventKind, target: N) -> Self {
        Self {
            kind,
            target,
            current_target: target,
            key_code: 0,
            modifiers: Modifiers::NONE,
            default_prevented: false,
        }
    }

    /// Create click event
    pub fn click(target: N) -> Self {
        Self::new(EventKind::Click, target)
    }

    /// Create focus event
    pub fn focus(target: N) -> Self {
        Self::new(EventKind::Focus, target)
    }

    /// Create keydown event
    pub fn key_down(target: N, key: Key, modifiers: Modifiers) -> Self {
        Self::raw_key_down(target, key.code(), modifiers)
    }

    /// Keydown carrying a raw key code, including ones with no accordion meaning
    pub fn raw_key_down(target: N, key_code: u32, modifiers: Modifiers) -> Self {
        Self {
            key_code,
            modifiers,
            ..Self::new(EventKind::KeyDown, target)
        }
    }

    pub fn with_current_target(mut self, current_target: N) -> Self {
        self.current_target = current_target;
        self
    }

    pub fn key(&self) -> Option<Key> {
        Key::from_code(self.key_code)
    }

    /// Prevent default action
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Check if default was prevented
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Something a host dispatcher can hand events to
pub trait UiListener<H: AccordionHost> {
    fn handle_event(&mut self, host: &mut H, event: &mut UiEvent<H::Node>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_codes() {
        assert_eq!(Key::from_code(13), Some(Key::Enter));
        assert_eq!(Key::from_code(40), Some(Key::ArrowDown));
        assert_eq!(Key::from_code(9), None);
        assert_eq!(Key::from_code(Key::PageUp.code()), Some(Key::PageUp));
    }

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name(" "), Some(Key::Space));
        assert_eq!(Key::from_name("ArrowUp"), Some(Key::ArrowUp));
        assert_eq!(Key::from_name("Tab"), None);
    }

    #[test]
    fn test_event_defaults() {
        let mut event = UiEvent::key_down(7u32, Key::Home, Modifiers::CTRL);
        assert_eq!(event.kind, EventKind::KeyDown);
        assert_eq!(event.current_target, 7);
        assert_eq!(event.key(), Some(Key::Home));
        assert!(event.modifiers.ctrl);
        assert!(!event.is_default_prevented());

        event.prevent_default();
        assert!(event.is_default_prevented());
    }

    #[test]
    fn test_focus_does_not_bubble() {
        assert!(!EventKind::Focus.bubbles());
        assert!(EventKind::Click.bubbles());
        assert!(EventKind::KeyDown.bubbles());
    }
}
