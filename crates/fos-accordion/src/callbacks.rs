//! Show/hide notifications
//!
//! Subscribers run in insertion order. The same callback may be
//! registered twice and then runs twice.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// Subscriber invoked with `(header, panel)`
pub type Callback<N> = Rc<dyn Fn(N, N)>;

/// Notification kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notification {
    Show,
    Hide,
}

impl Notification {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Show => "show",
            Self::Hide => "hide",
        }
    }
}

impl FromStr for Notification {
    type Err = UnknownNotification;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "show" => Ok(Self::Show),
            "hide" => Ok(Self::Hide),
            other => Err(UnknownNotification(other.to_string())),
        }
    }
}

/// Returned when parsing a notification name other than `show`/`hide`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown notification kind: {0}")]
pub struct UnknownNotification(pub String);

/// Ordered subscriber lists for both notification kinds
pub struct CallbackRegistry<N> {
    show: Vec<Callback<N>>,
    hide: Vec<Callback<N>>,
}

impl<N: Copy> CallbackRegistry<N> {
    pub fn new() -> Self {
        Self { show: Vec::new(), hide: Vec::new() }
    }

    fn list(&self, kind: Notification) -> &Vec<Callback<N>> {
        match kind {
            Notification::Show => &self.show,
            Notification::Hide => &self.hide,
        }
    }

    fn list_mut(&mut self, kind: Notification) -> &mut Vec<Callback<N>> {
        match kind {
            Notification::Show => &mut self.show,
            Notification::Hide => &mut self.hide,
        }
    }

    pub fn subscribe(&mut self, kind: Notification, callback: Callback<N>) {
        self.list_mut(kind).push(callback);
    }

    /// Remove the first registration of `callback` (pointer identity).
    /// Returns whether anything was removed.
    pub fn unsubscribe(&mut self, kind: Notification, callback: &Callback<N>) -> bool {
        let list = self.list_mut(kind);
        match list.iter().position(|c| Rc::ptr_eq(c, callback)) {
            Some(pos) => {
                list.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn len(&self, kind: Notification) -> usize {
        self.list(kind).len()
    }

    pub fn is_empty(&self) -> bool {
        self.show.is_empty() && self.hide.is_empty()
    }

    pub fn trigger(&self, kind: Notification, header: N, panel: N) {
        for callback in self.list(kind) {
            callback(header, panel);
        }
    }
}

impl<N: Copy> Default for CallbackRegistry<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> fmt::Debug for CallbackRegistry<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("show", &self.show.len())
            .field("hide", &self.hide.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_parse_kind() {
        assert_eq!("show".parse::<Notification>(), Ok(Notification::Show));
        assert_eq!("hide".parse::<Notification>(), Ok(Notification::Hide));
        assert!("toggle".parse::<Notification>().is_err());
        assert!("Show".parse::<Notification>().is_err());
    }

    #[test]
    fn test_name_parses_back() {
        for kind in [Notification::Show, Notification::Hide] {
            assert_eq!(kind.name().parse::<Notification>(), Ok(kind));
        }
        assert_eq!(Notification::Hide.name(), "hide");
    }

    #[test]
    fn test_trigger_in_insertion_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry: CallbackRegistry<u32> = CallbackRegistry::new();

        let first = Rc::clone(&log);
        registry.subscribe(Notification::Show, Rc::new(move |h: u32, p: u32| first.borrow_mut().push(("first", h, p))));
        let second = Rc::clone(&log);
        registry.subscribe(Notification::Show, Rc::new(move |h: u32, p: u32| second.borrow_mut().push(("second", h, p))));

        registry.trigger(Notification::Show, 1u32, 2u32);
        registry.trigger(Notification::Hide, 1u32, 2u32);

        assert_eq!(*log.borrow(), vec![("first", 1, 2), ("second", 1, 2)]);
    }

    #[test]
    fn test_duplicate_registration_runs_twice() {
        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        let callback: Callback<u32> = Rc::new(move |_: u32, _: u32| *counter.borrow_mut() += 1);

        let mut registry: CallbackRegistry<u32> = CallbackRegistry::new();
        registry.subscribe(Notification::Hide, Rc::clone(&callback));
        registry.subscribe(Notification::Hide, Rc::clone(&callback));
        registry.trigger(Notification::Hide, 0, 0);
        assert_eq!(*count.borrow(), 2);

        assert!(registry.unsubscribe(Notification::Hide, &callback));
        assert_eq!(registry.len(Notification::Hide), 1);
    }

    #[test]
    fn test_unsubscribe_unknown_is_noop() {
        let mut registry: CallbackRegistry<u32> = CallbackRegistry::new();
        let callback: Callback<u32> = Rc::new(|_: u32, _: u32| {});
        assert!(!registry.unsubscribe(Notification::Show, &callback));
        assert!(registry.is_empty());
    }
}
