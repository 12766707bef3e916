//! fOS Accordion
//!
//! WAI-ARIA accordion behaviour for fOS documents.
//!
//! Features:
//! - Header/panel discovery from heading markup (`aria-controls`)
//! - Single-select and multiselectable expansion
//! - Roving header focus with wrap-around and disabled-header skipping
//! - `aria-expanded` / `aria-hidden` / `tabindex` synchronization
//! - `show` / `hide` notifications
//!
//! The controller talks to markup only through [`AccordionHost`]; events
//! reach it through [`UiListener::handle_event`].
//!
//! # Example
//! ```rust,ignore
//! use fos_accordion::{Accordion, UiListener};
//!
//! let mut accordion = Accordion::from_markup(&doc, container)?;
//! accordion.mount(&mut doc)?;
//! accordion.on("show", Rc::new(|header, panel| { /* ... */ }));
//! ```

pub mod aria;
mod callbacks;
mod config;
mod controller;
mod event;
mod host;

pub use callbacks::{Callback, CallbackRegistry, Notification, UnknownNotification};
pub use config::AccordionConfig;
pub use controller::{Accordion, Header, OpenPair};
pub use event::{EventKind, Key, Modifiers, UiEvent, UiListener};
pub use host::AccordionHost;

/// Accordion error
#[derive(Debug, thiserror::Error)]
pub enum AccordionError {
    #[error("No DOM node provided ({0}). Abort.")]
    InvalidContainer(String),

    #[error(
        "Could not find associated panel for header {header} (aria-controls=\"{controls}\"). \
         Use [aria-controls=\"panelId\"] on the header button to link them together"
    )]
    MissingPanel { header: String, controls: String },
}

pub type Result<T> = std::result::Result<T, AccordionError>;
