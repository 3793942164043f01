//! Headless page behaviors for the Rendezvous site
//!
//! Each type here mirrors one of the page's independent event handlers as a
//! small state machine: the host wires document events in and applies the
//! returned style directives back to the tree. None of these share state with
//! each other or with the appointment form.

pub mod button;
pub mod debounce;
pub mod modal;
pub mod nav;
pub mod reveal;
pub mod scroll;

pub use button::ButtonPress;
pub use debounce::Debouncer;
pub use modal::{GalleryModal, ModalImage};
pub use nav::NavMenu;
pub use reveal::{LazyImages, RevealSet, RevealStyle};
pub use scroll::{anchor_scroll_target, HeaderAppearance, HeaderStyle};
