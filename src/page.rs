//! Page behavior module.
//!
//! This module provides access to the peripheral page behaviors: the mobile
//! navigation menu, header scroll styling, anchor scroll targets, reveal
//! animations, lazy images, the gallery modal, press feedback, and the
//! debounce helper.
//!
//! # Examples
//!
//! ```
//! use rendezvous::page::NavMenu;
//!
//! let mut nav = NavMenu::default();
//! assert!(nav.toggle());
//! ```

pub use rendezvous_page::*;
