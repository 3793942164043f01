//! # Rendezvous
//!
//! Headless client-side behavior core for the Rendezvous booking site.
//!
//! The site's behavior script is modeled as plain Rust state machines: the
//! crates own all state, transitions, and derived display directives (CSS
//! class flags, label text, visibility, scroll targets), while a thin host
//! adapter applies those directives to an actual document tree.
//!
//! ## Feature Flags
//!
//! - `forms` (default) - Appointment form validation and the submission
//!   lifecycle
//! - `page` (default) - Navigation menu, header scroll styling, reveal
//!   animations, lazy images, and the gallery modal
//! - `full` - All features enabled
//!
//! ## Example
//!
//! ```
//! # #[cfg(feature = "forms")]
//! use rendezvous::forms::{AppointmentForm, FieldId};
//!
//! # #[cfg(feature = "forms")]
//! # {
//! let mut form = AppointmentForm::new();
//! form.handle_input(FieldId::Email, "ada@example.com");
//! assert!(form.handle_blur(FieldId::Email));
//! # }
//! ```

#[cfg(feature = "forms")]
pub mod forms;

#[cfg(feature = "page")]
pub mod page;
