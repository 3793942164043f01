//! Appointment form validation and submission module.
//!
//! This module provides access to the form core: the field rule table,
//! field-level and whole-form validation passes, and the submission
//! lifecycle with its replaceable transport seam.
//!
//! # Examples
//!
//! ```
//! use rendezvous::forms::{AppointmentForm, FieldId};
//!
//! let mut form = AppointmentForm::new();
//! form.handle_input(FieldId::Name, "Al");
//! assert!(form.handle_blur(FieldId::Name));
//! ```

pub use rendezvous_forms::*;
