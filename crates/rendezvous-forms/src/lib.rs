//! Appointment form validation and submission for the Rendezvous booking page
//!
//! This crate is the headless core behind the page's appointment form:
//! - A fixed rule table mapping the seven field identifiers to validation
//!   rules, with the page's exact user-facing messages
//! - Field-level and whole-form validation passes that derive display
//!   directives (error classes, message text, visibility) for a host to
//!   mirror into the document
//! - The real-time policy: revalidate on blur, and on input only while an
//!   error is already showing
//! - A submission lifecycle (Idle → Submitting → Success → Idle) with a
//!   replaceable transport seam; the in-repo transport simulates a network
//!   round trip with a fixed delay

pub mod config;
pub mod field;
pub mod form;
pub mod rules;
pub mod submit;
pub mod validators;

pub use config::{ConfigError, FlowConfig};
pub use field::{FieldDisplay, FieldError, FieldId, FieldResult, FieldValue};
pub use form::{AppointmentForm, BookingRequest, FormError, FormResult};
pub use rules::FieldRule;
pub use submit::{
	SimulatedTransport, SubmissionPhase, SubmissionTransport, SubmitControl, SubmitFlow,
	SubmitOutcome, SuccessBanner, TransportError,
};
