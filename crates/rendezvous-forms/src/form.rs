//! The appointment form: rule table, current values, and display state.

use crate::field::{FieldDisplay, FieldError, FieldId, FieldValue};
use crate::rules::{rule_table, FieldRule};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
pub enum FormError {
	#[error("Field error in {field}: {error}")]
	Field { field: FieldId, error: FieldError },
	#[error("Validation error: {0}")]
	Validation(String),
}

pub type FormResult<T> = Result<T, FormError>;

/// Snapshot of the validated field values handed to the submission transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
	pub name: String,
	pub email: String,
	pub phone: String,
	pub service: String,
	pub date: NaiveDate,
	pub time: String,
	pub consent: bool,
}

/// The appointment form's validation core.
///
/// Owns one [`FieldRule`] per field, the fields' current values, and the
/// per-field display state a host mirrors into the document. Validity is
/// always derived on demand by re-running rules; it is never cached.
///
/// # Examples
///
/// ```
/// use rendezvous_forms::{AppointmentForm, FieldId};
///
/// let mut form = AppointmentForm::new();
/// form.handle_input(FieldId::Name, "Al");
/// assert!(form.handle_blur(FieldId::Name));
/// assert!(form.display(FieldId::Name).is_clear());
/// ```
pub struct AppointmentForm {
	rules: Vec<FieldRule>,
	values: HashMap<FieldId, FieldValue>,
	displays: HashMap<FieldId, FieldDisplay>,
	today: NaiveDate,
}

impl AppointmentForm {
	/// Creates a form whose date rule is anchored to the local calendar day.
	pub fn new() -> Self {
		Self::with_today(Local::now().date_naive())
	}

	/// Creates a form with a fixed "today", for deterministic behavior in
	/// tests and server-side rendering.
	///
	/// # Examples
	///
	/// ```
	/// use chrono::NaiveDate;
	/// use rendezvous_forms::{AppointmentForm, FieldId};
	///
	/// let today = NaiveDate::from_ymd_opt(2026, 8, 7).expect("valid date");
	/// let mut form = AppointmentForm::with_today(today);
	/// form.handle_input(FieldId::Date, "2026-08-06");
	/// assert!(!form.handle_blur(FieldId::Date));
	/// ```
	pub fn with_today(today: NaiveDate) -> Self {
		let mut values = HashMap::new();
		let mut displays = HashMap::new();
		for id in FieldId::ALL {
			values.insert(id, Self::initial_value(id));
			displays.insert(id, FieldDisplay::default());
		}
		Self {
			rules: rule_table(today),
			values,
			displays,
			today,
		}
	}

	fn initial_value(id: FieldId) -> FieldValue {
		if id.is_checkbox() {
			FieldValue::Checked(false)
		} else {
			FieldValue::Text(String::new())
		}
	}

	/// The field's current value.
	pub fn value(&self, id: FieldId) -> &FieldValue {
		static UNSET: FieldValue = FieldValue::Checked(false);
		self.values.get(&id).unwrap_or(&UNSET)
	}

	/// The field's current display directives.
	pub fn display(&self, id: FieldId) -> &FieldDisplay {
		static CLEAR: FieldDisplay = FieldDisplay {
			error_class: false,
			message: String::new(),
			visible: false,
		};
		self.displays.get(&id).unwrap_or(&CLEAR)
	}

	/// The date input's selectable minimum: the current calendar day.
	///
	/// This is a UI affordance; [`AppointmentForm::validate_field`] enforces
	/// the not-in-the-past rule independently.
	pub fn min_date(&self) -> NaiveDate {
		self.today
	}

	/// The `min` attribute value for the date input, in ISO 8601 form.
	pub fn min_date_value(&self) -> String {
		self.today.format("%Y-%m-%d").to_string()
	}

	/// Stores a text field's new value, revalidating only while the field
	/// currently shows an error so it clears as soon as the value is fixed.
	/// A field that has never shown an error is left alone on keystrokes.
	pub fn handle_input(&mut self, id: FieldId, value: impl Into<String>) {
		debug_assert!(!id.is_checkbox(), "checkbox fields receive handle_toggle");
		self.values.insert(id, FieldValue::Text(value.into()));
		if self.display(id).visible {
			self.validate_field(id);
		}
	}

	/// Stores a checkbox field's new state, with the same revalidation policy
	/// as [`AppointmentForm::handle_input`].
	pub fn handle_toggle(&mut self, id: FieldId, checked: bool) {
		debug_assert!(id.is_checkbox(), "text fields receive handle_input");
		self.values.insert(id, FieldValue::Checked(checked));
		if self.display(id).visible {
			self.validate_field(id);
		}
	}

	/// A field losing focus is always revalidated.
	pub fn handle_blur(&mut self, id: FieldId) -> bool {
		self.validate_field(id)
	}

	/// Validates one field and refreshes its display.
	///
	/// On failure the input's error class is set, the message is written into
	/// the error element, and the error is made visible; on success all three
	/// are cleared. Repeating the call with the same value always yields the
	/// same display state.
	pub fn validate_field(&mut self, id: FieldId) -> bool {
		let outcome = {
			let Some(rule) = self.rules.iter().find(|rule| rule.id() == id) else {
				return true;
			};
			let Some(value) = self.values.get(&id) else {
				return true;
			};
			rule.check(value)
		};

		match outcome {
			Ok(()) => {
				if let Some(display) = self.displays.get_mut(&id) {
					display.clear();
				}
				true
			}
			Err(err) => {
				let message = err.to_string();
				tracing::debug!(field = %id, message = %message, "field invalid");
				if let Some(display) = self.displays.get_mut(&id) {
					display.show(message);
				}
				false
			}
		}
	}

	/// Validates every field in table order without short-circuiting, so
	/// every field's display state is refreshed even after an earlier
	/// failure. Returns whether all fields passed.
	///
	/// # Examples
	///
	/// ```
	/// use rendezvous_forms::{AppointmentForm, FieldId};
	///
	/// let mut form = AppointmentForm::new();
	/// assert!(!form.validate_form());
	/// assert!(form.display(FieldId::Consent).visible);
	/// ```
	pub fn validate_form(&mut self) -> bool {
		let mut all_valid = true;
		for id in FieldId::ALL {
			if !self.validate_field(id) {
				all_valid = false;
			}
		}
		all_valid
	}

	/// The first field in table order currently showing an error; the focus
	/// target after a rejected submit attempt.
	pub fn first_invalid(&self) -> Option<FieldId> {
		FieldId::ALL
			.into_iter()
			.find(|id| self.display(*id).visible)
	}

	/// Restores every value and display to its initial empty state.
	pub fn reset(&mut self) {
		for id in FieldId::ALL {
			self.values.insert(id, Self::initial_value(id));
			if let Some(display) = self.displays.get_mut(&id) {
				display.clear();
			}
		}
	}

	/// Builds the transport payload from the current values.
	///
	/// Rules are re-run without touching any display state; the first failing
	/// field aborts the snapshot.
	pub fn booking(&self) -> FormResult<BookingRequest> {
		for rule in &self.rules {
			if let Some(value) = self.values.get(&rule.id()) {
				rule.check(value).map_err(|error| FormError::Field {
					field: rule.id(),
					error,
				})?;
			}
		}

		let text = |id: FieldId| -> String {
			self.values
				.get(&id)
				.and_then(|value| value.text())
				.unwrap_or_default()
				.to_string()
		};

		let date_text = text(FieldId::Date);
		let date = NaiveDate::parse_from_str(date_text.trim(), "%Y-%m-%d").map_err(|_| {
			FormError::Field {
				field: FieldId::Date,
				error: FieldError::Invalid("Expected an ISO 8601 date".to_string()),
			}
		})?;

		Ok(BookingRequest {
			name: text(FieldId::Name),
			email: text(FieldId::Email),
			phone: text(FieldId::Phone),
			service: text(FieldId::Service),
			date,
			time: text(FieldId::Time),
			consent: true,
		})
	}
}

impl Default for AppointmentForm {
	fn default() -> Self {
		Self::new()
	}
}
