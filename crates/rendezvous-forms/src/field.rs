//! Field identifiers, values, and per-field display state.

use serde::Serialize;
use std::fmt;

/// Errors produced while checking a single field's value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
	/// The field is empty, unselected, or unchecked.
	#[error("{0}")]
	Required(String),
	/// The field has a value, but the value fails its rule.
	#[error("{0}")]
	Validation(String),
	/// The field received a value of the wrong kind.
	#[error("{0}")]
	Invalid(String),
}

pub type FieldResult<T> = Result<T, FieldError>;

/// Identifier for one of the appointment form's seven fields.
///
/// The set is fixed at construction and [`FieldId::ALL`] lists the fields in
/// rule-table order, which is also the order whole-form validation walks them.
///
/// # Examples
///
/// ```
/// use rendezvous_forms::FieldId;
///
/// assert_eq!(FieldId::ALL.len(), 7);
/// assert_eq!(FieldId::Name.as_str(), "name");
/// assert_eq!(FieldId::Consent.error_element_id(), "consent-error");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
	Name,
	Email,
	Phone,
	Service,
	Date,
	Time,
	Consent,
}

impl FieldId {
	/// All fields in rule-table order.
	pub const ALL: [FieldId; 7] = [
		FieldId::Name,
		FieldId::Email,
		FieldId::Phone,
		FieldId::Service,
		FieldId::Date,
		FieldId::Time,
		FieldId::Consent,
	];

	/// The field's input element identifier.
	pub fn as_str(&self) -> &'static str {
		match self {
			FieldId::Name => "name",
			FieldId::Email => "email",
			FieldId::Phone => "phone",
			FieldId::Service => "service",
			FieldId::Date => "date",
			FieldId::Time => "time",
			FieldId::Consent => "consent",
		}
	}

	/// The identifier of the field's adjacent error-message element.
	pub fn error_element_id(&self) -> String {
		format!("{}-error", self.as_str())
	}

	/// Whether the field is the checkbox field.
	///
	/// Checkbox fields carry a [`FieldValue::Checked`] value and receive
	/// toggle events instead of text input.
	pub fn is_checkbox(&self) -> bool {
		matches!(self, FieldId::Consent)
	}
}

impl fmt::Display for FieldId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A field's current value: a boolean for checkbox fields, a string otherwise.
///
/// # Examples
///
/// ```
/// use rendezvous_forms::FieldValue;
///
/// let text = FieldValue::from("hello");
/// assert_eq!(text.text(), Some("hello"));
/// assert_eq!(text.checked(), None);
///
/// let checked = FieldValue::from(true);
/// assert_eq!(checked.checked(), Some(true));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
	Text(String),
	Checked(bool),
}

impl FieldValue {
	pub fn text(&self) -> Option<&str> {
		match self {
			FieldValue::Text(text) => Some(text),
			FieldValue::Checked(_) => None,
		}
	}

	pub fn checked(&self) -> Option<bool> {
		match self {
			FieldValue::Text(_) => None,
			FieldValue::Checked(checked) => Some(*checked),
		}
	}
}

impl From<&str> for FieldValue {
	fn from(text: &str) -> Self {
		FieldValue::Text(text.to_string())
	}
}

impl From<String> for FieldValue {
	fn from(text: String) -> Self {
		FieldValue::Text(text)
	}
}

impl From<bool> for FieldValue {
	fn from(checked: bool) -> Self {
		FieldValue::Checked(checked)
	}
}

/// Display directives for one field: the error class on the input, the text
/// of the error element, and the visibility class on the error element.
///
/// An error is displayed for a field if and only if the field's last
/// validation produced a message; the three parts always move together.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldDisplay {
	/// Whether the input element carries the error CSS class.
	pub error_class: bool,
	/// The error element's text content.
	pub message: String,
	/// Whether the error element carries the visibility CSS class.
	pub visible: bool,
}

impl FieldDisplay {
	pub(crate) fn show(&mut self, message: String) {
		self.error_class = true;
		self.message = message;
		self.visible = true;
	}

	pub(crate) fn clear(&mut self) {
		self.error_class = false;
		self.message.clear();
		self.visible = false;
	}

	/// Whether no error is currently displayed.
	pub fn is_clear(&self) -> bool {
		!self.error_class && self.message.is_empty() && !self.visible
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(FieldId::Name, "name")]
	#[case(FieldId::Email, "email")]
	#[case(FieldId::Phone, "phone")]
	#[case(FieldId::Service, "service")]
	#[case(FieldId::Date, "date")]
	#[case(FieldId::Time, "time")]
	#[case(FieldId::Consent, "consent")]
	fn test_field_id_as_str(#[case] id: FieldId, #[case] expected: &str) {
		assert_eq!(id.as_str(), expected);
		assert_eq!(id.error_element_id(), format!("{expected}-error"));
	}

	#[test]
	fn test_field_id_order_is_stable() {
		let names: Vec<&str> = FieldId::ALL.iter().map(|id| id.as_str()).collect();
		assert_eq!(
			names,
			vec!["name", "email", "phone", "service", "date", "time", "consent"]
		);
	}

	#[test]
	fn test_only_consent_is_checkbox() {
		for id in FieldId::ALL {
			assert_eq!(id.is_checkbox(), id == FieldId::Consent);
		}
	}

	#[test]
	fn test_display_show_and_clear() {
		// Arrange
		let mut display = FieldDisplay::default();
		assert!(display.is_clear());

		// Act
		display.show("Name is required".to_string());

		// Assert
		assert!(display.error_class);
		assert!(display.visible);
		assert_eq!(display.message, "Name is required");

		// Act
		display.clear();

		// Assert
		assert!(display.is_clear());
	}

	#[test]
	fn test_field_error_display_is_bare_message() {
		let err = FieldError::Validation("Please enter a valid email address".to_string());
		assert_eq!(err.to_string(), "Please enter a valid email address");
	}
}
