//! Reusable validators for appointment form fields
//!
//! This module provides the value-level checks behind the field rule table:
//! minimum length, email shape, phone shape, and the not-in-the-past date
//! rule. Required/empty checks live in the rule table itself.

use crate::field::{FieldError, FieldResult};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

// Simple local@domain.tld pattern.
//
// Accepts any non-whitespace, non-@ characters on either side of a single
// `@`, with at least one `.` after it.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

// Dialable phone pattern: at least 10 characters drawn from digits, spaces,
// hyphens, parentheses, and the plus sign. Matched after whitespace is
// stripped from the value.
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[\d\s\-()+]{10,}$").expect("PHONE_REGEX: invalid regex pattern")
});

// Date inputs submit ISO 8601 calendar dates.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validates that a string value has at least a minimum number of characters.
///
/// # Examples
///
/// ```
/// use rendezvous_forms::validators::MinLengthValidator;
///
/// let validator = MinLengthValidator::new(2);
/// assert!(validator.validate("Al").is_ok());
/// assert!(validator.validate("A").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MinLengthValidator {
	min: usize,
	/// Optional custom error message shown on validation failure
	message: Option<String>,
}

impl MinLengthValidator {
	/// Creates a new `MinLengthValidator` with the given minimum.
	pub fn new(min: usize) -> Self {
		Self { min, message: None }
	}

	/// Sets a custom error message returned on validation failure.
	///
	/// # Examples
	///
	/// ```
	/// use rendezvous_forms::validators::MinLengthValidator;
	///
	/// let validator = MinLengthValidator::new(2).with_message("Name must be at least 2 characters");
	/// assert!(validator.validate("A").is_err());
	/// ```
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// Validates the given string slice against the minimum length.
	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if value.chars().count() >= self.min {
			Ok(())
		} else {
			let msg = self
				.message
				.clone()
				.unwrap_or_else(|| format!("Must be at least {} characters", self.min));
			Err(FieldError::Validation(msg))
		}
	}
}

/// Validates that a string value looks like a `local@domain.tld` address.
///
/// The validator checks:
/// - Exactly one `@`, with no whitespace on either side of it
/// - At least one `.` after the `@`
///
/// This is deliberately a shape check, not an RFC 5322 parser; the address is
/// never dereferenced client-side.
///
/// # Examples
///
/// ```
/// use rendezvous_forms::validators::EmailValidator;
///
/// let validator = EmailValidator::new();
/// assert!(validator.validate("a@b.com").is_ok());
/// assert!(validator.validate("a@b").is_err());
/// assert!(validator.validate("not an email").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct EmailValidator {
	/// Optional custom error message shown on validation failure
	message: Option<String>,
}

impl EmailValidator {
	/// Creates a new `EmailValidator` with default settings.
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom error message returned on validation failure.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// Validates the given string slice as an email address.
	///
	/// Returns `Ok(())` when the address is well shaped, or a
	/// [`FieldError::Validation`] containing an error message when it is not.
	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if EMAIL_REGEX.is_match(value) {
			Ok(())
		} else {
			let msg = self.message.as_deref().unwrap_or("Enter a valid email address");
			Err(FieldError::Validation(msg.to_string()))
		}
	}
}

impl Default for EmailValidator {
	fn default() -> Self {
		Self::new()
	}
}

/// Validates that a string value is a dialable phone number.
///
/// Whitespace is stripped first; what remains must be at least 10 characters
/// drawn from digits, hyphens, parentheses, and the plus sign.
///
/// # Examples
///
/// ```
/// use rendezvous_forms::validators::PhoneValidator;
///
/// let validator = PhoneValidator::new();
/// assert!(validator.validate("555-123-4567").is_ok());
/// assert!(validator.validate("+1 (555) 123-4567").is_ok());
/// assert!(validator.validate("555-1234").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PhoneValidator {
	/// Optional custom error message shown on validation failure
	message: Option<String>,
}

impl PhoneValidator {
	/// Creates a new `PhoneValidator` with default settings.
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom error message returned on validation failure.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// Validates the given string slice as a phone number.
	pub fn validate(&self, value: &str) -> FieldResult<()> {
		let stripped: String = value.chars().filter(|c| !c.is_whitespace()).collect();
		if PHONE_REGEX.is_match(&stripped) {
			Ok(())
		} else {
			let msg = self.message.as_deref().unwrap_or("Enter a valid phone number");
			Err(FieldError::Validation(msg.to_string()))
		}
	}
}

impl Default for PhoneValidator {
	fn default() -> Self {
		Self::new()
	}
}

/// Validates that an ISO 8601 date is today or later.
///
/// "Today" is fixed at construction so that the form's `min` attribute
/// affordance and this rule can never disagree within one form instance.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rendezvous_forms::validators::FutureDateValidator;
///
/// let today = NaiveDate::from_ymd_opt(2026, 8, 7).expect("valid date");
/// let validator = FutureDateValidator::new(today);
/// assert!(validator.validate("2026-08-07").is_ok());
/// assert!(validator.validate("2026-08-06").is_err());
/// assert!(validator.validate("not a date").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct FutureDateValidator {
	today: NaiveDate,
	/// Optional custom error message for a date in the past
	message: Option<String>,
	/// Optional custom error message for a value that is not a date
	parse_message: Option<String>,
}

impl FutureDateValidator {
	/// Creates a new `FutureDateValidator` with "today" as its lower bound.
	pub fn new(today: NaiveDate) -> Self {
		Self {
			today,
			message: None,
			parse_message: None,
		}
	}

	/// Sets a custom error message for dates in the past.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// Sets a custom error message for values that do not parse as a date.
	pub fn with_parse_message(mut self, message: impl Into<String>) -> Self {
		self.parse_message = Some(message.into());
		self
	}

	/// Validates the given string slice as a not-in-the-past calendar date.
	///
	/// Today itself is accepted; only strictly earlier dates are rejected.
	pub fn validate(&self, value: &str) -> FieldResult<()> {
		let date = NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
			let msg = self.parse_message.as_deref().unwrap_or("Enter a valid date");
			FieldError::Validation(msg.to_string())
		})?;

		if date < self.today {
			let msg = self.message.as_deref().unwrap_or("Date must not be in the past");
			return Err(FieldError::Validation(msg.to_string()));
		}
		Ok(())
	}
}
