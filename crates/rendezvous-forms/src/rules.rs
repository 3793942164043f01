//! The fixed field rule table.
//!
//! Exactly one rule exists per [`FieldId`]; the table is built once per form
//! with "today" bound into the date rule. Each rule owns both its required
//! check and its value check, so a single call yields the full verdict for a
//! field.

use crate::field::{FieldError, FieldId, FieldResult, FieldValue};
use crate::validators::{EmailValidator, FutureDateValidator, MinLengthValidator, PhoneValidator};
use chrono::NaiveDate;
use std::fmt;

/// User-facing validation messages, verbatim from the booking page.
pub mod messages {
	pub const NAME_REQUIRED: &str = "Name is required";
	pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
	pub const EMAIL_REQUIRED: &str = "Email is required";
	pub const EMAIL_INVALID: &str = "Please enter a valid email address";
	pub const PHONE_REQUIRED: &str = "Phone number is required";
	pub const PHONE_INVALID: &str = "Please enter a valid phone number";
	pub const SERVICE_REQUIRED: &str = "Please select a service";
	pub const DATE_REQUIRED: &str = "Please select a date";
	pub const DATE_INVALID: &str = "Please enter a valid date";
	pub const DATE_PAST: &str = "Please select a future date";
	pub const TIME_REQUIRED: &str = "Please select a time";
	pub const CONSENT_REQUIRED: &str = "Please agree to the terms and privacy policy";
}

type RuleFn = Box<dyn Fn(&FieldValue) -> FieldResult<()> + Send + Sync>;

/// The validation rule for one form field.
pub struct FieldRule {
	id: FieldId,
	check: RuleFn,
}

impl FieldRule {
	pub fn new<F>(id: FieldId, check: F) -> Self
	where
		F: Fn(&FieldValue) -> FieldResult<()> + Send + Sync + 'static,
	{
		Self {
			id,
			check: Box::new(check),
		}
	}

	pub fn id(&self) -> FieldId {
		self.id
	}

	/// Applies the rule to a value. `Ok(())` means valid; the error carries
	/// the user-facing message.
	pub fn check(&self, value: &FieldValue) -> FieldResult<()> {
		(self.check)(value)
	}
}

impl fmt::Debug for FieldRule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FieldRule").field("id", &self.id).finish()
	}
}

fn text_value(value: &FieldValue) -> FieldResult<&str> {
	value
		.text()
		.ok_or_else(|| FieldError::Invalid("Expected a text value".to_string()))
}

/// Builds the seven rules in table order.
pub(crate) fn rule_table(today: NaiveDate) -> Vec<FieldRule> {
	let name_length = MinLengthValidator::new(2).with_message(messages::NAME_TOO_SHORT);
	let email = EmailValidator::new().with_message(messages::EMAIL_INVALID);
	let phone = PhoneValidator::new().with_message(messages::PHONE_INVALID);
	let date = FutureDateValidator::new(today)
		.with_message(messages::DATE_PAST)
		.with_parse_message(messages::DATE_INVALID);

	vec![
		FieldRule::new(FieldId::Name, move |value| {
			let text = text_value(value)?;
			if text.trim().is_empty() {
				return Err(FieldError::Required(messages::NAME_REQUIRED.to_string()));
			}
			name_length.validate(text.trim())
		}),
		FieldRule::new(FieldId::Email, move |value| {
			let text = text_value(value)?;
			if text.trim().is_empty() {
				return Err(FieldError::Required(messages::EMAIL_REQUIRED.to_string()));
			}
			email.validate(text)
		}),
		FieldRule::new(FieldId::Phone, move |value| {
			let text = text_value(value)?;
			if text.trim().is_empty() {
				return Err(FieldError::Required(messages::PHONE_REQUIRED.to_string()));
			}
			phone.validate(text)
		}),
		FieldRule::new(FieldId::Service, |value| {
			let text = text_value(value)?;
			if text.is_empty() {
				return Err(FieldError::Required(messages::SERVICE_REQUIRED.to_string()));
			}
			Ok(())
		}),
		FieldRule::new(FieldId::Date, move |value| {
			let text = text_value(value)?;
			if text.is_empty() {
				return Err(FieldError::Required(messages::DATE_REQUIRED.to_string()));
			}
			date.validate(text)
		}),
		FieldRule::new(FieldId::Time, |value| {
			let text = text_value(value)?;
			if text.is_empty() {
				return Err(FieldError::Required(messages::TIME_REQUIRED.to_string()));
			}
			Ok(())
		}),
		FieldRule::new(FieldId::Consent, |value| {
			let checked = value
				.checked()
				.ok_or_else(|| FieldError::Invalid("Expected a checked value".to_string()))?;
			if !checked {
				return Err(FieldError::Required(messages::CONSENT_REQUIRED.to_string()));
			}
			Ok(())
		}),
	]
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn today() -> NaiveDate {
		NaiveDate::from_ymd_opt(2026, 8, 7).expect("valid date")
	}

	fn rule_for(id: FieldId) -> FieldRule {
		rule_table(today())
			.into_iter()
			.find(|rule| rule.id() == id)
			.expect("rule exists for every field")
	}

	#[test]
	fn test_table_covers_every_field_exactly_once() {
		// Arrange
		let table = rule_table(today());

		// Assert
		let ids: Vec<FieldId> = table.iter().map(|rule| rule.id()).collect();
		assert_eq!(ids, FieldId::ALL.to_vec());
	}

	#[rstest]
	#[case(FieldId::Name, messages::NAME_REQUIRED)]
	#[case(FieldId::Email, messages::EMAIL_REQUIRED)]
	#[case(FieldId::Phone, messages::PHONE_REQUIRED)]
	#[case(FieldId::Service, messages::SERVICE_REQUIRED)]
	#[case(FieldId::Date, messages::DATE_REQUIRED)]
	#[case(FieldId::Time, messages::TIME_REQUIRED)]
	fn test_empty_text_fields_use_required_message(#[case] id: FieldId, #[case] expected: &str) {
		// Arrange
		let rule = rule_for(id);

		// Act
		let result = rule.check(&FieldValue::from(""));

		// Assert
		match result {
			Err(err) => assert_eq!(err.to_string(), expected),
			Ok(()) => panic!("Expected empty value to be invalid for {id}"),
		}
	}

	#[test]
	fn test_unchecked_consent_uses_required_message() {
		// Arrange
		let rule = rule_for(FieldId::Consent);

		// Act
		let result = rule.check(&FieldValue::from(false));

		// Assert
		match result {
			Err(err) => assert_eq!(err.to_string(), messages::CONSENT_REQUIRED),
			Ok(()) => panic!("Expected unchecked consent to be invalid"),
		}
	}

	#[test]
	fn test_checked_consent_passes() {
		let rule = rule_for(FieldId::Consent);
		assert!(rule.check(&FieldValue::from(true)).is_ok());
	}

	#[rstest]
	#[case("A", messages::NAME_TOO_SHORT)]
	#[case(" A ", messages::NAME_TOO_SHORT)]
	fn test_name_too_short(#[case] value: &str, #[case] expected: &str) {
		// Arrange
		let rule = rule_for(FieldId::Name);

		// Act
		let result = rule.check(&FieldValue::from(value));

		// Assert
		match result {
			Err(err) => assert_eq!(err.to_string(), expected),
			Ok(()) => panic!("Expected '{value}' to be too short"),
		}
	}

	#[test]
	fn test_name_trims_before_counting() {
		let rule = rule_for(FieldId::Name);
		assert!(rule.check(&FieldValue::from("Al")).is_ok());
		assert!(rule.check(&FieldValue::from("  Al  ")).is_ok());
	}

	#[test]
	fn test_whitespace_only_name_is_required_not_short() {
		// Arrange
		let rule = rule_for(FieldId::Name);

		// Act
		let result = rule.check(&FieldValue::from("   "));

		// Assert
		match result {
			Err(err) => assert_eq!(err.to_string(), messages::NAME_REQUIRED),
			Ok(()) => panic!("Expected whitespace-only name to be invalid"),
		}
	}

	#[rstest]
	#[case("a@b", messages::EMAIL_INVALID)]
	#[case(" a@b.com", messages::EMAIL_INVALID)]
	fn test_email_shape_message(#[case] value: &str, #[case] expected: &str) {
		// The raw value is matched, so stray whitespace around an otherwise
		// valid address still fails the shape check.
		let rule = rule_for(FieldId::Email);
		match rule.check(&FieldValue::from(value)) {
			Err(err) => assert_eq!(err.to_string(), expected),
			Ok(()) => panic!("Expected '{value}' to be invalid"),
		}
	}

	#[rstest]
	#[case("555-1234")]
	#[case("555 123 456")]
	fn test_phone_too_short_after_stripping(#[case] value: &str) {
		let rule = rule_for(FieldId::Phone);
		match rule.check(&FieldValue::from(value)) {
			Err(err) => assert_eq!(err.to_string(), messages::PHONE_INVALID),
			Ok(()) => panic!("Expected '{value}' to be invalid"),
		}
	}

	#[rstest]
	#[case("2026-08-06", messages::DATE_PAST)]
	#[case("garbage", messages::DATE_INVALID)]
	fn test_date_messages(#[case] value: &str, #[case] expected: &str) {
		let rule = rule_for(FieldId::Date);
		match rule.check(&FieldValue::from(value)) {
			Err(err) => assert_eq!(err.to_string(), expected),
			Ok(()) => panic!("Expected '{value}' to be invalid"),
		}
	}

	#[test]
	fn test_today_is_accepted() {
		let rule = rule_for(FieldId::Date);
		assert!(rule.check(&FieldValue::from("2026-08-07")).is_ok());
	}

	#[test]
	fn test_wrong_value_kind_is_invalid_not_a_panic() {
		// Arrange
		let rule = rule_for(FieldId::Name);

		// Act
		let result = rule.check(&FieldValue::from(true));

		// Assert
		assert!(matches!(result, Err(FieldError::Invalid(_))));
	}
}
