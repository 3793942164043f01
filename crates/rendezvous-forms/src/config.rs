//! Submission flow configuration.

use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("invalid flow configuration: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Timing and labels for the submission lifecycle.
///
/// Every field has a default matching the booking page, so a partial TOML
/// document (or none at all) is enough.
///
/// # Examples
///
/// ```
/// use rendezvous_forms::FlowConfig;
///
/// let config = FlowConfig::default();
/// assert_eq!(config.submit_delay_ms, 2_000);
/// assert_eq!(config.busy_label, "Submitting...");
///
/// let config = FlowConfig::from_toml_str("submit_delay_ms = 50").expect("valid config");
/// assert_eq!(config.submit_delay_ms, 50);
/// assert_eq!(config.success_visible_ms, 5_000);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
	/// How long the simulated transport holds the Submitting state.
	pub submit_delay_ms: u64,
	/// How long the success banner stays visible before auto-dismissal.
	pub success_visible_ms: u64,
	/// The submit control's resting label.
	pub submit_label: String,
	/// The submit control's label while a delivery is pending.
	pub busy_label: String,
}

impl Default for FlowConfig {
	fn default() -> Self {
		Self {
			submit_delay_ms: 2_000,
			success_visible_ms: 5_000,
			submit_label: "Book Appointment".to_string(),
			busy_label: "Submitting...".to_string(),
		}
	}
}

impl FlowConfig {
	pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(raw)?)
	}

	pub fn submit_delay(&self) -> Duration {
		Duration::from_millis(self.submit_delay_ms)
	}

	pub fn success_visible(&self) -> Duration {
		Duration::from_millis(self.success_visible_ms)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults_match_the_page() {
		let config = FlowConfig::default();
		assert_eq!(config.submit_delay(), Duration::from_millis(2_000));
		assert_eq!(config.success_visible(), Duration::from_millis(5_000));
		assert_eq!(config.submit_label, "Book Appointment");
		assert_eq!(config.busy_label, "Submitting...");
	}

	#[test]
	fn test_partial_toml_keeps_defaults() {
		let config = FlowConfig::from_toml_str("busy_label = \"Sending...\"")
			.expect("partial config parses");
		assert_eq!(config.busy_label, "Sending...");
		assert_eq!(config.submit_delay_ms, 2_000);
	}

	#[test]
	fn test_malformed_toml_is_an_error() {
		let result = FlowConfig::from_toml_str("submit_delay_ms = \"soon\"");
		assert!(matches!(result, Err(ConfigError::Parse(_))));
	}
}
