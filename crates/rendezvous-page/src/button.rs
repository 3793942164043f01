//! Press feedback for non-submit buttons.

use std::time::Duration;

/// Transform applied while a button is pressed.
pub const PRESS_SCALE: &str = "scale(0.98)";

/// How long the pressed transform is held before release.
pub const PRESS_HOLD: Duration = Duration::from_millis(150);

/// Click feedback state for a non-submit button. The submit control has its
/// own lifecycle in the forms crate and is excluded from this effect.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ButtonPress {
	pressed: bool,
}

impl ButtonPress {
	/// Applies the pressed transform; the host schedules the release after
	/// [`PRESS_HOLD`].
	pub fn press(&mut self) -> &'static str {
		self.pressed = true;
		PRESS_SCALE
	}

	/// Clears the transform.
	pub fn release(&mut self) -> &'static str {
		self.pressed = false;
		""
	}

	/// The button's current `transform` style value.
	pub fn transform(&self) -> &'static str {
		if self.pressed { PRESS_SCALE } else { "" }
	}

	pub fn is_pressed(&self) -> bool {
		self.pressed
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_press_then_release_round_trip() {
		let mut press = ButtonPress::default();
		assert_eq!(press.press(), "scale(0.98)");
		assert!(press.is_pressed());
		assert_eq!(press.transform(), "scale(0.98)");

		assert_eq!(press.release(), "");
		assert_eq!(press.transform(), "");
	}
}
