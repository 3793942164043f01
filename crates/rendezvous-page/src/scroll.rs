//! Header scroll styling and anchor scroll targets.

use serde::Serialize;

/// Scroll depth past which the header tightens up.
pub const SCROLL_THRESHOLD: f64 = 100.0;

/// Gap kept between the header's bottom edge and a scrolled-to section.
pub const ANCHOR_GAP: f64 = 20.0;

/// The header's derived appearance at a given scroll position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderAppearance {
	pub background_alpha: f64,
	pub blur_px: f64,
}

impl HeaderAppearance {
	fn resting() -> Self {
		Self {
			background_alpha: 0.95,
			blur_px: 10.0,
		}
	}

	fn scrolled() -> Self {
		Self {
			background_alpha: 0.98,
			blur_px: 15.0,
		}
	}

	/// The header's `background` style value.
	pub fn background_css(&self) -> String {
		format!("rgba(255, 255, 255, {})", self.background_alpha)
	}

	/// The header's `backdrop-filter` style value.
	pub fn backdrop_filter_css(&self) -> String {
		format!("blur({}px)", self.blur_px)
	}
}

/// Tracks the header's appearance across scroll events.
///
/// # Examples
///
/// ```
/// use rendezvous_page::HeaderStyle;
///
/// let mut header = HeaderStyle::new();
/// assert_eq!(header.on_scroll(250.0).background_css(), "rgba(255, 255, 255, 0.98)");
/// assert_eq!(header.on_scroll(0.0).backdrop_filter_css(), "blur(10px)");
/// ```
#[derive(Debug, Clone)]
pub struct HeaderStyle {
	appearance: HeaderAppearance,
}

impl HeaderStyle {
	pub fn new() -> Self {
		Self {
			appearance: HeaderAppearance::resting(),
		}
	}

	/// Recomputes the appearance for the given vertical scroll position.
	pub fn on_scroll(&mut self, y: f64) -> &HeaderAppearance {
		self.appearance = if y > SCROLL_THRESHOLD {
			HeaderAppearance::scrolled()
		} else {
			HeaderAppearance::resting()
		};
		&self.appearance
	}

	pub fn appearance(&self) -> &HeaderAppearance {
		&self.appearance
	}
}

impl Default for HeaderStyle {
	fn default() -> Self {
		Self::new()
	}
}

/// The scroll position for a smooth-scrolled anchor link: the target's top
/// offset minus the fixed header's height minus [`ANCHOR_GAP`].
pub fn anchor_scroll_target(element_top: f64, header_height: f64) -> f64 {
	element_top - header_height - ANCHOR_GAP
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(0.0, 0.95, 10.0)]
	#[case(100.0, 0.95, 10.0)]
	#[case(100.5, 0.98, 15.0)]
	#[case(1_000.0, 0.98, 15.0)]
	fn test_threshold_is_exclusive(#[case] y: f64, #[case] alpha: f64, #[case] blur: f64) {
		// Arrange
		let mut header = HeaderStyle::new();

		// Act
		let appearance = header.on_scroll(y);

		// Assert
		assert_eq!(appearance.background_alpha, alpha);
		assert_eq!(appearance.blur_px, blur);
	}

	#[test]
	fn test_scrolling_back_up_restores_resting_style() {
		let mut header = HeaderStyle::new();
		header.on_scroll(500.0);
		assert_eq!(header.on_scroll(50.0), &HeaderAppearance::resting());
	}

	#[test]
	fn test_css_strings() {
		let appearance = HeaderAppearance::scrolled();
		assert_eq!(appearance.background_css(), "rgba(255, 255, 255, 0.98)");
		assert_eq!(appearance.backdrop_filter_css(), "blur(15px)");
	}

	#[rstest]
	#[case(500.0, 80.0, 400.0)]
	#[case(100.0, 80.0, 0.0)]
	fn test_anchor_scroll_target(#[case] top: f64, #[case] header: f64, #[case] expected: f64) {
		assert_eq!(anchor_scroll_target(top, header), expected);
	}
}
