//! Visibility-driven reveal animations and lazy image opacity.

use serde::Serialize;
use std::collections::HashMap;

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Root margin for the reveal observer; the negative bottom edge keeps
/// elements hidden until they are well inside the viewport.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Transition applied to revealed elements.
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

/// Transition applied to lazily loaded images.
pub const LAZY_TRANSITION: &str = "opacity 0.3s ease";

/// Style directives for an observed element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RevealStyle {
	pub opacity: f64,
	pub translate_y_px: f64,
}

impl RevealStyle {
	fn hidden() -> Self {
		Self {
			opacity: 0.0,
			translate_y_px: 30.0,
		}
	}

	fn revealed() -> Self {
		Self {
			opacity: 1.0,
			translate_y_px: 0.0,
		}
	}
}

/// Bookkeeping for scroll-triggered fade-ins.
///
/// The host observes each animated element (service cards, testimonials,
/// gallery items) and reports visibility callbacks; reveals are sticky, so a
/// repeated callback for the same element changes nothing.
///
/// # Examples
///
/// ```
/// use rendezvous_page::RevealSet;
///
/// let mut reveals = RevealSet::default();
/// let start = reveals.observe("service-card-1");
/// assert_eq!(start.opacity, 0.0);
///
/// let style = reveals.on_visible("service-card-1").expect("observed");
/// assert_eq!(style.opacity, 1.0);
/// assert!(reveals.is_revealed("service-card-1"));
/// ```
#[derive(Debug, Default)]
pub struct RevealSet {
	revealed: HashMap<String, bool>,
}

impl RevealSet {
	/// Registers an element and returns the hidden starting style to apply
	/// along with [`REVEAL_TRANSITION`]. Registration resets the element.
	pub fn observe(&mut self, id: impl Into<String>) -> RevealStyle {
		self.revealed.insert(id.into(), false);
		RevealStyle::hidden()
	}

	/// Marks an observed element visible and returns the revealed style.
	/// Unobserved identifiers yield `None`.
	pub fn on_visible(&mut self, id: &str) -> Option<RevealStyle> {
		let state = self.revealed.get_mut(id)?;
		*state = true;
		Some(RevealStyle::revealed())
	}

	pub fn is_revealed(&self, id: &str) -> bool {
		self.revealed.get(id).copied().unwrap_or(false)
	}

	/// The current style of an observed element.
	pub fn style(&self, id: &str) -> Option<RevealStyle> {
		self.revealed.get(id).map(|revealed| {
			if *revealed {
				RevealStyle::revealed()
			} else {
				RevealStyle::hidden()
			}
		})
	}

	pub fn observed_count(&self) -> usize {
		self.revealed.len()
	}
}

/// Opacity bookkeeping for images loaded lazily.
///
/// Unlike [`RevealSet`], a loaded image is unobserved: `on_visible` returns
/// whether the host should stop watching the element.
#[derive(Debug, Default)]
pub struct LazyImages {
	loaded: HashMap<String, bool>,
}

impl LazyImages {
	/// Registers an image at opacity zero with [`LAZY_TRANSITION`].
	pub fn observe(&mut self, id: impl Into<String>) {
		self.loaded.insert(id.into(), false);
	}

	/// Marks an image loaded. Returns true when the host should unobserve
	/// it; unknown identifiers return false.
	pub fn on_visible(&mut self, id: &str) -> bool {
		match self.loaded.get_mut(id) {
			Some(loaded) => {
				*loaded = true;
				true
			}
			None => false,
		}
	}

	/// The image's current opacity. Untracked images are fully opaque.
	pub fn opacity(&self, id: &str) -> f64 {
		match self.loaded.get(id) {
			Some(false) => 0.0,
			_ => 1.0,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_observe_starts_hidden() {
		// Arrange
		let mut reveals = RevealSet::default();

		// Act
		let style = reveals.observe("testimonial-2");

		// Assert
		assert_eq!(style.opacity, 0.0);
		assert_eq!(style.translate_y_px, 30.0);
		assert!(!reveals.is_revealed("testimonial-2"));
	}

	#[test]
	fn test_reveal_is_sticky_and_idempotent() {
		// Arrange
		let mut reveals = RevealSet::default();
		reveals.observe("gallery-item-3");

		// Act
		let first = reveals.on_visible("gallery-item-3");
		let second = reveals.on_visible("gallery-item-3");

		// Assert
		assert_eq!(first, second);
		assert!(reveals.is_revealed("gallery-item-3"));
		assert_eq!(
			reveals.style("gallery-item-3").map(|s| s.opacity),
			Some(1.0)
		);
	}

	#[test]
	fn test_unobserved_visibility_is_ignored() {
		let mut reveals = RevealSet::default();
		assert_eq!(reveals.on_visible("never-observed"), None);
		assert_eq!(reveals.observed_count(), 0);
	}

	#[test]
	fn test_lazy_image_unobserves_after_load() {
		// Arrange
		let mut images = LazyImages::default();
		images.observe("hero-img");
		assert_eq!(images.opacity("hero-img"), 0.0);

		// Act
		let unobserve = images.on_visible("hero-img");

		// Assert
		assert!(unobserve);
		assert_eq!(images.opacity("hero-img"), 1.0);
		assert!(!images.on_visible("untracked"));
	}

	#[test]
	fn test_untracked_images_are_opaque() {
		let images = LazyImages::default();
		assert_eq!(images.opacity("plain-img"), 1.0);
	}
}
