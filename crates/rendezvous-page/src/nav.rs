//! Mobile navigation menu state.

/// The mobile navigation menu and its toggle button.
///
/// The menu's open flag drives two document mutations: the `active` class on
/// the menu and the `aria-expanded` attribute on the toggle. Clicking a nav
/// link closes the menu.
///
/// # Examples
///
/// ```
/// use rendezvous_page::NavMenu;
///
/// let mut nav = NavMenu::default();
/// assert!(nav.toggle());
/// assert_eq!(nav.aria_expanded(), "true");
/// nav.close();
/// assert!(!nav.is_open());
/// ```
#[derive(Debug, Clone, Default)]
pub struct NavMenu {
	open: bool,
}

impl NavMenu {
	/// Flips the menu and returns the new open state.
	pub fn toggle(&mut self) -> bool {
		self.open = !self.open;
		tracing::debug!(open = self.open, "nav menu toggled");
		self.open
	}

	/// Closes the menu, e.g. when a nav link is followed.
	pub fn close(&mut self) {
		self.open = false;
	}

	pub fn is_open(&self) -> bool {
		self.open
	}

	/// The toggle button's `aria-expanded` attribute value.
	pub fn aria_expanded(&self) -> &'static str {
		if self.open { "true" } else { "false" }
	}
}
