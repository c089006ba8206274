//! Collapsible navigation menu on small screens.

/// Visibility of the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenu {
	open: bool,
}

impl MobileMenu {
	/// Creates a menu with the given visibility.
	pub fn new(open: bool) -> Self {
		Self { open }
	}

	/// Flips visibility and returns the new state.
	pub fn toggle(&mut self) -> bool {
		self.open = !self.open;
		self.open
	}

	/// Hides the menu. Returns whether it was open.
	pub fn close(&mut self) -> bool {
		std::mem::replace(&mut self.open, false)
	}

	/// Returns whether the menu is visible.
	pub fn is_open(&self) -> bool {
		self.open
	}
}
