//! Full-size image overlay.

/// Overlay state: hidden, or showing one image.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Lightbox {
	/// Hidden, with no image source.
	#[default]
	Closed,
	/// Visible, showing `src`.
	Open {
		/// Source of the full-size image.
		src: String,
	},
}

impl Lightbox {
	/// Shows `src`, replacing any image already open.
	pub fn open(&mut self, src: impl Into<String>) {
		*self = Self::Open { src: src.into() };
	}

	/// Hides the overlay and clears the source.
	pub fn close(&mut self) {
		*self = Self::Closed;
	}

	/// Handles a key press; Escape closes an open overlay.
	///
	/// Returns whether the state changed.
	pub fn on_key(&mut self, key: &str) -> bool {
		if key == "Escape" && self.is_open() {
			self.close();
			return true;
		}
		false
	}

	/// Returns whether the overlay is visible.
	pub fn is_open(&self) -> bool {
		matches!(self, Self::Open { .. })
	}

	/// Image currently shown, if any.
	pub fn src(&self) -> Option<&str> {
		match self {
			Self::Open { src } => Some(src),
			Self::Closed => None,
		}
	}
}
