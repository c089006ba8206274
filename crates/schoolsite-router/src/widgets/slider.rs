//! Image slider on detail pages.
//!
//! The current index lives on the track element (`data-current-index`); the
//! track is shifted by one full width per slide.

/// Which way a slide control moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
	/// Forward, wrapping from the last slide to the first.
	Next,
	/// Backward, wrapping from the first slide to the last.
	Prev,
}

impl SlideDirection {
	/// Parses a `data-slide-control` value.
	pub fn parse(value: &str) -> Option<Self> {
		match value {
			"next" => Some(Self::Next),
			"prev" => Some(Self::Prev),
			_ => None,
		}
	}
}

/// Zero-based index of the visible slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SliderState {
	index: usize,
}

impl SliderState {
	/// Creates a slider showing slide `index`.
	pub fn new(index: usize) -> Self {
		Self { index }
	}

	/// Reads the index stored on a track; missing or malformed means 0.
	pub fn from_attribute(value: Option<&str>) -> Self {
		Self::new(value.and_then(|v| v.trim().parse().ok()).unwrap_or(0))
	}

	/// Current index.
	pub fn index(&self) -> usize {
		self.index
	}

	/// Moves one slide in `direction` over `count` slides, wrapping at both
	/// ends, and returns the new index.
	///
	/// Without a direction, or with no slides, the index is unchanged.
	pub fn step(&mut self, direction: Option<SlideDirection>, count: usize) -> usize {
		if count == 0 {
			return self.index;
		}
		self.index = match direction {
			Some(SlideDirection::Next) if self.index + 1 < count => self.index + 1,
			Some(SlideDirection::Next) => 0,
			Some(SlideDirection::Prev) if self.index > 0 => self.index - 1,
			Some(SlideDirection::Prev) => count - 1,
			None => self.index,
		};
		self.index
	}

	/// CSS transform showing the current slide.
	pub fn translate(&self) -> String {
		format!("translateX(-{}%)", self.index * 100)
	}
}
