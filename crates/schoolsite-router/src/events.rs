//! Delegated click handling.
//!
//! A single click listener on the document body inspects what the clicked
//! element sits inside of (a [`ClickTarget`]) and turns it into at most one
//! [`Interaction`]. Affordances are checked in priority order: navigation
//! link, slide control, lightbox trigger, then the lightbox overlay or its
//! close button.

use crate::widgets::SlideDirection;

/// A navigation link found around the clicked element (`.nav-item`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavLink {
	/// `data-page`.
	pub page_id: Option<String>,
	/// `data-id`.
	pub item_id: Option<String>,
}

/// What the clicked element is part of.
///
/// The browser binding fills this with `Element::closest` lookups; each field
/// is the nearest matching ancestor (or the element itself).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClickTarget {
	/// Nearest `.nav-item`.
	pub nav_link: Option<NavLink>,
	/// `data-slide-control` value of the nearest slide control.
	pub slide_control: Option<String>,
	/// Image source of the nearest `.lightbox-trigger`: its link target, or
	/// its own source for images.
	pub lightbox_trigger: Option<String>,
	/// The click landed on the lightbox overlay background itself.
	pub on_lightbox_overlay: bool,
	/// The click landed inside the lightbox close button.
	pub in_lightbox_close: bool,
}

/// What a click should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
	/// Load a page as a user navigation.
	Navigate {
		/// Target page; empty when the link has no `data-page`.
		page_id: String,
		/// Record identifier for detail pages.
		item_id: Option<String>,
	},
	/// Move the slider; `None` for an unrecognised control value.
	Slide(Option<SlideDirection>),
	/// Show an image in the lightbox.
	OpenLightbox {
		/// Full-size image source.
		src: String,
	},
	/// Hide the lightbox.
	CloseLightbox,
}

impl Interaction {
	/// Returns whether the browser's default action must be suppressed.
	pub fn prevents_default(&self) -> bool {
		!matches!(self, Self::CloseLightbox)
	}
}

impl ClickTarget {
	/// Classifies the click. Returns `None` when nothing interactive was hit.
	pub fn interaction(&self) -> Option<Interaction> {
		if let Some(link) = &self.nav_link {
			return Some(Interaction::Navigate {
				page_id: link.page_id.clone().unwrap_or_default(),
				item_id: link.item_id.clone().filter(|id| !id.is_empty()),
			});
		}
		if let Some(control) = &self.slide_control {
			return Some(Interaction::Slide(SlideDirection::parse(control)));
		}
		if let Some(src) = &self.lightbox_trigger {
			return Some(Interaction::OpenLightbox { src: src.clone() });
		}
		if self.on_lightbox_overlay || self.in_lightbox_close {
			return Some(Interaction::CloseLightbox);
		}
		None
	}
}
