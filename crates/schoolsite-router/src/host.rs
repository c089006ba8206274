//! The seam between the router and the page it runs in.
//!
//! In the browser, [`WebHost`](crate::web::WebHost) maps these calls onto the
//! DOM and the History API. Tests and the render CLI use
//! [`RecordingHost`](crate::testing::RecordingHost).

use schoolsite_core::HistoryEntry;

/// DOM and history operations the router performs.
///
/// Methods take `&self`: hosts are shared between event handlers and mutate
/// through the DOM or interior mutability.
pub trait Host {
	/// Replaces the inner markup of the content region.
	fn set_content(&self, html: &str);

	/// Hides the mobile navigation menu if it is open.
	fn close_mobile_menu(&self);

	/// Smoothly scrolls the viewport to the top.
	fn scroll_to_top(&self);

	/// Pushes a new history entry.
	fn push_history(&self, entry: &HistoryEntry);

	/// Replaces the current history entry.
	fn replace_history(&self, entry: &HistoryEntry);

	/// The current location hash, including the leading `#`, or empty.
	fn location_hash(&self) -> String;
}

impl<T: Host + ?Sized> Host for &T {
	fn set_content(&self, html: &str) {
		(**self).set_content(html)
	}

	fn close_mobile_menu(&self) {
		(**self).close_mobile_menu()
	}

	fn scroll_to_top(&self) {
		(**self).scroll_to_top()
	}

	fn push_history(&self, entry: &HistoryEntry) {
		(**self).push_history(entry)
	}

	fn replace_history(&self, entry: &HistoryEntry) {
		(**self).replace_history(entry)
	}

	fn location_hash(&self) -> String {
		(**self).location_hash()
	}
}

impl<T: Host + ?Sized> Host for std::rc::Rc<T> {
	fn set_content(&self, html: &str) {
		(**self).set_content(html)
	}

	fn close_mobile_menu(&self) {
		(**self).close_mobile_menu()
	}

	fn scroll_to_top(&self) {
		(**self).scroll_to_top()
	}

	fn push_history(&self, entry: &HistoryEntry) {
		(**self).push_history(entry)
	}

	fn replace_history(&self, entry: &HistoryEntry) {
		(**self).replace_history(entry)
	}

	fn location_hash(&self) -> String {
		(**self).location_hash()
	}
}
