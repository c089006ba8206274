//! A [`Host`] that records what the router does.
//!
//! Used by the router's tests and by the native render CLI, which only needs
//! the final content of the page.

use std::cell::{Cell, RefCell};

use schoolsite_core::HistoryEntry;

use crate::host::Host;

/// A history operation performed by the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryOp {
	/// `history.pushState`.
	Push(HistoryEntry),
	/// `history.replaceState`.
	Replace(HistoryEntry),
}

/// In-memory [`Host`].
///
/// Pushing or replacing a history entry also updates the location hash, the
/// way a browser does.
///
/// # Example
///
/// ```
/// use schoolsite_router::Host;
/// use schoolsite_router::testing::RecordingHost;
///
/// let host = RecordingHost::with_hash("#/news");
/// host.set_content("<p>news</p>");
/// assert_eq!(host.content(), "<p>news</p>");
/// assert_eq!(host.location_hash(), "#/news");
/// ```
#[derive(Debug, Default)]
pub struct RecordingHost {
	writes: RefCell<Vec<String>>,
	history: RefCell<Vec<HistoryOp>>,
	hash: RefCell<String>,
	menu_closes: Cell<usize>,
	scrolls: Cell<usize>,
}

impl RecordingHost {
	/// Creates a host with an empty location hash.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a host whose location hash is `hash`.
	pub fn with_hash(hash: impl Into<String>) -> Self {
		let host = Self::new();
		host.set_hash(hash);
		host
	}

	/// Changes the location hash, as a back/forward navigation would.
	pub fn set_hash(&self, hash: impl Into<String>) {
		*self.hash.borrow_mut() = hash.into();
	}

	/// The content region as last written.
	pub fn content(&self) -> String {
		self.writes.borrow().last().cloned().unwrap_or_default()
	}

	/// Every write to the content region, in order.
	pub fn content_writes(&self) -> Vec<String> {
		self.writes.borrow().clone()
	}

	/// History operations, in order.
	pub fn history(&self) -> Vec<HistoryOp> {
		self.history.borrow().clone()
	}

	/// Number of times the mobile menu was closed.
	pub fn menu_closes(&self) -> usize {
		self.menu_closes.get()
	}

	/// Number of scrolls to the top.
	pub fn scrolls(&self) -> usize {
		self.scrolls.get()
	}
}

impl Host for RecordingHost {
	fn set_content(&self, html: &str) {
		self.writes.borrow_mut().push(html.to_string());
	}

	fn close_mobile_menu(&self) {
		self.menu_closes.set(self.menu_closes.get() + 1);
	}

	fn scroll_to_top(&self) {
		self.scrolls.set(self.scrolls.get() + 1);
	}

	fn push_history(&self, entry: &HistoryEntry) {
		self.set_hash(entry.url.clone());
		self.history.borrow_mut().push(HistoryOp::Push(entry.clone()));
	}

	fn replace_history(&self, entry: &HistoryEntry) {
		self.set_hash(entry.url.clone());
		self.history.borrow_mut().push(HistoryOp::Replace(entry.clone()));
	}

	fn location_hash(&self) -> String {
		self.hash.borrow().clone()
	}
}
