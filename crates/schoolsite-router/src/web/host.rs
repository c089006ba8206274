//! [`Host`] over the live document.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element, History, ScrollBehavior, ScrollToOptions, Window};

use schoolsite_core::{HistoryEntry, SiteSettings};

use crate::host::Host;

/// Class that hides an element.
pub(crate) const HIDDEN: &str = "hidden";

/// The browser page: content region, mobile menu and history.
pub struct WebHost {
	window: Window,
	history: History,
	content: Element,
	mobile_menu: Option<Element>,
}

impl WebHost {
	/// Looks up the elements named in `settings`.
	///
	/// The content region is required; the mobile menu is optional.
	pub fn new(window: &Window, document: &Document, settings: &SiteSettings) -> Result<Self, JsValue> {
		let ids = &settings.elements;
		let content = document.get_element_by_id(&ids.content).ok_or_else(|| {
			JsValue::from_str(&format!("No #{} element found", ids.content))
		})?;

		Ok(Self {
			window: window.clone(),
			history: window.history()?,
			content,
			mobile_menu: document.get_element_by_id(&ids.mobile_menu),
		})
	}

	fn state_of(entry: &HistoryEntry) -> JsValue {
		serde_json::to_string(entry)
			.ok()
			.and_then(|json| js_sys::JSON::parse(&json).ok())
			.unwrap_or(JsValue::NULL)
	}
}

impl Host for WebHost {
	fn set_content(&self, html: &str) {
		self.content.set_inner_html(html);
	}

	fn close_mobile_menu(&self) {
		if let Some(menu) = &self.mobile_menu
			&& let Err(e) = menu.class_list().add_1(HIDDEN)
		{
			tracing::warn!(error = ?e, "failed to hide mobile menu");
		}
	}

	fn scroll_to_top(&self) {
		let options = ScrollToOptions::new();
		options.set_top(0.0);
		options.set_behavior(ScrollBehavior::Smooth);
		self.window.scroll_to_with_scroll_to_options(&options);
	}

	fn push_history(&self, entry: &HistoryEntry) {
		if let Err(e) = self
			.history
			.push_state_with_url(&Self::state_of(entry), "", Some(&entry.url))
		{
			tracing::warn!(url = %entry.url, error = ?e, "pushState failed");
		}
	}

	fn replace_history(&self, entry: &HistoryEntry) {
		if let Err(e) = self
			.history
			.replace_state_with_url(&Self::state_of(entry), "", Some(&entry.url))
		{
			tracing::warn!(url = %entry.url, error = ?e, "replaceState failed");
		}
	}

	fn location_hash(&self) -> String {
		self.window.location().hash().unwrap_or_default()
	}
}
