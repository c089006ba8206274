//! Site settings.
//!
//! Every value the page loader needs that is not part of the page table:
//! DOM element identifiers, the loading and error markup, where the home page
//! finds its template and collections, and the log level. All fields have
//! defaults, so an empty TOML document yields the stock site.
//!
//! ```toml
//! default_page = "home"
//! log_level = "debug"
//!
//! [elements]
//! content = "main-content"
//!
//! [home]
//! gallery_count = 8
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{PageError, PageResult};

/// Top-level settings for the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
	/// Page shown when the URL carries no fragment.
	pub default_page: String,
	/// Prefix joined to every fetched path. Empty means "relative to the page".
	pub base_path: String,
	/// `tracing-subscriber` filter directive.
	pub log_level: String,
	/// Fixed DOM element identifiers.
	pub elements: ElementIds,
	/// Markup written into the content region.
	pub messages: Messages,
	/// Sources and limits for the self-fetching home page.
	pub home: HomeSettings,
}

impl Default for SiteSettings {
	fn default() -> Self {
		Self {
			default_page: "home".to_string(),
			base_path: String::new(),
			log_level: "info".to_string(),
			elements: ElementIds::default(),
			messages: Messages::default(),
			home: HomeSettings::default(),
		}
	}
}

/// DOM element identifiers the router and widgets address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
	/// The content region.
	pub content: String,
	/// The collapsible mobile navigation menu.
	pub mobile_menu: String,
	/// The button toggling the mobile menu.
	pub mobile_menu_button: String,
	/// The lightbox overlay.
	pub lightbox: String,
	/// The full-size image inside the lightbox.
	pub lightbox_image: String,
	/// The lightbox close button.
	pub lightbox_close: String,
	/// The image slider track rendered by detail pages.
	pub slider_track: String,
}

impl Default for ElementIds {
	fn default() -> Self {
		Self {
			content: "dynamic-content-area".to_string(),
			mobile_menu: "mobile-menu".to_string(),
			mobile_menu_button: "mobile-menu-button".to_string(),
			lightbox: "image-lightbox".to_string(),
			lightbox_image: "lightbox-image".to_string(),
			lightbox_close: "lightbox-close".to_string(),
			slider_track: "slider-track".to_string(),
		}
	}
}

/// Placeholder markup shown while loading and after a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
	/// Written synchronously at the start of every navigation.
	pub loading: String,
	/// Written when a navigation fails for any reason.
	pub error: String,
}

impl Default for Messages {
	fn default() -> Self {
		Self {
			loading: r#"<div class="p-8 text-center text-gray-500">กำลังโหลด...</div>"#.to_string(),
			error: r#"<div class="p-8 text-center text-red-500">ขออภัย, ไม่พบเนื้อหาสำหรับหน้านี้</div>"#
				.to_string(),
		}
	}
}

/// Sources and limits for the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeSettings {
	/// HTML template containing the placeholder elements.
	pub template: String,
	/// News collection.
	pub news: String,
	/// Gallery collection.
	pub gallery: String,
	/// Element id receiving the news markup.
	pub news_placeholder: String,
	/// Element id receiving the gallery markup.
	pub gallery_placeholder: String,
	/// Number of newest gallery images shown.
	pub gallery_count: usize,
	/// Number of compact news items shown after the featured article.
	pub secondary_news_count: usize,
}

impl Default for HomeSettings {
	fn default() -> Self {
		Self {
			template: "home.html".to_string(),
			news: "news.json".to_string(),
			gallery: "gallery.json".to_string(),
			news_placeholder: "home-news-content".to_string(),
			gallery_placeholder: "home-gallery-content".to_string(),
			gallery_count: 4,
			secondary_news_count: 2,
		}
	}
}

impl SiteSettings {
	/// Parses settings from a TOML document and validates them.
	pub fn from_toml_str(text: &str) -> PageResult<Self> {
		let settings: Self = toml::from_str(text).map_err(|e| PageError::Settings(e.to_string()))?;
		settings.validate()?;
		Ok(settings)
	}

	/// Checks that no identifier or path is empty.
	pub fn validate(&self) -> PageResult<()> {
		let required = [
			("default_page", &self.default_page),
			("elements.content", &self.elements.content),
			("elements.mobile_menu", &self.elements.mobile_menu),
			("elements.lightbox", &self.elements.lightbox),
			("elements.lightbox_image", &self.elements.lightbox_image),
			("elements.slider_track", &self.elements.slider_track),
			("home.template", &self.home.template),
			("home.news", &self.home.news),
			("home.gallery", &self.home.gallery),
			("home.news_placeholder", &self.home.news_placeholder),
			("home.gallery_placeholder", &self.home.gallery_placeholder),
		];

		if let Some((key, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
			return Err(PageError::Settings(format!("'{}' must not be empty", key)));
		}

		if self.home.gallery_count == 0 {
			return Err(PageError::Settings(
				"'home.gallery_count' must be at least 1".to_string(),
			));
		}

		Ok(())
	}

	/// Joins `path` onto [`SiteSettings::base_path`].
	pub fn resolve_path(&self, path: &str) -> String {
		if self.base_path.is_empty() {
			return path.to_string();
		}
		format!(
			"{}/{}",
			self.base_path.trim_end_matches('/'),
			path.trim_start_matches('/')
		)
	}
}
