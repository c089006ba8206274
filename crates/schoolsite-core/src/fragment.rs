//! URL fragment codec and navigation state.
//!
//! Routes live entirely in the fragment: `#/<pageId>` for list and static
//! pages, `#/<pageId>/<itemId>` for detail pages.

use serde::{Deserialize, Serialize};

/// Page identifier used when the fragment names no page.
pub const DEFAULT_PAGE: &str = "home";

/// Builds and parses router fragments.
pub struct Fragment;

impl Fragment {
	/// Builds the fragment for a page and optional item.
	///
	/// # Example
	///
	/// ```
	/// use schoolsite_core::Fragment;
	///
	/// assert_eq!(Fragment::build("news", None), "#/news");
	/// assert_eq!(Fragment::build("news-detail", Some("2")), "#/news-detail/2");
	/// ```
	pub fn build(page_id: &str, item_id: Option<&str>) -> String {
		match item_id {
			Some(item) if !item.is_empty() => format!("#/{}/{}", page_id, item),
			_ => format!("#/{}", page_id),
		}
	}

	/// Parses a location hash into `(page_id, item_id)`.
	///
	/// Returns `None` when there is no fragment at all. The path is split on
	/// the first `/` only; an empty page identifier becomes
	/// [`DEFAULT_PAGE`] and an empty item identifier becomes `None`.
	///
	/// # Example
	///
	/// ```
	/// use schoolsite_core::Fragment;
	///
	/// assert_eq!(Fragment::parse(""), None);
	/// assert_eq!(
	/// 	Fragment::parse("#/news-detail/2"),
	/// 	Some(("news-detail".to_string(), Some("2".to_string())))
	/// );
	/// ```
	pub fn parse(hash: &str) -> Option<(String, Option<String>)> {
		let path = hash.strip_prefix('#').unwrap_or(hash);
		if path.is_empty() {
			return None;
		}
		let path = path.strip_prefix('/').unwrap_or(path);

		let (page, item) = match path.split_once('/') {
			Some((page, item)) => (page, Some(item)),
			None => (path, None),
		};

		let page_id = if page.is_empty() { DEFAULT_PAGE } else { page };
		let item_id = item.filter(|item| !item.is_empty()).map(str::to_string);

		Some((page_id.to_string(), item_id))
	}
}

/// Where a navigation request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Provenance {
	/// A click on a navigation link; pushes a history entry.
	User,
	/// A back/forward replay or a load with a fragment; never touches history.
	History,
	/// A load without a fragment; replaces the current history entry.
	InitialLoad,
}

/// The page currently displayed (or being loaded).
///
/// Superseded, never merged, by the next navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
	/// Page identifier.
	pub page_id: String,
	/// Record identifier for detail pages.
	pub item_id: Option<String>,
	/// Origin of the request.
	pub provenance: Provenance,
}

impl NavigationState {
	/// Creates a navigation state.
	pub fn new(page_id: impl Into<String>, item_id: Option<String>, provenance: Provenance) -> Self {
		Self {
			page_id: page_id.into(),
			item_id,
			provenance,
		}
	}

	/// Snapshot suitable for the browser history stack.
	pub fn history_entry(&self) -> HistoryEntry {
		HistoryEntry {
			url: Fragment::build(&self.page_id, self.item_id.as_deref()),
			page_id: self.page_id.clone(),
			item_id: self.item_id.clone(),
		}
	}
}

/// Serialized history snapshot of a [`NavigationState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
	/// Page identifier (`page` in the stored state object).
	#[serde(rename = "page")]
	pub page_id: String,
	/// Record identifier (`item` in the stored state object).
	#[serde(rename = "item")]
	pub item_id: Option<String>,
	/// Fragment URL pushed alongside the state.
	#[serde(skip)]
	pub url: String,
}
