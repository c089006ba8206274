//! The page loader.
//!
//! A [`Router`] turns a navigation request into markup in the content region:
//!
//! 1. write the loading placeholder
//! 2. resolve the page in the [`PageTable`]
//! 3. fetch the static document, or fetch the data file and run the renderer
//!    (detail pages receive the single record matching the item identifier)
//! 4. write the result, or the generic error message on any failure
//! 5. record the navigation in history for user navigations only
//! 6. close the mobile menu and scroll to the top
//!
//! Only the most recently started navigation may touch the page once its
//! retrievals complete; an older one that finishes late is reported as
//! [`NavigationOutcome::Superseded`] and leaves everything as it is.

use std::cell::{Cell, RefCell};

use serde_json::Value;

use schoolsite_core::{
	Fetcher, Fragment, NavigationState, PageError, PageResult, Provenance, SiteSettings, fetch_json,
};
use schoolsite_renderers::models::Scalar;
use schoolsite_renderers::{PageInput, RenderContext};

use crate::host::Host;
use crate::page::{PageConfig, PageKind, PageSource, PageTable};

/// Result of one navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
	/// The page was written to the content region.
	Rendered,
	/// The error message was written to the content region.
	Failed(PageError),
	/// A newer navigation started before this one completed. Menu and scroll
	/// cleanup is left to the newer navigation.
	Superseded,
}

impl NavigationOutcome {
	/// Returns whether the page was rendered.
	pub fn is_rendered(&self) -> bool {
		matches!(self, Self::Rendered)
	}
}

/// Mutable router state: the displayed page and the navigation counter.
#[derive(Debug, Default)]
pub struct RouterState {
	generation: Cell<u64>,
	current: RefCell<Option<NavigationState>>,
}

impl RouterState {
	/// Starts a navigation and returns its generation.
	fn begin(&self) -> u64 {
		let generation = self.generation.get() + 1;
		self.generation.set(generation);
		generation
	}

	fn is_latest(&self, generation: u64) -> bool {
		self.generation.get() == generation
	}

	/// Number of navigations started so far.
	pub fn generation(&self) -> u64 {
		self.generation.get()
	}

	/// The page currently displayed, if any navigation has rendered.
	pub fn current(&self) -> Option<NavigationState> {
		self.current.borrow().clone()
	}
}

/// Hash router over a page table.
pub struct Router<F, H> {
	table: PageTable,
	fetcher: F,
	host: H,
	settings: SiteSettings,
	state: RouterState,
}

impl<F: Fetcher, H: Host> Router<F, H> {
	/// Creates a router.
	pub fn new(table: PageTable, fetcher: F, host: H, settings: SiteSettings) -> Self {
		Self {
			table,
			fetcher,
			host,
			settings,
			state: RouterState::default(),
		}
	}

	/// The page table.
	pub fn table(&self) -> &PageTable {
		&self.table
	}

	/// The fetcher used for documents, data files and the home page.
	pub fn fetcher(&self) -> &F {
		&self.fetcher
	}

	/// The host the router writes to.
	pub fn host(&self) -> &H {
		&self.host
	}

	/// Site settings.
	pub fn settings(&self) -> &SiteSettings {
		&self.settings
	}

	/// Router state.
	pub fn state(&self) -> &RouterState {
		&self.state
	}

	/// Loads `page_id` (and `item_id` for detail pages) into the content region.
	///
	/// Failures never escape: they are logged, the error message is shown and
	/// no history entry is recorded.
	pub async fn navigate(
		&self,
		page_id: &str,
		item_id: Option<&str>,
		provenance: Provenance,
	) -> NavigationOutcome {
		let item_id = item_id.filter(|id| !id.is_empty());
		let request = NavigationState::new(page_id, item_id.map(str::to_string), provenance);
		let generation = self.state.begin();
		tracing::debug!(page = page_id, item = ?item_id, ?provenance, generation, "navigating");

		self.host.set_content(&self.settings.messages.loading);
		let result = self.load(&request).await;

		if !self.state.is_latest(generation) {
			tracing::debug!(page = page_id, generation, "navigation superseded");
			return NavigationOutcome::Superseded;
		}

		let outcome = match result {
			Ok(html) => {
				self.host.set_content(&html);
				self.record_history(&request);
				*self.state.current.borrow_mut() = Some(request);
				NavigationOutcome::Rendered
			}
			Err(error) => {
				tracing::error!(page = page_id, item = ?item_id, %error, "error loading page");
				self.host.set_content(&self.settings.messages.error);
				NavigationOutcome::Failed(error)
			}
		};

		self.host.close_mobile_menu();
		self.host.scroll_to_top();
		outcome
	}

	/// Navigates to the page named by the current location hash.
	///
	/// A hash is replayed without touching history. Without a hash the default
	/// page is loaded and replaces the current history entry.
	pub async fn handle_url_change(&self) -> NavigationOutcome {
		let hash = self.host.location_hash();
		match Fragment::parse(&hash) {
			Some((page_id, item_id)) => {
				self.navigate(&page_id, item_id.as_deref(), Provenance::History)
					.await
			}
			None => {
				self.navigate(&self.settings.default_page, None, Provenance::InitialLoad)
					.await
			}
		}
	}

	fn record_history(&self, request: &NavigationState) {
		let entry = request.history_entry();
		match request.provenance {
			Provenance::User => self.host.push_history(&entry),
			Provenance::InitialLoad => self.host.replace_history(&entry),
			Provenance::History => {}
		}
	}

	async fn load(&self, request: &NavigationState) -> PageResult<String> {
		let config = self.table.get(&request.page_id)?;

		let (renderer, input) = match &config.source {
			PageSource::Document(path) => return self.fetcher.fetch_text(path).await,
			PageSource::Data { path, renderer } => {
				let data: Value = fetch_json(&self.fetcher, path).await?;
				(renderer, select_input(config, path, request, data)?)
			}
			PageSource::SelfFetching { renderer } => (renderer, PageInput::None),
		};

		tracing::debug!(page = %request.page_id, renderer = renderer.name(), "rendering");
		let ctx = RenderContext::new(&self.fetcher, &self.settings.home);
		renderer.renderer().render(input, &ctx).await
	}
}

/// Picks what the renderer receives: the record matching the item identifier
/// on detail pages, the whole collection otherwise. A detail page without an
/// item identifier fails.
fn select_input(
	config: &PageConfig,
	path: &str,
	request: &NavigationState,
	data: Value,
) -> PageResult<PageInput> {
	let item_id = match (config.kind, &request.item_id) {
		(PageKind::List, _) => return Ok(PageInput::Collection(data)),
		(PageKind::Detail, None) => return Err(PageError::ItemIdMissing(config.id.clone())),
		(PageKind::Detail, Some(item_id)) => item_id,
	};

	let Value::Array(records) = data else {
		return Err(PageError::Decode {
			path: path.to_string(),
			message: "expected a collection of records".to_string(),
		});
	};

	records
		.into_iter()
		.find(|record| Scalar::id_of(record).as_deref() == Some(item_id.as_str()))
		.map(PageInput::Record)
		.ok_or_else(|| PageError::ItemNotFound {
			page_id: config.id.clone(),
			item_id: item_id.clone(),
		})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::RecordingHost;
	use rstest::rstest;
	use schoolsite_core::testing::MemoryFetcher;
	use schoolsite_renderers::RendererRegistry;
	use serde_json::json;

	fn router(fetcher: MemoryFetcher) -> Router<MemoryFetcher, RecordingHost> {
		let table = PageTable::builtin(&RendererRegistry::builtin()).unwrap();
		Router::new(table, fetcher, RecordingHost::new(), SiteSettings::default())
	}

	#[rstest]
	fn test_select_input_list_page_gets_collection() {
		let config = PageConfig::document("x", "x.html");
		let request = NavigationState::new("x", Some("1".to_string()), Provenance::User);
		let input = select_input(&config, "x.json", &request, json!([{ "id": 1 }])).unwrap();
		assert_eq!(input, PageInput::Collection(json!([{ "id": 1 }])));
	}

	#[rstest]
	fn test_select_input_detail_requires_collection() {
		let config = PageConfig::document("x", "x.html").detail();
		let request = NavigationState::new("x", Some("1".to_string()), Provenance::User);
		let err = select_input(&config, "x.json", &request, json!({ "id": 1 })).unwrap_err();
		assert!(matches!(err, PageError::Decode { ref path, .. } if path == "x.json"));
	}

	#[rstest]
	fn test_select_input_detail_without_item_fails() {
		let config = PageConfig::document("x", "x.html").detail();
		let request = NavigationState::new("x", None, Provenance::User);
		let err = select_input(&config, "x.json", &request, json!([{ "id": 1 }])).unwrap_err();
		assert_eq!(err, PageError::ItemIdMissing("x".to_string()));
	}

	#[rstest]
	#[tokio::test]
	async fn test_loading_placeholder_written_first() {
		let router = router(MemoryFetcher::new().with("vision.html", "<h1>Vision</h1>"));
		router.navigate("vision", None, Provenance::User).await;

		let writes = router.host().content_writes();
		assert_eq!(writes.len(), 2);
		assert_eq!(writes[0], SiteSettings::default().messages.loading);
		assert_eq!(writes[1], "<h1>Vision</h1>");
	}

	#[rstest]
	#[tokio::test]
	async fn test_unknown_page_fails_without_fetching() {
		let router = router(MemoryFetcher::new());
		let outcome = router.navigate("admissions", None, Provenance::User).await;

		assert_eq!(
			outcome,
			NavigationOutcome::Failed(PageError::ConfigurationMissing("admissions".to_string()))
		);
		assert!(router.fetcher().requests().is_empty());
		assert_eq!(router.host().content(), SiteSettings::default().messages.error);
		assert!(router.host().history().is_empty());
		assert_eq!(router.host().menu_closes(), 1);
		assert_eq!(router.host().scrolls(), 1);
	}

	#[rstest]
	#[tokio::test]
	async fn test_current_state_tracks_last_rendered_page() {
		let router = router(
			MemoryFetcher::new()
				.with("vision.html", "v")
				.with("mission.html", "m"),
		);
		assert_eq!(router.state().current(), None);

		router.navigate("vision", None, Provenance::User).await;
		router.navigate("nowhere", None, Provenance::User).await;
		router.navigate("mission", None, Provenance::History).await;

		let current = router.state().current().unwrap();
		assert_eq!(current.page_id, "mission");
		assert_eq!(current.provenance, Provenance::History);
		assert_eq!(router.state().generation(), 3);
	}
}
