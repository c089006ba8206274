//! Offline rendering of a single route.
//!
//! Runs the real router against a content directory and returns what the
//! content region would show. Used by `schoolsite-render` for previews and
//! static snapshots.

use std::path::{Path, PathBuf};

use schoolsite_core::{FsFetcher, PageError, PageResult, SiteSettings};
use schoolsite_renderers::RendererRegistry;
use schoolsite_router::testing::RecordingHost;
use schoolsite_router::{NavigationOutcome, PageTable, Router};

/// What to render and where the content lives.
#[derive(Debug, Clone)]
pub struct RenderRequest {
	/// Directory the page paths are relative to.
	pub content_dir: PathBuf,
	/// Route fragment, e.g. `#/news-detail/2`. Empty renders the default page.
	pub fragment: String,
	/// Site settings; defaults when `None`.
	pub settings: Option<PathBuf>,
	/// Page table; the built-in table when `None`.
	pub pages: Option<PathBuf>,
}

/// Loads site settings from a TOML file.
pub async fn load_settings(path: &Path) -> PageResult<SiteSettings> {
	let text = read_config(path).await?;
	SiteSettings::from_toml_str(&text)
}

/// Loads a page table from a TOML file.
pub async fn load_pages(path: &Path, registry: &RendererRegistry) -> PageResult<PageTable> {
	let text = read_config(path).await?;
	PageTable::from_toml_str(&text, registry)
}

async fn read_config(path: &Path) -> PageResult<String> {
	tokio::fs::read_to_string(path)
		.await
		.map_err(|e| PageError::Settings(format!("{}: {}", path.display(), e)))
}

/// Renders the route in `request` and returns the content region's markup.
pub async fn render(request: &RenderRequest) -> PageResult<String> {
	let settings = match &request.settings {
		Some(path) => load_settings(path).await?,
		None => SiteSettings::default(),
	};
	let registry = RendererRegistry::builtin();
	let table = match &request.pages {
		Some(path) => load_pages(path, &registry).await?,
		None => PageTable::builtin(&registry)?,
	};

	tracing::debug!(
		content_dir = %request.content_dir.display(),
		fragment = %request.fragment,
		"rendering route"
	);

	let host = RecordingHost::with_hash(request.fragment.as_str());
	let router = Router::new(table, FsFetcher::new(&request.content_dir), host, settings);
	match router.handle_url_change().await {
		NavigationOutcome::Failed(error) => Err(error),
		NavigationOutcome::Rendered | NavigationOutcome::Superseded => Ok(router.host().content()),
	}
}
