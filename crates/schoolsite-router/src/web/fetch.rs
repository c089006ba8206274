//! HTTP fetcher backed by `gloo-net`.

use async_trait::async_trait;
use gloo_net::http::Request;

use schoolsite_core::{Fetcher, PageError, PageResult, SiteSettings};

/// Fetches site content relative to the page (or the configured base path).
#[derive(Debug, Clone)]
pub struct HttpFetcher {
	settings: SiteSettings,
}

impl HttpFetcher {
	/// Creates a fetcher resolving paths against `settings.base_path`.
	pub fn new(settings: &SiteSettings) -> Self {
		Self {
			settings: settings.clone(),
		}
	}
}

#[async_trait(?Send)]
impl Fetcher for HttpFetcher {
	async fn fetch_text(&self, path: &str) -> PageResult<String> {
		let url = self.settings.resolve_path(path);
		tracing::debug!(%url, "fetching");

		let network = |e: gloo_net::Error| PageError::Network {
			path: path.to_string(),
			message: e.to_string(),
		};

		let response = Request::get(&url).send().await.map_err(network)?;
		if !response.ok() {
			return Err(PageError::Transport {
				path: path.to_string(),
				status: response.status(),
			});
		}
		response.text().await.map_err(network)
	}
}
