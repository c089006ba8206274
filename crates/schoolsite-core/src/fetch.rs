//! The retrieval seam.
//!
//! The router and the self-fetching home renderer only ever talk to a
//! [`Fetcher`]. In the browser this is an HTTP client; natively it reads from
//! a content directory; in tests it is a [`MemoryFetcher`](crate::testing::MemoryFetcher).
//!
//! Futures are not `Send`: everything runs on the browser main thread.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::{PageError, PageResult};

/// Retrieves documents and data files by path.
#[async_trait(?Send)]
pub trait Fetcher {
	/// Retrieves the body of `path` as text.
	///
	/// Non-success statuses are [`PageError::Transport`]; failures to perform
	/// the request at all are [`PageError::Network`].
	async fn fetch_text(&self, path: &str) -> PageResult<String>;
}

#[async_trait(?Send)]
impl<T: Fetcher + ?Sized> Fetcher for &T {
	async fn fetch_text(&self, path: &str) -> PageResult<String> {
		(**self).fetch_text(path).await
	}
}

#[async_trait(?Send)]
impl<T: Fetcher + ?Sized> Fetcher for std::rc::Rc<T> {
	async fn fetch_text(&self, path: &str) -> PageResult<String> {
		(**self).fetch_text(path).await
	}
}

/// Retrieves `path` and decodes it as JSON.
pub async fn fetch_json<T, F>(fetcher: &F, path: &str) -> PageResult<T>
where
	T: DeserializeOwned,
	F: Fetcher + ?Sized,
{
	let body = fetcher.fetch_text(path).await?;
	serde_json::from_str(&body).map_err(|e| PageError::decode(path, e))
}

#[cfg(not(target_arch = "wasm32"))]
pub use fs::FsFetcher;

#[cfg(not(target_arch = "wasm32"))]
mod fs {
	use std::io::ErrorKind;
	use std::path::{Component, Path, PathBuf};

	use async_trait::async_trait;

	use super::Fetcher;
	use crate::error::{PageError, PageResult};

	/// Reads site content from a directory on disk.
	///
	/// Paths are resolved relative to the root; a path that would leave the
	/// root is refused with status 403 and a missing file reports 404.
	#[derive(Debug, Clone)]
	pub struct FsFetcher {
		root: PathBuf,
	}

	impl FsFetcher {
		/// Creates a fetcher rooted at `root`.
		pub fn new(root: impl Into<PathBuf>) -> Self {
			Self { root: root.into() }
		}

		/// Returns the content root.
		pub fn root(&self) -> &Path {
			&self.root
		}

		fn resolve(&self, path: &str) -> PageResult<PathBuf> {
			let relative = Path::new(path.trim_start_matches('/'));
			let escapes = relative
				.components()
				.any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
			if escapes {
				return Err(PageError::Transport {
					path: path.to_string(),
					status: 403,
				});
			}
			Ok(self.root.join(relative))
		}
	}

	#[async_trait(?Send)]
	impl Fetcher for FsFetcher {
		async fn fetch_text(&self, path: &str) -> PageResult<String> {
			let full_path = self.resolve(path)?;
			tracing::debug!(path, file = %full_path.display(), "reading content file");

			tokio::fs::read_to_string(&full_path)
				.await
				.map_err(|e| match e.kind() {
					ErrorKind::NotFound => PageError::Transport {
						path: path.to_string(),
						status: 404,
					},
					ErrorKind::PermissionDenied => PageError::Transport {
						path: path.to_string(),
						status: 403,
					},
					_ => PageError::Network {
						path: path.to_string(),
						message: e.to_string(),
					},
				})
		}
	}
}
