//! In-memory fetcher for tests and bundled content.

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::{PageError, PageResult};
use crate::fetch::Fetcher;

#[derive(Debug, Clone)]
enum Response {
	Body { status: u16, body: String },
	Unreachable(String),
}

/// A [`Fetcher`] backed by a path → response map.
///
/// Every requested path is recorded, so tests can assert which resources a
/// navigation touched. Unknown paths answer with status 404.
///
/// # Example
///
/// ```
/// use schoolsite_core::testing::MemoryFetcher;
///
/// let fetcher = MemoryFetcher::new()
/// 	.with("vision.html", "<h1>Vision</h1>")
/// 	.with_status("news.json", 500, "");
/// assert!(fetcher.requests().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct MemoryFetcher {
	responses: HashMap<String, Response>,
	requests: RefCell<Vec<String>>,
}

impl MemoryFetcher {
	/// Creates an empty fetcher.
	pub fn new() -> Self {
		Self::default()
	}

	/// Serves `body` with status 200 for `path`.
	pub fn with(self, path: impl Into<String>, body: impl Into<String>) -> Self {
		self.with_status(path, 200, body)
	}

	/// Serves `body` with an explicit status for `path`.
	pub fn with_status(mut self, path: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
		self.responses.insert(
			path.into(),
			Response::Body {
				status,
				body: body.into(),
			},
		);
		self
	}

	/// Makes `path` fail as if the network were down.
	pub fn with_network_error(mut self, path: impl Into<String>, message: impl Into<String>) -> Self {
		self.responses
			.insert(path.into(), Response::Unreachable(message.into()));
		self
	}

	/// Adds or replaces a response after construction.
	pub fn insert(&mut self, path: impl Into<String>, body: impl Into<String>) {
		self.responses.insert(
			path.into(),
			Response::Body {
				status: 200,
				body: body.into(),
			},
		);
	}

	/// Paths requested so far, in order.
	pub fn requests(&self) -> Vec<String> {
		self.requests.borrow().clone()
	}

	/// Number of times `path` was requested.
	pub fn request_count(&self, path: &str) -> usize {
		self.requests.borrow().iter().filter(|p| *p == path).count()
	}
}

#[async_trait(?Send)]
impl Fetcher for MemoryFetcher {
	async fn fetch_text(&self, path: &str) -> PageResult<String> {
		self.requests.borrow_mut().push(path.to_string());

		match self.responses.get(path) {
			Some(Response::Body { status, body }) if (200..300).contains(status) => Ok(body.clone()),
			Some(Response::Body { status, .. }) => Err(PageError::Transport {
				path: path.to_string(),
				status: *status,
			}),
			Some(Response::Unreachable(message)) => Err(PageError::Network {
				path: path.to_string(),
				message: message.clone(),
			}),
			None => Err(PageError::Transport {
				path: path.to_string(),
				status: 404,
			}),
		}
	}
}
