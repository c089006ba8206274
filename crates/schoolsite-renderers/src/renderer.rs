//! The renderer contract.
//!
//! Every page renderer, synchronous or not, is driven through the same
//! asynchronous [`Renderer::render`]. Plain template functions are wrapped in
//! [`SyncRenderer`], whose future is ready immediately; the home page
//! implements the trait directly because it performs its own retrievals.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use schoolsite_core::{Fetcher, HomeSettings, PageError, PageResult};

/// What the router hands to a renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum PageInput {
	/// The page has no data source.
	None,
	/// The whole parsed data file.
	Collection(Value),
	/// A single record selected by a detail navigation.
	Record(Value),
}

impl PageInput {
	/// Decodes the input as a list of records.
	///
	/// A missing or `null` input is an empty list; a single record becomes a
	/// one-element list.
	pub fn into_collection<T: DeserializeOwned>(self, what: &str) -> PageResult<Vec<T>> {
		match self {
			Self::None | Self::Collection(Value::Null) | Self::Record(Value::Null) => Ok(Vec::new()),
			Self::Collection(value) => serde_json::from_value(value).map_err(|e| PageError::decode(what, e)),
			Self::Record(value) => serde_json::from_value(value)
				.map(|record| vec![record])
				.map_err(|e| PageError::decode(what, e)),
		}
	}

	/// Decodes the input as a single record.
	///
	/// Only [`PageInput::Record`] carries one; anything else yields `None`.
	pub fn into_record<T: DeserializeOwned>(self, what: &str) -> PageResult<Option<T>> {
		match self {
			Self::Record(Value::Null) => Ok(None),
			Self::Record(value) => serde_json::from_value(value)
				.map(Some)
				.map_err(|e| PageError::decode(what, e)),
			Self::None | Self::Collection(_) => Ok(None),
		}
	}
}

/// Services available to renderers that fetch their own data.
pub struct RenderContext<'a> {
	/// Retrieval seam shared with the router.
	pub fetcher: &'a dyn Fetcher,
	/// Home page sources and limits.
	pub home: &'a HomeSettings,
}

impl<'a> RenderContext<'a> {
	/// Creates a render context.
	pub fn new(fetcher: &'a dyn Fetcher, home: &'a HomeSettings) -> Self {
		Self { fetcher, home }
	}
}

/// Maps page data to an HTML string.
#[async_trait(?Send)]
pub trait Renderer {
	/// Renders `input` into the markup written to the content region.
	async fn render(&self, input: PageInput, ctx: &RenderContext<'_>) -> PageResult<String>;
}

/// Signature of a synchronous template function.
pub type RenderFn = fn(PageInput) -> PageResult<String>;

/// Adapts a synchronous template function to [`Renderer`].
#[derive(Clone, Copy)]
pub struct SyncRenderer(pub RenderFn);

impl std::fmt::Debug for SyncRenderer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("SyncRenderer").finish()
	}
}

#[async_trait(?Send)]
impl Renderer for SyncRenderer {
	async fn render(&self, input: PageInput, _ctx: &RenderContext<'_>) -> PageResult<String> {
		(self.0)(input)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use schoolsite_core::testing::MemoryFetcher;
	use serde_json::json;

	fn count_records(input: PageInput) -> PageResult<String> {
		let items: Vec<Value> = input.into_collection("items")?;
		Ok(items.len().to_string())
	}

	#[rstest]
	#[case(PageInput::None, 0)]
	#[case(PageInput::Collection(Value::Null), 0)]
	#[case(PageInput::Collection(json!([1, 2, 3])), 3)]
	#[case(PageInput::Record(json!({ "id": 1 })), 1)]
	fn test_into_collection(#[case] input: PageInput, #[case] expected: usize) {
		let items: Vec<Value> = input.into_collection("items").unwrap();
		assert_eq!(items.len(), expected);
	}

	#[rstest]
	fn test_into_collection_rejects_wrong_shape() {
		let err = PageInput::Collection(json!({ "not": "a list" }))
			.into_collection::<Vec<u8>>("news.json")
			.unwrap_err();
		assert!(matches!(err, PageError::Decode { ref path, .. } if path == "news.json"));
	}

	#[rstest]
	fn test_into_record_only_for_record_input() {
		assert_eq!(
			PageInput::Record(json!(7)).into_record::<u8>("x").unwrap(),
			Some(7)
		);
		assert_eq!(
			PageInput::Collection(json!([7])).into_record::<u8>("x").unwrap(),
			None
		);
		assert_eq!(PageInput::None.into_record::<u8>("x").unwrap(), None);
	}

	#[rstest]
	#[tokio::test]
	async fn test_sync_renderer_resolves_immediately() {
		let fetcher = MemoryFetcher::new();
		let home = HomeSettings::default();
		let ctx = RenderContext::new(&fetcher, &home);
		let html = SyncRenderer(count_records)
			.render(PageInput::Collection(json!([1, 2])), &ctx)
			.await
			.unwrap();
		assert_eq!(html, "2");
		assert!(fetcher.requests().is_empty());
	}
}
