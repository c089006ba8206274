//! # schoolsite-core
//!
//! Shared building blocks for the school site:
//!
//! - [`error`]: [`PageError`], the single error type of a navigation
//! - [`settings`]: [`SiteSettings`], loadable from TOML
//! - [`logging`]: `tracing` subscriber setup for WASM and native targets
//! - [`fragment`]: the `#/<pageId>[/<itemId>]` codec and navigation state
//! - [`fetch`]: the [`Fetcher`] seam and its filesystem implementation
//! - [`testing`]: [`MemoryFetcher`](testing::MemoryFetcher) for tests and bundled content

#![warn(missing_docs)]

pub mod error;
pub mod fetch;
pub mod fragment;
pub mod logging;
pub mod settings;
pub mod testing;

pub use error::{PageError, PageResult};
#[cfg(not(target_arch = "wasm32"))]
pub use fetch::FsFetcher;
pub use fetch::{Fetcher, fetch_json};
pub use fragment::{DEFAULT_PAGE, Fragment, HistoryEntry, NavigationState, Provenance};
pub use settings::{ElementIds, HomeSettings, Messages, SiteSettings};
