//! # schoolsite-router
//!
//! The hash router of the school site.
//!
//! - [`page`]: the page configuration table
//! - [`router`]: [`Router`], which loads pages into the content region
//! - [`host`]: the DOM/history seam the router writes through
//! - [`events`]: classification of clicks on the page
//! - [`widgets`]: slider, lightbox and mobile menu state
//! - [`testing`]: [`RecordingHost`](testing::RecordingHost)
//! - `web` (wasm32 only): the `web-sys` host, the `gloo-net` fetcher and the
//!   event listeners
//!
//! ## Example
//!
//! ```
//! use schoolsite_core::testing::MemoryFetcher;
//! use schoolsite_core::{Provenance, SiteSettings};
//! use schoolsite_renderers::RendererRegistry;
//! use schoolsite_router::testing::RecordingHost;
//! use schoolsite_router::{Host, PageTable, Router};
//!
//! # futures::executor::block_on(async {
//! let table = PageTable::builtin(&RendererRegistry::builtin()).unwrap();
//! let fetcher = MemoryFetcher::new().with("vision.html", "<h1>วิสัยทัศน์</h1>");
//! let router = Router::new(table, fetcher, RecordingHost::new(), SiteSettings::default());
//!
//! let outcome = router.navigate("vision", None, Provenance::User).await;
//! assert!(outcome.is_rendered());
//! assert_eq!(router.host().content(), "<h1>วิสัยทัศน์</h1>");
//! assert_eq!(router.host().location_hash(), "#/vision");
//! # });
//! ```

#![warn(missing_docs)]

pub mod events;
pub mod host;
pub mod page;
pub mod router;
pub mod testing;
pub mod widgets;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use events::{ClickTarget, Interaction, NavLink};
pub use host::Host;
pub use page::{PageConfig, PageKind, PageSource, PageTable, RendererRef};
pub use router::{NavigationOutcome, Router, RouterState};
pub use widgets::{Lightbox, MobileMenu, SlideDirection, SliderState};
