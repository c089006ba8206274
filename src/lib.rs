//! # schoolsite
//!
//! A hash-routed single-page website for a school.
//!
//! The page shell (`site/index.html`) holds a navigation bar, an empty
//! content region and a lightbox overlay. Everything else is loaded on demand:
//! clicking a `.nav-item` link, or opening a `#/<pageId>[/<itemId>]` URL,
//! makes the router fetch the page's static document or data file, render it,
//! and write the result into the content region.
//!
//! ## Crates
//!
//! - [`core`]: errors, settings, logging, the fragment codec and the fetch seam
//! - [`renderers`]: data models and the page renderers
//! - [`router`]: the page table, the router and the browser binding
//!
//! ## Targets
//!
//! Built for `wasm32-unknown-unknown`, the crate starts itself when the module
//! is loaded. Natively, [`render`] renders a single route from a content
//! directory, which is what the `schoolsite-render` binary does.

#![warn(missing_docs)]

pub use schoolsite_core as core;
pub use schoolsite_renderers as renderers;
pub use schoolsite_router as router;

pub use schoolsite_core::{PageError, PageResult, SiteSettings};
pub use schoolsite_renderers::RendererRegistry;
pub use schoolsite_router::{NavigationOutcome, PageTable, Router};

#[cfg(not(target_arch = "wasm32"))]
pub mod render;

#[cfg(target_arch = "wasm32")]
mod entry {
	use wasm_bindgen::prelude::*;

	use schoolsite_core::{SiteSettings, logging};

	/// Runs when the WASM module is instantiated.
	#[wasm_bindgen(start)]
	pub fn main() -> Result<(), JsValue> {
		console_error_panic_hook::set_once();

		let settings = SiteSettings::default();
		logging::init(&settings.log_level);
		schoolsite_router::web::start(settings)?;
		Ok(())
	}
}
