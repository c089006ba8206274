//! # schoolsite-renderers
//!
//! Turns the site's JSON data into HTML fragments for the content region.
//!
//! - [`models`]: typed records of the data files
//! - [`renderer`]: the [`Renderer`] contract and [`SyncRenderer`] adapter
//! - [`pages`]: one renderer per data-backed page
//! - [`template`]: named insertion points used by the home page
//! - [`registry`]: [`RendererRegistry`], the name → renderer map
//! - [`html`]: escaping and autolinking
//!
//! Every value taken from a data file is HTML-escaped before it is
//! interpolated.

#![warn(missing_docs)]

pub mod html;
pub mod models;
pub mod pages;
pub mod registry;
pub mod renderer;
pub mod template;

pub use pages::home::HomeRenderer;
pub use registry::RendererRegistry;
pub use renderer::{PageInput, RenderContext, RenderFn, Renderer, SyncRenderer};
