//! Name → renderer lookup.
//!
//! The page table refers to renderers by name so that it can be written as
//! plain data. [`RendererRegistry::builtin`] knows every renderer shipped with
//! the site; sites can register additional ones before building their table.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::pages;
use crate::renderer::{RenderFn, Renderer, SyncRenderer};

/// Renderers indexed by name.
#[derive(Clone, Default)]
pub struct RendererRegistry {
	renderers: HashMap<String, Rc<dyn Renderer>>,
}

const SYNC_RENDERERS: &[(&str, RenderFn)] = &[
	("staff", pages::staff::render),
	("news", pages::news::render),
	("gallery", pages::gallery::render),
	("student-works", pages::student_works::render),
	("calendar", pages::calendar::render),
	("exam-schedule", pages::exam_schedule::render),
	("student-info", pages::student_info::render),
	("downloads", pages::downloads::render),
	("news-detail", pages::news_detail::render),
];

impl RendererRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registry holding every renderer shipped with the site.
	pub fn builtin() -> Self {
		let mut registry = Self::new();
		registry.register("home", pages::home::HomeRenderer);
		for (name, render) in SYNC_RENDERERS {
			registry.register(*name, SyncRenderer(*render));
		}
		registry
	}

	/// Adds or replaces the renderer called `name`.
	pub fn register(&mut self, name: impl Into<String>, renderer: impl Renderer + 'static) {
		self.renderers.insert(name.into(), Rc::new(renderer));
	}

	/// Looks up a renderer.
	pub fn get(&self, name: &str) -> Option<Rc<dyn Renderer>> {
		self.renderers.get(name).cloned()
	}

	/// Returns whether `name` is registered.
	pub fn contains(&self, name: &str) -> bool {
		self.renderers.contains_key(name)
	}

	/// Registered names, sorted.
	pub fn names(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self.renderers.keys().map(String::as_str).collect();
		names.sort_unstable();
		names
	}
}

impl fmt::Debug for RendererRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RendererRegistry")
			.field("names", &self.names())
			.finish()
	}
}
