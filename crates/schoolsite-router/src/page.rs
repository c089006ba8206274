//! The page configuration table.
//!
//! Every navigable page is one [`PageConfig`]. Its [`PageSource`] makes the
//! valid shapes the only representable ones: a static document, a data file
//! paired with a renderer, or a renderer that fetches its own data.
//!
//! Tables are built from code with [`PageTable::builtin`] or loaded from TOML
//! with [`PageTable::from_toml_str`]:
//!
//! ```toml
//! [[page]]
//! id = "vision"
//! document = "vision.html"
//!
//! [[page]]
//! id = "news"
//! data = "news.json"
//! renderer = "news"
//!
//! [[page]]
//! id = "news-detail"
//! data = "news.json"
//! renderer = "news-detail"
//! detail = true
//! ```

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use serde::Deserialize;

use schoolsite_core::{PageError, PageResult};
use schoolsite_renderers::{Renderer, RendererRegistry};

/// A renderer resolved from the registry, remembered with its name.
#[derive(Clone)]
pub struct RendererRef {
	name: String,
	renderer: Rc<dyn Renderer>,
}

impl RendererRef {
	/// Wraps a renderer under `name`.
	pub fn new(name: impl Into<String>, renderer: Rc<dyn Renderer>) -> Self {
		Self {
			name: name.into(),
			renderer,
		}
	}

	/// Looks `name` up in `registry`.
	///
	/// An unknown name is an invalid configuration of `page_id`.
	pub fn resolve(registry: &RendererRegistry, page_id: &str, name: &str) -> PageResult<Self> {
		registry
			.get(name)
			.map(|renderer| Self::new(name, renderer))
			.ok_or_else(|| PageError::InvalidConfiguration {
				page_id: page_id.to_string(),
				reason: format!("unknown renderer '{}'", name),
			})
	}

	/// Registry name of the renderer.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The renderer itself.
	pub fn renderer(&self) -> &dyn Renderer {
		self.renderer.as_ref()
	}
}

impl fmt::Debug for RendererRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("RendererRef").field(&self.name).finish()
	}
}

/// Where a page's content comes from.
#[derive(Debug, Clone)]
pub enum PageSource {
	/// A static HTML document written verbatim into the content region.
	Document(String),
	/// A JSON data file rendered by a renderer.
	Data {
		/// Path of the data file.
		path: String,
		/// Renderer applied to the parsed data.
		renderer: RendererRef,
	},
	/// A renderer that performs its own retrievals.
	SelfFetching {
		/// The renderer.
		renderer: RendererRef,
	},
}

/// Whether a page shows a whole collection or one record of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageKind {
	/// Shows the whole collection (or no data).
	#[default]
	List,
	/// Shows the record whose `id` equals the navigation's item identifier.
	Detail,
}

/// One navigable page.
#[derive(Debug, Clone)]
pub struct PageConfig {
	/// Page identifier, unique within a table.
	pub id: String,
	/// Content source.
	pub source: PageSource,
	/// List or detail page.
	pub kind: PageKind,
}

impl PageConfig {
	/// A static document page.
	pub fn document(id: impl Into<String>, path: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			source: PageSource::Document(path.into()),
			kind: PageKind::List,
		}
	}

	/// A data file rendered by `renderer`.
	pub fn data(id: impl Into<String>, path: impl Into<String>, renderer: RendererRef) -> Self {
		Self {
			id: id.into(),
			source: PageSource::Data {
				path: path.into(),
				renderer,
			},
			kind: PageKind::List,
		}
	}

	/// A renderer that fetches its own data.
	pub fn self_fetching(id: impl Into<String>, renderer: RendererRef) -> Self {
		Self {
			id: id.into(),
			source: PageSource::SelfFetching { renderer },
			kind: PageKind::List,
		}
	}

	/// Marks the page as a detail page.
	pub fn detail(mut self) -> Self {
		self.kind = PageKind::Detail;
		self
	}

	/// Returns whether this is a detail page.
	pub fn is_detail(&self) -> bool {
		self.kind == PageKind::Detail
	}
}

/// Page identifier → [`PageConfig`].
#[derive(Debug, Clone, Default)]
pub struct PageTable {
	pages: HashMap<String, PageConfig>,
}

/// Built-in pages: `(id, data file, renderer)`.
const DATA_PAGES: &[(&str, &str, &str)] = &[
	("staff", "staff.json", "staff"),
	("news", "news.json", "news"),
	("gallery", "gallery.json", "gallery"),
	("student-works", "student-works.json", "student-works"),
	("academic-calendar", "academic-calendar.json", "calendar"),
	("exam-schedule", "exam-schedule.json", "exam-schedule"),
	("student-info", "student-info.json", "student-info"),
	("downloads", "documents/documents.json", "downloads"),
];

/// Built-in static pages: `(id, document)`.
const DOCUMENT_PAGES: &[(&str, &str)] = &[
	("facebook-updates", "facebook-updates.html"),
	("vision", "vision.html"),
	("mission", "mission.html"),
	("calendar", "calendar.html"),
	("qa", "qa.html"),
	("contact", "contact.html"),
	("kids-science", "kids-science.html"),
	("students-development", "students-development.html"),
	("nutrition", "nutrition.html"),
];

impl PageTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// The school site's page table, with renderers taken from `registry`.
	pub fn builtin(registry: &RendererRegistry) -> PageResult<Self> {
		let mut table = Self::new();

		table.insert(PageConfig::self_fetching(
			"home",
			RendererRef::resolve(registry, "home", "home")?,
		))?;
		for (id, path, renderer) in DATA_PAGES {
			table.insert(PageConfig::data(
				*id,
				*path,
				RendererRef::resolve(registry, id, renderer)?,
			))?;
		}
		table.insert(
			PageConfig::data(
				"news-detail",
				"news.json",
				RendererRef::resolve(registry, "news-detail", "news-detail")?,
			)
			.detail(),
		)?;
		for (id, path) in DOCUMENT_PAGES {
			table.insert(PageConfig::document(*id, *path))?;
		}

		Ok(table)
	}

	/// Loads a table from `[[page]]` entries.
	///
	/// Every entry must be exactly one of `document`, `data` + `renderer`, or
	/// `renderer` alone; `detail = true` requires a data file. Ids must be
	/// unique.
	pub fn from_toml_str(text: &str, registry: &RendererRegistry) -> PageResult<Self> {
		let file: TableFile = toml::from_str(text).map_err(|e| PageError::Settings(e.to_string()))?;

		let mut table = Self::new();
		for entry in file.page {
			table.insert(entry.into_config(registry)?)?;
		}
		Ok(table)
	}

	/// Adds a page. Ids must be unique.
	pub fn insert(&mut self, config: PageConfig) -> PageResult<()> {
		if self.pages.contains_key(&config.id) {
			return Err(PageError::InvalidConfiguration {
				page_id: config.id,
				reason: "duplicate page id".to_string(),
			});
		}
		self.pages.insert(config.id.clone(), config);
		Ok(())
	}

	/// Resolves a page identifier.
	pub fn get(&self, page_id: &str) -> PageResult<&PageConfig> {
		self.pages
			.get(page_id)
			.ok_or_else(|| PageError::ConfigurationMissing(page_id.to_string()))
	}

	/// Returns whether `page_id` is configured.
	pub fn contains(&self, page_id: &str) -> bool {
		self.pages.contains_key(page_id)
	}

	/// Configured page identifiers, sorted.
	pub fn ids(&self) -> Vec<&str> {
		let mut ids: Vec<&str> = self.pages.keys().map(String::as_str).collect();
		ids.sort_unstable();
		ids
	}

	/// Number of pages.
	pub fn len(&self) -> usize {
		self.pages.len()
	}

	/// Returns whether the table has no pages.
	pub fn is_empty(&self) -> bool {
		self.pages.is_empty()
	}
}

#[derive(Debug, Deserialize)]
struct TableFile {
	#[serde(default)]
	page: Vec<PageEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PageEntry {
	id: String,
	document: Option<String>,
	data: Option<String>,
	renderer: Option<String>,
	#[serde(default)]
	detail: bool,
}

impl PageEntry {
	fn into_config(self, registry: &RendererRegistry) -> PageResult<PageConfig> {
		let invalid = |reason: &str| PageError::InvalidConfiguration {
			page_id: self.id.clone(),
			reason: reason.to_string(),
		};

		let config = match (&self.document, &self.data, &self.renderer) {
			(Some(document), None, None) => PageConfig::document(&self.id, document),
			(None, Some(data), Some(name)) => PageConfig::data(
				&self.id,
				data,
				RendererRef::resolve(registry, &self.id, name)?,
			),
			(None, None, Some(name)) => {
				PageConfig::self_fetching(&self.id, RendererRef::resolve(registry, &self.id, name)?)
			}
			(None, Some(_), None) => return Err(invalid("data source without a renderer")),
			(Some(_), _, _) => return Err(invalid("a document page takes no data source or renderer")),
			(None, None, None) => return Err(invalid("no document, data source or renderer")),
		};

		if !self.detail {
			return Ok(config);
		}
		match config.source {
			PageSource::Data { .. } => Ok(config.detail()),
			_ => Err(invalid("a detail page needs a data source")),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	#[fixture]
	fn registry() -> RendererRegistry {
		RendererRegistry::builtin()
	}

	#[rstest]
	fn test_builtin_table(registry: RendererRegistry) {
		let table = PageTable::builtin(&registry).unwrap();
		assert_eq!(table.len(), 19);

		assert!(matches!(
			table.get("home").unwrap().source,
			PageSource::SelfFetching { ref renderer } if renderer.name() == "home"
		));
		assert!(matches!(
			table.get("downloads").unwrap().source,
			PageSource::Data { ref path, ref renderer }
				if path == "documents/documents.json" && renderer.name() == "downloads"
		));
		assert!(matches!(
			table.get("academic-calendar").unwrap().source,
			PageSource::Data { ref renderer, .. } if renderer.name() == "calendar"
		));
		assert!(matches!(
			table.get("calendar").unwrap().source,
			PageSource::Document(ref path) if path == "calendar.html"
		));
	}

	#[rstest]
	fn test_only_news_detail_is_detail(registry: RendererRegistry) {
		let table = PageTable::builtin(&registry).unwrap();
		let detail: Vec<&str> = table
			.ids()
			.into_iter()
			.filter(|id| table.get(id).unwrap().is_detail())
			.collect();
		assert_eq!(detail, vec!["news-detail"]);
	}

	#[rstest]
	fn test_unknown_page_is_configuration_missing(registry: RendererRegistry) {
		let table = PageTable::builtin(&registry).unwrap();
		assert_eq!(
			table.get("admissions").unwrap_err(),
			PageError::ConfigurationMissing("admissions".to_string())
		);
	}

	#[rstest]
	fn test_from_toml(registry: RendererRegistry) {
		let table = PageTable::from_toml_str(
			r#"
			[[page]]
			id = "home"
			renderer = "home"

			[[page]]
			id = "vision"
			document = "vision.html"

			[[page]]
			id = "news-detail"
			data = "news.json"
			renderer = "news-detail"
			detail = true
			"#,
			&registry,
		)
		.unwrap();

		assert_eq!(table.ids(), vec!["home", "news-detail", "vision"]);
		assert!(table.get("news-detail").unwrap().is_detail());
		assert!(!table.get("vision").unwrap().is_detail());
	}

	#[rstest]
	#[case(r#"data = "x.json""#, "data source without a renderer")]
	#[case(r#"document = "x.html"
renderer = "news""#, "a document page takes no data source or renderer")]
	#[case("", "no document, data source or renderer")]
	#[case(r#"renderer = "brochure""#, "unknown renderer 'brochure'")]
	#[case(r#"document = "x.html"
detail = true"#, "a detail page needs a data source")]
	fn test_from_toml_rejects_invalid_entries(
		registry: RendererRegistry,
		#[case] fields: &str,
		#[case] reason: &str,
	) {
		let text = format!("[[page]]\nid = \"broken\"\n{}\n", fields);
		assert_eq!(
			PageTable::from_toml_str(&text, &registry).unwrap_err(),
			PageError::InvalidConfiguration {
				page_id: "broken".to_string(),
				reason: reason.to_string(),
			}
		);
	}

	#[rstest]
	fn test_from_toml_rejects_duplicates(registry: RendererRegistry) {
		let err = PageTable::from_toml_str(
			"[[page]]\nid = \"qa\"\ndocument = \"qa.html\"\n[[page]]\nid = \"qa\"\ndocument = \"faq.html\"\n",
			&registry,
		)
		.unwrap_err();
		assert!(matches!(err, PageError::InvalidConfiguration { ref reason, .. } if reason == "duplicate page id"));
	}

	#[rstest]
	fn test_from_toml_rejects_unknown_keys(registry: RendererRegistry) {
		let err = PageTable::from_toml_str("[[page]]\nid = \"qa\"\nfile = \"qa.html\"\n", &registry)
			.unwrap_err();
		assert!(matches!(err, PageError::Settings(_)));
	}
}
