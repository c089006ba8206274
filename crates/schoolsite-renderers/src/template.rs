//! HTML templates with named insertion points.
//!
//! A [`HomeTemplate`] is parsed once from a static document. Every element
//! whose `id` matches one of the requested slot names becomes an insertion
//! point; filling a slot replaces that element's inner markup and leaves the
//! element itself (and everything else in the document) untouched.
//!
//! ```
//! use schoolsite_renderers::template::HomeTemplate;
//!
//! let mut template = HomeTemplate::parse(
//! 	r#"<section><div id="news">loading</div></section>"#,
//! 	&["news"],
//! );
//! template.fill("news", "<p>fresh</p>");
//! assert_eq!(template.render(), r#"<section><div id="news"><p>fresh</p></div></section>"#);
//! ```

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
	Markup(String),
	Slot { name: String, original: String },
}

/// A document split into fixed markup and named insertion points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeTemplate {
	segments: Vec<Segment>,
	filled: HashMap<String, String>,
}

/// Byte range of a slot's inner markup.
struct SlotRange {
	name: String,
	inner_start: usize,
	inner_end: usize,
}

impl HomeTemplate {
	/// Parses `document`, turning the elements with the given ids into slots.
	///
	/// Only the body's inner markup is kept when `document` is a full HTML
	/// document. Ids that do not occur in the document are ignored.
	pub fn parse(document: &str, slot_ids: &[&str]) -> Self {
		let html = body_inner(document);

		let mut ranges: Vec<SlotRange> = slot_ids
			.iter()
			.filter_map(|id| locate_element(html, id))
			.collect();
		ranges.sort_by_key(|r| r.inner_start);

		let mut segments = Vec::new();
		let mut cursor = 0;
		for range in ranges {
			// Slots nested inside an earlier slot are ignored.
			if range.inner_start < cursor {
				continue;
			}
			segments.push(Segment::Markup(html[cursor..range.inner_start].to_string()));
			segments.push(Segment::Slot {
				name: range.name,
				original: html[range.inner_start..range.inner_end].to_string(),
			});
			cursor = range.inner_end;
		}
		segments.push(Segment::Markup(html[cursor..].to_string()));

		Self {
			segments,
			filled: HashMap::new(),
		}
	}

	/// Names of the insertion points found in the document, in order.
	pub fn slots(&self) -> Vec<&str> {
		self.segments
			.iter()
			.filter_map(|segment| match segment {
				Segment::Slot { name, .. } => Some(name.as_str()),
				Segment::Markup(_) => None,
			})
			.collect()
	}

	/// Returns whether the document has an insertion point called `name`.
	pub fn has_slot(&self, name: &str) -> bool {
		self.slots().contains(&name)
	}

	/// Sets the inner markup of slot `name`. Unknown names are ignored.
	pub fn fill(&mut self, name: &str, html: impl Into<String>) {
		if self.has_slot(name) {
			self.filled.insert(name.to_string(), html.into());
		}
	}

	/// Produces the final markup; unfilled slots keep their original content.
	pub fn render(&self) -> String {
		self.segments
			.iter()
			.map(|segment| match segment {
				Segment::Markup(html) => html.as_str(),
				Segment::Slot { name, original } => self
					.filled
					.get(name)
					.map(String::as_str)
					.unwrap_or(original.as_str()),
			})
			.collect()
	}
}

/// Inner markup of `<body>`, or the whole input when there is no body tag.
fn body_inner(document: &str) -> &str {
	let lower = document.to_ascii_lowercase();
	let Some(open) = lower.find("<body") else {
		return document;
	};
	let Some(open_end) = lower[open..].find('>').map(|i| open + i + 1) else {
		return document;
	};
	let close = lower.rfind("</body").filter(|&c| c >= open_end).unwrap_or(document.len());
	&document[open_end..close]
}

/// Finds the element carrying `id` and returns the range of its inner markup.
fn locate_element(html: &str, id: &str) -> Option<SlotRange> {
	let attr_pos = [format!("id=\"{}\"", id), format!("id='{}'", id)]
		.iter()
		.filter_map(|needle| find_attribute(html, needle))
		.min()?;

	let tag_start = html[..attr_pos].rfind('<')?;
	let tag_name: String = html[tag_start + 1..]
		.chars()
		.take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
		.collect::<String>()
		.to_ascii_lowercase();
	if tag_name.is_empty() {
		return None;
	}

	let open_end = tag_end(html, attr_pos)? + 1;
	if html[..open_end].ends_with("/>") {
		return None;
	}

	let inner_end = matching_close(html, &tag_name, open_end)?;
	Some(SlotRange {
		name: id.to_string(),
		inner_start: open_end,
		inner_end,
	})
}

/// Position of `needle` where it starts a whole attribute (preceded by whitespace).
fn find_attribute(html: &str, needle: &str) -> Option<usize> {
	html.match_indices(needle)
		.map(|(pos, _)| pos)
		.find(|&pos| pos > 0 && html[..pos].ends_with(|c: char| c.is_ascii_whitespace()))
}

/// Start of the closing tag matching an element opened just before `from`.
fn matching_close(html: &str, tag: &str, from: usize) -> Option<usize> {
	let lower = html.to_ascii_lowercase();
	let open = format!("<{}", tag);
	let close = format!("</{}", tag);
	let mut depth = 1usize;
	let mut pos = from;

	while pos < lower.len() {
		let next = lower[pos..].find('<').map(|i| pos + i)?;
		let rest = &lower[next..];
		if rest.starts_with(&close) && is_tag_boundary(rest, close.len()) {
			depth -= 1;
			if depth == 0 {
				return Some(next);
			}
		} else if rest.starts_with(&open) && is_tag_boundary(rest, open.len()) {
			let end = tag_end(&lower, next)?;
			if !lower[..=end].ends_with("/>") {
				depth += 1;
			}
		}
		pos = next + 1;
	}
	None
}

/// Position of the `>` closing the tag that contains `from`, skipping any
/// `>` inside quoted attribute values.
fn tag_end(html: &str, from: usize) -> Option<usize> {
	let mut quote = None;
	for (i, c) in html[from..].char_indices() {
		match (quote, c) {
			(None, '"' | '\'') => quote = Some(c),
			(Some(q), _) if c == q => quote = None,
			(None, '>') => return Some(from + i),
			_ => {}
		}
	}
	None
}

fn is_tag_boundary(rest: &str, at: usize) -> bool {
	rest[at..]
		.chars()
		.next()
		.is_some_and(|c| c == '>' || c == '/' || c.is_ascii_whitespace())
}
