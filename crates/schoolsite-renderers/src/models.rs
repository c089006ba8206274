//! Typed records of the site's JSON data files.
//!
//! Field names follow the data files (`camelCase`). Unknown fields are
//! ignored and missing ones decode as empty, so one irregular record never
//! fails a whole page; optional fields are only rendered when present.

use std::cmp::Ordering;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A JSON scalar that renders the same whether the file stored it as a
/// number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
	/// Numeric value.
	Number(serde_json::Number),
	/// Textual value.
	Text(String),
}

impl fmt::Display for Scalar {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Number(n) => write!(f, "{}", n),
			Self::Text(s) => f.write_str(s),
		}
	}
}

impl Default for Scalar {
	fn default() -> Self {
		Self::Text(String::new())
	}
}

/// Record identifier; numeric `5` and textual `"5"` identify the same record.
pub type RecordId = Scalar;

impl Scalar {
	/// Reads the identifier field of a raw record, coerced to a string.
	///
	/// Returns `None` for records without a scalar `id`.
	pub fn id_of(record: &Value) -> Option<String> {
		match record.get("id")? {
			Value::String(s) => Some(s.clone()),
			Value::Number(n) => Some(n.to_string()),
			Value::Bool(b) => Some(b.to_string()),
			_ => None,
		}
	}

	/// Compares against a textual identifier under string coercion.
	pub fn matches(&self, id: &str) -> bool {
		self.to_string() == id
	}
}

/// Body text that is either a single string or a list of lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
	/// One line per element, joined with `<br>` when rendered.
	Lines(Vec<String>),
	/// A single block of text.
	Text(String),
}

impl Content {
	/// The content as lines.
	pub fn lines(&self) -> Vec<&str> {
		match self {
			Self::Lines(lines) => lines.iter().map(String::as_str).collect(),
			Self::Text(text) => vec![text.as_str()],
		}
	}
}

/// A news article (`news.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
	/// Identifier used by the detail page.
	#[serde(default)]
	pub id: RecordId,
	/// Headline.
	#[serde(default)]
	pub title: String,
	/// Publication date, `YYYY-MM-DD`.
	#[serde(default)]
	pub date: String,
	/// Short teaser for lists.
	#[serde(default)]
	pub summary: String,
	/// Full article text.
	#[serde(default)]
	pub full_content: Option<Content>,
	/// Photos; the first one is the list thumbnail.
	#[serde(default)]
	pub image_urls: Vec<String>,
	/// Pinned to the top of the news list. Only a literal `true` pins.
	#[serde(default, deserialize_with = "flag")]
	pub important: bool,
}

impl Article {
	/// The list thumbnail, if the article has any photo.
	pub fn cover(&self) -> Option<&str> {
		self.image_urls.first().map(String::as_str)
	}
}

/// A gallery photo (`gallery.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
	/// Full-size image.
	#[serde(default)]
	pub image_url: String,
	/// Caption.
	#[serde(default)]
	pub title: String,
	/// Date taken, `YYYY-MM-DD`.
	#[serde(default)]
	pub date: String,
}

/// A staff member (`staff.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
	/// Full name.
	#[serde(default)]
	pub name: String,
	/// Job title.
	#[serde(default)]
	pub position: String,
	/// Portrait.
	#[serde(default)]
	pub image_url: String,
	/// Subject taught.
	#[serde(default)]
	pub subject: Option<String>,
	/// Contact number.
	#[serde(default)]
	pub phone: Option<String>,
}

/// A piece of student work (`student-works.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentWork {
	/// Title of the work.
	#[serde(default)]
	pub title: String,
	/// Author.
	#[serde(default)]
	pub student_name: String,
	/// Class of the author.
	#[serde(default)]
	pub class: String,
	/// Description.
	#[serde(default)]
	pub description: String,
	/// Photo of the work.
	#[serde(default)]
	pub image_url: String,
}

/// An academic calendar entry (`academic-calendar.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
	/// Date label, rendered as-is.
	#[serde(default)]
	pub date: String,
	/// Event description.
	#[serde(default)]
	pub event: String,
}

/// One level's exam timetable (`exam-schedule.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamBlock {
	/// Class level.
	#[serde(default)]
	pub level: String,
	/// Free-text note shown under the heading.
	#[serde(default)]
	pub note: String,
	/// Timetable rows.
	#[serde(default)]
	pub schedule: Vec<ExamSlot>,
}

/// A single exam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamSlot {
	/// Date label.
	#[serde(default)]
	pub date: String,
	/// Time label.
	#[serde(default)]
	pub time: String,
	/// Subject.
	#[serde(default)]
	pub subject: String,
}

/// Student headcount for one academic year (`student-info.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentStats {
	/// Academic year.
	#[serde(default)]
	pub year: Scalar,
	/// All students.
	#[serde(default)]
	pub total_students: Scalar,
	/// Male students.
	#[serde(default)]
	pub male_students: Scalar,
	/// Female students.
	#[serde(default)]
	pub female_students: Scalar,
	/// Headcount per class level.
	#[serde(default)]
	pub class_breakdown: Vec<ClassCount>,
}

/// Headcount of one class level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassCount {
	/// Class level.
	#[serde(default)]
	pub level: String,
	/// Male students.
	#[serde(default)]
	pub male: Scalar,
	/// Female students.
	#[serde(default)]
	pub female: Scalar,
	/// All students.
	#[serde(default)]
	pub total: Scalar,
}

/// A downloadable document (`documents/documents.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Download {
	/// Display name.
	#[serde(default)]
	pub name: String,
	/// File type label, e.g. `PDF`.
	#[serde(rename = "type", default)]
	pub kind: String,
	/// Link target.
	#[serde(default)]
	pub path: String,
}

/// Reads a flag that is set only by JSON `true`; `null`, strings and numbers
/// leave it unset.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}

/// Parses the date formats found in the data files.
fn parse_date(date: &str) -> Option<NaiveDateTime> {
	let date = date.trim();
	NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S")
		.or_else(|_| NaiveDateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S"))
		.ok()
		.or_else(|| {
			chrono::DateTime::parse_from_rfc3339(date)
				.ok()
				.map(|dt| dt.naive_utc())
		})
		.or_else(|| {
			NaiveDate::parse_from_str(date, "%Y-%m-%d")
				.ok()
				.and_then(|d| d.and_hms_opt(0, 0, 0))
		})
}

/// Orders two date strings newest first; unparseable dates sort last.
pub fn newest_first(a: &str, b: &str) -> Ordering {
	match (parse_date(a), parse_date(b)) {
		(Some(a), Some(b)) => b.cmp(&a),
		(Some(_), None) => Ordering::Less,
		(None, Some(_)) => Ordering::Greater,
		(None, None) => Ordering::Equal,
	}
}
