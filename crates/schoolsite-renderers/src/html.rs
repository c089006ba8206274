//! HTML helpers shared by the renderers.

use std::sync::LazyLock;

use regex::Regex;

/// `http`, `https`, `ftp` and `file` URLs, plus bare `www.` hosts.
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"(?i)\b(?:https?|ftp|file)://[-A-Z0-9+&@#/%?=~_|!:,.;]*[-A-Z0-9+&@#/%=~_|]|\bwww\.[-A-Z0-9+&@#/%?=~_|$!:,.;]*[A-Z0-9+&@#/%=~_|$]",
	)
	.expect("URL pattern is valid")
});

/// Escapes text for use in element content and quoted attribute values.
pub fn escape(s: &str) -> String {
	let mut out = String::with_capacity(s.len());
	for c in s.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#x27;"),
			_ => out.push(c),
		}
	}
	out
}

/// Escapes `text` and turns every URL in it into an external link.
///
/// Bare `www.` hosts get an `http://` href. Links open in a new tab.
///
/// # Example
///
/// ```
/// use schoolsite_renderers::html::autolink;
///
/// assert_eq!(
/// 	autolink("see www.example.com"),
/// 	"see <a href=\"http://www.example.com\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"text-blue-500 hover:underline\">www.example.com</a>"
/// );
/// ```
pub fn autolink(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	let mut last = 0;

	for m in URL_RE.find_iter(text) {
		out.push_str(&escape(&text[last..m.start()]));

		let url = m.as_str();
		let href = if url.len() >= 4 && url[..4].eq_ignore_ascii_case("www.") {
			format!("http://{}", url)
		} else {
			url.to_string()
		};
		out.push_str(&format!(
			r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="text-blue-500 hover:underline">{}</a>"#,
			escape(&href),
			escape(url)
		));

		last = m.end();
	}

	out.push_str(&escape(&text[last..]));
	out
}

/// Wraps `message` in the centered empty-state container used by list pages.
pub(crate) fn empty_state(message: &str) -> String {
	format!(r#"<div class="p-8 text-center">{}</div>"#, message)
}

/// Wraps a page body in the white card with a title bar.
pub(crate) fn card(title: &str, body: &str) -> String {
	format!(
		r#"
        <div class="bg-white p-8 rounded-xl shadow-lg">
            <h1 class="text-2xl font-bold text-blue-800 mb-6 pb-2 border-b-2 border-blue-200">{}</h1>
            {}
        </div>"#,
		title, body
	)
}
