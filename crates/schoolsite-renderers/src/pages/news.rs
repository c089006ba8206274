//! News list.

use schoolsite_core::PageResult;

use crate::html::{card, empty_state, escape};
use crate::models::{Article, newest_first};
use crate::renderer::PageInput;

/// Sorts articles: important ones first, then newest first within each group.
pub fn sort_articles(articles: &mut [Article]) {
	articles.sort_by(|a, b| {
		b.important
			.cmp(&a.important)
			.then_with(|| newest_first(&a.date, &b.date))
	});
}

fn render_article(article: &Article) -> String {
	let (container, badge) = if article.important {
		(
			"bg-blue-50 border-l-4 border-blue-500 rounded-r-xl shadow-lg",
			r#"<span class="bg-blue-500 text-white text-xs font-bold px-2.5 py-1 rounded-full ml-4 flex-shrink-0">ข่าวสำคัญ</span>"#,
		)
	} else {
		("bg-white rounded-xl shadow-lg", "")
	};

	let id = escape(&article.id.to_string());
	let title = escape(&article.title);
	let image = article
		.cover()
		.map(|src| {
			format!(
				r#"<img src="{}" alt="{}" class="w-full md:w-64 h-60 md:h-auto object-cover flex-shrink-0">"#,
				escape(src),
				title
			)
		})
		.unwrap_or_default();

	format!(
		r##"
            <div class="{container} overflow-hidden flex flex-col md:flex-row mb-6 transition-shadow duration-300 hover:shadow-xl">
                {image}
                <div class="p-6 flex flex-col">
                    <div class="flex justify-between items-start mb-2">
                        <a href="#" data-page="news-detail" data-id="{id}" class="font-bold text-xl text-blue-800 nav-item">{title}</a>
                        {badge}
                    </div>
                    <p class="text-sm text-gray-500 mb-3">{date}</p>
                    <p class="text-gray-700 flex-grow">{summary}</p>
                    <a href="#" data-page="news-detail" data-id="{id}" class="text-blue-600 hover:underline mt-4 self-start nav-item">อ่านเพิ่มเติม...</a>
                </div>
            </div>"##,
		date = escape(&article.date),
		summary = escape(&article.summary)
	)
}

/// Renders the news list with pinned articles highlighted and badged.
pub fn render(input: PageInput) -> PageResult<String> {
	let mut articles: Vec<Article> = input.into_collection("news")?;
	if articles.is_empty() {
		return Ok(empty_state("ไม่พบข่าวประชาสัมพันธ์"));
	}
	sort_articles(&mut articles);

	let list: String = articles.iter().map(render_article).collect();
	Ok(card("ข่าวประชาสัมพันธ์", &format!("<div>{}</div>", list)))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	fn articles() -> serde_json::Value {
		json!([
			{ "id": 1, "title": "A-plain-old", "date": "2024-01-05", "summary": "", "imageUrls": ["a.jpg"] },
			{ "id": 2, "title": "B-important-old", "date": "2024-01-01", "important": true, "imageUrls": ["b.jpg"] },
			{ "id": 3, "title": "C-plain-new", "date": "2024-03-01", "imageUrls": ["c.jpg"] },
			{ "id": 4, "title": "D-important-new", "date": "2024-02-01", "important": true, "imageUrls": ["d.jpg"] }
		])
	}

	#[rstest]
	fn test_important_first_then_newest() {
		let mut list: Vec<Article> = serde_json::from_value(articles()).unwrap();
		sort_articles(&mut list);
		let titles: Vec<&str> = list.iter().map(|a| a.title.as_str()).collect();
		assert_eq!(
			titles,
			vec!["D-important-new", "B-important-old", "C-plain-new", "A-plain-old"]
		);
	}

	#[rstest]
	fn test_render_order_and_badges() {
		let html = render(PageInput::Collection(articles())).unwrap();
		let positions: Vec<usize> = ["D-important-new", "B-important-old", "C-plain-new", "A-plain-old"]
			.iter()
			.map(|t| html.find(t).unwrap())
			.collect();
		assert!(positions.windows(2).all(|w| w[0] < w[1]));
		assert_eq!(html.matches("ข่าวสำคัญ").count(), 2);
		assert_eq!(html.matches("border-l-4 border-blue-500").count(), 2);
	}

	#[rstest]
	fn test_links_point_to_detail_page() {
		let html = render(PageInput::Collection(articles())).unwrap();
		assert_eq!(html.matches(r#"data-page="news-detail" data-id="3""#).count(), 2);
	}

	#[rstest]
	fn test_article_without_photo_has_no_image() {
		let html = render(PageInput::Collection(json!([{ "id": 1, "title": "t" }]))).unwrap();
		assert!(!html.contains("<img"));
	}

	#[rstest]
	fn test_irregular_records_still_render() {
		let html = render(PageInput::Collection(json!([
			{ "id": 1, "title": "null-flag", "date": "2024-01-01", "important": null },
			{ "id": 2, "title": "text-flag", "date": "2024-02-01", "important": "yes" },
			{ "title": "no-id", "date": "2024-03-01" },
			{ "id": 4, "title": "pinned", "date": "2023-01-01", "important": true }
		])))
		.unwrap();

		assert_eq!(html.matches("ข่าวสำคัญ").count(), 1);
		let positions: Vec<usize> = ["pinned", "no-id", "text-flag", "null-flag"]
			.iter()
			.map(|t| html.find(t).unwrap())
			.collect();
		assert!(positions.windows(2).all(|w| w[0] < w[1]));
		assert!(html.contains(r#"data-page="news-detail" data-id="" "#));
	}

	#[rstest]
	fn test_empty_state() {
		assert!(render(PageInput::None).unwrap().contains("ไม่พบข่าวประชาสัมพันธ์"));
	}
}
