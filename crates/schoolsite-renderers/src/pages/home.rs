//! Home page.
//!
//! The only renderer that performs its own retrievals: the template, the news
//! collection and the gallery collection are fetched concurrently, then the
//! news and gallery markup is injected into the template's placeholders.

use async_trait::async_trait;
use schoolsite_core::{HomeSettings, PageResult, fetch_json};

use crate::html::escape;
use crate::models::{Article, GalleryImage};
use crate::pages::gallery::sort_newest_first;
use crate::renderer::{PageInput, RenderContext, Renderer};
use crate::template::HomeTemplate;

/// Renders the home page from `HomeSettings` sources.
#[derive(Debug, Clone, Copy, Default)]
pub struct HomeRenderer;

#[async_trait(?Send)]
impl Renderer for HomeRenderer {
	async fn render(&self, _input: PageInput, ctx: &RenderContext<'_>) -> PageResult<String> {
		let home = ctx.home;
		let (template, news, gallery) = futures::try_join!(
			ctx.fetcher.fetch_text(&home.template),
			fetch_json::<Vec<Article>, _>(ctx.fetcher, &home.news),
			fetch_json::<Vec<GalleryImage>, _>(ctx.fetcher, &home.gallery),
		)?;

		tracing::debug!(
			news = news.len(),
			gallery = gallery.len(),
			"assembling home page"
		);
		Ok(assemble(&template, &news, gallery, home))
	}
}

/// Injects news and gallery markup into `template`.
///
/// A placeholder that is absent from the template, or whose collection is
/// empty, keeps the template's own content. News keeps file order; the
/// gallery shows the newest `gallery_count` photos.
pub fn assemble(
	template: &str,
	news: &[Article],
	mut gallery: Vec<GalleryImage>,
	home: &HomeSettings,
) -> String {
	let mut page = HomeTemplate::parse(
		template,
		&[home.news_placeholder.as_str(), home.gallery_placeholder.as_str()],
	);

	if let Some((featured, rest)) = news.split_first() {
		let secondary: String = rest
			.iter()
			.take(home.secondary_news_count)
			.map(compact_article)
			.collect();
		page.fill(
			&home.news_placeholder,
			format!("{}{}", featured_article(featured), secondary),
		);
	}

	if !gallery.is_empty() {
		sort_newest_first(&mut gallery);
		let tiles: String = gallery
			.iter()
			.take(home.gallery_count)
			.map(gallery_tile)
			.collect();
		page.fill(&home.gallery_placeholder, tiles);
	}

	page.render()
}

fn featured_article(article: &Article) -> String {
	let id = escape(&article.id.to_string());
	let title = escape(&article.title);
	let image = article
		.cover()
		.map(|src| {
			format!(
				r##"<a href="#" data-page="news-detail" data-id="{id}" class="nav-item"><img src="{}" alt="{title}" class="w-full h-64 object-cover"></a>"##,
				escape(src)
			)
		})
		.unwrap_or_default();

	format!(
		r##"
            <div class="md:col-span-2 bg-white rounded-xl shadow-lg overflow-hidden transition-transform duration-300 hover:scale-105">
                {image}
                <div class="p-6">
                    <a href="#" data-page="news-detail" data-id="{id}" class="font-bold text-xl mb-2 nav-item">{title}</a>
                    <p class="text-gray-600">{summary}</p>
                    <a href="#" data-page="news-detail" data-id="{id}" class="text-blue-600 hover:underline mt-4 inline-block nav-item">อ่านต่อ...</a>
                </div>
            </div>"##,
		summary = escape(&article.summary)
	)
}

fn compact_article(article: &Article) -> String {
	let title = escape(&article.title);
	let image = article
		.cover()
		.map(|src| {
			format!(
				r#"<img src="{}" alt="{title}" class="w-20 h-20 rounded-md object-cover">"#,
				escape(src)
			)
		})
		.unwrap_or_default();

	format!(
		r#"
             <div class="bg-white p-4 rounded-lg shadow flex items-center space-x-4">
                {image}
                <div>
                    <h4 class="font-semibold">{title}</h4>
                    <p class="text-sm text-gray-500">{date}</p>
                </div>
             </div>"#,
		date = escape(&article.date)
	)
}

fn gallery_tile(image: &GalleryImage) -> String {
	let title = escape(&image.title);
	format!(
		r#"
            <div class="bg-white rounded-xl shadow-lg overflow-hidden transition-transform duration-300 hover:scale-105">
                <img src="{src}" alt="{title}" class="w-full h-40 object-cover">
                <div class="p-3"><h4 class="font-semibold text-center">{title}</h4></div>
            </div>"#,
		src = escape(&image.image_url)
	)
}
