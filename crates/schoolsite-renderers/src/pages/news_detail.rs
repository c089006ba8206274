//! Single news article with an image slider.

use schoolsite_core::PageResult;

use crate::html::{autolink, empty_state, escape};
use crate::models::Article;
use crate::renderer::PageInput;

const PREV_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 19l-7-7 7-7" /></svg>"#;
const NEXT_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 5l7 7-7 7" /></svg>"#;

/// Autolinks every content line and joins them with `<br>`.
fn render_content(article: &Article) -> String {
	let lines = article
		.full_content
		.as_ref()
		.map(|content| {
			content
				.lines()
				.into_iter()
				.map(autolink)
				.collect::<Vec<_>>()
				.join("<br>")
		})
		.unwrap_or_default();
	format!("<p>{}</p>", lines)
}

/// The slider track; prev/next controls only when there is more than one image.
fn render_slider(article: &Article) -> String {
	let title = escape(&article.title);
	let slides: String = article
		.image_urls
		.iter()
		.map(|url| {
			let src = escape(url);
			format!(
				r#"
                <div class="w-full flex-shrink-0">
                    <a href="{src}" class="lightbox-trigger">
                        <img src="{src}" alt="{title}" class="w-full h-64 md:h-96 object-cover">
                    </a>
                </div>"#
			)
		})
		.collect();

	let controls = if article.image_urls.len() > 1 {
		format!(
			r#"
            <button data-slide-control="prev" class="absolute top-1/2 left-3 -translate-y-1/2 bg-black/30 text-white hover:bg-black/50 rounded-full p-2 focus:outline-none transition-colors z-10">
                {PREV_ICON}
            </button>
            <button data-slide-control="next" class="absolute top-1/2 right-3 -translate-y-1/2 bg-black/30 text-white hover:bg-black/50 rounded-full p-2 focus:outline-none transition-colors z-10">
                {NEXT_ICON}
            </button>"#
		)
	} else {
		String::new()
	};

	format!(
		r#"
        <div class="relative w-full overflow-hidden rounded-lg mb-6 bg-gray-200">
            <div id="slider-track" class="flex transition-transform duration-300 ease-in-out" data-current-index="0">
                {slides}
            </div>
            {controls}
        </div>"#
	)
}

/// Renders one article. Anything but a single record shows "news not found".
pub fn render(input: PageInput) -> PageResult<String> {
	let Some(article) = input.into_record::<Article>("news-detail")? else {
		return Ok(empty_state("ไม่พบข้อมูลข่าว"));
	};

	Ok(format!(
		r##"
        <div class="bg-white p-4 sm:p-8 rounded-xl shadow-lg max-w-4xl mx-auto mt-10">
            <a href="#" class="text-blue-600 hover:underline mb-6 inline-block nav-item" data-page="news">&larr; กลับไปหน้ารวมข่าว</a>
            <h1 class="text-2xl sm:text-3xl font-bold text-blue-800 mb-2">{title}</h1>
            <p class="text-sm text-gray-500 mb-6">{date}</p>
            {slider}
            <div class="prose prose-blue max-w-none text-gray-800 break-words">
                {content}
            </div>
        </div>"##,
		title = escape(&article.title),
		date = escape(&article.date),
		slider = render_slider(&article),
		content = render_content(&article)
	))
}
