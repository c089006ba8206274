//! Photo gallery.

use schoolsite_core::PageResult;

use crate::html::{card, empty_state, escape};
use crate::models::{GalleryImage, newest_first};
use crate::renderer::PageInput;

/// Sorts photos newest first. Photos with the same date keep their order.
pub fn sort_newest_first(images: &mut [GalleryImage]) {
	images.sort_by(|a, b| newest_first(&a.date, &b.date));
}

/// Renders every photo, newest first, each one opening in the lightbox.
pub fn render(input: PageInput) -> PageResult<String> {
	let mut images: Vec<GalleryImage> = input.into_collection("gallery")?;
	if images.is_empty() {
		return Ok(empty_state("ไม่พบรูปภาพในคลัง"));
	}
	sort_newest_first(&mut images);

	let tiles: String = images
		.iter()
		.map(|image| {
			let src = escape(&image.image_url);
			let title = escape(&image.title);
			format!(
				r#"
        <div class="bg-white rounded-lg shadow-md overflow-hidden transition-transform duration-300 hover:scale-105">
            <a href="{src}" class="lightbox-trigger block">
                <img src="{src}" alt="{title}" class="w-full h-48 object-cover">
            </a>
            <div class="p-4">
                <h4 class="font-semibold text-center text-gray-800 truncate">{title}</h4>
                <p class="text-xs text-center text-gray-500">{date}</p>
            </div>
        </div>"#,
				date = escape(&image.date)
			)
		})
		.collect();

	Ok(card(
		"คลังภาพกิจกรรม",
		&format!(
			r#"<div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4">{}</div>"#,
			tiles
		),
	))
}
