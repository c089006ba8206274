//! Student works showcase.

use schoolsite_core::PageResult;

use crate::html::{card, empty_state, escape};
use crate::models::StudentWork;
use crate::renderer::PageInput;

/// Renders one card per work, photo opening in the lightbox.
pub fn render(input: PageInput) -> PageResult<String> {
	let works: Vec<StudentWork> = input.into_collection("student-works")?;
	if works.is_empty() {
		return Ok(empty_state("ไม่พบผลงานนักเรียน"));
	}

	let cards: String = works
		.iter()
		.map(|work| {
			let src = escape(&work.image_url);
			let title = escape(&work.title);
			format!(
				r#"
        <div class="bg-white rounded-xl shadow-lg overflow-hidden flex flex-col transition-shadow duration-300 hover:shadow-xl">
            <a href="{src}" class="lightbox-trigger block">
                <img src="{src}" alt="{title}" class="w-full h-48 object-cover">
            </a>
            <div class="p-6 flex flex-col flex-grow">
                <h3 class="font-bold text-xl text-blue-800 mb-2">{title}</h3>
                <p class="text-gray-600 mb-1">โดย: {student}</p>
                <p class="text-sm text-gray-500 mb-3">ชั้น: {class}</p>
                <p class="text-gray-700 flex-grow">{description}</p>
            </div>
        </div>"#,
				student = escape(&work.student_name),
				class = escape(&work.class),
				description = escape(&work.description)
			)
		})
		.collect();

	Ok(card(
		"ผลงานนักเรียน",
		&format!(
			r#"<div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">{}</div>"#,
			cards
		),
	))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_renders_author_and_class() {
		let html = render(PageInput::Collection(json!([{
			"title": "หุ่นยนต์รีไซเคิล",
			"studentName": "ด.ช. ก้องภพ",
			"class": "ป.5",
			"description": "ทำจากขวดพลาสติก",
			"imageUrl": "works/robot.jpg"
		}])))
		.unwrap();

		assert!(html.contains("โดย: ด.ช. ก้องภพ"));
		assert!(html.contains("ชั้น: ป.5"));
		assert!(html.contains(r#"<a href="works/robot.jpg" class="lightbox-trigger block">"#));
	}

	#[rstest]
	fn test_empty_state() {
		assert!(render(PageInput::Collection(json!([]))).unwrap().contains("ไม่พบผลงานนักเรียน"));
	}
}
