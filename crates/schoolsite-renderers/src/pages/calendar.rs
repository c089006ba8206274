//! Academic calendar.

use schoolsite_core::PageResult;

use crate::html::{card, empty_state, escape};
use crate::models::CalendarEvent;
use crate::renderer::PageInput;

/// Renders the calendar as a list of date badges and event descriptions.
pub fn render(input: PageInput) -> PageResult<String> {
	let events: Vec<CalendarEvent> = input.into_collection("academic-calendar")?;
	if events.is_empty() {
		return Ok(empty_state("ไม่พบข้อมูลปฏิทิน"));
	}

	let items: String = events
		.iter()
		.map(|item| {
			format!(
				r#"
        <li class="flex items-center space-x-4 p-4 border-b border-gray-200 last:border-b-0">
            <div class="bg-blue-100 text-blue-800 font-bold p-3 rounded-lg text-center w-32 flex-shrink-0">
                {}
            </div>
            <p class="text-gray-800">{}</p>
        </li>"#,
				escape(&item.date),
				escape(&item.event)
			)
		})
		.collect();

	Ok(card(
		"ปฏิทินการศึกษา",
		&format!(r#"<ul class="list-none m-0 p-0">{}</ul>"#, items),
	))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_renders_events_in_order() {
		let html = render(PageInput::Collection(json!([
			{ "date": "16 พ.ค.", "event": "วันไหว้ครู" },
			{ "date": "1 ต.ค.", "event": "สอบกลางภาค" }
		])))
		.unwrap();

		let first = html.find("วันไหว้ครู").unwrap();
		let second = html.find("สอบกลางภาค").unwrap();
		assert!(first < second);
		assert_eq!(html.matches("<li ").count(), 2);
	}

	#[rstest]
	#[case(PageInput::None)]
	#[case(PageInput::Collection(json!([])))]
	fn test_empty_state(#[case] input: PageInput) {
		assert!(render(input).unwrap().contains("ไม่พบข้อมูลปฏิทิน"));
	}

	#[rstest]
	fn test_event_text_is_escaped() {
		let html = render(PageInput::Collection(json!([{ "date": "x", "event": "<b>" }]))).unwrap();
		assert!(html.contains("&lt;b&gt;"));
	}
}
