//! End-of-term exam timetable.

use schoolsite_core::PageResult;

use crate::html::{card, empty_state, escape};
use crate::models::ExamBlock;
use crate::renderer::PageInput;

fn render_block(block: &ExamBlock) -> String {
	let table = if block.schedule.is_empty() {
		String::new()
	} else {
		let rows: String = block
			.schedule
			.iter()
			.map(|row| {
				format!(
					r#"
                <tr>
                    <td class="border px-4 py-2">{}</td>
                    <td class="border px-4 py-2">{}</td>
                    <td class="border px-4 py-2">{}</td>
                </tr>"#,
					escape(&row.date),
					escape(&row.time),
					escape(&row.subject)
				)
			})
			.collect();

		format!(
			r#"
                <div class="overflow-x-auto">
                    <table class="table-auto w-full border-collapse border border-gray-300">
                        <thead>
                            <tr class="bg-gray-100">
                                <th class="px-4 py-2 border">วันที่</th>
                                <th class="px-4 py-2 border">เวลา</th>
                                <th class="px-4 py-2 border">วิชา</th>
                            </tr>
                        </thead>
                        <tbody>
                            {}
                        </tbody>
                    </table>
                </div>"#,
			rows
		)
	};

	format!(
		r#"
            <div class="mb-8">
                <h2 class="text-xl font-semibold text-blue-700 mb-2">{}</h2>
                <p class="text-gray-600 mb-4">{}</p>
                {}
            </div>"#,
		escape(&block.level),
		escape(&block.note),
		table
	)
}

/// Renders one section per class level; the table only appears for levels
/// that have exams scheduled.
pub fn render(input: PageInput) -> PageResult<String> {
	let blocks: Vec<ExamBlock> = input.into_collection("exam-schedule")?;
	if blocks.is_empty() {
		return Ok(empty_state("ไม่พบข้อมูลตารางสอบ"));
	}

	let body: String = blocks.iter().map(render_block).collect();
	Ok(card("ตารางสอบปลายภาค", &body))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_table_only_for_scheduled_levels() {
		let html = render(PageInput::Collection(json!([
			{
				"level": "ป.6",
				"note": "สอบที่ห้องประชุม",
				"schedule": [
					{ "date": "10 มี.ค.", "time": "09:00", "subject": "คณิตศาสตร์" },
					{ "date": "11 มี.ค.", "time": "09:00", "subject": "ภาษาไทย" }
				]
			},
			{ "level": "อนุบาล", "note": "ไม่มีการสอบ", "schedule": [] }
		])))
		.unwrap();

		assert_eq!(html.matches("<table").count(), 1);
		assert!(html.contains("คณิตศาสตร์"));
		assert!(html.contains("อนุบาล"));
		assert!(html.contains("ไม่มีการสอบ"));
	}

	#[rstest]
	fn test_missing_schedule_field_renders_heading_only() {
		let html = render(PageInput::Collection(json!([{ "level": "ป.1" }]))).unwrap();
		assert!(html.contains("ป.1"));
		assert!(!html.contains("<table"));
	}

	#[rstest]
	fn test_empty_state() {
		assert!(render(PageInput::None).unwrap().contains("ไม่พบข้อมูลตารางสอบ"));
	}
}
