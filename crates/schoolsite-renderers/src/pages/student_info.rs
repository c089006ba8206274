//! Student headcount.

use schoolsite_core::PageResult;

use crate::html::{card, escape};
use crate::models::StudentStats;
use crate::renderer::PageInput;

const TITLE: &str = "ข้อมูลนักเรียน";

/// Renders the first (latest) year of headcount data.
pub fn render(input: PageInput) -> PageResult<String> {
	let years: Vec<StudentStats> = input.into_collection("student-info")?;
	let Some(stats) = years.first() else {
		return Ok(card(TITLE, r#"<p class="text-gray-700">ไม่พบข้อมูลนักเรียน</p>"#));
	};

	let year = escape(&stats.year.to_string());
	let total = escape(&stats.total_students.to_string());
	let male = escape(&stats.male_students.to_string());
	let female = escape(&stats.female_students.to_string());

	let rows: String = stats
		.class_breakdown
		.iter()
		.map(|cls| {
			format!(
				r#"
                        <tr>
                            <td class="py-3 px-4 border-b">{}</td>
                            <td class="py-3 px-4 border-b text-center">{}</td>
                            <td class="py-3 px-4 border-b text-center">{}</td>
                            <td class="py-3 px-4 border-b text-center font-bold">{}</td>
                        </tr>"#,
				escape(&cls.level),
				escape(&cls.male.to_string()),
				escape(&cls.female.to_string()),
				escape(&cls.total.to_string())
			)
		})
		.collect();

	let body = format!(
		r#"
            <p class="text-gray-700 mb-6">ข้อมูลจำนวนนักเรียนโรงเรียนบ้านหยวก ประจำปีการศึกษา {year}</p>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-8">
                <div class="bg-blue-50 p-6 rounded-lg text-center">
                    <h2 class="text-4xl font-bold text-blue-800">{total}</h2>
                    <p class="text-gray-600 mt-2">นักเรียนทั้งหมด</p>
                </div>
                <div class="bg-green-50 p-6 rounded-lg text-center">
                    <h2 class="text-4xl font-bold text-green-800">{male}</h2>
                    <p class="text-gray-600 mt-2">นักเรียนชาย</p>
                </div>
                <div class="bg-pink-50 p-6 rounded-lg text-center">
                    <h2 class="text-4xl font-bold text-pink-800">{female}</h2>
                    <p class="text-gray-600 mt-2">นักเรียนหญิง</p>
                </div>
            </div>
            <div class="overflow-x-auto">
                <h3 class="text-xl font-semibold text-blue-700 mb-4">จำนวนนักเรียนแยกตามระดับชั้น</h3>
                <table class="min-w-full bg-white border border-gray-200">
                    <thead class="bg-blue-100">
                        <tr>
                            <th class="py-3 px-4 border-b text-left text-sm font-semibold text-blue-800">ระดับชั้น</th>
                            <th class="py-3 px-4 border-b text-center text-sm font-semibold text-blue-800">ชาย</th>
                            <th class="py-3 px-4 border-b text-center text-sm font-semibold text-blue-800">หญิง</th>
                            <th class="py-3 px-4 border-b text-center text-sm font-semibold text-blue-800">รวม</th>
                        </tr>
                    </thead>
                    <tbody class="text-gray-700">
                        {rows}
                        <tr class="bg-blue-50 font-bold">
                            <td class="py-3 px-4 border-b text-right">รวมทั้งหมด</td>
                            <td class="py-3 px-4 border-b text-center">{male}</td>
                            <td class="py-3 px-4 border-b text-center">{female}</td>
                            <td class="py-3 px-4 border-b text-center">{total}</td>
                        </tr>
                    </tbody>
                </table>
                <p class="text-sm text-gray-500 mt-4">* หมายเหตุ: ข้อมูล ณ ปีการศึกษา {year}</p>
            </div>"#
	);

	Ok(card(TITLE, &body))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_uses_first_year_only() {
		let html = render(PageInput::Collection(json!([
			{
				"year": 2567,
				"totalStudents": 120,
				"maleStudents": 58,
				"femaleStudents": 62,
				"classBreakdown": [
					{ "level": "อนุบาล 2", "male": 5, "female": 7, "total": 12 },
					{ "level": "ป.1", "male": "9", "female": "8", "total": "17" }
				]
			},
			{ "year": 2566, "totalStudents": 110 }
		])))
		.unwrap();

		assert!(html.contains("ประจำปีการศึกษา 2567"));
		assert!(!html.contains("2566"));
		assert!(html.contains(r#"font-bold">12</td>"#));
		assert!(html.contains(r#"font-bold">17</td>"#));
		assert_eq!(html.matches(">120<").count(), 2);
	}

	#[rstest]
	#[case(PageInput::None)]
	#[case(PageInput::Collection(json!([])))]
	fn test_empty_state(#[case] input: PageInput) {
		let html = render(input).unwrap();
		assert!(html.contains("ไม่พบข้อมูลนักเรียน"));
		assert!(html.contains(TITLE));
	}
}
