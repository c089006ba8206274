//! Document downloads.

use schoolsite_core::PageResult;

use crate::html::{card, escape};
use crate::models::Download;
use crate::renderer::PageInput;

/// Renders the downloads table; an empty list keeps the table with a single
/// "no documents" row.
pub fn render(input: PageInput) -> PageResult<String> {
	let files: Vec<Download> = input.into_collection("documents")?;

	let rows = if files.is_empty() {
		r#"<tr><td colspan="3" class="text-center py-4">ไม่พบเอกสารให้ดาวน์โหลดในขณะนี้</td></tr>"#.to_string()
	} else {
		files
			.iter()
			.map(|file| {
				format!(
					r#"
            <tr>
                <td class="py-3 px-4 border-b">{}</td>
                <td class="py-3 px-4 border-b text-center">{}</td>
                <td class="py-3 px-4 border-b text-center">
                    <a href="{}" download class="inline-block px-4 py-2 text-white transition-colors duration-300 bg-blue-600 hover:bg-blue-700 rounded-md text-sm">ดาวน์โหลด</a>
                </td>
            </tr>"#,
					escape(&file.name),
					escape(&file.kind),
					escape(&file.path)
				)
			})
			.collect()
	};

	let body = format!(
		r#"
            <p class="text-gray-700 mb-6">เอกสารต่างๆ ที่เกี่ยวข้องกับโรงเรียน สามารถดาวน์โหลดได้จากตารางด้านล่าง</p>
            <div class="overflow-x-auto">
                <table class="min-w-full bg-white border border-gray-200">
                    <thead class="bg-blue-100">
                        <tr>
                            <th class="py-3 px-4 border-b text-left text-sm font-semibold text-blue-800">ชื่อเอกสาร</th>
                            <th class="py-3 px-4 border-b text-center text-sm font-semibold text-blue-800">ประเภทไฟล์</th>
                            <th class="py-3 px-4 border-b text-center text-sm font-semibold text-blue-800">ดาวน์โหลด</th>
                        </tr>
                    </thead>
                    <tbody class="text-gray-700">
                        {}
                    </tbody>
                </table>
                <p class="text-sm text-gray-500 mt-4">* หมายเหตุ: หากไม่สามารถดาวน์โหลดไฟล์ได้ กรุณาติดต่อทางโรงเรียนโดยตรง</p>
            </div>"#,
		rows
	);

	Ok(card("ดาวน์โหลดเอกสาร", &body))
}
