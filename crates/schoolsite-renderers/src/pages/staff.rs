//! Staff directory.

use schoolsite_core::PageResult;

use crate::html::escape;
use crate::models::StaffMember;
use crate::renderer::PageInput;

fn render_card(staff: &StaffMember) -> String {
	let subject = staff
		.subject
		.as_deref()
		.filter(|s| !s.is_empty())
		.map(|s| format!(r#"<p class="text-sm text-gray-500 mt-1">วิชา: {}</p>"#, escape(s)))
		.unwrap_or_default();
	let phone = staff
		.phone
		.as_deref()
		.filter(|p| !p.is_empty())
		.map(|p| format!(r#"<p class="text-sm text-gray-500">ติดต่อ: {}</p>"#, escape(p)))
		.unwrap_or_default();

	format!(
		r#"
        <div class="bg-white p-6 rounded-lg flex flex-col items-center text-center transition-transform duration-300 hover:scale-105 w-72">
            <img src="{src}" alt="{name}" class="w-32 h-32 rounded-full mb-4 object-cover border-4 border-blue-100 cursor-pointer lightbox-trigger">
            <h3 class="font-bold text-lg text-blue-800">{name}</h3>
            <p class="text-gray-600">{position}</p>
            {subject}
            {phone}
        </div>"#,
		src = escape(&staff.image_url),
		name = escape(&staff.name),
		position = escape(&staff.position)
	)
}

/// Renders staff cards; subject and phone lines only appear when present.
pub fn render(input: PageInput) -> PageResult<String> {
	let members: Vec<StaffMember> = input.into_collection("staff")?;
	if members.is_empty() {
		return Ok(r#"
            <div class="container mx-auto px-4 py-8">
                <div class="bg-white p-8 rounded-xl shadow-lg text-center">ไม่พบบุคลากร</div>
            </div>"#
			.to_string());
	}

	let cards: String = members.iter().map(render_card).collect();
	Ok(format!(
		r#"
        <div class="container mx-auto px-4 py-8">
            <div class="bg-white p-8 rounded-xl shadow-lg">
                <h1 class="text-2xl font-bold text-blue-800 mb-6 pb-2 border-b-2 border-blue-200 text-center">บุคลากร</h1>
                <div class="flex flex-col items-center gap-6">
                    {}
                </div>
            </div>
        </div>"#,
		cards
	))
}
