//! Page renderers.
//!
//! One module per page. Synchronous renderers expose a `render` template
//! function; [`home`] exposes [`HomeRenderer`](home::HomeRenderer).

pub mod calendar;
pub mod downloads;
pub mod exam_schedule;
pub mod gallery;
pub mod home;
pub mod news;
pub mod news_detail;
pub mod staff;
pub mod student_info;
pub mod student_works;
