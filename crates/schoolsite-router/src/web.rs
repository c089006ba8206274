//! Browser binding.
//!
//! [`start`] wires the router to the live page: it builds a
//! [`Router`] over a [`WebHost`] and an [`HttpFetcher`], installs the event
//! listeners and loads the page named by the current URL.
//!
//! | Event | Target | Effect |
//! |-------|--------|--------|
//! | `click` | `document.body` | navigation links, slide controls, lightbox |
//! | `keydown` | `document` | Escape closes the lightbox |
//! | `popstate` | `window` | back/forward replays the fragment |
//! | `click` | mobile menu button | toggles the mobile menu |

mod fetch;
mod host;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
	Document, Element, Event, HtmlAnchorElement, HtmlElement, HtmlImageElement, KeyboardEvent,
};

use schoolsite_core::{ElementIds, Provenance, SiteSettings};
use schoolsite_renderers::RendererRegistry;

use crate::events::{ClickTarget, Interaction, NavLink};
use crate::page::PageTable;
use crate::router::Router;
use crate::widgets::{Lightbox, MobileMenu, SlideDirection, SliderState};

pub use fetch::HttpFetcher;
pub use host::WebHost;
use host::HIDDEN;

/// The router as it runs in the browser.
pub type WebRouter = Router<HttpFetcher, WebHost>;

/// Starts the site with the built-in page table.
pub fn start(settings: SiteSettings) -> Result<Rc<WebRouter>, JsValue> {
	let table = PageTable::builtin(&RendererRegistry::builtin())
		.map_err(|e| JsValue::from_str(&e.to_string()))?;
	start_with(settings, table)
}

/// Starts the site with a custom page table.
pub fn start_with(settings: SiteSettings, table: PageTable) -> Result<Rc<WebRouter>, JsValue> {
	let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window object"))?;
	let document = window
		.document()
		.ok_or_else(|| JsValue::from_str("No document object"))?;

	let host = WebHost::new(&window, &document, &settings)?;
	let fetcher = HttpFetcher::new(&settings);
	let ids = settings.elements.clone();
	let router = Rc::new(Router::new(table, fetcher, host, settings));
	let lightbox = Rc::new(LightboxView::new(&document, &ids));

	install_click_handler(&document, Rc::clone(&router), Rc::clone(&lightbox), ids.clone())?;
	install_key_handler(&document, lightbox)?;
	install_popstate_handler(&window, Rc::clone(&router))?;
	install_menu_toggle(&document, &ids)?;

	tracing::info!(pages = router.table().len(), "site started");
	spawn_url_change(Rc::clone(&router));
	Ok(router)
}

fn spawn_url_change(router: Rc<WebRouter>) {
	spawn_local(async move {
		router.handle_url_change().await;
	});
}

fn install_click_handler(
	document: &Document,
	router: Rc<WebRouter>,
	lightbox: Rc<LightboxView>,
	ids: ElementIds,
) -> Result<(), JsValue> {
	let body = document
		.body()
		.ok_or_else(|| JsValue::from_str("No body element"))?;
	let doc = document.clone();

	let handler = Closure::wrap(Box::new(move |event: Event| {
		let Some(element) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
			return;
		};
		let Some(interaction) = click_target(&element, &ids).interaction() else {
			return;
		};
		if interaction.prevents_default() {
			event.prevent_default();
		}

		match interaction {
			Interaction::Navigate { page_id, item_id } => {
				let router = Rc::clone(&router);
				spawn_local(async move {
					router
						.navigate(&page_id, item_id.as_deref(), Provenance::User)
						.await;
				});
			}
			Interaction::Slide(direction) => slide(&doc, &ids.slider_track, direction),
			Interaction::OpenLightbox { src } => lightbox.update(|state| state.open(src)),
			Interaction::CloseLightbox => lightbox.update(Lightbox::close),
		}
	}) as Box<dyn FnMut(_)>);

	body.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
	handler.forget();
	Ok(())
}

fn install_key_handler(document: &Document, lightbox: Rc<LightboxView>) -> Result<(), JsValue> {
	let handler = Closure::wrap(Box::new(move |event: KeyboardEvent| {
		let key = event.key();
		lightbox.update(|state| {
			state.on_key(&key);
		});
	}) as Box<dyn FnMut(_)>);

	document.add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref())?;
	handler.forget();
	Ok(())
}

fn install_popstate_handler(window: &web_sys::Window, router: Rc<WebRouter>) -> Result<(), JsValue> {
	let handler = Closure::wrap(Box::new(move |_event: Event| {
		spawn_url_change(Rc::clone(&router));
	}) as Box<dyn FnMut(_)>);

	window.add_event_listener_with_callback("popstate", handler.as_ref().unchecked_ref())?;
	handler.forget();
	Ok(())
}

fn install_menu_toggle(document: &Document, ids: &ElementIds) -> Result<(), JsValue> {
	let (Some(button), Some(menu)) = (
		document.get_element_by_id(&ids.mobile_menu_button),
		document.get_element_by_id(&ids.mobile_menu),
	) else {
		tracing::debug!("no mobile menu on this page");
		return Ok(());
	};

	let handler = Closure::wrap(Box::new(move |_event: Event| {
		let classes = menu.class_list();
		let mut state = MobileMenu::new(!classes.contains(HIDDEN));
		let result = if state.toggle() {
			classes.remove_1(HIDDEN)
		} else {
			classes.add_1(HIDDEN)
		};
		if let Err(e) = result {
			tracing::warn!(error = ?e, "failed to toggle mobile menu");
		}
	}) as Box<dyn FnMut(_)>);

	button.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
	handler.forget();
	Ok(())
}

/// Collects what the clicked element sits inside of.
fn click_target(element: &Element, ids: &ElementIds) -> ClickTarget {
	let closest = |selector: &str| element.closest(selector).ok().flatten();

	ClickTarget {
		nav_link: closest(".nav-item").map(|link| NavLink {
			page_id: link.get_attribute("data-page"),
			item_id: link.get_attribute("data-id"),
		}),
		slide_control: closest("[data-slide-control]")
			.map(|control| control.get_attribute("data-slide-control").unwrap_or_default()),
		lightbox_trigger: closest(".lightbox-trigger").and_then(|trigger| trigger_source(&trigger)),
		on_lightbox_overlay: element.id() == ids.lightbox,
		in_lightbox_close: closest(&format!("#{}", ids.lightbox_close)).is_some(),
	}
}

/// Link target for anchors, image source for images.
fn trigger_source(trigger: &Element) -> Option<String> {
	let src = if let Some(anchor) = trigger.dyn_ref::<HtmlAnchorElement>() {
		anchor.href()
	} else if let Some(image) = trigger.dyn_ref::<HtmlImageElement>() {
		image.src()
	} else {
		String::new()
	};
	(!src.is_empty()).then_some(src)
}

fn slide(document: &Document, track_id: &str, direction: Option<SlideDirection>) {
	let Some(track) = document
		.get_element_by_id(track_id)
		.and_then(|t| t.dyn_into::<HtmlElement>().ok())
	else {
		return;
	};

	let mut slider = SliderState::from_attribute(track.get_attribute("data-current-index").as_deref());
	let count = track.children().length() as usize;
	slider.step(direction, count);

	let applied = track
		.set_attribute("data-current-index", &slider.index().to_string())
		.and_then(|()| track.style().set_property("transform", &slider.translate()));
	if let Err(e) = applied {
		tracing::warn!(error = ?e, "failed to move slider");
	}
}

/// The lightbox overlay and its state.
struct LightboxView {
	overlay: Option<Element>,
	image: Option<HtmlImageElement>,
	state: RefCell<Lightbox>,
}

impl LightboxView {
	fn new(document: &Document, ids: &ElementIds) -> Self {
		Self {
			overlay: document.get_element_by_id(&ids.lightbox),
			image: document
				.get_element_by_id(&ids.lightbox_image)
				.and_then(|img| img.dyn_into::<HtmlImageElement>().ok()),
			state: RefCell::new(Lightbox::Closed),
		}
	}

	/// Applies `change` and mirrors the new state onto the overlay.
	fn update(&self, change: impl FnOnce(&mut Lightbox)) {
		let (Some(overlay), Some(image)) = (&self.overlay, &self.image) else {
			return;
		};

		let mut state = self.state.borrow_mut();
		let before = state.clone();
		change(&mut *state);
		if *state == before {
			return;
		}

		let classes = overlay.class_list();
		let result = match &*state {
			Lightbox::Open { src } => {
				image.set_src(src);
				classes.remove_1(HIDDEN)
			}
			Lightbox::Closed => {
				image.set_src("");
				classes.add_1(HIDDEN)
			}
		};
		if let Err(e) = result {
			tracing::warn!(error = ?e, "failed to update lightbox");
		}
	}
}
