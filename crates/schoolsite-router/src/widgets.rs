//! In-page widgets driven by the delegated click and key handlers.
//!
//! Each widget is a small state machine; the browser binding mirrors its
//! state onto the DOM.

pub mod lightbox;
pub mod menu;
pub mod slider;

pub use lightbox::Lightbox;
pub use menu::MobileMenu;
pub use slider::{SlideDirection, SliderState};
