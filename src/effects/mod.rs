//! Page effects outside the background canvas.
//!
//! Each installer looks up its own elements and quietly does nothing when they
//! are missing, so a page can carry any subset of the markup.

pub mod counter;
pub mod dom;
pub mod gallery;
pub mod hover;
pub mod navigation;
pub mod reveal;
pub mod typewriter;

use log::info;
use web_sys::{Document, Event};

const FADE_IN_DELAY_MS: i32 = 100;

/// Fade the body in once the effects are wired up.
fn fade_in_body(document: &Document) {
	let Some(body) = document.body() else {
		return;
	};
	dom::set_styles(&body, &[("opacity", "0")]);
	dom::after(FADE_IN_DELAY_MS, move || {
		dom::set_styles(&body, &[("transition", "opacity 1s ease"), ("opacity", "1")]);
	});
}

fn mark_loaded_on_window_load(document: &Document) {
	let (Some(window), Some(body)) = (web_sys::window(), document.body()) else {
		return;
	};
	dom::on(&window, "load", move |_: Event| {
		let _ = body.class_list().add_1("loaded");
	});
}

/// Install every page effect. Call once after the page markup is in place.
pub fn install_page_effects() {
	let Some(document) = dom::document() else {
		return;
	};

	reveal::install_reveals(&document);
	reveal::install_process_flow(&document);
	reveal::install_gallery_stagger(&document);
	reveal::install_scroll_glow(&document);
	counter::install_counters(&document);
	navigation::install_scroll_effects(&document);
	navigation::install_smooth_scroll(&document);
	typewriter::install_typewriter(&document);
	gallery::install_lightbox(&document);
	gallery::install_video_previews(&document);
	gallery::install_lazy_images(&document);
	hover::install_hover_effects(&document);

	fade_in_body(&document);
	mark_loaded_on_window_load(&document);
	info!("tidewater-fx: page effects installed");
}
