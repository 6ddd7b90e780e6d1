//! Scroll-linked navbar tint, hero parallax and smooth in-page links.

use log::debug;
use web_sys::{
	Document, Event, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use super::dom;

/// Scroll offset past which the navbar turns opaque.
const NAVBAR_SOLID_AFTER: f64 = 100.0;
const PARALLAX_RATE: f64 = 0.5;

/// Navbar background for a given vertical scroll offset.
pub fn navbar_background(scroll_y: f64) -> &'static str {
	if scroll_y > NAVBAR_SOLID_AFTER {
		"rgba(0, 0, 0, 0.9)"
	} else {
		"rgba(0, 0, 0, 0.1)"
	}
}

/// Hero transform for a given vertical scroll offset.
pub fn parallax_transform(scroll_y: f64) -> String {
	format!("translateY({}px)", scroll_y * PARALLAX_RATE)
}

/// Tint the navbar and shift the hero as the page scrolls.
pub fn install_scroll_effects(document: &Document) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let navbar = dom::query(document, ".navbar");
	let hero = dom::query(document, ".hero");
	if navbar.is_none() && hero.is_none() {
		debug!("tidewater-fx: no navbar or hero, skipping scroll effects");
		return;
	}

	dom::on(&window, "scroll", move |_: Event| {
		let Some(scroll_y) = web_sys::window().and_then(|w| w.scroll_y().ok()) else {
			return;
		};
		if let Some(navbar) = &navbar {
			dom::set_styles(
				navbar,
				&[
					("background", navbar_background(scroll_y)),
					("backdrop-filter", "blur(20px)"),
				],
			);
		}
		if let Some(hero) = &hero {
			let transform = parallax_transform(scroll_y);
			dom::set_styles(hero, &[("transform", transform.as_str())]);
		}
	});
}

fn scroll_to(target: &HtmlElement) {
	let options = ScrollIntoViewOptions::new();
	options.set_behavior(ScrollBehavior::Smooth);
	options.set_block(ScrollLogicalPosition::Start);
	target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// In-page anchors and the call-to-action scroll smoothly instead of jumping.
pub fn install_smooth_scroll(document: &Document) {
	for anchor in dom::query_all(document, r##"a[href^="#"]"##) {
		let doc = document.clone();
		let link = anchor.clone();
		dom::on(&anchor, "click", move |ev: Event| {
			ev.prevent_default();
			let Some(href) = link.get_attribute("href") else {
				return;
			};
			// A bare "#" is not a valid selector and simply matches nothing.
			if let Some(target) = dom::query(&doc, &href) {
				scroll_to(&target);
			}
		});
	}

	if let Some(cta) = dom::query(document, ".cta-button") {
		let doc = document.clone();
		dom::on(&cta, "click", move |_: Event| {
			if let Some(about) = dom::query(&doc, "#about") {
				scroll_to(&about);
			}
		});
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn navbar_turns_solid_past_threshold() {
		assert_eq!(navbar_background(0.0), "rgba(0, 0, 0, 0.1)");
		assert_eq!(navbar_background(100.0), "rgba(0, 0, 0, 0.1)");
		assert_eq!(navbar_background(100.5), "rgba(0, 0, 0, 0.9)");
	}

	#[test]
	fn parallax_moves_at_half_speed() {
		assert_eq!(parallax_transform(0.0), "translateY(0px)");
		assert_eq!(parallax_transform(240.0), "translateY(120px)");
		assert_eq!(parallax_transform(3.0), "translateY(1.5px)");
	}
}
