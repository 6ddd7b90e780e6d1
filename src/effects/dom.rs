//! Thin helpers over `web_sys` for the page effects.
//!
//! Every lookup returns `Option`/empty collections so a missing element only
//! disables the effect that needed it.

use wasm_bindgen::prelude::*;
use web_sys::{
	Document, Element, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
	IntersectionObserverInit, NodeList,
};

use super::reveal::OneShot;

#[inline]
pub fn document() -> Option<Document> {
	web_sys::window().and_then(|w| w.document())
}

fn html_elements(list: NodeList) -> Vec<HtmlElement> {
	(0..list.length())
		.filter_map(|i| list.item(i))
		.filter_map(|node| node.dyn_into::<HtmlElement>().ok())
		.collect()
}

/// All matching elements in the document. Invalid selectors match nothing.
pub fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
	document
		.query_selector_all(selector)
		.map(html_elements)
		.unwrap_or_default()
}

/// All matching descendants of `root`.
pub fn query_all_in(root: &Element, selector: &str) -> Vec<HtmlElement> {
	root.query_selector_all(selector)
		.map(html_elements)
		.unwrap_or_default()
}

pub fn query(document: &Document, selector: &str) -> Option<HtmlElement> {
	document
		.query_selector(selector)
		.ok()
		.flatten()
		.and_then(|el| el.dyn_into().ok())
}

pub fn query_in(root: &Element, selector: &str) -> Option<HtmlElement> {
	root.query_selector(selector)
		.ok()
		.flatten()
		.and_then(|el| el.dyn_into().ok())
}

pub fn by_id(document: &Document, id: &str) -> Option<HtmlElement> {
	document
		.get_element_by_id(id)
		.and_then(|el| el.dyn_into().ok())
}

/// Apply inline style declarations. An empty value removes the property.
pub fn set_styles(el: &HtmlElement, styles: &[(&str, &str)]) {
	let style = el.style();
	for (property, value) in styles {
		let _ = style.set_property(property, value);
	}
}

/// Run `f` once after `delay_ms`.
pub fn after(delay_ms: i32, f: impl FnOnce() + 'static) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let callback = Closure::once_into_js(f);
	let _ = window
		.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay_ms);
}

/// Attach a listener for the lifetime of the page. Events that are not an `E`
/// are ignored.
pub fn on<E>(target: &EventTarget, event: &str, mut handler: impl FnMut(E) + 'static)
where
	E: JsCast + 'static,
{
	let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
		if let Ok(ev) = ev.dyn_into::<E>() {
			handler(ev);
		}
	});
	let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
	closure.forget();
}

/// Intersection options.
#[derive(Clone, Copy, Debug)]
pub struct Visibility {
	/// Fraction of the element that must be visible
	pub threshold: f64,
	/// CSS margin applied to the viewport before testing
	pub root_margin: &'static str,
}

impl Visibility {
	/// Browser defaults: any pixel visible, no margin.
	pub const ANY: Self = Self {
		threshold: 0.0,
		root_margin: "0px",
	};

	/// A tenth visible, ignoring the bottom 50px of the viewport.
	pub const SETTLED: Self = Self {
		threshold: 0.1,
		root_margin: "0px 0px -50px 0px",
	};
}

/// Call `on_enter` every time one of `targets` scrolls into view.
pub fn observe(
	targets: &[HtmlElement],
	visibility: Visibility,
	mut on_enter: impl FnMut(HtmlElement, &IntersectionObserver) + 'static,
) -> Option<IntersectionObserver> {
	if targets.is_empty() {
		return None;
	}

	let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
		move |entries: js_sys::Array, observer: IntersectionObserver| {
			for entry in entries.iter() {
				let entry: IntersectionObserverEntry = entry.unchecked_into();
				if !entry.is_intersecting() {
					continue;
				}
				if let Ok(el) = entry.target().dyn_into::<HtmlElement>() {
					on_enter(el, &observer);
				}
			}
		},
	);

	let init = IntersectionObserverInit::new();
	init.set_threshold(&JsValue::from_f64(visibility.threshold));
	init.set_root_margin(visibility.root_margin);

	let observer =
		IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
	for target in targets {
		observer.observe(target);
	}
	callback.forget();
	Some(observer)
}

/// Like [`observe`], but `on_enter` runs at most once per element.
pub fn observe_once(
	targets: &[HtmlElement],
	visibility: Visibility,
	mut on_enter: impl FnMut(HtmlElement) + 'static,
) -> Option<IntersectionObserver> {
	let mut guards: Vec<(HtmlElement, OneShot)> = targets
		.iter()
		.map(|el| (el.clone(), OneShot::default()))
		.collect();

	observe(targets, visibility, move |el, observer| {
		let Some((_, guard)) = guards.iter_mut().find(|(target, _)| *target == el) else {
			return;
		};
		if !guard.trigger() {
			return;
		}
		observer.unobserve(&el);
		on_enter(el);
		guard.finish();
	})
}
