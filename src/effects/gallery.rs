//! Experiment gallery: lightbox viewer, hover-to-preview videos and lazy
//! image reveal.
//!
//! The lightbox is an explicit `Closed`/`Open` state machine. DOM updates
//! are derived from transitions, and the delayed teardown after closing
//! checks the state again so a quick re-open is not wiped.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{
	Document, Event, HtmlElement, HtmlImageElement, HtmlMediaElement, HtmlVideoElement,
	KeyboardEvent, MouseEvent, Node,
};

use super::dom::{self, Visibility};

const ACTIVATE_DELAY_MS: i32 = 10;
const TEARDOWN_DELAY_MS: i32 = 300;
const PREVIEW_SEEK_S: f64 = 1.0;
const PLACEHOLDER_CLASS: &str = "placeholder-item";

/// What the lightbox shows.
#[derive(Clone, Debug, PartialEq)]
pub enum Media {
	Image { src: String, alt: String },
	Video { src: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct LightboxContent {
	pub media: Media,
	pub title: String,
	pub description: String,
}

/// Lightbox state.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Lightbox {
	#[default]
	Closed,
	Open(LightboxContent),
}

impl Lightbox {
	pub fn is_open(&self) -> bool {
		matches!(self, Lightbox::Open(_))
	}

	/// Show `content`, replacing whatever was open.
	pub fn open(&mut self, content: LightboxContent) {
		*self = Lightbox::Open(content);
	}

	/// Close the lightbox. Returns false if it was already closed.
	pub fn close(&mut self) -> bool {
		std::mem::take(self).is_open()
	}

	/// Whether `key` should dismiss the lightbox in its current state.
	pub fn closes_on_key(&self, key: &str) -> bool {
		self.is_open() && key == "Escape"
	}
}

/// The lightbox's DOM nodes plus its state.
struct LightboxView {
	root: HtmlElement,
	media: HtmlElement,
	title: HtmlElement,
	description: HtmlElement,
	state: Lightbox,
}

type SharedView = Rc<RefCell<LightboxView>>;

type Styles = &'static [(&'static str, &'static str)];

const VIDEO_FIT: Styles = &[("max-width", "100%"), ("max-height", "70vh")];
const IMAGE_FIT: Styles = &[
	("max-width", "100%"),
	("max-height", "70vh"),
	("object-fit", "contain"),
];

/// Sizing applied to the enlarged media. Only stills are letterboxed.
fn media_fit(media: &Media) -> Styles {
	match media {
		Media::Image { .. } => IMAGE_FIT,
		Media::Video { .. } => VIDEO_FIT,
	}
}

fn media_element(document: &Document, media: &Media) -> Option<HtmlElement> {
	let el: HtmlElement = match media {
		Media::Image { src, alt } => {
			let img: HtmlImageElement = document.create_element("img").ok()?.dyn_into().ok()?;
			img.set_src(src);
			img.set_alt(alt);
			img.into()
		}
		Media::Video { src } => {
			let video: HtmlVideoElement = document.create_element("video").ok()?.dyn_into().ok()?;
			video.set_src(src);
			video.set_controls(true);
			video.set_autoplay(true);
			video.set_loop(true);
			video.into()
		}
	};
	dom::set_styles(&el, media_fit(media));
	Some(el)
}

fn set_body_overflow(document: &Document, value: &str) {
	if let Some(body) = document.body() {
		dom::set_styles(&body, &[("overflow", value)]);
	}
}

fn open(view: &SharedView, document: &Document, content: LightboxContent) {
	let Some(media) = media_element(document, &content.media) else {
		return;
	};
	{
		let mut v = view.borrow_mut();
		v.media.set_inner_html("");
		let _ = v.media.append_child(&media);
		v.title.set_text_content(Some(&content.title));
		v.description.set_text_content(Some(&content.description));
		dom::set_styles(&v.root, &[("display", "flex")]);
		v.state.open(content);
	}

	let view = view.clone();
	dom::after(ACTIVATE_DELAY_MS, move || {
		let v = view.borrow();
		if v.state.is_open() {
			let _ = v.root.class_list().add_1("active");
		}
	});
	set_body_overflow(document, "hidden");
}

fn close(view: &SharedView, document: &Document) {
	{
		let mut v = view.borrow_mut();
		if !v.state.close() {
			return;
		}
		let _ = v.root.class_list().remove_1("active");
	}

	let view = view.clone();
	dom::after(TEARDOWN_DELAY_MS, move || {
		let v = view.borrow();
		if !v.state.is_open() {
			dom::set_styles(&v.root, &[("display", "none")]);
			v.media.set_inner_html("");
		}
	});
	set_body_overflow(document, "");
}

fn caption_text(item: &HtmlElement, selector: &str) -> String {
	dom::query_in(item, selector)
		.and_then(|el| el.text_content())
		.unwrap_or_default()
}

/// Read what a gallery tile should show in the lightbox.
fn content_of(item: &HtmlElement) -> Option<LightboxContent> {
	let media = if item.class_list().contains("video-item") {
		let video: HtmlVideoElement = dom::query_in(item, ".gallery-video")?.dyn_into().ok()?;
		Media::Video { src: video.src() }
	} else {
		let img: HtmlImageElement = dom::query_in(item, ".gallery-image")?.dyn_into().ok()?;
		Media::Image {
			src: img.src(),
			alt: img.alt(),
		}
	};
	Some(LightboxContent {
		media,
		title: caption_text(item, ".gallery-caption h4"),
		description: caption_text(item, ".gallery-caption p"),
	})
}

fn lightbox_view(document: &Document) -> Option<LightboxView> {
	Some(LightboxView {
		root: dom::by_id(document, "lightbox")?,
		media: dom::query(document, ".lightbox-media")?,
		title: dom::by_id(document, "lightbox-title")?,
		description: dom::by_id(document, "lightbox-description")?,
		state: Lightbox::Closed,
	})
}

/// Wire tiles, close button, backdrop and Escape key to the lightbox.
pub fn install_lightbox(document: &Document) {
	let (Some(view), Some(close_button)) =
		(lightbox_view(document), dom::query(document, ".lightbox-close"))
	else {
		debug!("tidewater-fx: lightbox markup incomplete, skipping");
		return;
	};
	let view: SharedView = Rc::new(RefCell::new(view));

	for item in dom::query_all(document, ".gallery-item") {
		if item.class_list().contains(PLACEHOLDER_CLASS) {
			continue;
		}
		let Some(container) = dom::query_in(&item, ".media-container") else {
			continue;
		};
		let (view, doc) = (view.clone(), document.clone());
		dom::on(&container, "click", move |_: MouseEvent| {
			if let Some(content) = content_of(&item) {
				open(&view, &doc, content);
			}
		});
	}

	let (v, doc) = (view.clone(), document.clone());
	dom::on(&close_button, "click", move |_: MouseEvent| close(&v, &doc));

	let (v, doc) = (view.clone(), document.clone());
	let root = view.borrow().root.clone();
	let backdrop = root.clone();
	dom::on(&root, "click", move |ev: MouseEvent| {
		// Only clicks on the backdrop itself, not on the content inside it
		let on_backdrop = ev
			.target()
			.and_then(|t| t.dyn_into::<Node>().ok())
			.is_some_and(|t| backdrop.is_same_node(Some(&t)));
		if on_backdrop {
			close(&v, &doc);
		}
	});

	let (v, doc) = (view, document.clone());
	dom::on(document, "keydown", move |ev: KeyboardEvent| {
		let closes = v.borrow().state.closes_on_key(&ev.key());
		if closes {
			close(&v, &doc);
		}
	});
}

/// Gallery videos preview on hover and show a loading dim. Videos inside
/// placeholder tiles are left alone.
pub fn install_video_previews(document: &Document) {
	for video in dom::query_all(document, ".gallery-video") {
		let placeholder = video.closest(&format!(".{PLACEHOLDER_CLASS}")).ok().flatten();
		if placeholder.is_some() {
			continue;
		}
		let Ok(video) = video.dyn_into::<HtmlMediaElement>() else {
			continue;
		};
		video.set_muted(true);
		let _ = video.set_attribute("preload", "metadata");

		let container = video
			.closest(".media-container")
			.ok()
			.flatten()
			.and_then(|el| el.dyn_into::<HtmlElement>().ok());

		if let Some(container) = &container {
			let dimmed = container.clone();
			dom::on(&video, "loadstart", move |_: Event| {
				dom::set_styles(&dimmed, &[("opacity", "0.7")]);
			});
			let ready = container.clone();
			dom::on(&video, "canplay", move |_: Event| {
				dom::set_styles(&ready, &[("opacity", "1")]);
			});

			let player = video.clone();
			dom::on(container, "mouseenter", move |_: MouseEvent| {
				if let Ok(promise) = player.play() {
					let rejected = Closure::<dyn FnMut(JsValue)>::new(|e: JsValue| {
						warn!("tidewater-fx: video play failed: {:?}", e);
					});
					let _ = promise.catch(&rejected);
					rejected.forget();
				}
			});
			let player = video.clone();
			dom::on(container, "mouseleave", move |_: MouseEvent| {
				let _ = player.pause();
				player.set_current_time(0.0);
			});
		}

		let seeker = video.clone();
		dom::on(&video, "loadedmetadata", move |_: Event| {
			seeker.set_current_time(PREVIEW_SEEK_S);
		});
	}
}

/// Lazy gallery images get a `loaded` class the first time they are seen.
pub fn install_lazy_images(document: &Document) {
	let images = dom::query_all(document, r#".gallery-image[loading="lazy"]"#);
	dom::observe_once(&images, Visibility::ANY, |img| {
		let _ = img.class_list().add_1("loaded");
	});
}

#[cfg(test)]
mod tests {
	use super::*;

	fn image(title: &str) -> LightboxContent {
		LightboxContent {
			media: Media::Image {
				src: "tank.jpg".into(),
				alt: "Tank".into(),
			},
			title: title.into(),
			description: "Day 12".into(),
		}
	}

	#[test]
	fn starts_closed() {
		let lightbox = Lightbox::default();
		assert!(!lightbox.is_open());
		assert!(!lightbox.closes_on_key("Escape"));
	}

	#[test]
	fn open_then_close() {
		let mut lightbox = Lightbox::default();
		lightbox.open(image("Bloom"));
		assert_eq!(lightbox, Lightbox::Open(image("Bloom")));

		assert!(lightbox.close());
		assert_eq!(lightbox, Lightbox::Closed);
		assert!(!lightbox.close());
	}

	#[test]
	fn reopening_replaces_content() {
		let mut lightbox = Lightbox::default();
		lightbox.open(image("First"));
		lightbox.open(image("Second"));
		assert_eq!(lightbox, Lightbox::Open(image("Second")));
	}

	#[test]
	fn only_escape_closes_an_open_lightbox() {
		let mut lightbox = Lightbox::default();
		lightbox.open(LightboxContent {
			media: Media::Video {
				src: "growth.mp4".into(),
			},
			title: String::new(),
			description: String::new(),
		});
		assert!(lightbox.closes_on_key("Escape"));
		assert!(!lightbox.closes_on_key("Enter"));
		assert!(!lightbox.closes_on_key("escape"));
	}

	#[test]
	fn only_images_are_letterboxed() {
		let still = image("Bloom").media;
		let clip = Media::Video {
			src: "growth.mp4".into(),
		};
		assert!(media_fit(&still).contains(&("object-fit", "contain")));
		assert!(!media_fit(&clip).iter().any(|(name, _)| *name == "object-fit"));
		assert!(media_fit(&clip).contains(&("max-height", "70vh")));
	}
}
