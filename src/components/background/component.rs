//! Leptos component wrapping the ambient background canvas.
//!
//! The component creates a fixed, full-viewport canvas behind the page. An
//! animation loop runs via `requestAnimationFrame`, advancing the field and
//! cursor trail and redrawing them each frame. Window resizes update the
//! canvas backing size; pointer moves feed the trail.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::config::FieldConfig;
use super::cursor::CursorTrail;
use super::field::AmbientField;
use super::render;
use super::theme::Theme;
use crate::effects::dom;
use crate::error::CanvasError;

/// Everything the frame loop mutates.
struct Scene {
	field: AmbientField,
	trail: CursorTrail,
	theme: Theme,
	rng: StdRng,
}

type Callback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn viewport_size(window: &Window) -> Result<(f64, f64), CanvasError> {
	let width = window.inner_width().ok().and_then(|v| v.as_f64());
	let height = window.inner_height().ok().and_then(|v| v.as_f64());
	match (width, height) {
		(Some(w), Some(h)) => Ok((w, h)),
		_ => Err(CanvasError::NoViewport),
	}
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, CanvasError> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()
		.ok_or(CanvasError::NoContext)?
		.dyn_into()
		.map_err(|_| CanvasError::NotCanvas2d)
}

fn now_ms() -> f64 {
	js_sys::Date::now()
}

/// Size the canvas, build the scene, and start the frame loop.
fn start(
	canvas: HtmlCanvasElement,
	config: FieldConfig,
	scene_slot: &Rc<RefCell<Option<Scene>>>,
	animate: &Callback,
	resize_cb: &Callback,
) -> Result<(), CanvasError> {
	let window = web_sys::window().ok_or(CanvasError::NoWindow)?;
	let (w, h) = viewport_size(&window)?;
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);

	let mut ctx = context_2d(&canvas)?;
	ctx.set_image_smoothing_enabled(false);

	let theme = Theme::by_name(&config.theme);
	info!(
		"tidewater-fx: background {}x{}, {} particles, {} bubbles, theme {}",
		w, h, config.particles.count, config.bubbles.count, theme.name
	);
	*scene_slot.borrow_mut() = Some(Scene {
		trail: CursorTrail::new(config.trail.clone()),
		field: AmbientField::new(config, w, h),
		theme,
		rng: StdRng::from_entropy(),
	});

	let (scene_resize, canvas_resize) = (scene_slot.clone(), canvas.clone());
	*resize_cb.borrow_mut() = Some(Closure::new(move || {
		let Some(win) = web_sys::window() else {
			return;
		};
		let Ok((nw, nh)) = viewport_size(&win) else {
			return;
		};
		canvas_resize.set_width(nw as u32);
		canvas_resize.set_height(nh as u32);
		if let Some(ref mut s) = *scene_resize.borrow_mut() {
			s.field.resize(nw, nh);
		}
		debug!("tidewater-fx: resized to {}x{}", nw, nh);
	}));
	if let Some(ref cb) = *resize_cb.borrow() {
		let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
	}

	let scene_pointer = scene_slot.clone();
	dom::on(&window, "mousemove", move |ev: MouseEvent| {
		if let Some(ref mut s) = *scene_pointer.borrow_mut() {
			let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
			s.trail.pointer_moved(&mut s.rng, x, y);
		}
	});

	let (scene_anim, animate_inner) = (scene_slot.clone(), animate.clone());
	*animate.borrow_mut() = Some(Closure::new(move || {
		if let Some(ref mut s) = *scene_anim.borrow_mut() {
			s.field.advance(now_ms());
			s.trail.advance();
			render::render(&mut ctx, &s.field, &s.theme, Some(&s.trail));
		}
		if let Some(ref cb) = *animate_inner.borrow() {
			if let Some(win) = web_sys::window() {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}
	}));
	if let Some(ref cb) = *animate.borrow() {
		let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
	}

	Ok(())
}

/// Renders the animated particle/bubble background.
///
/// The canvas is fixed behind the page content and ignores pointer events;
/// pointer moves are picked up on the window so the trail follows the cursor
/// over everything. If the canvas cannot be set up the error is logged and the
/// rest of the page is unaffected.
#[component]
pub fn AmbientBackground(
	/// Field configuration, usually from [`crate::load_field_config`].
	#[prop(optional)]
	config: Option<FieldConfig>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let scene: Rc<RefCell<Option<Scene>>> = Rc::new(RefCell::new(None));
	let animate: Callback = Rc::new(RefCell::new(None));
	let resize_cb: Callback = Rc::new(RefCell::new(None));
	let config = config.unwrap_or_default();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if scene.borrow().is_some() {
			return;
		}
		if let Err(e) = start(canvas.into(), config.clone(), &scene, &animate, &resize_cb) {
			error!("tidewater-fx: background disabled: {}", e);
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id="backgroundCanvas"
			class="ambient-background"
			style="position: fixed; inset: 0; z-index: -1; pointer-events: none; display: block;"
		/>
	}
}
