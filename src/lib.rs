//! tidewater-fx: ambient background and page effects for the tidewater landing page.
//!
//! This crate provides a WASM front-end that paints an animated particle and
//! bubble field behind the page, plus the scroll, hover and gallery effects
//! layered on top of the static markup.

// Enables the `js` entropy backend for `rand` on wasm32.
use getrandom as _;

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod effects;
pub mod error;

pub use components::background::{AmbientBackground, AmbientField, FieldConfig, Surface, Theme};
pub use error::CanvasError;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("tidewater-fx: logging initialized");
}

/// Load background overrides from a script element with id="fx-config".
/// Expected format: a JSON object with any subset of [`FieldConfig`]'s keys.
pub fn load_field_config() -> FieldConfig {
	let Some(json_text) = config_script_text() else {
		return FieldConfig::default();
	};

	match FieldConfig::from_overrides(&json_text) {
		Ok(config) => {
			info!("tidewater-fx: loaded field config (theme {})", config.theme);
			config
		}
		Err(e) => {
			warn!("tidewater-fx: failed to parse field config: {}", e);
			FieldConfig::default()
		}
	}
}

fn config_script_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("fx-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Main application component.
/// Mounts the background canvas and wires the page effects once it is in place.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_field_config();

	Effect::new(move |installed: Option<()>| {
		if installed.is_none() {
			effects::install_page_effects();
		}
	});

	view! {
		<Title text="Tidewater" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<AmbientBackground config=config />
	}
}
