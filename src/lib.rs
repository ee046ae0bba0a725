//! neural-backdrop: animated canvas backgrounds for a portfolio page.
//!
//! This crate provides WASM canvas components: a drifting node graph that
//! links nearby nodes and shies away from the pointer, and an optional
//! falling-glyph rain.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod config;

pub use components::matrix_rain::{MatrixRain, MatrixRainCanvas};
pub use components::particle_field::{
	Edge, FieldConfig, FieldPreset, Node, ParticleField, ParticleFieldCanvas,
};
pub use components::theme::{Color, FieldStyle, RainStyle};
pub use config::{BackdropConfig, ConfigError};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("neural-backdrop: logging initialized");
}

/// Load configuration from a script element with id="backdrop-config".
/// Missing element means defaults; an invalid document is logged and ignored.
fn load_backdrop_config() -> BackdropConfig {
	let Some(json_text) = config_text() else {
		return BackdropConfig::default();
	};

	match BackdropConfig::from_json(&json_text) {
		Ok(config) => {
			info!(
				"neural-backdrop: loaded config (preset {:?}, rain {})",
				config.preset,
				config.rain.is_some()
			);
			config
		}
		Err(e) => {
			warn!("neural-backdrop: using defaults, {}", e);
			BackdropConfig::default()
		}
	}
}

fn config_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("backdrop-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Main application component.
/// Mounts the particle field and, when configured, the glyph rain behind it.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_backdrop_config();
	let field = config.resolved_field();
	let style = config.style.clone();
	let rain = config.rain.clone();

	view! {
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		{rain.map(|style| view! { <MatrixRainCanvas style=style /> })}
		<ParticleFieldCanvas config=field style=style />
	}
}
