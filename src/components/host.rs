//! Browser glue shared by the canvas components: viewport queries, canvas
//! sizing, seeding and event listener ownership.

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, HtmlCanvasElement, Window};

/// Current `(innerWidth, innerHeight)` of the window.
pub fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	let width = window.inner_width().ok()?.as_f64()?;
	let height = window.inner_height().ok()?.as_f64()?;
	Some((width, height))
}

/// Match the canvas backing store to the given CSS pixel size.
pub fn fit_canvas(canvas: &HtmlCanvasElement, width: f64, height: f64) {
	canvas.set_width(width.max(1.0) as u32);
	canvas.set_height(height.max(1.0) as u32);
}

/// Seed for the effect RNGs, taken from `Math.random()`.
pub fn random_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}

/// Event listeners registered by one component. Dropping or clearing the set
/// unregisters every listener it holds.
#[derive(Default)]
pub struct Listeners {
	registered: Vec<(EventTarget, &'static str, Closure<dyn FnMut(Event)>)>,
}

impl Listeners {
	pub fn add(
		&mut self,
		target: &EventTarget,
		event: &'static str,
		handler: impl FnMut(Event) + 'static,
	) {
		let closure = Closure::<dyn FnMut(Event)>::new(handler);
		if let Err(e) =
			target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
		{
			warn!("neural-backdrop: failed to listen for {}: {:?}", event, e);
			return;
		}
		self.registered.push((target.clone(), event, closure));
	}

	pub fn clear(&mut self) {
		for (target, event, closure) in self.registered.drain(..) {
			let _ =
				target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
		}
	}
}

impl Drop for Listeners {
	fn drop(&mut self) {
		self.clear();
	}
}
