//! Leptos component wrapping the particle field canvas.
//!
//! The component creates a fullscreen canvas behind the page content, builds
//! the field for the current viewport and drives it from a [`FrameLoop`].
//! Window listeners feed resize and pointer input into the field; the loop
//! stops when the page is hidden for unload.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlCanvasElement, MouseEvent, TouchEvent};

use super::config::FieldConfig;
use super::field::ParticleField;
use crate::components::frame_loop::FrameLoop;
use crate::components::host::{Listeners, fit_canvas, random_seed, viewport_size};
use crate::components::surface::CanvasSurface;
use crate::components::theme::FieldStyle;

/// Bundles the simulation with the surface it draws on.
struct FieldContext {
	field: ParticleField,
	surface: CanvasSurface,
}

/// Renders the animated node graph on a fixed, fullscreen canvas.
///
/// The canvas ignores pointer events so page content stays interactive;
/// pointer position is read from window-level `mousemove`/`touchmove`.
#[component]
pub fn ParticleFieldCanvas(
	#[prop(optional)] config: FieldConfig,
	#[prop(optional)] style: FieldStyle,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let frame_loop = FrameLoop::new();
	let listeners: Rc<RefCell<Listeners>> = Rc::new(RefCell::new(Listeners::default()));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some((w, h)) = viewport_size(&window) else {
			warn!("neural-backdrop: viewport size unavailable");
			return;
		};
		fit_canvas(&canvas, w, h);

		let Some(surface) = CanvasSurface::from_canvas(&canvas) else {
			warn!("neural-backdrop: 2d context unavailable");
			return;
		};
		let mut field = match ParticleField::new(config.clone(), random_seed()) {
			Ok(field) => field.with_style(style.clone()),
			Err(e) => {
				warn!("neural-backdrop: particle field disabled: {}", e);
				return;
			}
		};
		field.resize(w, h);
		field.initialize();
		info!(
			"neural-backdrop: particle field started with {} nodes",
			field.nodes().len()
		);

		let context = Rc::new(RefCell::new(FieldContext { field, surface }));
		let mut listeners = listeners.borrow_mut();
		listeners.clear();

		let (context_resize, canvas_resize) = (context.clone(), canvas.clone());
		listeners.add(&window, "resize", move |_: Event| {
			let Some((nw, nh)) = web_sys::window().and_then(|win| viewport_size(&win)) else {
				return;
			};
			fit_canvas(&canvas_resize, nw, nh);
			let mut c = context_resize.borrow_mut();
			c.field.resize(nw, nh);
			c.field.initialize();
		});

		let context_mm = context.clone();
		listeners.add(&window, "mousemove", move |ev: Event| {
			if let Some(ev) = ev.dyn_ref::<MouseEvent>() {
				context_mm
					.borrow_mut()
					.field
					.set_pointer(ev.client_x() as f64, ev.client_y() as f64);
			}
		});

		let context_tm = context.clone();
		listeners.add(&window, "touchmove", move |ev: Event| {
			let touch = ev
				.dyn_ref::<TouchEvent>()
				.and_then(|ev| ev.touches().get(0));
			if let Some(touch) = touch {
				context_tm
					.borrow_mut()
					.field
					.set_pointer(touch.client_x() as f64, touch.client_y() as f64);
			}
		});

		let context_te = context.clone();
		listeners.add(&window, "touchend", move |_: Event| {
			context_te.borrow_mut().field.clear_pointer();
		});

		if let Some(document) = window.document() {
			let context_ml = context.clone();
			listeners.add(&document, "mouseleave", move |_: Event| {
				context_ml.borrow_mut().field.clear_pointer();
			});
		}

		let loop_hide = frame_loop.clone();
		listeners.add(&window, "pagehide", move |_: Event| {
			loop_hide.stop();
		});

		let context_anim = context.clone();
		frame_loop.start(move || {
			let mut c = context_anim.borrow_mut();
			let FieldContext { field, surface } = &mut *c;
			field.tick(surface);
		});
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field-canvas"
			style="position: fixed; inset: 0; display: block; pointer-events: none; z-index: 0;"
		/>
	}
}
