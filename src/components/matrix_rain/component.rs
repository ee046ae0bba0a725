//! Leptos component wrapping the glyph rain canvas.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use web_sys::{Event, HtmlCanvasElement};

use super::rain::MatrixRain;
use crate::components::frame_loop::FrameLoop;
use crate::components::host::{Listeners, fit_canvas, random_seed, viewport_size};
use crate::components::surface::CanvasSurface;
use crate::components::theme::RainStyle;

struct RainContext {
	rain: MatrixRain,
	surface: CanvasSurface,
}

/// Renders falling glyph columns on a fixed, fullscreen canvas.
#[component]
pub fn MatrixRainCanvas(#[prop(optional)] style: RainStyle) -> impl IntoView {
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
		let mut rain = match MatrixRain::new(style.clone(), random_seed()) {
			Ok(rain) => rain,
			Err(e) => {
				warn!("neural-backdrop: glyph rain disabled: {}", e);
				return;
			}
		};
		rain.resize(w, h);
		info!(
			"neural-backdrop: glyph rain started with {} columns",
			rain.rows().len()
		);

		let context = Rc::new(RefCell::new(RainContext { rain, surface }));
		let mut listeners = listeners.borrow_mut();
		listeners.clear();

		let (context_resize, canvas_resize) = (context.clone(), canvas.clone());
		listeners.add(&window, "resize", move |_: Event| {
			let Some((nw, nh)) = web_sys::window().and_then(|win| viewport_size(&win)) else {
				return;
			};
			fit_canvas(&canvas_resize, nw, nh);
			context_resize.borrow_mut().rain.resize(nw, nh);
		});

		let loop_hide = frame_loop.clone();
		listeners.add(&window, "pagehide", move |_: Event| {
			loop_hide.stop();
		});

		let context_anim = context.clone();
		frame_loop.start(move || {
			let mut c = context_anim.borrow_mut();
			let RainContext { rain, surface } = &mut *c;
			rain.tick(surface);
		});
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="matrix-rain-canvas"
			style="position: fixed; inset: 0; display: block; pointer-events: none; z-index: 0; opacity: 0.35;"
		/>
	}
}
