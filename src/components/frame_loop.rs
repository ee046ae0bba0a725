//! `requestAnimationFrame`-driven loop with an explicit stop.
//!
//! The callback closure is built once per [`FrameLoop::start`] and re-requests
//! itself after each step while the loop is running. It only holds a weak
//! reference back to the loop state, so dropping every [`FrameLoop`] handle
//! also drops the closure.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::warn;
use wasm_bindgen::prelude::*;

struct LoopState {
	running: Cell<bool>,
	pending: Cell<Option<i32>>,
	callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl LoopState {
	fn request_next(&self) {
		let Some(window) = web_sys::window() else {
			self.running.set(false);
			return;
		};
		let callback = self.callback.borrow();
		let Some(cb) = callback.as_ref() else {
			self.running.set(false);
			return;
		};
		match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
			Ok(id) => self.pending.set(Some(id)),
			Err(e) => {
				warn!("neural-backdrop: requestAnimationFrame failed: {:?}", e);
				self.running.set(false);
			}
		}
	}
}

/// Cloneable handle to a frame loop. All clones control the same loop.
#[derive(Clone)]
pub struct FrameLoop {
	state: Rc<LoopState>,
}

impl FrameLoop {
	pub fn new() -> Self {
		Self {
			state: Rc::new(LoopState {
				running: Cell::new(false),
				pending: Cell::new(None),
				callback: RefCell::new(None),
			}),
		}
	}

	/// Run `step` once per display refresh until [`stop`](Self::stop) is called.
	/// Starting an already running loop replaces its step.
	///
	/// Must not be called from inside `step`: replacing the callback drops the
	/// closure that is currently executing, which wasm-bindgen rejects. Call
	/// [`stop`](Self::stop) from the step instead and restart from outside.
	pub fn start(&self, mut step: impl FnMut() + 'static) {
		self.stop();

		let weak: Weak<LoopState> = Rc::downgrade(&self.state);
		*self.state.callback.borrow_mut() = Some(Closure::new(move || {
			let Some(state) = weak.upgrade() else {
				return;
			};
			state.pending.set(None);
			if !state.running.get() {
				return;
			}
			step();
			// step may have stopped the loop
			if state.running.get() {
				state.request_next();
			}
		}));

		self.state.running.set(true);
		self.state.request_next();
	}

	/// Cancel the pending frame and stop rescheduling. A step that is already
	/// executing finishes normally.
	pub fn stop(&self) {
		self.state.running.set(false);
		if let Some(id) = self.state.pending.take() {
			if let Some(window) = web_sys::window() {
				let _ = window.cancel_animation_frame(id);
			}
		}
	}

	pub fn is_running(&self) -> bool {
		self.state.running.get()
	}
}

impl Default for FrameLoop {
	fn default() -> Self {
		Self::new()
	}
}
