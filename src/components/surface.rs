//! Drawing surface abstraction.
//!
//! Effects issue their draw calls through [`Surface`] so the simulation code
//! never touches the DOM. [`CanvasSurface`] forwards to a 2D canvas context.

use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::theme::Color;

/// Minimal set of 2D drawing primitives the effects need.
pub trait Surface {
	/// Clear the rectangle `(0, 0, width, height)` to transparent.
	fn clear(&mut self, width: f64, height: f64);
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
	fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, width: f64);
	/// Enable a blurred shadow for subsequent fills.
	fn set_shadow(&mut self, blur: f64, color: Color);
	fn clear_shadow(&mut self);
	fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color);
	fn fill_text(&mut self, text: &str, x: f64, y: f64, font_px: f64, color: Color);
}

/// [`Surface`] backed by an HTML canvas 2D rendering context.
pub struct CanvasSurface {
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	pub fn new(ctx: CanvasRenderingContext2d) -> Self {
		Self { ctx }
	}

	/// Wrap the canvas' 2D context, if the browser provides one.
	pub fn from_canvas(canvas: &HtmlCanvasElement) -> Option<Self> {
		let ctx = canvas.get_context("2d").ok()??;
		let ctx: CanvasRenderingContext2d = ctx.dyn_into().ok()?;
		Some(Self::new(ctx))
	}
}

impl Surface for CanvasSurface {
	fn clear(&mut self, width: f64, height: f64) {
		self.ctx.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, PI * 2.0);
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.fill();
	}

	fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, width: f64) {
		self.ctx.begin_path();
		self.ctx.move_to(x1, y1);
		self.ctx.line_to(x2, y2);
		self.ctx.set_stroke_style_str(&color.to_css());
		self.ctx.set_line_width(width);
		self.ctx.stroke();
	}

	fn set_shadow(&mut self, blur: f64, color: Color) {
		self.ctx.set_shadow_blur(blur);
		self.ctx.set_shadow_color(&color.to_css());
	}

	fn clear_shadow(&mut self) {
		self.ctx.set_shadow_blur(0.0);
	}

	fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.fill_rect(x, y, width, height);
	}

	fn fill_text(&mut self, text: &str, x: f64, y: f64, font_px: f64, color: Color) {
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.set_font(&format!("{}px monospace", font_px));
		let _ = self.ctx.fill_text(text, x, y);
	}
}
