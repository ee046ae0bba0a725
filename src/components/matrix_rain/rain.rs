//! Column state for the falling-glyph effect.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::components::surface::Surface;
use crate::components::theme::RainStyle;
use crate::config::ConfigError;

/// One row counter per glyph column.
pub struct MatrixRain {
	style: RainStyle,
	glyphs: Vec<char>,
	rows: Vec<u32>,
	width: f64,
	height: f64,
	rng: SmallRng,
}

impl MatrixRain {
	pub fn new(style: RainStyle, seed: u64) -> Result<Self, ConfigError> {
		style.validate()?;
		let glyphs = style.glyphs.chars().collect();
		Ok(Self {
			style,
			glyphs,
			rows: Vec::new(),
			width: 1.0,
			height: 1.0,
			rng: SmallRng::seed_from_u64(seed),
		})
	}

	/// Set the drawing area and scatter every column to a random row.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = clamp_dimension(width);
		self.height = clamp_dimension(height);

		let columns = (self.width / self.style.font_size).floor() as usize;
		let row_span = (self.height / self.style.font_size).floor() as u32;
		self.rows = (0..columns)
			.map(|_| {
				if row_span == 0 {
					0
				} else {
					self.rng.random_range(0..row_span)
				}
			})
			.collect();
	}

	/// Fade the previous frame, draw one glyph per column and move every
	/// column down a row. Columns below the bottom edge occasionally restart.
	pub fn tick(&mut self, surface: &mut impl Surface) {
		surface.fill_rect(0.0, 0.0, self.width, self.height, self.style.fade_color);
		if self.glyphs.is_empty() {
			return;
		}

		let size = self.style.font_size;
		let mut buf = [0u8; 4];
		for (i, row) in self.rows.iter_mut().enumerate() {
			let glyph = self.glyphs[self.rng.random_range(0..self.glyphs.len())];
			let (x, y) = (i as f64 * size, *row as f64 * size);
			surface.fill_text(
				glyph.encode_utf8(&mut buf),
				x,
				y,
				size,
				self.style.glyph_color,
			);

			if y > self.height && self.rng.random::<f64>() > 1.0 - self.style.reset_chance {
				*row = 0;
			}
			*row += 1;
		}
	}

	pub fn rows(&self) -> &[u32] {
		&self.rows
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}
}

fn clamp_dimension(value: f64) -> f64 {
	if value.is_finite() { value.max(1.0) } else { 1.0 }
}
