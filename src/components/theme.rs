//! Visual styling for the canvas backgrounds.
//!
//! Colors and per-effect style records. Physics and layout constants live in
//! the effect's own config; everything here only changes how things look.

use serde::Deserialize;

use crate::config::ConfigError;

/// Smallest glyph size the rain accepts; sets an upper bound of one column
/// per pixel.
pub const MIN_FONT_SIZE: f64 = 1.0;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	#[serde(default = "opaque")]
	pub a: f64,
}

fn opaque() -> f64 {
	1.0
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Scale the alpha channel, clamped to [0, 1].
	pub fn fade(self, factor: f64) -> Self {
		Self {
			a: (self.a * factor).clamp(0.0, 1.0),
			..self
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Node and edge styling for the particle field.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldStyle {
	/// Node fill color (translucent)
	pub node_color: Color,
	/// Shadow blur for the glow pass (0 = no glow)
	pub glow_blur: f64,
	/// Shadow color for the glow pass
	pub glow_color: Color,
	/// Edge stroke color; alpha is scaled by the distance-based opacity
	pub edge_color: Color,
	/// Edge stroke width in pixels
	pub edge_width: f64,
}

impl Default for FieldStyle {
	fn default() -> Self {
		Self {
			node_color: Color::rgba(0, 255, 255, 0.6),
			glow_blur: 10.0,
			glow_color: Color::rgb(0, 255, 255),
			edge_color: Color::rgb(0, 255, 255),
			edge_width: 1.0,
		}
	}
}

/// Glyph rain styling.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RainStyle {
	/// Glyph size in pixels; also the column and row pitch
	pub font_size: f64,
	/// Alphabet glyphs are drawn from
	pub glyphs: String,
	/// Translucent fill laid over the previous frame to leave trails
	pub fade_color: Color,
	pub glyph_color: Color,
	/// Per-tick chance that a column past the bottom edge restarts at the top
	pub reset_chance: f64,
}

impl RainStyle {
	pub fn validate(&self) -> Result<(), ConfigError> {
		if !self.font_size.is_finite() {
			return Err(ConfigError::NotFinite {
				name: "font_size",
				value: self.font_size,
			});
		}
		if self.font_size < MIN_FONT_SIZE {
			return Err(ConfigError::BelowMinimum {
				name: "font_size",
				value: self.font_size,
				min: MIN_FONT_SIZE,
			});
		}
		if !(0.0..=1.0).contains(&self.reset_chance) {
			return Err(ConfigError::OutOfUnitRange {
				name: "reset_chance",
				value: self.reset_chance,
			});
		}
		if self.glyphs.is_empty() {
			return Err(ConfigError::EmptyGlyphs);
		}
		Ok(())
	}
}

impl Default for RainStyle {
	fn default() -> Self {
		Self {
			font_size: 14.0,
			glyphs: "01ⰰⰱⰲⰳⰴⰵⰶⰷⰸⰹⰺⰻⰼⰽⰾⰿⱀⱁⱂⱃⱄⱅⱆⱇⱈⱉⱊⱋⱌⱍⱎⱏ".to_string(),
			fade_color: Color::rgba(10, 10, 15, 0.05),
			glyph_color: Color::rgb(0, 255, 65),
			reset_chance: 0.025,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_colors_render_as_hex() {
		assert_eq!(Color::rgb(0, 255, 65).to_css(), "#00ff41");
	}

	#[test]
	fn translucent_colors_render_as_rgba() {
		assert_eq!(
			Color::rgba(0, 255, 255, 0.6).to_css(),
			"rgba(0, 255, 255, 0.6)"
		);
	}

	#[test]
	fn fade_scales_and_clamps_alpha() {
		let c = Color::rgb(1, 2, 3).with_alpha(0.5).fade(0.5);
		assert!((c.a - 0.25).abs() < 1e-12);
		assert_eq!(Color::rgb(1, 2, 3).fade(3.0).a, 1.0);
		assert_eq!(Color::rgb(1, 2, 3).fade(-1.0).a, 0.0);
	}

	#[test]
	fn color_alpha_defaults_to_opaque_when_omitted() {
		let c: Color = serde_json::from_str(r#"{ "r": 10, "g": 20, "b": 30 }"#).unwrap();
		assert_eq!(c, Color::rgb(10, 20, 30));
	}

	#[test]
	fn default_rain_style_validates() {
		assert!(RainStyle::default().validate().is_ok());
	}

	#[test]
	fn rain_font_size_must_be_at_least_one_pixel() {
		for font_size in [0.0, 1e-300, 0.5] {
			let style = RainStyle {
				font_size,
				..RainStyle::default()
			};
			assert!(matches!(
				style.validate(),
				Err(ConfigError::BelowMinimum { .. })
			));
		}
		let style = RainStyle {
			font_size: MIN_FONT_SIZE,
			..RainStyle::default()
		};
		assert!(style.validate().is_ok());
	}

	#[test]
	fn partial_field_style_keeps_remaining_defaults() {
		let s: FieldStyle = serde_json::from_str(r#"{ "glow_blur": 0 }"#).unwrap();
		assert_eq!(s.glow_blur, 0.0);
		assert_eq!(s.node_color, FieldStyle::default().node_color);
	}
}
