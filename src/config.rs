//! Page-level configuration document.
//!
//! The host page may embed a JSON document in
//! `<script type="application/json" id="backdrop-config">`:
//!
//! ```json
//! {
//!   "preset": "compact",
//!   "field": { "link_threshold": 120 },
//!   "style": { "glow_blur": 0 },
//!   "rain": { "font_size": 16 }
//! }
//! ```
//!
//! Every key is optional. An explicit `field` wins over `preset`; when both are
//! absent the backdrop preset is used. `rain` enables the glyph rain canvas.

use serde::Deserialize;
use thiserror::Error;

use crate::components::particle_field::{FieldConfig, FieldPreset};
use crate::components::theme::{FieldStyle, RainStyle};

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("{name} must be a finite number, got {value}")]
	NotFinite { name: &'static str, value: f64 },
	#[error("{name} must be at least {min}, got {value}")]
	BelowMinimum {
		name: &'static str,
		value: f64,
		min: f64,
	},
	#[error("{name} must not be negative, got {value}")]
	Negative { name: &'static str, value: f64 },
	#[error("radius range is inverted: min {min} > max {max}")]
	InvertedRadiusRange { min: f64, max: f64 },
	#[error("{name} must lie in [0, 1], got {value}")]
	OutOfUnitRange { name: &'static str, value: f64 },
	#[error("glyph alphabet is empty")]
	EmptyGlyphs,
	#[error("invalid config document: {0}")]
	Parse(#[from] serde_json::Error),
}

/// Everything the page can configure.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
	pub preset: Option<FieldPreset>,
	pub field: Option<FieldConfig>,
	pub style: FieldStyle,
	/// Glyph rain is only mounted when this is present.
	pub rain: Option<RainStyle>,
}

impl BackdropConfig {
	/// Parse and validate a config document.
	pub fn from_json(text: &str) -> Result<Self, ConfigError> {
		let config: BackdropConfig = serde_json::from_str(text)?;
		config.resolved_field().validate()?;
		if let Some(rain) = &config.rain {
			rain.validate()?;
		}
		Ok(config)
	}

	/// Field parameters after applying preset precedence.
	pub fn resolved_field(&self) -> FieldConfig {
		match (&self.field, self.preset) {
			(Some(field), _) => field.clone(),
			(None, Some(preset)) => preset.config(),
			(None, None) => FieldConfig::default(),
		}
	}
}
