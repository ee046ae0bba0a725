//! Tunable parameters for the particle field.
//!
//! All physics, density and linking constants are named here. The two
//! layouts the page uses are exposed as [`FieldPreset`]s rather than separate
//! implementations.

use serde::Deserialize;

use crate::config::ConfigError;

/// Smallest accepted `density_divisor` (px² per node).
pub const MIN_DENSITY_DIVISOR: f64 = 1.0;

/// Hard ceiling on the node count, applied on top of `max_nodes`. Keeps the
/// pairwise linking pass bounded whatever the viewport and divisor.
pub const NODE_LIMIT: usize = 1000;

/// Named parameter sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldPreset {
	/// Full-page background: one node per 15000 px², no configured cap.
	Backdrop,
	/// Sparser section background: one node per 20000 px², at most 80 nodes.
	Compact,
}

impl FieldPreset {
	pub fn config(self) -> FieldConfig {
		match self {
			FieldPreset::Backdrop => FieldConfig::default(),
			FieldPreset::Compact => FieldConfig {
				density_divisor: 20000.0,
				max_nodes: Some(80),
				..FieldConfig::default()
			},
		}
	}
}

/// Physics and graph parameters.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	/// Viewport area (px²) per node.
	pub density_divisor: f64,
	/// Optional upper bound on the node count.
	pub max_nodes: Option<usize>,
	/// Width of the per-axis velocity range; velocities are drawn from
	/// `[-max_speed / 2, max_speed / 2]` pixels per tick.
	pub max_speed: f64,
	pub radius_min: f64,
	pub radius_max: f64,
	/// Nodes closer than this at build time are linked; live edges fade out
	/// as they approach it.
	pub link_threshold: f64,
	/// Pointer distance below which nodes are pushed away.
	pub repel_radius: f64,
	/// Displacement in pixels at zero pointer distance.
	pub repel_strength: f64,
	/// Edge opacity at zero length.
	pub edge_opacity_max: f64,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			density_divisor: 15000.0,
			max_nodes: None,
			max_speed: 0.5,
			radius_min: 1.0,
			radius_max: 4.0,
			link_threshold: 150.0,
			repel_radius: 100.0,
			repel_strength: 2.0,
			edge_opacity_max: 0.3,
		}
	}
}

impl FieldConfig {
	/// Number of nodes for a viewport, `floor(width * height / divisor)`
	/// limited by `max_nodes` and [`NODE_LIMIT`].
	pub fn node_count(&self, width: f64, height: f64) -> usize {
		let raw = (width * height / self.density_divisor).floor();
		let count = if raw.is_finite() && raw > 0.0 {
			raw as usize
		} else {
			0
		};
		let cap = self.max_nodes.map_or(NODE_LIMIT, |cap| cap.min(NODE_LIMIT));
		count.min(cap)
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		let values = [
			("density_divisor", self.density_divisor),
			("max_speed", self.max_speed),
			("radius_min", self.radius_min),
			("radius_max", self.radius_max),
			("link_threshold", self.link_threshold),
			("repel_radius", self.repel_radius),
			("repel_strength", self.repel_strength),
			("edge_opacity_max", self.edge_opacity_max),
		];
		for (name, value) in values {
			if !value.is_finite() {
				return Err(ConfigError::NotFinite { name, value });
			}
			if value < 0.0 {
				return Err(ConfigError::Negative { name, value });
			}
		}
		if self.density_divisor < MIN_DENSITY_DIVISOR {
			return Err(ConfigError::BelowMinimum {
				name: "density_divisor",
				value: self.density_divisor,
				min: MIN_DENSITY_DIVISOR,
			});
		}
		if self.radius_min > self.radius_max {
			return Err(ConfigError::InvertedRadiusRange {
				min: self.radius_min,
				max: self.radius_max,
			});
		}
		if self.edge_opacity_max > 1.0 {
			return Err(ConfigError::OutOfUnitRange {
				name: "edge_opacity_max",
				value: self.edge_opacity_max,
			});
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn backdrop_preset_counts_one_node_per_15000_px() {
		let config = FieldPreset::Backdrop.config();
		assert_eq!(config.node_count(800.0, 600.0), 32);
		assert_eq!(config.node_count(1920.0, 1080.0), 138);
	}

	#[test]
	fn compact_preset_applies_divisor_then_cap() {
		let config = FieldPreset::Compact.config();
		assert_eq!(config.node_count(800.0, 600.0), 24);
		assert_eq!(config.node_count(3840.0, 2160.0), 80);
	}

	#[test]
	fn tiny_viewports_produce_no_nodes() {
		let config = FieldConfig::default();
		assert_eq!(config.node_count(1.0, 1.0), 0);
		assert_eq!(config.node_count(0.0, 600.0), 0);
		assert_eq!(config.node_count(-10.0, 600.0), 0);
	}

	#[test]
	fn defaults_and_presets_validate() {
		assert!(FieldConfig::default().validate().is_ok());
		assert!(FieldPreset::Compact.config().validate().is_ok());
	}

	#[test]
	fn rejects_divisors_below_one_pixel() {
		for density_divisor in [0.0, 0.001, 0.999] {
			let config = FieldConfig {
				density_divisor,
				..FieldConfig::default()
			};
			assert!(matches!(
				config.validate(),
				Err(ConfigError::BelowMinimum {
					name: "density_divisor",
					..
				})
			));
		}
		let config = FieldConfig {
			density_divisor: MIN_DENSITY_DIVISOR,
			..FieldConfig::default()
		};
		assert!(config.validate().is_ok());
	}

	#[test]
	fn dense_uncapped_configs_stop_at_the_node_limit() {
		let config = FieldConfig {
			density_divisor: MIN_DENSITY_DIVISOR,
			max_nodes: None,
			..FieldConfig::default()
		};
		assert_eq!(config.node_count(1920.0, 1080.0), NODE_LIMIT);
		assert_eq!(config.node_count(20.0, 20.0), 400);
	}

	#[test]
	fn configured_cap_cannot_exceed_the_node_limit() {
		let config = FieldConfig {
			density_divisor: MIN_DENSITY_DIVISOR,
			max_nodes: Some(usize::MAX),
			..FieldConfig::default()
		};
		assert_eq!(config.node_count(3840.0, 2160.0), NODE_LIMIT);
	}

	#[test]
	fn rejects_negative_and_non_finite_values() {
		let config = FieldConfig {
			repel_strength: -1.0,
			..FieldConfig::default()
		};
		assert!(matches!(
			config.validate(),
			Err(ConfigError::Negative {
				name: "repel_strength",
				..
			})
		));

		let config = FieldConfig {
			link_threshold: f64::NAN,
			..FieldConfig::default()
		};
		assert!(matches!(
			config.validate(),
			Err(ConfigError::NotFinite {
				name: "link_threshold",
				..
			})
		));
	}

	#[test]
	fn rejects_inverted_radius_range() {
		let config = FieldConfig {
			radius_min: 5.0,
			radius_max: 1.0,
			..FieldConfig::default()
		};
		assert!(matches!(
			config.validate(),
			Err(ConfigError::InvertedRadiusRange { .. })
		));
	}

	#[test]
	fn rejects_edge_opacity_above_one() {
		let config = FieldConfig {
			edge_opacity_max: 1.5,
			..FieldConfig::default()
		};
		assert!(matches!(
			config.validate(),
			Err(ConfigError::OutOfUnitRange { .. })
		));
	}

	#[test]
	fn preset_names_deserialize_lowercase() {
		let preset: FieldPreset = serde_json::from_str(r#""compact""#).unwrap();
		assert_eq!(preset, FieldPreset::Compact);
	}
}
