//! Particle field state: nodes, the proximity graph and pointer tracking.
//!
//! The node set and the edge set are rebuilt together by
//! [`ParticleField::initialize`]. Between rebuilds edge membership is fixed:
//! endpoints keep moving and only the rendered opacity follows them.

use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::config::FieldConfig;
use super::node::{Edge, Node, link_nodes};
use super::render;
use crate::components::surface::Surface;
use crate::components::theme::FieldStyle;
use crate::config::ConfigError;

/// Smallest accepted viewport dimension.
pub const MIN_DIMENSION: f64 = 1.0;

/// Owns the nodes and edges for one drawing surface and advances them once
/// per tick.
pub struct ParticleField {
	config: FieldConfig,
	style: FieldStyle,
	nodes: Vec<Node>,
	edges: Vec<Edge>,
	pointer: Option<(f64, f64)>,
	width: f64,
	height: f64,
	rng: SmallRng,
}

impl ParticleField {
	/// Empty 1×1 field. Call [`resize`](Self::resize) and
	/// [`initialize`](Self::initialize) before the first tick.
	pub fn new(config: FieldConfig, seed: u64) -> Result<Self, ConfigError> {
		config.validate()?;
		Ok(Self {
			config,
			style: FieldStyle::default(),
			nodes: Vec::new(),
			edges: Vec::new(),
			pointer: None,
			width: MIN_DIMENSION,
			height: MIN_DIMENSION,
			rng: SmallRng::seed_from_u64(seed),
		})
	}

	/// Field over an explicit node set, linked immediately.
	pub fn with_nodes(
		config: FieldConfig,
		width: f64,
		height: f64,
		nodes: Vec<Node>,
	) -> Result<Self, ConfigError> {
		let mut field = Self::new(config, 0)?;
		field.resize(width, height);
		field.edges = link_nodes(&nodes, field.config.link_threshold);
		field.nodes = nodes;
		Ok(field)
	}

	pub fn with_style(mut self, style: FieldStyle) -> Self {
		self.style = style;
		self
	}

	/// Set the field dimensions. Non-finite or sub-pixel values clamp to
	/// [`MIN_DIMENSION`].
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = clamp_dimension(width);
		self.height = clamp_dimension(height);
	}

	/// Discard all nodes and edges and spawn a fresh set for the current size.
	pub fn initialize(&mut self) {
		let count = self.config.node_count(self.width, self.height);
		let half_speed = self.config.max_speed / 2.0;
		let (width, height) = (self.width, self.height);
		let (radius_min, radius_max) = (self.config.radius_min, self.config.radius_max);

		self.nodes = (0..count)
			.map(|_| {
				Node::new(
					self.rng.random_range(0.0..=width),
					self.rng.random_range(0.0..=height),
					self.rng.random_range(-half_speed..=half_speed),
					self.rng.random_range(-half_speed..=half_speed),
					self.rng.random_range(radius_min..=radius_max),
				)
			})
			.collect();
		self.edges = link_nodes(&self.nodes, self.config.link_threshold);

		debug!(
			"neural-backdrop: field {}x{} rebuilt with {} nodes, {} edges",
			self.width,
			self.height,
			self.nodes.len(),
			self.edges.len()
		);
	}

	/// Record the latest pointer position. No smoothing.
	pub fn set_pointer(&mut self, x: f64, y: f64) {
		self.pointer = Some((x, y));
	}

	/// Forget the pointer; nothing is repelled until the next report.
	pub fn clear_pointer(&mut self) {
		self.pointer = None;
	}

	/// Advance physics by one tick: move, reflect at the bounds, then apply
	/// pointer repulsion as a one-off position nudge.
	pub fn step(&mut self) {
		let (width, height) = (self.width, self.height);
		let (repel_radius, repel_strength) =
			(self.config.repel_radius, self.config.repel_strength);

		for node in &mut self.nodes {
			node.advance();
			node.reflect(width, height);
			if let Some((px, py)) = self.pointer {
				node.repel_from(px, py, repel_radius, repel_strength);
			}
		}
	}

	/// Clear the surface and redraw nodes and edges at their current positions.
	pub fn render(&self, surface: &mut impl Surface) {
		render::render(self, surface, &self.style);
	}

	/// One frame: [`step`](Self::step) then [`render`](Self::render).
	pub fn tick(&mut self, surface: &mut impl Surface) {
		self.step();
		self.render(surface);
	}

	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	/// Mutable node access. Edge membership is not recomputed.
	pub fn nodes_mut(&mut self) -> &mut [Node] {
		&mut self.nodes
	}

	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	pub fn pointer(&self) -> Option<(f64, f64)> {
		self.pointer
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	pub fn config(&self) -> &FieldConfig {
		&self.config
	}

	pub fn style(&self) -> &FieldStyle {
		&self.style
	}
}

fn clamp_dimension(value: f64) -> f64 {
	if value.is_finite() {
		value.max(MIN_DIMENSION)
	} else {
		MIN_DIMENSION
	}
}
