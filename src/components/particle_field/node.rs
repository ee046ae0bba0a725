//! Nodes, proximity edges and the per-node update rules.

/// A point-mass particle. Velocity is in pixels per tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
}

impl Node {
	pub fn new(x: f64, y: f64, vx: f64, vy: f64, radius: f64) -> Self {
		Self {
			x,
			y,
			vx,
			vy,
			radius,
		}
	}

	pub fn distance_to(&self, x: f64, y: f64) -> f64 {
		(self.x - x).hypot(self.y - y)
	}

	/// Euler step, no timestep scaling.
	pub fn advance(&mut self) {
		self.x += self.vx;
		self.y += self.vy;
	}

	/// Flip the velocity component on any axis at or past the bounds.
	/// Position is left as is, so a node may sit outside for one tick.
	pub fn reflect(&mut self, width: f64, height: f64) {
		if self.x <= 0.0 || self.x >= width {
			self.vx = -self.vx;
		}
		if self.y <= 0.0 || self.y >= height {
			self.vy = -self.vy;
		}
	}

	/// Nudge the node away from the pointer. Returns the applied displacement.
	pub fn repel_from(&mut self, px: f64, py: f64, radius: f64, strength: f64) -> (f64, f64) {
		let (dx, dy) = repulsion(self.x - px, self.y - py, radius, strength);
		self.x += dx;
		self.y += dy;
		(dx, dy)
	}
}

/// Displacement for a node offset `(dx, dy)` from the pointer.
///
/// Linear falloff: full `strength` at distance 0, nothing at or beyond
/// `radius`. A node exactly on the pointer is pushed along +x.
pub fn repulsion(dx: f64, dy: f64, radius: f64, strength: f64) -> (f64, f64) {
	let distance = dx.hypot(dy);
	if distance.is_nan() || distance >= radius {
		return (0.0, 0.0);
	}
	let force = (radius - distance) / radius;
	let angle = if distance == 0.0 { 0.0 } else { dy.atan2(dx) };
	(
		angle.cos() * force * strength,
		angle.sin() * force * strength,
	)
}

/// Link between two nodes, by index into the field's node list (`a < b`).
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
	pub a: usize,
	pub b: usize,
	/// Distance when the edge was built.
	pub rest_distance: f64,
}

/// `(threshold - distance) / threshold` below the threshold, else 0.
pub fn link_strength(distance: f64, threshold: f64) -> f64 {
	if distance < threshold {
		(threshold - distance) / threshold
	} else {
		0.0
	}
}

/// All unordered pairs closer than `threshold`.
pub fn link_nodes(nodes: &[Node], threshold: f64) -> Vec<Edge> {
	let mut edges = Vec::new();
	for (a, na) in nodes.iter().enumerate() {
		for (offset, nb) in nodes[a + 1..].iter().enumerate() {
			let distance = na.distance_to(nb.x, nb.y);
			if distance < threshold {
				edges.push(Edge {
					a,
					b: a + 1 + offset,
					rest_distance: distance,
				});
			}
		}
	}
	edges
}

#[cfg(test)]
mod tests {
	use super::*;

	fn magnitude((dx, dy): (f64, f64)) -> f64 {
		dx.hypot(dy)
	}

	#[test]
	fn reflection_flips_sign_without_clamping() {
		let mut node = Node::new(-1.0, 50.0, 2.0, 0.0, 1.0);
		node.reflect(100.0, 100.0);
		assert_eq!(node.vx, -2.0);
		assert_eq!(node.x, -1.0);
		assert_eq!(node.vy, 0.0);
	}

	#[test]
	fn reflection_triggers_on_exact_bounds() {
		let mut node = Node::new(100.0, 0.0, 1.0, -1.0, 1.0);
		node.reflect(100.0, 100.0);
		assert_eq!((node.vx, node.vy), (-1.0, 1.0));
	}

	#[test]
	fn interior_nodes_keep_their_velocity() {
		let mut node = Node::new(50.0, 50.0, 0.3, -0.2, 1.0);
		node.reflect(100.0, 100.0);
		assert_eq!((node.vx, node.vy), (0.3, -0.2));
	}

	#[test]
	fn advance_is_a_plain_euler_step() {
		let mut node = Node::new(10.0, 10.0, 0.25, -0.5, 1.0);
		node.advance();
		assert_eq!((node.x, node.y), (10.25, 9.5));
	}

	#[test]
	fn repulsion_at_zero_distance_pushes_along_x() {
		let mut node = Node::new(50.0, 50.0, 0.0, 0.0, 1.0);
		let d = node.repel_from(50.0, 50.0, 100.0, 2.0);
		assert_eq!(d, (2.0, 0.0));
		assert_eq!((node.x, node.y), (52.0, 50.0));
	}

	#[test]
	fn repulsion_points_away_from_pointer() {
		let (dx, dy) = repulsion(0.0, -30.0, 100.0, 2.0);
		assert!(dx.abs() < 1e-12);
		assert!(dy < 0.0);
		assert!((dy + 1.4).abs() < 1e-12);
	}

	#[test]
	fn repulsion_decreases_monotonically_with_distance() {
		let mut previous = f64::INFINITY;
		for step in 0..100 {
			let distance = step as f64;
			let m = magnitude(repulsion(distance, 0.0, 100.0, 2.0));
			assert!(m < previous, "not decreasing at {distance}");
			previous = m;
		}
	}

	#[test]
	fn repulsion_vanishes_at_and_beyond_radius() {
		assert_eq!(repulsion(100.0, 0.0, 100.0, 2.0), (0.0, 0.0));
		assert_eq!(repulsion(60.0, 80.0, 100.0, 2.0), (0.0, 0.0));
		assert_eq!(repulsion(500.0, -400.0, 100.0, 2.0), (0.0, 0.0));
	}

	#[test]
	fn zero_radius_never_repels() {
		assert_eq!(repulsion(0.0, 0.0, 0.0, 2.0), (0.0, 0.0));
	}

	#[test]
	fn close_pair_is_linked_with_expected_strength() {
		let nodes = vec![
			Node::new(0.0, 0.0, 0.0, 0.0, 1.0),
			Node::new(100.0, 0.0, 0.0, 0.0, 1.0),
		];
		let edges = link_nodes(&nodes, 150.0);
		assert_eq!(edges.len(), 1);
		assert_eq!((edges[0].a, edges[0].b), (0, 1));
		assert!((link_strength(edges[0].rest_distance, 150.0) - 1.0 / 3.0).abs() < 1e-12);
	}

	#[test]
	fn pairs_at_threshold_are_not_linked() {
		let nodes = vec![
			Node::new(0.0, 0.0, 0.0, 0.0, 1.0),
			Node::new(150.0, 0.0, 0.0, 0.0, 1.0),
			Node::new(0.0, 149.0, 0.0, 0.0, 1.0),
		];
		let edges = link_nodes(&nodes, 150.0);
		assert_eq!(edges.len(), 1);
		assert_eq!((edges[0].a, edges[0].b), (0, 2));
	}

	#[test]
	fn link_strength_is_linear_and_zero_past_threshold() {
		assert_eq!(link_strength(0.0, 150.0), 1.0);
		assert!((link_strength(75.0, 150.0) - 0.5).abs() < 1e-12);
		assert_eq!(link_strength(150.0, 150.0), 0.0);
		assert_eq!(link_strength(400.0, 150.0), 0.0);
	}
}
