//! Draw passes for the particle field.
//!
//! Every frame is a full clear-then-redraw:
//! 1. Clear the whole surface
//! 2. Nodes, each optionally followed by a glow fill
//! 3. Edges whose live length is under the link threshold

use super::config::FieldConfig;
use super::field::ParticleField;
use super::node::link_strength;
use crate::components::surface::Surface;
use crate::components::theme::FieldStyle;

/// Renders the complete field to the surface.
pub fn render(field: &ParticleField, surface: &mut impl Surface, style: &FieldStyle) {
	surface.clear(field.width(), field.height());
	draw_nodes(field, surface, style);
	draw_edges(field, surface, field.config(), style);
}

fn draw_nodes(field: &ParticleField, surface: &mut impl Surface, style: &FieldStyle) {
	for node in field.nodes() {
		surface.fill_circle(node.x, node.y, node.radius, style.node_color);

		if style.glow_blur > 0.0 {
			surface.set_shadow(style.glow_blur, style.glow_color);
			surface.fill_circle(node.x, node.y, node.radius, style.node_color);
			surface.clear_shadow();
		}
	}
}

fn draw_edges(
	field: &ParticleField,
	surface: &mut impl Surface,
	config: &FieldConfig,
	style: &FieldStyle,
) {
	let nodes = field.nodes();
	for edge in field.edges() {
		let (a, b) = (&nodes[edge.a], &nodes[edge.b]);
		let distance = a.distance_to(b.x, b.y);
		let opacity = link_strength(distance, config.link_threshold) * config.edge_opacity_max;
		if opacity <= 0.0 {
			continue;
		}
		surface.stroke_line(
			a.x,
			a.y,
			b.x,
			b.y,
			style.edge_color.fade(opacity),
			style.edge_width,
		);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::Node;
	use crate::components::surface::recording::{DrawOp, RecordingSurface};
	use crate::components::theme::Color;

	fn pair_field(second_x: f64) -> ParticleField {
		ParticleField::with_nodes(
			FieldConfig::default(),
			800.0,
			600.0,
			vec![
				Node::new(0.0, 0.0, 0.0, 0.0, 2.0),
				Node::new(second_x, 0.0, 0.0, 0.0, 3.0),
			],
		)
		.unwrap()
	}

	#[test]
	fn frame_starts_with_a_full_clear() {
		let field = pair_field(100.0);
		let mut surface = RecordingSurface::default();
		render(&field, &mut surface, &FieldStyle::default());
		assert_eq!(
			surface.ops[0],
			DrawOp::Clear {
				width: 800.0,
				height: 600.0
			}
		);
	}

	#[test]
	fn glow_pass_draws_each_node_twice() {
		let field = pair_field(100.0);
		let mut surface = RecordingSurface::default();
		render(&field, &mut surface, &FieldStyle::default());
		assert_eq!(surface.circles(), 4);
		assert!(surface.ops.contains(&DrawOp::ClearShadow));
	}

	#[test]
	fn glow_can_be_disabled() {
		let field = pair_field(100.0);
		let mut surface = RecordingSurface::default();
		let style = FieldStyle {
			glow_blur: 0.0,
			..FieldStyle::default()
		};
		render(&field, &mut surface, &style);
		assert_eq!(surface.circles(), 2);
		assert!(!surface.ops.iter().any(|op| matches!(op, DrawOp::Shadow { .. })));
	}

	#[test]
	fn edge_opacity_follows_live_distance() {
		let field = pair_field(100.0);
		let mut surface = RecordingSurface::default();
		render(&field, &mut surface, &FieldStyle::default());

		let lines = surface.lines();
		assert_eq!(lines.len(), 1);
		let DrawOp::Line { color, width, .. } = lines[0] else {
			unreachable!();
		};
		assert!((color.a - 0.1).abs() < 1e-12);
		assert_eq!(*width, 1.0);
		assert_eq!(color.with_alpha(1.0), Color::rgb(0, 255, 255));
	}

	#[test]
	fn edge_color_alpha_scales_the_distance_opacity() {
		let field = pair_field(100.0);
		let mut surface = RecordingSurface::default();
		let style = FieldStyle {
			edge_color: Color::rgba(0, 255, 255, 0.5),
			..FieldStyle::default()
		};
		render(&field, &mut surface, &style);

		let DrawOp::Line { color, .. } = surface.lines()[0] else {
			unreachable!();
		};
		assert!((color.a - 0.05).abs() < 1e-12);
	}

	#[test]
	fn stretched_edges_are_skipped_but_kept() {
		let mut field = pair_field(100.0);
		field.nodes_mut()[1].x = 400.0;

		let mut surface = RecordingSurface::default();
		render(&field, &mut surface, &FieldStyle::default());

		assert!(surface.lines().is_empty());
		assert_eq!(field.edges().len(), 1);
	}

	#[test]
	fn empty_field_renders_only_the_clear() {
		let field =
			ParticleField::with_nodes(FieldConfig::default(), 800.0, 600.0, Vec::new()).unwrap();
		let mut surface = RecordingSurface::default();
		render(&field, &mut surface, &FieldStyle::default());
		assert_eq!(surface.ops.len(), 1);
	}
}
