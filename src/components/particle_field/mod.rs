//! Animated node-graph background.
//!
//! Renders drifting nodes on a fullscreen canvas with:
//! - Edges between nodes that started out close, fading with live distance
//! - Edge reflection at the viewport bounds
//! - Pointer repulsion with linear falloff
//! - A full rebuild of the node set on every viewport resize
//!
//! # Example
//!
//! ```ignore
//! use neural_backdrop::{FieldPreset, ParticleFieldCanvas};
//!
//! view! { <ParticleFieldCanvas config=FieldPreset::Compact.config() /> }
//! ```

mod component;
mod config;
mod field;
mod node;
mod render;

pub use component::ParticleFieldCanvas;
pub use config::{FieldConfig, FieldPreset, MIN_DENSITY_DIVISOR, NODE_LIMIT};
pub use field::{MIN_DIMENSION, ParticleField};
pub use node::{Edge, Node, link_nodes, link_strength, repulsion};
