use super::geometry::{Bounds, Point};

/// Physical constants and canvas geometry for a [`Layout`](super::Layout).
///
/// The defaults reproduce the reference behavior: an 800×600 canvas with a
/// 50 unit margin, nodes spawned around its center.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
	/// Repulsion constant; the pair force is `repulsion / d²`.
	pub repulsion: f64,
	/// Edge length at which a spring exerts no force.
	pub rest_length: f64,
	/// Spring stiffness; the edge force is `(d - rest_length) * spring`.
	pub spring: f64,
	/// Factor applied to every free node's velocity once per tick.
	pub damping: f64,
	/// Region node positions are clamped into after each tick and drag move.
	pub bounds: Bounds,
	/// Center of the square new nodes are spawned in.
	pub spawn_center: Point,
	/// Side length of the spawn square.
	pub spawn_spread: f64,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			repulsion: 2000.0,
			rest_length: 100.0,
			spring: 0.06,
			damping: 0.7,
			bounds: Bounds::new(50.0, 750.0, 50.0, 550.0),
			spawn_center: Point::new(400.0, 300.0),
			spawn_spread: 200.0,
		}
	}
}
