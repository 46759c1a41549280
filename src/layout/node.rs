use std::collections::HashMap;

use super::geometry::Point;
use super::snapshot::{Direction, Role};

/// A node taking part in the simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutNode {
	/// Id, unique within the layout.
	pub id: String,
	/// Display label.
	pub label: String,
	/// Role in the ego network; decides the node's rendered size and color.
	pub role: Role,
	/// Current position on the canvas.
	pub position: Point,
	/// Current velocity in canvas units per tick.
	pub velocity: Point,
}

impl LayoutNode {
	/// Creates a resting node at `position`.
	pub fn new(id: impl Into<String>, label: impl Into<String>, role: Role, position: Point) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			role,
			position,
			velocity: Point::ZERO,
		}
	}
}

/// A follow relation between two nodes, referenced by id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutEdge {
	/// Id of the source node.
	pub source: String,
	/// Id of the target node.
	pub target: String,
	/// Direction relative to the focal node; only affects rendering.
	pub direction: Direction,
}

impl LayoutEdge {
	/// Creates an edge between two node ids.
	pub fn new(source: impl Into<String>, target: impl Into<String>, direction: Direction) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
			direction,
		}
	}

	/// Node indices of both endpoints, or `None` if either id is unknown.
	pub(crate) fn endpoints(&self, index: &HashMap<String, usize>) -> Option<(usize, usize)> {
		Some((*index.get(&self.source)?, *index.get(&self.target)?))
	}
}
