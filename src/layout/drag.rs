use super::geometry::Point;

/// Manual drag override for at most one node.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DragState {
	/// No node is being dragged.
	#[default]
	Idle,
	/// `node` follows the pointer, displaced by `offset`.
	Dragging {
		/// Id of the dragged node.
		node: String,
		/// Node position minus pointer position, captured at press time.
		offset: Point,
	},
}

impl DragState {
	/// Id of the dragged node, if any.
	pub fn node(&self) -> Option<&str> {
		match self {
			DragState::Idle => None,
			DragState::Dragging { node, .. } => Some(node),
		}
	}

	/// Whether a drag session is active.
	pub fn is_active(&self) -> bool {
		matches!(self, DragState::Dragging { .. })
	}
}
