use web_sys::DomRect;

use crate::layout::{Layout, LayoutConfig, Point, Role};

pub const CANVAS_WIDTH: f64 = 800.0;
pub const CANVAS_HEIGHT: f64 = 600.0;
pub const FOCAL_RADIUS: f64 = 25.0;
pub const NEIGHBOR_RADIUS: f64 = 20.0;

pub fn node_radius(role: Role) -> f64 {
	match role {
		Role::Focal => FOCAL_RADIUS,
		Role::Outbound | Role::Inbound => NEIGHBOR_RADIUS,
	}
}

/// Where the canvas element sits on the page, in client pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBox {
	pub left: f64,
	pub top: f64,
	pub width: f64,
	pub height: f64,
}

impl ViewBox {
	pub fn from_rect(rect: &DomRect) -> Self {
		Self {
			left: rect.left(),
			top: rect.top(),
			width: rect.width(),
			height: rect.height(),
		}
	}

	/// Maps client coordinates onto the fixed logical canvas.
	pub fn to_canvas(&self, client_x: f64, client_y: f64) -> Point {
		let (x, y) = (client_x - self.left, client_y - self.top);
		// Not laid out yet; fall back to unscaled element coordinates.
		if self.width <= 0.0 || self.height <= 0.0 {
			return Point::new(x, y);
		}
		Point::new(x * CANVAS_WIDTH / self.width, y * CANVAS_HEIGHT / self.height)
	}
}

pub struct EgoGraphState {
	pub layout: Layout,
	pub running: bool,
}

impl EgoGraphState {
	pub fn new(config: LayoutConfig) -> Self {
		Self {
			layout: Layout::new(config),
			running: false,
		}
	}

	/// Topmost node whose circle contains `p`. Later nodes are drawn on top.
	pub fn node_at(&self, p: Point) -> Option<&str> {
		self.layout
			.nodes()
			.iter()
			.rev()
			.find(|node| node.position.distance(p) <= node_radius(node.role))
			.map(|node| node.id.as_str())
	}
}
