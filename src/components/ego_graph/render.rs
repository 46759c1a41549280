use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{CANVAS_HEIGHT, CANVAS_WIDTH, EgoGraphState, node_radius};
use crate::layout::{Direction, Layout, Role};

const BACKGROUND: &str = "#f8fafc";
const LABEL_COLOR: &str = "#4b5563";

fn node_fill(role: Role) -> &'static str {
	match role {
		Role::Focal => "#4F46E5",
		Role::Outbound => "#93C5FD",
		Role::Inbound => "#CBD5E1",
	}
}

fn edge_stroke(direction: Direction) -> &'static str {
	match direction {
		Direction::Outbound => "#94a3b8",
		Direction::Inbound => "#cbd5e1",
	}
}

pub fn render(state: &EgoGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT);
	draw_edges(&state.layout, ctx);
	draw_nodes(&state.layout, ctx);
}

fn draw_edges(layout: &Layout, ctx: &CanvasRenderingContext2d) {
	ctx.set_global_alpha(0.6);
	ctx.set_line_width(2.0);
	for (edge, source, target) in layout.links() {
		ctx.set_stroke_style_str(edge_stroke(edge.direction));
		ctx.begin_path();
		ctx.move_to(source.position.x, source.position.y);
		ctx.line_to(target.position.x, target.position.y);
		ctx.stroke();
	}
	ctx.set_global_alpha(1.0);
}

fn draw_nodes(layout: &Layout, ctx: &CanvasRenderingContext2d) {
	ctx.set_font("14px sans-serif");
	ctx.set_line_width(2.0);
	for node in layout.nodes() {
		let (x, y) = (node.position.x, node.position.y);

		ctx.begin_path();
		let _ = ctx.arc(x, y, node_radius(node.role), 0.0, 2.0 * PI);
		ctx.set_fill_style_str(node_fill(node.role));
		ctx.fill();
		ctx.set_stroke_style_str("#fff");
		ctx.stroke();

		ctx.set_fill_style_str(LABEL_COLOR);
		let _ = ctx.fill_text(&node.label, x + 25.0, y + 5.0);
	}
}
