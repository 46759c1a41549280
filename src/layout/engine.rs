use std::collections::HashMap;

use log::{debug, info};
use rand::Rng;

use super::config::LayoutConfig;
use super::drag::DragState;
use super::forces;
use super::geometry::Point;
use super::node::{LayoutEdge, LayoutNode};
use super::snapshot::Snapshot;

/// Outcome of a [`Layout::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickStatus {
	/// Forces were applied and positions advanced.
	Advanced,
	/// There are no nodes; the driver can stop scheduling ticks.
	Idle,
}

/// Owned layout state for one loaded graph: nodes, edges and the drag session.
///
/// Both the frame loop ([`tick`](Self::tick)) and pointer handlers
/// ([`press`](Self::press), [`move_pointer`](Self::move_pointer),
/// [`release`](Self::release)) go through this store, one call at a time.
#[derive(Clone, Debug, Default)]
pub struct Layout {
	config: LayoutConfig,
	nodes: Vec<LayoutNode>,
	edges: Vec<LayoutEdge>,
	index: HashMap<String, usize>,
	drag: DragState,
}

impl Layout {
	/// Creates an empty layout.
	pub fn new(config: LayoutConfig) -> Self {
		Self {
			config,
			..Self::default()
		}
	}

	/// Creates a layout from already placed nodes.
	pub fn with_nodes(config: LayoutConfig, nodes: Vec<LayoutNode>, edges: Vec<LayoutEdge>) -> Self {
		let mut layout = Self::new(config);
		layout.replace(nodes, edges);
		layout
	}

	/// Replaces the whole graph with `snapshot`, spawning every node at rest
	/// somewhere in the spawn square. Any drag session is dropped.
	pub fn load<R: Rng>(&mut self, snapshot: &Snapshot, rng: &mut R) {
		let (center, spread) = (self.config.spawn_center, self.config.spawn_spread);
		let nodes = snapshot
			.nodes
			.iter()
			.map(|node| {
				let position = Point::new(
					center.x + (rng.r#gen::<f64>() - 0.5) * spread,
					center.y + (rng.r#gen::<f64>() - 0.5) * spread,
				);
				LayoutNode::new(node.id.clone(), node.label.clone(), node.role, position)
			})
			.collect();
		let edges = snapshot
			.links
			.iter()
			.map(|link| LayoutEdge::new(link.source.clone(), link.target.clone(), link.direction))
			.collect();
		self.replace(nodes, edges);
		info!(
			"Loaded layout with {} nodes and {} edges",
			self.nodes.len(),
			self.edges.len()
		);
	}

	/// Drops every node and edge; ticking stops until the next load.
	pub fn clear(&mut self) {
		self.replace(Vec::new(), Vec::new());
	}

	fn replace(&mut self, nodes: Vec<LayoutNode>, edges: Vec<LayoutEdge>) {
		self.drag = DragState::Idle;
		self.index.clear();
		self.nodes.clear();
		for node in nodes {
			if self.index.contains_key(&node.id) {
				debug!("Dropping duplicate node {}", node.id);
				continue;
			}
			self.index.insert(node.id.clone(), self.nodes.len());
			self.nodes.push(node);
		}
		self.edges = edges;
	}

	/// Advances the simulation by one frame.
	///
	/// Every node gets repulsion and spring forces added to its velocity. Free
	/// nodes are then damped and moved by their velocity; the dragged node stays
	/// where the pointer put it. Finally all positions are clamped to the bounds.
	pub fn tick(&mut self) -> TickStatus {
		if self.nodes.is_empty() {
			return TickStatus::Idle;
		}

		let index = &self.index;
		let springs = self.edges.iter().filter_map(|edge| edge.endpoints(index));
		forces::apply(&mut self.nodes, springs, &self.config);

		let dragged = self.drag.node();
		let (damping, bounds) = (self.config.damping, self.config.bounds);
		for node in &mut self.nodes {
			if dragged != Some(node.id.as_str()) {
				node.velocity = node.velocity * damping;
				node.position += node.velocity;
			}
			node.position = bounds.clamp(node.position);
		}
		TickStatus::Advanced
	}

	/// Starts dragging `node_id` with the pointer at `pointer`.
	///
	/// Ignored, returning `false`, while another drag is active or when the id
	/// is unknown.
	pub fn press(&mut self, node_id: &str, pointer: Point) -> bool {
		if let Some(current) = self.drag.node() {
			debug!("Ignoring press on {node_id} while dragging {current}");
			return false;
		}
		let Some(node) = self.node(node_id) else {
			debug!("Ignoring press on unknown node {node_id}");
			return false;
		};
		let offset = node.position - pointer;
		debug!("Drag started on {node_id}");
		self.drag = DragState::Dragging {
			node: node_id.to_owned(),
			offset,
		};
		true
	}

	/// Moves the dragged node to the clamped pointer position plus the press
	/// offset. Returns `false` when no drag is active.
	pub fn move_pointer(&mut self, pointer: Point) -> bool {
		let DragState::Dragging { node, offset } = &self.drag else {
			return false;
		};
		let Some(&i) = self.index.get(node) else {
			return false;
		};
		self.nodes[i].position = self.config.bounds.clamp(pointer + *offset);
		true
	}

	/// Ends the drag session, leaving the node's velocity untouched. Returns
	/// whether a session was active.
	pub fn release(&mut self) -> bool {
		match std::mem::take(&mut self.drag) {
			DragState::Idle => false,
			DragState::Dragging { node, .. } => {
				debug!("Drag ended on {node}");
				true
			}
		}
	}

	/// Looks a node up by id.
	pub fn node(&self, id: &str) -> Option<&LayoutNode> {
		self.index.get(id).map(|&i| &self.nodes[i])
	}

	/// All nodes, in snapshot order.
	pub fn nodes(&self) -> &[LayoutNode] {
		&self.nodes
	}

	/// All edges, including ones with unknown endpoints.
	pub fn edges(&self) -> &[LayoutEdge] {
		&self.edges
	}

	/// Edges whose endpoints both exist, with those endpoints.
	pub fn links(&self) -> impl Iterator<Item = (&LayoutEdge, &LayoutNode, &LayoutNode)> {
		self.edges.iter().filter_map(|edge| {
			let (source, target) = edge.endpoints(&self.index)?;
			Some((edge, &self.nodes[source], &self.nodes[target]))
		})
	}

	/// The current drag session.
	pub fn drag(&self) -> &DragState {
		&self.drag
	}

	/// The configuration in use.
	pub fn config(&self) -> &LayoutConfig {
		&self.config
	}

	/// Number of nodes.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Whether there are no nodes to simulate.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use approx::assert_relative_eq;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;
	use crate::layout::{Direction, Role, SnapshotLink, SnapshotNode};

	fn snapshot() -> Snapshot {
		Snapshot {
			nodes: vec![
				SnapshotNode {
					id: "1".into(),
					label: "@ferris".into(),
					role: Role::Focal,
				},
				SnapshotNode {
					id: "2".into(),
					label: "@crab".into(),
					role: Role::Outbound,
				},
				SnapshotNode {
					id: "2".into(),
					label: "@crab".into(),
					role: Role::Inbound,
				},
			],
			links: vec![
				SnapshotLink {
					source: "1".into(),
					target: "2".into(),
					direction: Direction::Outbound,
				},
				SnapshotLink {
					source: "2".into(),
					target: "1".into(),
					direction: Direction::Inbound,
				},
				SnapshotLink {
					source: "9".into(),
					target: "1".into(),
					direction: Direction::Inbound,
				},
			],
		}
	}

	fn loaded() -> Layout {
		let mut layout = Layout::new(LayoutConfig::default());
		layout.load(&snapshot(), &mut StdRng::seed_from_u64(7));
		layout
	}

	#[test]
	fn load_spawns_nodes_at_rest_near_center() {
		let layout = loaded();
		for node in layout.nodes() {
			assert!((300.0..=500.0).contains(&node.position.x), "{node:?}");
			assert!((200.0..=400.0).contains(&node.position.y), "{node:?}");
			assert_eq!(node.velocity, Point::ZERO);
		}
	}

	#[test]
	fn load_keeps_first_of_duplicate_ids() {
		let layout = loaded();
		assert_eq!(layout.len(), 2);
		assert_eq!(layout.node("2").map(|n| n.role), Some(Role::Outbound));
	}

	#[test]
	fn links_skip_missing_endpoints() {
		let layout = loaded();
		assert_eq!(layout.edges().len(), 3);
		let linked: Vec<_> = layout
			.links()
			.map(|(_, s, t)| (s.id.as_str(), t.id.as_str()))
			.collect();
		assert_eq!(linked, [("1", "2"), ("2", "1")]);
	}

	#[test]
	fn empty_layout_does_not_tick() {
		let mut layout = Layout::new(LayoutConfig::default());
		assert_eq!(layout.tick(), TickStatus::Idle);

		let mut layout = loaded();
		assert_eq!(layout.tick(), TickStatus::Advanced);
		layout.clear();
		assert!(layout.is_empty());
		assert_eq!(layout.tick(), TickStatus::Idle);
	}

	#[test]
	fn free_nodes_are_damped_then_moved() {
		let mut node = LayoutNode::new("a", "a", Role::Focal, Point::new(400.0, 300.0));
		node.velocity = Point::new(10.0, -20.0);
		let mut layout = Layout::with_nodes(LayoutConfig::default(), vec![node], vec![]);

		layout.tick();
		let node = &layout.nodes()[0];
		assert_relative_eq!(node.velocity.x, 7.0);
		assert_relative_eq!(node.velocity.y, -14.0);
		assert_relative_eq!(node.position.x, 407.0);
		assert_relative_eq!(node.position.y, 286.0);
	}

	#[test]
	fn press_captures_offset_and_rejects_second_drag() {
		let mut layout = loaded();
		let focal = layout.node("1").unwrap().position;
		assert!(layout.press("1", focal - Point::new(5.0, 5.0)));
		assert_eq!(
			layout.drag(),
			&DragState::Dragging {
				node: "1".into(),
				offset: Point::new(5.0, 5.0),
			}
		);

		assert!(!layout.press("2", Point::ZERO));
		assert_eq!(layout.drag().node(), Some("1"));
	}

	#[test]
	fn press_on_unknown_node_is_ignored() {
		let mut layout = loaded();
		assert!(!layout.press("9", Point::ZERO));
		assert!(!layout.drag().is_active());
	}

	#[test]
	fn move_without_drag_is_noop() {
		let mut layout = loaded();
		let before = layout.nodes().to_vec();
		assert!(!layout.move_pointer(Point::new(100.0, 100.0)));
		assert_eq!(layout.nodes(), before.as_slice());
	}

	#[test]
	fn move_clamps_to_bounds() {
		let mut layout = loaded();
		let focal = layout.node("1").unwrap().position;
		layout.press("1", focal);
		assert!(layout.move_pointer(Point::new(-300.0, 9000.0)));
		assert_eq!(layout.node("1").unwrap().position, Point::new(50.0, 550.0));
	}

	#[test]
	fn dragged_node_keeps_accumulating_undamped_velocity() {
		let mut layout = loaded();
		let focal = layout.node("1").unwrap().position;
		layout.press("1", focal);
		layout.move_pointer(Point::new(600.0, 450.0));

		for _ in 0..5 {
			layout.tick();
		}
		let node = layout.node("1").unwrap();
		assert_eq!(node.position, Point::new(600.0, 450.0));
		assert_ne!(node.velocity, Point::ZERO);

		let velocity = node.velocity;
		assert!(layout.release());
		assert_eq!(layout.node("1").unwrap().velocity, velocity);
		assert!(!layout.release());
	}

	#[test]
	fn release_resumes_physics() {
		let mut layout = loaded();
		let focal = layout.node("1").unwrap().position;
		layout.press("1", focal);
		layout.move_pointer(Point::new(600.0, 450.0));
		layout.tick();
		layout.release();
		layout.tick();
		assert_ne!(layout.node("1").unwrap().position, Point::new(600.0, 450.0));
	}
}
