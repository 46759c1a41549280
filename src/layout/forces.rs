//! Velocity contributions from pairwise repulsion and edge springs.
//!
//! Forces are added straight onto node velocities; there is no mass and the
//! timestep is one tick.

use super::config::LayoutConfig;
use super::geometry::Point;
use super::node::LayoutNode;

/// Repulsion between two nodes, as the force on `b`; `a` receives its negation.
///
/// Returns `None` for coincident nodes, whose direction is undefined.
pub fn repulsion(a: Point, b: Point, strength: f64) -> Option<Point> {
	let delta = b - a;
	let dist = delta.length();
	if dist == 0.0 {
		return None;
	}
	let force = strength / (dist * dist);
	Some(delta * (force / dist))
}

/// Spring force along an edge, as the force on `source`; `target` receives its
/// negation.
///
/// Positive along source→target when the edge is longer than `rest_length`,
/// negative when shorter. Returns `None` when the endpoints coincide.
pub fn spring(source: Point, target: Point, rest_length: f64, stiffness: f64) -> Option<Point> {
	let delta = target - source;
	let dist = delta.length();
	if dist == 0.0 {
		return None;
	}
	let force = (dist - rest_length) * stiffness;
	Some(delta * (force / dist))
}

/// Accumulates repulsion for every node pair and spring forces for every
/// `(source, target)` index pair onto the nodes' velocities.
///
/// Pairs with an index outside `nodes` are skipped.
pub fn apply<I>(nodes: &mut [LayoutNode], springs: I, config: &LayoutConfig)
where
	I: IntoIterator<Item = (usize, usize)>,
{
	let n = nodes.len();
	for i in 0..n {
		for j in (i + 1)..n {
			let Some(f) = repulsion(nodes[i].position, nodes[j].position, config.repulsion) else {
				continue;
			};
			nodes[i].velocity -= f;
			nodes[j].velocity += f;
		}
	}

	for (source, target) in springs {
		if source >= n || target >= n {
			continue;
		}
		let Some(f) = spring(
			nodes[source].position,
			nodes[target].position,
			config.rest_length,
			config.spring,
		) else {
			continue;
		};
		nodes[source].velocity += f;
		nodes[target].velocity -= f;
	}
}
