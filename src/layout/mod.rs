//! Force-directed layout for ego networks.
//!
//! A [`Layout`] owns the nodes, edges and drag session of one loaded
//! [`Snapshot`]. Each [`Layout::tick`] adds pairwise repulsion and edge spring
//! forces to node velocities, damps and integrates every free node, and clamps
//! all positions to the canvas. A dragged node is positioned by the pointer
//! alone until it is released.

mod config;
mod drag;
mod engine;
pub mod forces;
mod geometry;
mod node;
mod snapshot;

pub use config::LayoutConfig;
pub use drag::DragState;
pub use engine::{Layout, TickStatus};
pub use geometry::{Bounds, Point};
pub use node::{LayoutEdge, LayoutNode};
pub use snapshot::{Direction, Role, Snapshot, SnapshotError, SnapshotLink, SnapshotNode};
