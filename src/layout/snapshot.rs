//! Graph snapshots as delivered by the network endpoint.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Position of a node in the ego network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
	/// The account the network was loaded for.
	#[serde(rename = "main")]
	Focal,
	/// An account the focal account follows.
	#[serde(rename = "following")]
	Outbound,
	/// An account following the focal account.
	#[serde(rename = "follower")]
	Inbound,
}

/// Direction of a follow relation relative to the focal account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
	/// Focal account follows the target.
	#[serde(rename = "following")]
	Outbound,
	/// Source follows the focal account.
	#[serde(rename = "follower")]
	Inbound,
}

/// A node as listed in a snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapshotNode {
	/// Opaque account id.
	pub id: String,
	/// Display label, usually the `@handle`.
	#[serde(rename = "name")]
	pub label: String,
	/// Role in the ego network.
	#[serde(rename = "type")]
	pub role: Role,
}

/// An edge as listed in a snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapshotLink {
	/// Id of the following account.
	pub source: String,
	/// Id of the followed account.
	pub target: String,
	/// Whether the edge leaves or enters the focal account.
	#[serde(rename = "type")]
	pub direction: Direction,
}

/// One loaded ego network: the complete node and edge lists.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
	/// Nodes, focal account first.
	pub nodes: Vec<SnapshotNode>,
	/// Follow relations.
	#[serde(default)]
	pub links: Vec<SnapshotLink>,
}

/// Why a snapshot payload could not be used.
#[derive(Debug, Error)]
pub enum SnapshotError {
	/// The payload is not a snapshot.
	#[error("malformed network data: {0}")]
	Json(#[from] serde_json::Error),
	/// The endpoint answered with its failure envelope.
	#[error("{0}")]
	Upstream(String),
}

impl Snapshot {
	/// Parses the endpoint's JSON body, either a snapshot or `{"error": ...}`.
	pub fn from_json(body: &str) -> Result<Self, SnapshotError> {
		let value: serde_json::Value = serde_json::from_str(body)?;
		if let Some(message) = value.get("error").and_then(|e| e.as_str()) {
			return Err(SnapshotError::Upstream(message.to_owned()));
		}
		Ok(serde_json::from_value(value)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const BODY: &str = r#"{
		"nodes": [
			{ "id": "1", "name": "@ferris", "type": "main" },
			{ "id": "2", "name": "@crab", "type": "following" },
			{ "id": "3", "name": "@borrowck", "type": "follower" }
		],
		"links": [
			{ "source": "1", "target": "2", "type": "following" },
			{ "source": "3", "target": "1", "type": "follower" }
		]
	}"#;

	#[test]
	fn parses_endpoint_body() {
		let snapshot = Snapshot::from_json(BODY).unwrap();
		let roles: Vec<Role> = snapshot.nodes.iter().map(|n| n.role).collect();
		assert_eq!(roles, [Role::Focal, Role::Outbound, Role::Inbound]);
		assert_eq!(snapshot.nodes[0].label, "@ferris");
		assert_eq!(snapshot.links[1].direction, Direction::Inbound);
		assert_eq!(snapshot.links[1].source, "3");
	}

	#[test]
	fn links_default_to_empty() {
		let snapshot = Snapshot::from_json(r#"{"nodes": []}"#).unwrap();
		assert!(snapshot.nodes.is_empty());
		assert!(snapshot.links.is_empty());
	}

	#[test]
	fn surfaces_failure_envelope() {
		let err = Snapshot::from_json(r#"{"error": "User not found"}"#).unwrap_err();
		assert!(matches!(err, SnapshotError::Upstream(ref m) if m == "User not found"));
		assert_eq!(err.to_string(), "User not found");
	}

	#[test]
	fn rejects_malformed_json() {
		let err = Snapshot::from_json("{\"nodes\": [").unwrap_err();
		assert!(matches!(err, SnapshotError::Json(_)));
	}

	#[test]
	fn rejects_unknown_role() {
		let body = r#"{"nodes": [{ "id": "1", "name": "@x", "type": "blocked" }]}"#;
		assert!(matches!(Snapshot::from_json(body), Err(SnapshotError::Json(_))));
	}
}
