use serde::{Deserialize, Serialize};

/// A point in model coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate.
	pub y: f64,
}

/// The `data` mapping of a node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
	/// Unique element id, referenced by edges.
	pub id: String,
	/// Display name, shown through `data(name)` in the stylesheet.
	pub name: String,
}

/// A labeled graph node, serialized as `{ data: { id, name } }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
	/// Element data.
	pub data: NodeData,
	/// Only read by the `preset` layout.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub position: Option<Position>,
}

impl Node {
	/// A node with the given id and display name.
	pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			data: NodeData {
				id: id.into(),
				name: name.into(),
			},
			position: None,
		}
	}

	/// The node's id.
	pub fn id(&self) -> &str {
		&self.data.id
	}

	/// The node's display name.
	pub fn name(&self) -> &str {
		&self.data.name
	}
}

/// The `data` mapping of an edge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeData {
	/// Optional element id; the renderer generates one when absent.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	/// Id of the source node.
	pub source: String,
	/// Id of the target node.
	pub target: String,
}

/// A connection between two nodes, serialized as `{ data: { source, target } }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
	/// Element data.
	pub data: EdgeData,
}

impl Edge {
	/// An edge from `source` to `target`, both node ids.
	pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
		Self {
			data: EdgeData {
				id: None,
				source: source.into(),
				target: target.into(),
			},
		}
	}

	/// Id of the source node.
	pub fn source(&self) -> &str {
		&self.data.source
	}

	/// Id of the target node.
	pub fn target(&self) -> &str {
		&self.data.target
	}
}

/// The `elements` payload: nodes first, then edges.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Elements {
	/// Every node, in insertion order.
	pub nodes: Vec<Node>,
	/// Every edge, in insertion order.
	pub edges: Vec<Edge>,
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn node_serializes_as_data_wrapper() {
		let value = serde_json::to_value(Node::new("a", "Alpha")).unwrap();
		assert_eq!(value, json!({ "data": { "id": "a", "name": "Alpha" } }));
	}

	#[test]
	fn preset_position_is_serialized_when_set() {
		let mut node = Node::new("a", "Alpha");
		node.position = Some(Position { x: 1.0, y: 2.5 });
		let value = serde_json::to_value(node).unwrap();
		assert_eq!(value["position"], json!({ "x": 1.0, "y": 2.5 }));
	}

	#[test]
	fn edge_omits_missing_id() {
		let value = serde_json::to_value(Edge::new("a", "b")).unwrap();
		assert_eq!(value, json!({ "data": { "source": "a", "target": "b" } }));
	}
}
