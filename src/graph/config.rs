use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::layout::LayoutConfig;
use super::model::{Edge, Elements, Node};
use super::style::Stylesheet;

/// Problems found in a [`GraphConfig`] before it reaches a renderer.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// A node has an empty id
	#[error("Node with empty id")]
	EmptyNodeId,

	/// Two nodes share an id
	#[error("Duplicate node id: {0}")]
	DuplicateNode(String),

	/// An edge endpoint names no node
	#[error("Edge {from} -> {to} references missing node {missing}")]
	DanglingEdge {
		/// Source id of the edge.
		from: String,
		/// Target id of the edge.
		to: String,
		/// The endpoint with no matching node.
		missing: String,
	},

	/// A style rule sets no properties
	#[error("Style rule for {0} has no properties")]
	EmptyStyleRule(String),

	/// Options payload could not be produced
	#[error("Could not serialize graph options: {0}")]
	Serialize(#[from] serde_json::Error),
}

/// Everything a renderer needs besides its container.
///
/// Serializes to the renderer options object (camelCase keys) without the
/// `container` entry, which is attached by the renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphConfig {
	/// Whether dragging on the background draws a selection box.
	pub box_selection_enabled: bool,
	/// When set, user taps never leave elements selected.
	pub autounselectify: bool,
	/// Ordered style rules.
	pub style: Stylesheet,
	/// Nodes and edges.
	pub elements: Elements,
	/// Positioning algorithm and padding.
	pub layout: LayoutConfig,
}

impl Default for GraphConfig {
	fn default() -> Self {
		Self {
			box_selection_enabled: true,
			autounselectify: false,
			style: Stylesheet::default(),
			elements: Elements::default(),
			layout: LayoutConfig::default(),
		}
	}
}

impl GraphConfig {
	/// An empty configuration with renderer defaults.
	pub fn new() -> Self {
		Self::default()
	}

	/// Enables or disables box selection.
	pub fn with_box_selection(mut self, enabled: bool) -> Self {
		self.box_selection_enabled = enabled;
		self
	}

	/// Sets `autounselectify`.
	pub fn with_autounselectify(mut self, enabled: bool) -> Self {
		self.autounselectify = enabled;
		self
	}

	/// Replaces the stylesheet.
	pub fn with_style(mut self, style: Stylesheet) -> Self {
		self.style = style;
		self
	}

	/// Appends a node.
	pub fn with_node(mut self, node: Node) -> Self {
		self.elements.nodes.push(node);
		self
	}

	/// Appends an edge.
	pub fn with_edge(mut self, edge: Edge) -> Self {
		self.elements.edges.push(edge);
		self
	}

	/// Replaces the layout descriptor.
	pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
		self.layout = layout;
		self
	}

	/// Checks node ids, edge endpoints and style rules.
	pub fn validate(&self) -> Result<(), ConfigError> {
		let mut ids = HashSet::new();
		for node in &self.elements.nodes {
			if node.id().is_empty() {
				return Err(ConfigError::EmptyNodeId);
			}
			if !ids.insert(node.id()) {
				return Err(ConfigError::DuplicateNode(node.id().to_string()));
			}
		}

		for edge in &self.elements.edges {
			if let Some(missing) = [edge.source(), edge.target()]
				.into_iter()
				.find(|id| !ids.contains(id))
			{
				return Err(ConfigError::DanglingEdge {
					from: edge.source().to_string(),
					to: edge.target().to_string(),
					missing: missing.to_string(),
				});
			}
		}

		if let Some(rule) = self.style.rules().iter().find(|r| r.is_empty()) {
			return Err(ConfigError::EmptyStyleRule(rule.selector.as_str().to_string()));
		}
		Ok(())
	}

	/// The options object handed to a renderer, minus `container`.
	pub fn to_options(&self) -> Result<serde_json::Value, ConfigError> {
		Ok(serde_json::to_value(self)?)
	}
}
