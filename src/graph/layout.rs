use std::fmt;

use serde::{Deserialize, Serialize};

/// Padding around the laid-out graph when none is given.
pub const DEFAULT_PADDING: u32 = 30;

/// Layout algorithms a renderer is asked to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutName {
	/// Rows and columns filling the viewport.
	#[default]
	Grid,
	/// Evenly spaced on a circle.
	Circle,
	/// Force-directed.
	Cose,
	/// Uses each node's `position`.
	Preset,
}

impl LayoutName {
	/// The name the renderer receives.
	pub fn as_str(self) -> &'static str {
		match self {
			LayoutName::Grid => "grid",
			LayoutName::Circle => "circle",
			LayoutName::Cose => "cose",
			LayoutName::Preset => "preset",
		}
	}
}

impl fmt::Display for LayoutName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// The `layout` descriptor: `{ name, padding }`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
	/// Algorithm to run.
	pub name: LayoutName,
	/// Space in pixels kept around the graph when fitting it.
	pub padding: u32,
}

impl LayoutConfig {
	/// `name` with the default padding.
	pub fn new(name: LayoutName) -> Self {
		Self {
			name,
			padding: DEFAULT_PADDING,
		}
	}

	/// A grid layout with the given padding.
	pub fn grid(padding: u32) -> Self {
		Self::new(LayoutName::Grid).with_padding(padding)
	}

	/// Replaces the padding.
	pub fn with_padding(mut self, padding: u32) -> Self {
		self.padding = padding;
		self
	}
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self::new(LayoutName::default())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn serializes_name_in_lowercase() {
		let value = serde_json::to_value(LayoutConfig::grid(10)).unwrap();
		assert_eq!(value, json!({ "name": "grid", "padding": 10 }));
	}

	#[test]
	fn rejects_unknown_names() {
		let parsed: LayoutConfig = serde_json::from_value(json!({ "name": "cose", "padding": 5 })).unwrap();
		assert_eq!(parsed.name, LayoutName::Cose);
		assert!(serde_json::from_value::<LayoutConfig>(json!({ "name": "breadthfirst", "padding": 5 })).is_err());
	}

	#[test]
	fn default_padding() {
		assert_eq!(LayoutConfig::new(LayoutName::Circle).padding, DEFAULT_PADDING);
	}
}
