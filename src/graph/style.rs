use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Which elements a style rule applies to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
	/// Every node.
	Node,
	/// Every edge.
	Edge,
	/// The `:selected` pseudo-state, any element kind.
	Selected,
	/// Anything else, e.g. `node:selected` or `*`.
	Raw(String),
}

impl Selector {
	/// The selector text the renderer receives.
	pub fn as_str(&self) -> &str {
		match self {
			Selector::Node => "node",
			Selector::Edge => "edge",
			Selector::Selected => ":selected",
			Selector::Raw(raw) => raw,
		}
	}
}

impl From<&str> for Selector {
	fn from(raw: &str) -> Self {
		match raw.trim() {
			"node" => Selector::Node,
			"edge" => Selector::Edge,
			":selected" => Selector::Selected,
			other => Selector::Raw(other.to_string()),
		}
	}
}

impl Serialize for Selector {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.as_str())
	}
}

impl<'de> Deserialize<'de> for Selector {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let raw = String::deserialize(deserializer)?;
		Ok(Selector::from(raw.as_str()))
	}
}

/// A visual property value: a bare number or any other CSS-like string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
	/// Numeric value, e.g. an outline width.
	Number(f64),
	/// Colours, keywords and `data(..)` mappers.
	Text(String),
}

impl From<&str> for StyleValue {
	fn from(s: &str) -> Self {
		StyleValue::Text(s.to_string())
	}
}

impl From<String> for StyleValue {
	fn from(s: String) -> Self {
		StyleValue::Text(s)
	}
}

impl From<f64> for StyleValue {
	fn from(n: f64) -> Self {
		StyleValue::Number(n)
	}
}

impl From<i32> for StyleValue {
	fn from(n: i32) -> Self {
		StyleValue::Number(n as f64)
	}
}

/// One `selector -> { property: value }` rule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StyleRule {
	/// Elements the rule applies to.
	pub selector: Selector,
	/// Visual properties by name.
	pub style: BTreeMap<String, StyleValue>,
}

impl StyleRule {
	/// An empty rule for `selector`.
	pub fn new(selector: impl Into<Selector>) -> Self {
		Self {
			selector: selector.into(),
			style: BTreeMap::new(),
		}
	}

	/// Whether the rule sets no properties.
	pub fn is_empty(&self) -> bool {
		self.style.is_empty()
	}
}

/// Ordered list of style rules. Later rules win on conflicting properties.
///
/// ```
/// use graph_bootstrap::graph::{Selector, Stylesheet};
///
/// let sheet = Stylesheet::new()
/// 	.selector(Selector::Node)
/// 	.css("content", "data(name)")
/// 	.css("text-outline-width", 2)
/// 	.selector(Selector::Selected)
/// 	.css("background-color", "black");
/// assert_eq!(sheet.rules().len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stylesheet {
	rules: Vec<StyleRule>,
}

impl Stylesheet {
	/// An empty stylesheet.
	pub fn new() -> Self {
		Self::default()
	}

	/// Opens a new rule; following `css` calls add properties to it.
	pub fn selector(mut self, selector: impl Into<Selector>) -> Self {
		self.rules.push(StyleRule::new(selector));
		self
	}

	/// Sets one property on the most recently opened rule. Without an open
	/// rule the property goes into a new `*` rule.
	pub fn css(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
		if self.rules.is_empty() {
			self.rules.push(StyleRule::new("*"));
		}
		if let Some(rule) = self.rules.last_mut() {
			rule.style.insert(property.into(), value.into());
		}
		self
	}

	/// The rules in application order.
	pub fn rules(&self) -> &[StyleRule] {
		&self.rules
	}
}
