use super::config::GraphConfig;
use super::layout::LayoutConfig;
use super::model::{Edge, Node};
use super::style::{Selector, Stylesheet};

/// The page's graph: two labeled nodes joined by one edge on a grid.
///
/// User selection is disabled (`autounselectify`), so the `:selected` rule
/// only shows when selection is driven programmatically.
pub fn sample_config() -> GraphConfig {
	let style = Stylesheet::new()
		.selector(Selector::Node)
		.css("content", "data(name)")
		.css("text-valign", "center")
		.css("color", "white")
		.css("text-outline-width", 2)
		.css("text-outline-color", "#888")
		.selector(Selector::Selected)
		.css("background-color", "black")
		.css("line-color", "black")
		.css("target-arrow-color", "black")
		.css("source-arrow-color", "black")
		.css("text-outline-color", "black");

	GraphConfig::new()
		.with_box_selection(false)
		.with_autounselectify(true)
		.with_style(style)
		.with_node(Node::new("name", "hilben"))
		.with_node(Node::new("code", "ruby"))
		.with_edge(Edge::new("name", "code"))
		.with_layout(LayoutConfig::grid(10))
}
