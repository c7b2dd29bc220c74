//! Graph description handed to a renderer: elements, stylesheet and layout.

mod config;
mod layout;
mod model;
mod sample;
mod style;

pub use config::{ConfigError, GraphConfig};
pub use layout::{DEFAULT_PADDING, LayoutConfig, LayoutName};
pub use model::{Edge, EdgeData, Elements, Node, NodeData, Position};
pub use sample::sample_config;
pub use style::{Selector, StyleRule, StyleValue, Stylesheet};
