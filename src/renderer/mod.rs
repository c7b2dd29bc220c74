//! Renderer seam: anything that can take a [`GraphConfig`] and a container
//! and own the drawing and interaction from then on.

pub mod cytoscape;
mod dom;

use wasm_bindgen::JsValue;

use crate::graph::{ConfigError, GraphConfig, LayoutName};

pub use cytoscape::{CytoscapeInstance, CytoscapeRenderer};

/// Failures while constructing or attaching a renderer.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
	/// The container already hosts a graph
	#[error("Container already has a graph mounted")]
	AlreadyMounted,

	/// A DOM or library call threw
	#[error("JavaScript error: {0}")]
	Js(String),

	/// The options payload was rejected before reaching the renderer
	#[error(transparent)]
	Config(#[from] ConfigError),
}

impl From<JsValue> for RenderError {
	fn from(value: JsValue) -> Self {
		let message = value
			.as_string()
			.or_else(|| {
				js_sys::Reflect::get(&value, &JsValue::from_str("message"))
					.ok()
					.and_then(|m| m.as_string())
			})
			.unwrap_or_else(|| format!("{value:?}"));
		RenderError::Js(message)
	}
}

/// Builds renderer instances inside containers.
pub trait Renderer {
	/// Handle to the UI element a graph is drawn into.
	type Container;
	/// The live renderer returned by [`Renderer::construct`].
	type Instance: RendererInstance;

	/// Creates one renderer instance attached to `container`.
	fn construct(
		&self,
		container: &Self::Container,
		config: &GraphConfig,
	) -> Result<Self::Instance, RenderError>;
}

/// A live renderer, queried only for what it was built with.
pub trait RendererInstance {
	/// Nodes the renderer holds.
	fn node_count(&self) -> usize;
	/// Edges the renderer holds.
	fn edge_count(&self) -> usize;
	/// Layout the renderer was asked to run.
	fn layout_name(&self) -> LayoutName;

	/// Nodes plus edges.
	fn element_count(&self) -> usize {
		self.node_count() + self.edge_count()
	}
}
