//! Hands a validated graph configuration to a renderer, once per container.

use log::{error, info};
use web_sys::Document;

use crate::graph::{ConfigError, GraphConfig};
use crate::renderer::{RenderError, Renderer, RendererInstance};

/// Why a graph could not be brought up.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
	/// The configuration failed validation
	#[error("Invalid graph configuration: {0}")]
	Config(#[from] ConfigError),

	/// No element with the container id exists
	#[error("Graph container #{0} not found")]
	MissingContainer(String),

	/// The renderer failed to construct
	#[error("Renderer failed: {0}")]
	Render(#[from] RenderError),
}

/// A fixed configuration plus the renderer that will draw it.
pub struct GraphBootstrap<R> {
	renderer: R,
	config: GraphConfig,
}

impl<R: Renderer> GraphBootstrap<R> {
	/// Pairs `config` with the renderer that will draw it.
	pub fn new(renderer: R, config: GraphConfig) -> Self {
		Self { renderer, config }
	}

	/// Validates the configuration and constructs one renderer instance in
	/// `container`. The renderer owns all interaction from here on.
	pub fn initialize(&self, container: &R::Container) -> Result<R::Instance, BootstrapError> {
		self.config.validate().inspect_err(|e| error!("{e}"))?;
		let instance = self
			.renderer
			.construct(container, &self.config)
			.inspect_err(|e| error!("graph renderer failed: {e}"))?;
		info!(
			"graph initialized: {} nodes, {} edges, {} layout",
			instance.node_count(),
			instance.edge_count(),
			instance.layout_name()
		);
		Ok(instance)
	}
}

impl<R: Renderer<Container = web_sys::Element>> GraphBootstrap<R> {
	/// Looks the container up by element id, failing fast when it is absent.
	pub fn initialize_by_id(
		&self,
		document: &Document,
		id: &str,
	) -> Result<R::Instance, BootstrapError> {
		let container = document.get_element_by_id(id).ok_or_else(|| {
			error!("graph container #{id} not found");
			BootstrapError::MissingContainer(id.to_string())
		})?;
		self.initialize(&container)
	}
}
