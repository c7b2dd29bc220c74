//! Binding to the cytoscape.js global loaded by the page.

use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::{RenderError, Renderer, RendererInstance, dom};
use crate::graph::{GraphConfig, LayoutName};

#[wasm_bindgen]
extern "C" {
	type Core;

	#[wasm_bindgen(catch, js_name = cytoscape)]
	fn new_core(options: &JsValue) -> Result<Core, JsValue>;

	#[wasm_bindgen(method)]
	fn nodes(this: &Core) -> Collection;

	#[wasm_bindgen(method)]
	fn edges(this: &Core) -> Collection;

	#[wasm_bindgen(method)]
	fn destroy(this: &Core);

	type Collection;

	#[wasm_bindgen(method, getter)]
	fn length(this: &Collection) -> u32;
}

/// Renders through cytoscape.js.
#[derive(Clone, Copy, Debug, Default)]
pub struct CytoscapeRenderer;

impl Renderer for CytoscapeRenderer {
	type Container = Element;
	type Instance = CytoscapeInstance;

	fn construct(
		&self,
		container: &Element,
		config: &GraphConfig,
	) -> Result<CytoscapeInstance, RenderError> {
		// Round-trip through JSON text so the options arrive as plain JS objects.
		let options = js_sys::JSON::parse(&config.to_options()?.to_string())?;
		js_sys::Reflect::set(&options, &JsValue::from_str("container"), container)?;

		dom::claim_container(container, "cytoscape")?;
		let core = match new_core(&options) {
			Ok(core) => core,
			Err(err) => {
				dom::release_container(container);
				return Err(err.into());
			}
		};
		debug!(
			"cytoscape mounted: {} nodes, {} edges",
			core.nodes().length(),
			core.edges().length()
		);

		Ok(CytoscapeInstance {
			core,
			container: container.clone(),
			layout: config.layout.name,
		})
	}
}

/// A mounted cytoscape core. Dropping it destroys the core and frees the
/// container for another mount.
pub struct CytoscapeInstance {
	core: Core,
	container: Element,
	layout: LayoutName,
}

impl RendererInstance for CytoscapeInstance {
	fn node_count(&self) -> usize {
		self.core.nodes().length() as usize
	}

	fn edge_count(&self) -> usize {
		self.core.edges().length() as usize
	}

	fn layout_name(&self) -> LayoutName {
		self.layout
	}
}

impl Drop for CytoscapeInstance {
	fn drop(&mut self) {
		self.core.destroy();
		dom::release_container(&self.container);
	}
}
