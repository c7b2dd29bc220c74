//! Browser tests: `wasm-pack test --headless --firefox`.
//!
//! Each test installs its own global `cytoscape` function that records the
//! options it receives, so the tests never load the real library.
#![cfg(target_arch = "wasm32")]

use graph_bootstrap::bootstrap::{BootstrapError, GraphBootstrap};
use graph_bootstrap::graph::sample_config;
use graph_bootstrap::renderer::{CytoscapeRenderer, RenderError, RendererInstance};
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, Element};

wasm_bindgen_test_configure!(run_in_browser);

const RECORDING_CYTOSCAPE: &str = "
	globalThis.__cyOptions = options;
	globalThis.__cyCalls = (globalThis.__cyCalls || 0) + 1;
	globalThis.__cyDestroyed = 0;
	const nodes = options.elements.nodes.length;
	const edges = options.elements.edges.length;
	return {
		nodes: () => ({ length: nodes }),
		edges: () => ({ length: edges }),
		destroy: () => { globalThis.__cyDestroyed += 1; },
	};
";

const THROWING_CYTOSCAPE: &str = "throw new Error('boom');";

fn document() -> Document {
	web_sys::window().unwrap().document().unwrap()
}

fn container(id: &str) -> Element {
	let doc = document();
	let div = doc.create_element("div").unwrap();
	div.set_id(id);
	doc.body().unwrap().append_child(&div).unwrap();
	div
}

fn install_cytoscape(body: &str) {
	let fake = Function::new_with_args("options", body);
	Reflect::set(&js_sys::global(), &JsValue::from_str("cytoscape"), &fake).unwrap();
	Reflect::set(&js_sys::global(), &JsValue::from_str("__cyCalls"), &JsValue::from(0)).unwrap();
}

fn global(name: &str) -> JsValue {
	Reflect::get(&js_sys::global(), &JsValue::from_str(name)).unwrap()
}

fn get(value: &JsValue, path: &[&str]) -> JsValue {
	path.iter().fold(value.clone(), |v, key| {
		Reflect::get(&v, &JsValue::from_str(key)).unwrap()
	})
}

#[wasm_bindgen_test]
fn sample_options_reach_cytoscape() {
	install_cytoscape(RECORDING_CYTOSCAPE);
	let div = container("cy-options");
	let bootstrap = GraphBootstrap::new(CytoscapeRenderer, sample_config());
	let instance = bootstrap.initialize(&div).unwrap();

	assert_eq!(instance.element_count(), 3);
	assert_eq!(instance.layout_name().as_str(), "grid");

	let options = global("__cyOptions");
	assert_eq!(get(&options, &["boxSelectionEnabled"]).as_bool(), Some(false));
	assert_eq!(get(&options, &["autounselectify"]).as_bool(), Some(true));
	assert_eq!(get(&options, &["layout", "name"]).as_string().as_deref(), Some("grid"));
	assert_eq!(get(&options, &["layout", "padding"]).as_f64(), Some(10.0));

	let passed: Element = get(&options, &["container"]).dyn_into().unwrap();
	assert_eq!(passed, div);

	let style = get(&options, &["style"]);
	assert_eq!(get(&style, &["0", "selector"]).as_string().as_deref(), Some("node"));
	assert_eq!(get(&style, &["1", "selector"]).as_string().as_deref(), Some(":selected"));
	assert_eq!(
		get(&style, &["0", "style", "content"]).as_string().as_deref(),
		Some("data(name)")
	);
}

#[wasm_bindgen_test]
fn library_error_is_reported_and_container_released() {
	install_cytoscape(THROWING_CYTOSCAPE);
	let div = container("cy-throws");
	let bootstrap = GraphBootstrap::new(CytoscapeRenderer, sample_config());

	match bootstrap.initialize(&div) {
		Err(BootstrapError::Render(RenderError::Js(message))) => assert_eq!(message, "boom"),
		Err(other) => panic!("unexpected error: {other}"),
		Ok(_) => panic!("construction should have failed"),
	}
	assert!(div.get_attribute("data-graph-mounted").is_none());
}

#[wasm_bindgen_test]
fn second_mount_is_refused_without_calling_cytoscape() {
	install_cytoscape(RECORDING_CYTOSCAPE);
	let div = container("cy-twice");
	let bootstrap = GraphBootstrap::new(CytoscapeRenderer, sample_config());
	let _first = bootstrap.initialize(&div).unwrap();

	assert!(matches!(
		bootstrap.initialize(&div),
		Err(BootstrapError::Render(RenderError::AlreadyMounted))
	));
	assert_eq!(global("__cyCalls").as_f64(), Some(1.0));
}

#[wasm_bindgen_test]
fn dropping_the_instance_destroys_core_and_frees_container() {
	install_cytoscape(RECORDING_CYTOSCAPE);
	let div = container("cy-drop");
	let bootstrap = GraphBootstrap::new(CytoscapeRenderer, sample_config());
	let first = bootstrap.initialize(&div).unwrap();
	assert_eq!(div.get_attribute("data-graph-mounted").as_deref(), Some("cytoscape"));

	drop(first);
	assert_eq!(global("__cyDestroyed").as_f64(), Some(1.0));
	assert!(div.get_attribute("data-graph-mounted").is_none());

	assert!(bootstrap.initialize(&div).is_ok());
}

#[wasm_bindgen_test]
fn missing_container_fails_fast() {
	install_cytoscape(RECORDING_CYTOSCAPE);
	let bootstrap = GraphBootstrap::new(CytoscapeRenderer, sample_config());
	assert!(matches!(
		bootstrap.initialize_by_id(&document(), "no-such-element"),
		Err(BootstrapError::MissingContainer(id)) if id == "no-such-element"
	));
	assert_eq!(global("__cyCalls").as_f64(), Some(0.0));
}
