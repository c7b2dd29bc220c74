use leptos::prelude::*;
use log::warn;

use crate::bootstrap::GraphBootstrap;
use crate::graph::{GraphConfig, sample_config};
use crate::renderer::{CytoscapeInstance, CytoscapeRenderer};

/// Container element plus the one-time graph bootstrap into it.
///
/// The graph is mounted once, the first time the container exists; the
/// cytoscape instance lives as long as the component.
#[component]
pub fn GraphView(
	/// Element id of the container `div`.
	#[prop(into)]
	container_id: String,
	/// Graph to draw; the built-in sample when omitted.
	#[prop(optional)]
	config: Option<GraphConfig>,
) -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let error = RwSignal::new(None::<String>);
	let bootstrap = GraphBootstrap::new(CytoscapeRenderer, config.unwrap_or_else(sample_config));
	let mut mounted: Option<CytoscapeInstance> = None;

	Effect::new(move |_| {
		let Some(div) = container_ref.get() else {
			return;
		};
		if mounted.is_some() {
			warn!("graph already mounted, skipping");
			return;
		}
		let container: web_sys::Element = div.into();
		match bootstrap.initialize(&container) {
			Ok(instance) => mounted = Some(instance),
			Err(err) => error.set(Some(err.to_string())),
		}
	});

	view! {
		<div id=container_id node_ref=container_ref class="graph-container" />
		{move || error.get().map(|message| view! { <p class="graph-error">{message}</p> })}
	}
}
