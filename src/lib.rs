//! Leptos client-side app that bootstraps a small styled graph into the page.
//!
//! The graph description lives in [`graph`], renderers in [`renderer`], and
//! [`bootstrap::GraphBootstrap`] joins the two once the host page is ready
//! ([`host::on_dom_ready`]).

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
pub mod bootstrap;
mod components;
pub mod graph;
pub mod host;
mod pages;
pub mod renderer;

// Top-Level pages
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

pub use components::graph_view::GraphView;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the graph page and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		// sets the document title
		<Title text="Graph" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}
