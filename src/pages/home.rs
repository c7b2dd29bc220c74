use leptos::prelude::*;

use crate::components::graph_view::GraphView;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-graph">
				<GraphView container_id="cy" />
				<div class="graph-overlay">
					<h1>"hilben → ruby"</h1>
					<p class="subtitle">"Drag nodes to move them. Drag the background to pan, scroll to zoom."</p>
				</div>
			</div>
		</ErrorBoundary>
	}
}
