use graph_bootstrap::{App, host, init_logging};
use leptos::prelude::*;

fn main() {
	init_logging();
	if let Err(err) = host::on_dom_ready(|| mount_to_body(App)) {
		wasm_bindgen::throw_str(&err.to_string());
	}
}
