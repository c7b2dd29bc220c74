//! The host page's one-shot "document ready" signal.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::AddEventListenerOptions;

/// Failures talking to the hosting page.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
	/// No window or document (not running in a browser page)
	#[error("No document available")]
	NoDocument,

	/// Registering the ready listener threw
	#[error("Could not listen for DOMContentLoaded: {0}")]
	Listen(String),
}

/// A callback that runs at most once, however often it is fired.
pub struct ReadyCallback {
	callback: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl ReadyCallback {
	/// Wraps `f` so it can only ever run once.
	pub fn new(f: impl FnOnce() + 'static) -> Self {
		Self {
			callback: RefCell::new(Some(Box::new(f))),
		}
	}

	/// Runs the callback if it has not run yet. Returns whether it ran.
	pub fn fire(&self) -> bool {
		// Take it out first so a re-entrant fire sees an empty slot.
		let callback = self.callback.borrow_mut().take();
		match callback {
			Some(f) => {
				f();
				true
			}
			None => false,
		}
	}
}

/// Runs `f` once the document's structure is parsed: immediately when it
/// already is, otherwise on `DOMContentLoaded`.
pub fn on_dom_ready(f: impl FnOnce() + 'static) -> Result<(), HostError> {
	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or(HostError::NoDocument)?;
	let ready = Rc::new(ReadyCallback::new(f));

	if document.ready_state() != "loading" {
		debug!("document already {}, running now", document.ready_state());
		ready.fire();
		return Ok(());
	}

	let listener = Closure::once_into_js(move || {
		debug!("DOMContentLoaded");
		ready.fire();
	});
	let options = AddEventListenerOptions::new();
	options.set_once(true);
	document
		.add_event_listener_with_callback_and_add_event_listener_options(
			"DOMContentLoaded",
			listener.unchecked_ref(),
			&options,
		)
		.map_err(|e| HostError::Listen(format!("{e:?}")))
}
