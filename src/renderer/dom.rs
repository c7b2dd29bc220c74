use web_sys::Element;

use super::RenderError;

const MOUNTED_ATTR: &str = "data-graph-mounted";

/// Marks `container` as hosting a graph, failing if it already does.
pub fn claim_container(container: &Element, backend: &str) -> Result<(), RenderError> {
	if container.has_attribute(MOUNTED_ATTR) {
		return Err(RenderError::AlreadyMounted);
	}
	container.set_attribute(MOUNTED_ATTR, backend)?;
	Ok(())
}

pub fn release_container(container: &Element) {
	let _ = container.remove_attribute(MOUNTED_ATTR);
}
