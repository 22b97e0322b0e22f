//! Loading spinners inserted into arbitrary containers.
//!
//! Each `show_loading` call creates its own element, identified by the
//! handle's `element_id()`, so concurrent spinners never share an id.

use leptos::prelude::*;
use web_sys::Element;

use super::dom::document;
use crate::error::UiError;
use crate::state::ui::{SpinnerId, UiState};

const SPINNER_CLASS: &str = "loading";

/// Append a spinner to `container` and return its handle.
///
/// # Errors
///
/// Returns [`UiError::StateDisposed`] if `ui` is gone, or a DOM error if
/// the element could not be created or attached.
pub fn show_loading(ui: RwSignal<UiState>, container: &Element) -> Result<SpinnerId, UiError> {
    let spinner = document()?.create_element("div")?;
    let id = ui.try_update(UiState::begin_loading).ok_or(UiError::StateDisposed)?;
    spinner.set_class_name(SPINNER_CLASS);
    spinner.set_id(&id.element_id());
    if let Err(e) = container.append_child(&spinner) {
        ui.update(|s| {
            s.end_loading(id);
        });
        return Err(e.into());
    }
    Ok(id)
}

/// Remove the spinner for `id`, if it is still present.
pub fn hide_loading(ui: RwSignal<UiState>, id: SpinnerId) {
    if let Ok(doc) = document() {
        if let Some(el) = doc.get_element_by_id(&id.element_id()) {
            el.remove();
        }
    }
    ui.try_update(|s| s.end_loading(id));
}
