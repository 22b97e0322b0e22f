//! Small `web-sys` lookups shared by the DOM helpers.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::error::UiError;

pub fn document() -> Result<Document, UiError> {
    web_sys::window().and_then(|w| w.document()).ok_or(UiError::NoBrowser)
}

pub fn element_by_id(id: &str) -> Result<Element, UiError> {
    document()?.get_element_by_id(id).ok_or_else(|| UiError::missing_id(id))
}

/// All elements under `root` matching `selector`, in document order.
pub fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>, UiError> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}
