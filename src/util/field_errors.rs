//! Inline form field error rendering.
//!
//! Uses the UI library's `is-invalid` marker on the field and a sibling
//! `.invalid-feedback` element for the message.

use super::dom::{document, element_by_id, query_all};
use crate::error::UiError;

const INVALID_CLASS: &str = "is-invalid";
const FEEDBACK_CLASS: &str = "invalid-feedback";
const FEEDBACK_SELECTOR: &str = ".invalid-feedback";
const INVALID_SELECTOR: &str = ".is-invalid";

/// Mark `field_id` invalid and show `message` below it.
///
/// Any earlier message for the same field is replaced, so repeated calls
/// leave exactly one message with the latest text.
///
/// # Errors
///
/// Returns [`UiError::ElementNotFound`] if the field or its parent is
/// missing, or a DOM error if an element call throws.
pub fn show_field_error(field_id: &str, message: &str) -> Result<(), UiError> {
    let field = element_by_id(field_id)?;
    let parent = field
        .parent_element()
        .ok_or_else(|| UiError::ElementNotFound(format!("parent of #{field_id}")))?;

    field.class_list().add_1(INVALID_CLASS)?;
    for existing in query_all(&parent, FEEDBACK_SELECTOR)? {
        existing.remove();
    }

    let feedback = document()?.create_element("div")?;
    feedback.set_class_name(FEEDBACK_CLASS);
    feedback.set_text_content(Some(message));
    parent.append_child(&feedback)?;
    Ok(())
}

/// Remove every invalid marker and inline message inside `form_id`.
///
/// # Errors
///
/// Returns [`UiError::ElementNotFound`] if the form is missing.
pub fn clear_field_errors(form_id: &str) -> Result<(), UiError> {
    let form = element_by_id(form_id)?;
    for field in query_all(&form, INVALID_SELECTOR)? {
        field.class_list().remove_1(INVALID_CLASS)?;
    }
    for message in query_all(&form, FEEDBACK_SELECTOR)? {
        message.remove();
    }
    Ok(())
}
