//! Inline form errors and the view boundary the controllers talk to.
//!
//! A form shows each field's error in a node with id `error-<field_id>`.
//! While an error is shown the node carries the `active` class and the input
//! carries the `error` class. [`FieldErrors`] holds that state; views render
//! it however they like.

use std::collections::BTreeMap;

/// Class every error node carries.
pub const ERROR_NODE_CLASS: &str = "form-error";
/// Class every input carries.
pub const INPUT_CLASS: &str = "form-input";

/// Id of the node that displays `field_id`'s error.
pub fn error_node_id(field_id: &str) -> String {
    format!("error-{}", field_id)
}

/// Per-field error messages currently shown on a form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    errors: BTreeMap<String, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_error(&mut self, field_id: &str, message: &str) {
        self.errors.insert(field_id.to_string(), message.to_string());
    }

    pub fn clear_field(&mut self, field_id: &str) {
        self.errors.remove(field_id);
    }

    /// Reset every field. Safe to call when nothing is shown.
    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    pub fn message(&self, field_id: &str) -> Option<&str> {
        self.errors.get(field_id).map(String::as_str)
    }

    pub fn is_active(&self, field_id: &str) -> bool {
        self.errors.contains_key(field_id)
    }

    /// Class attribute of the error node.
    pub fn error_class(&self, field_id: &str) -> &'static str {
        if self.is_active(field_id) {
            "form-error active"
        } else {
            ERROR_NODE_CLASS
        }
    }

    /// Class attribute of the input.
    pub fn input_class(&self, field_id: &str) -> &'static str {
        if self.is_active(field_id) {
            "form-input error"
        } else {
            INPUT_CLASS
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }
}

/// State of a form's submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitControl {
    pub disabled: bool,
    pub label: &'static str,
}

/// Presentation side of a calculator form.
///
/// `D` is the display record the calculator renders its results into.
pub trait FormView<D> {
    fn show_error(&mut self, field_id: &str, message: &str);

    fn clear_field_error(&mut self, field_id: &str);

    fn clear_errors(&mut self);

    fn set_submit_control(&mut self, control: SubmitControl);

    /// Fill the results panel and make it visible.
    fn show_results(&mut self, display: &D);

    fn hide_results(&mut self);

    /// Blocking message to the user.
    fn alert(&mut self, message: &str);

    /// Ask the user to confirm; `false` means declined.
    fn confirm(&mut self, message: &str) -> bool;
}
