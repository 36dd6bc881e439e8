//! In-memory backend and view doubles for controller tests.

use crate::api::Backend;
use crate::error::{ApiError, Result};
use crate::http::{response_body, RequestOptions};
use crate::presenter::{FieldErrors, FormView, SubmitControl};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Call {
    pub path: String,
    pub options: RequestOptions,
}

/// Backend answering from canned replies keyed by path.
#[derive(Default)]
pub struct MockBackend {
    replies: RefCell<HashMap<String, Result<Value>>>,
    calls: RefCell<Vec<Call>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, path: &str, body: Value) {
        self.replies.borrow_mut().insert(path.to_string(), Ok(body));
    }

    /// Reply with `status` and a JSON body, parsed like a real response.
    pub fn reply_status(&self, path: &str, status: u16, body: Value) {
        let result = response_body(status, &body.to_string());
        self.replies.borrow_mut().insert(path.to_string(), result);
    }

    pub fn fail(&self, path: &str, err: ApiError) {
        self.replies.borrow_mut().insert(path.to_string(), Err(err));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl Backend for MockBackend {
    async fn request(&self, path: &str, options: RequestOptions) -> Result<Value> {
        self.calls.borrow_mut().push(Call {
            path: path.to_string(),
            options,
        });
        self.replies
            .borrow()
            .get(path)
            .cloned()
            .unwrap_or_else(|| Err(ApiError::Transport(format!("no reply for {}", path))))
    }
}

/// View that records everything a controller asks of it.
pub struct RecordingView<D> {
    pub errors: FieldErrors,
    pub control: SubmitControl,
    pub control_history: Vec<SubmitControl>,
    pub results: Option<D>,
    pub results_visible: bool,
    pub alerts: Vec<String>,
    pub prompts: Vec<String>,
    pub confirm_answer: bool,
}

impl<D> RecordingView<D> {
    pub fn new() -> Self {
        Self {
            errors: FieldErrors::new(),
            control: SubmitControl {
                disabled: false,
                label: "",
            },
            control_history: Vec::new(),
            results: None,
            results_visible: false,
            alerts: Vec::new(),
            prompts: Vec::new(),
            confirm_answer: true,
        }
    }

    pub fn declining() -> Self {
        Self {
            confirm_answer: false,
            ..Self::new()
        }
    }
}

impl<D: Clone> FormView<D> for RecordingView<D> {
    fn show_error(&mut self, field_id: &str, message: &str) {
        self.errors.show_error(field_id, message);
    }

    fn clear_field_error(&mut self, field_id: &str) {
        self.errors.clear_field(field_id);
    }

    fn clear_errors(&mut self) {
        self.errors.clear_errors();
    }

    fn set_submit_control(&mut self, control: SubmitControl) {
        self.control = control;
        self.control_history.push(control);
    }

    fn show_results(&mut self, display: &D) {
        self.results = Some(display.clone());
        self.results_visible = true;
    }

    fn hide_results(&mut self) {
        self.results_visible = false;
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.prompts.push(message.to_string());
        self.confirm_answer
    }
}
