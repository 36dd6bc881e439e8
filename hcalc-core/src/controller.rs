//! The submit cycle shared by every calculator form.
//!
//! A form is either idle or submitting. `begin` validates and moves to
//! submitting (disabling the submit control); `finish` always moves back to
//! idle before rendering the response or alerting the failure. A form that
//! fails validation never reaches the backend.
//!
//! The cycle is split in two synchronous halves around the request so a UI
//! can hold the controller only briefly on each side of the `await`.

use crate::api::Backend;
use crate::error::Result;
use crate::form::FormState;
use crate::presenter::{FormView, SubmitControl};
use crate::validate::{FieldRule, SoftLimit};
use serde::Serialize;

/// Submit control label while a request is in flight.
pub const BUSY_LABEL: &str = "Calculating...";

/// What a calculator form needs to know about its own fields and endpoint.
#[allow(async_fn_in_trait)]
pub trait Calculator: Clone {
    type Request: Serialize + Clone;
    type Response;
    type Display: Clone;

    /// Static bound table, used for single-field blur validation.
    fn field_rules(&self) -> &'static [FieldRule];

    /// Rules applied on submit; may depend on other fields' values.
    fn rules_for(&self, _form: &FormState) -> Vec<FieldRule> {
        self.field_rules().to_vec()
    }

    /// Thresholds needing user confirmation, checked after the rules pass.
    fn soft_limits_for(&self, _form: &FormState) -> Vec<SoftLimit> {
        Vec::new()
    }

    /// Submit control label while idle.
    fn idle_label(&self) -> &'static str;

    /// Assemble the request from a form that passed validation.
    fn build_request(&self, form: &FormState) -> Option<Self::Request>;

    async fn send<B: Backend>(&self, backend: &B, request: &Self::Request)
        -> Result<Self::Response>;

    fn render(&self, response: &Self::Response) -> Self::Display;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

/// Result of the first half of a submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Begin<R> {
    /// A request is already in flight.
    Busy,
    /// Inline errors are shown.
    Invalid,
    /// The user declined a confirmation prompt.
    Cancelled,
    /// Now submitting; send this request.
    Ready(R),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Busy,
    Invalid,
    Cancelled,
    Rendered,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct FormController<C> {
    calculator: C,
    state: SubmitState,
}

impl<C: Calculator> FormController<C> {
    pub fn new(calculator: C) -> Self {
        Self {
            calculator,
            state: SubmitState::Idle,
        }
    }

    pub fn calculator(&self) -> &C {
        &self.calculator
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    /// Run every rule, showing each failing field's error.
    pub fn validate<V: FormView<C::Display>>(&self, form: &FormState, view: &mut V) -> bool {
        view.clear_errors();
        let mut valid = true;
        for rule in self.calculator.rules_for(form) {
            if let Some(message) = rule.check(form.get(rule.id)) {
                view.show_error(rule.id, &message);
                valid = false;
            }
        }
        valid
    }

    pub fn begin<V: FormView<C::Display>>(
        &mut self,
        form: &FormState,
        view: &mut V,
    ) -> Begin<C::Request> {
        if self.is_submitting() {
            return Begin::Busy;
        }
        if !self.validate(form, view) {
            return Begin::Invalid;
        }
        for limit in self.calculator.soft_limits_for(form) {
            if limit.triggered(form.get(limit.id)) && !view.confirm(limit.prompt) {
                log::info!("submission cancelled at prompt for {}", limit.id);
                return Begin::Cancelled;
            }
        }
        let request = match self.calculator.build_request(form) {
            Some(request) => request,
            None => return Begin::Invalid,
        };

        self.state = SubmitState::Submitting;
        view.set_submit_control(SubmitControl {
            disabled: true,
            label: BUSY_LABEL,
        });
        Begin::Ready(request)
    }

    /// Settle a submission. Returns to idle whatever the result.
    pub fn finish<V: FormView<C::Display>>(
        &mut self,
        result: Result<C::Response>,
        view: &mut V,
    ) -> SubmitOutcome {
        self.state = SubmitState::Idle;
        view.set_submit_control(SubmitControl {
            disabled: false,
            label: self.calculator.idle_label(),
        });

        match result {
            Ok(response) => {
                let display = self.calculator.render(&response);
                view.show_results(&display);
                SubmitOutcome::Rendered
            }
            Err(e) => {
                log::error!("calculation failed: {}", e);
                let message = e.to_string();
                view.alert(&format!("Calculation failed: {}", message));
                SubmitOutcome::Failed(message)
            }
        }
    }

    /// Validate, send and settle in one go.
    pub async fn submit<V, B>(&mut self, form: &FormState, view: &mut V, backend: &B) -> SubmitOutcome
    where
        V: FormView<C::Display>,
        B: Backend,
    {
        let request = match self.begin(form, view) {
            Begin::Ready(request) => request,
            Begin::Busy => return SubmitOutcome::Busy,
            Begin::Invalid => return SubmitOutcome::Invalid,
            Begin::Cancelled => return SubmitOutcome::Cancelled,
        };
        let result = self.calculator.send(backend, &request).await;
        self.finish(result, view)
    }

    /// Re-check one field after it loses focus; other fields are untouched.
    pub fn validate_field<V: FormView<C::Display>>(&self, field_id: &str, value: &str, view: &mut V) {
        view.clear_field_error(field_id);
        let rule = self
            .calculator
            .field_rules()
            .iter()
            .find(|rule| rule.id == field_id);
        if let Some(message) = rule.and_then(|rule| rule.check(value)) {
            view.show_error(field_id, &message);
        }
    }

    /// Form reset: clear errors and hide the results panel.
    pub fn reset<V: FormView<C::Display>>(&mut self, view: &mut V) {
        view.clear_errors();
        view.hide_results();
    }
}
