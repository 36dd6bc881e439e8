//! Application state managed via Dioxus context, and the signal-backed
//! views the core controllers render into.
//!
//! `AppState` bundles the app-wide signals and is provided via
//! `use_context_provider`. `FormSignals` and `BrowserSignals` implement the
//! core `FormView` / `BrowserView` traits by writing to signals, so a
//! controller call re-renders exactly the parts of the page it touched.

use crate::page;
use dioxus::prelude::*;
use hcalc_core::browser::{BrowserView, Notification, SelectOption, WatershedInfo};
use hcalc_core::controller::{Begin, Calculator, FormController};
use hcalc_core::form::FormState;
use hcalc_core::presenter::{FieldErrors, FormView, SubmitControl};
use hcalc_core::{ClientConfig, HttpClient};

/// Notifications kept on screen at once.
const MAX_NOTIFICATIONS: usize = 3;

/// Shared application state for all HidroCalc apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Backend, locale and IDF endpoint read from the page
    pub config: Signal<ClientConfig>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Toasts from the project browser
    pub notifications: Signal<Vec<Notification>>,
}

impl AppState {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config: Signal::new(config),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            notifications: Signal::new(Vec::new()),
        }
    }

    /// HTTP client for the configured backend.
    pub fn client(&self) -> HttpClient {
        HttpClient::from_config(&self.config.peek())
    }
}

/// Signals behind one calculator form.
pub struct FormSignals<D: 'static> {
    /// Raw input values keyed by field id
    pub values: Signal<FormState>,
    pub errors: Signal<FieldErrors>,
    pub control: Signal<SubmitControl>,
    /// Rendered results; `None` keeps the panel hidden
    pub results: Signal<Option<D>>,
}

impl<D: 'static> Clone for FormSignals<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: 'static> Copy for FormSignals<D> {}

impl<D: 'static> PartialEq for FormSignals<D> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
            && self.errors == other.errors
            && self.control == other.control
            && self.results == other.results
    }
}

impl<D: 'static> FormSignals<D> {
    pub fn new(idle_label: &'static str, initial: FormState) -> Self {
        Self {
            values: Signal::new(initial),
            errors: Signal::new(FieldErrors::new()),
            control: Signal::new(SubmitControl {
                disabled: false,
                label: idle_label,
            }),
            results: Signal::new(None),
        }
    }

    pub fn value(&self, field_id: &str) -> String {
        self.values.read().get(field_id).to_string()
    }

    pub fn set_value(&mut self, field_id: &str, value: String) {
        self.values.write().set(field_id, value);
    }
}

/// Create a form's signals once per component.
pub fn use_form_signals<D: 'static>(
    idle_label: &'static str,
    initial: impl FnOnce() -> FormState,
) -> FormSignals<D> {
    use_hook(|| FormSignals::new(idle_label, initial()))
}

impl<D: Clone + 'static> FormView<D> for FormSignals<D> {
    fn show_error(&mut self, field_id: &str, message: &str) {
        self.errors.write().show_error(field_id, message);
    }

    fn clear_field_error(&mut self, field_id: &str) {
        self.errors.write().clear_field(field_id);
    }

    fn clear_errors(&mut self) {
        self.errors.write().clear_errors();
    }

    fn set_submit_control(&mut self, control: SubmitControl) {
        self.control.set(control);
    }

    fn show_results(&mut self, display: &D) {
        self.results.set(Some(display.clone()));
    }

    fn hide_results(&mut self) {
        self.results.set(None);
    }

    fn alert(&mut self, message: &str) {
        page::alert(message);
    }

    fn confirm(&mut self, message: &str) -> bool {
        page::confirm(message)
    }
}

/// Run one submission of `controller`'s form.
///
/// Validation and the busy transition happen synchronously; the request
/// runs in a spawned task that settles the controller when it completes.
pub fn submit<C>(
    mut controller: Signal<FormController<C>>,
    mut view: FormSignals<C::Display>,
    client: HttpClient,
) where
    C: Calculator + 'static,
    C::Request: 'static,
    C::Response: 'static,
    C::Display: 'static,
{
    let form = view.values.peek().clone();
    let request = match controller.write().begin(&form, &mut view) {
        Begin::Ready(request) => request,
        Begin::Busy => {
            log::info!("[HidroCalc] submission already in flight");
            return;
        }
        Begin::Invalid | Begin::Cancelled => return,
    };
    let calculator = controller.peek().calculator().clone();
    spawn(async move {
        let result = calculator.send(&client, &request).await;
        controller.write().finish(result, &mut view);
    });
}

/// Signals behind the project / watershed pickers.
#[derive(Clone, Copy)]
pub struct BrowserSignals {
    pub project_options: Signal<Vec<SelectOption>>,
    pub watershed_options: Signal<Vec<SelectOption>>,
    pub watershed_enabled: Signal<bool>,
    pub watershed_info: Signal<Option<WatershedInfo>>,
    pub notifications: Signal<Vec<Notification>>,
    /// Values of the calculator form that selections prefill
    pub form: Signal<FormState>,
}

impl BrowserSignals {
    pub fn new(form: Signal<FormState>, notifications: Signal<Vec<Notification>>) -> Self {
        Self {
            project_options: Signal::new(Vec::new()),
            watershed_options: Signal::new(Vec::new()),
            watershed_enabled: Signal::new(false),
            watershed_info: Signal::new(None),
            notifications,
            form,
        }
    }
}

impl BrowserView for BrowserSignals {
    fn set_project_options(&mut self, options: Vec<SelectOption>) {
        self.project_options.set(options);
    }

    fn set_watershed_options(&mut self, options: Vec<SelectOption>, enabled: bool) {
        self.watershed_options.set(options);
        self.watershed_enabled.set(enabled);
    }

    fn show_watershed_info(&mut self, info: &WatershedInfo) {
        self.watershed_info.set(Some(info.clone()));
    }

    fn clear_watershed_info(&mut self) {
        self.watershed_info.set(None);
    }

    fn prefill(&mut self, field_id: &str, value: &str) {
        self.form.write().set(field_id, value);
    }

    fn notify(&mut self, notification: Notification) {
        let mut shown = self.notifications.write();
        shown.push(notification);
        let excess = shown.len().saturating_sub(MAX_NOTIFICATIONS);
        shown.drain(..excess);
    }

    fn alert(&mut self, message: &str) {
        page::alert(message);
    }
}
