//! Rational method discharge calculator
//!
//! Mounts on `#rational-root`. The full form posts to `/api/rational` and
//! can prefill its inputs from a stored watershed; `data-variant="quick"`
//! on the mount element selects the single-card form that posts to
//! `/api/calculate-rational` instead.
//!
//! Data flow:
//! 1. Inputs write into the form's `FormState` signal.
//! 2. Blur re-validates the one field; submit validates all of them.
//! 3. A valid submit disables the button and spawns the request.
//! 4. The response is rendered into display strings and shown.

mod quick;

use dioxus::prelude::*;
use hcalc_core::calculators::{RationalCalculator, RATIONAL_FORM_ID};
use hcalc_core::controller::{Calculator, FormController};
use hcalc_core::form::FormState;
use hcalc_core::results::RationalDisplay;
use hcalc_ui::components::{
    CoefficientTable, FieldInput, Notifications, ProjectPicker, ResultRow, SubmitButton,
    WarningsList,
};
use hcalc_ui::page;
use hcalc_ui::state::{submit, use_form_signals, AppState, BrowserSignals};

const ROOT_ID: &str = "rational-root";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_ID))
        .launch(App);
}

#[component]
fn App() -> Element {
    let _state = use_context_provider(|| AppState::new(page::client_config(ROOT_ID)));
    let quick = use_hook(|| page::attribute(ROOT_ID, "data-variant").as_deref() == Some("quick"));

    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",
            Notifications {}
            if quick {
                quick::QuickRationalForm {}
            } else {
                RationalForm {}
            }
        }
    }
}

#[component]
fn RationalForm() -> Element {
    let state = use_context::<AppState>();
    let calculator = RationalCalculator::new(state.config.peek().locale);
    let mut controller = use_signal(|| FormController::new(calculator));
    let mut fields = use_form_signals::<RationalDisplay>(calculator.idle_label(), FormState::new);
    use_context_provider(|| BrowserSignals::new(fields.values, state.notifications));

    let errors = fields.errors.read().clone();
    let control = *fields.control.read();
    let results = fields.results.read().clone();

    let validate = move |field_id: &'static str| {
        move |value: String| {
            let mut view = fields;
            controller.read().validate_field(field_id, &value, &mut view);
        }
    };

    rsx! {
        ProjectPicker {}

        form {
            id: RATIONAL_FORM_ID,
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                submit(controller, fields, state.client());
            },
            onreset: move |_| {
                let mut view = fields;
                fields.values.write().clear();
                controller.write().reset(&mut view);
            },

            FieldInput {
                id: "C",
                label: "Runoff coefficient C",
                value: fields.value("C"),
                errors: errors.clone(),
                placeholder: "0.0 - 1.0",
                oninput: move |v| fields.set_value("C", v),
                onblur: validate("C"),
            }
            CoefficientTable {
                on_pick: move |typical| fields.set_value("C", typical),
            }
            FieldInput {
                id: "I_mmh",
                label: "Rainfall intensity I",
                unit: "mm/h",
                value: fields.value("I_mmh"),
                errors: errors.clone(),
                oninput: move |v| fields.set_value("I_mmh", v),
                onblur: validate("I_mmh"),
            }
            FieldInput {
                id: "A_ha",
                label: "Catchment area A",
                unit: "ha",
                value: fields.value("A_ha"),
                errors: errors.clone(),
                oninput: move |v| fields.set_value("A_ha", v),
                onblur: validate("A_ha"),
            }
            FieldInput {
                id: "tc_horas",
                label: "Concentration time",
                unit: "h",
                value: fields.value("tc_horas"),
                errors: errors.clone(),
                help: "Reference only; filled from the selected watershed.",
                oninput: move |v| fields.set_value("tc_horas", v),
            }
            FieldInput {
                id: "description",
                label: "Description",
                input_type: "text",
                value: fields.value("description"),
                errors: errors.clone(),
                placeholder: "Optional",
                oninput: move |v| fields.set_value("description", v),
            }

            SubmitButton { control }
        }

        if let Some(display) = results {
            RationalResults { display }
        } else {
            div {
                id: "resultsContainer",
                style: "padding: 24px; text-align: center; color: #888;",
                "Enter the data and press Calculate to see the discharge."
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct RationalResultsProps {
    display: RationalDisplay,
}

#[component]
fn RationalResults(props: RationalResultsProps) -> Element {
    let d = props.display;

    rsx! {
        div {
            id: "resultsContent",
            class: "results-card",
            style: "margin-top: 16px; padding: 12px 16px; border: 1px solid #e5e7eb; border-radius: 4px;",
            h3 { style: "margin-top: 0;", "Peak discharge" }
            ResultRow { label: "Q", value: d.q_ls, unit: "L/s", primary: true }
            ResultRow { label: "Q", value: d.q_m3s, unit: "m³/s", primary: true }
            ResultRow { label: "Q", value: d.q_m3h, unit: "m³/h" }

            h4 { "Input data" }
            ResultRow { label: "C", value: d.input_c }
            ResultRow { label: "I", value: d.input_i }
            ResultRow { label: "A", value: d.input_a_ha }
            ResultRow { label: "A", value: d.input_a_m2, unit: "m²" }

            WarningsList { warnings: d.warnings.unwrap_or_default() }

            if let Some(description) = d.description {
                div {
                    id: "descriptionContainer",
                    style: "margin-top: 8px; color: #555;",
                    strong { "Description: " }
                    "{description}"
                }
            }
        }
    }
}
