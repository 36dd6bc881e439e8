//! Single-card variant: C, I and A straight to `/api/calculate-rational`.

use dioxus::prelude::*;
use hcalc_core::calculators::{QuickRationalCalculator, QUICK_RATIONAL_FORM_ID};
use hcalc_core::controller::{Calculator, FormController};
use hcalc_core::form::FormState;
use hcalc_core::results::QuickRationalDisplay;
use hcalc_ui::components::{FieldInput, ResultRow, SubmitButton};
use hcalc_ui::state::{submit, use_form_signals, AppState};

#[component]
pub fn QuickRationalForm() -> Element {
    let state = use_context::<AppState>();
    let calculator = QuickRationalCalculator::new(state.config.peek().locale);
    let controller = use_signal(|| FormController::new(calculator));
    let mut fields =
        use_form_signals::<QuickRationalDisplay>(calculator.idle_label(), FormState::new);

    let errors = fields.errors.read().clone();
    let control = *fields.control.read();
    let results = fields.results.read().clone();

    rsx! {
        form {
            id: QUICK_RATIONAL_FORM_ID,
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                submit(controller, fields, state.client());
            },

            FieldInput {
                id: "C",
                label: "Runoff coefficient C",
                value: fields.value("C"),
                errors: errors.clone(),
                placeholder: "0.0 - 1.0",
                oninput: move |v| fields.set_value("C", v),
            }
            FieldInput {
                id: "I",
                label: "Intensity I",
                unit: "mm/h",
                value: fields.value("I"),
                errors: errors.clone(),
                oninput: move |v| fields.set_value("I", v),
            }
            FieldInput {
                id: "A",
                label: "Area A",
                unit: "ha",
                value: fields.value("A"),
                errors: errors.clone(),
                oninput: move |v| fields.set_value("A", v),
            }

            SubmitButton { control, with_reset: false }
        }

        if let Some(display) = results {
            div {
                id: "results",
                class: "results-card",
                style: "margin-top: 16px; padding: 12px 16px; border: 1px solid #e5e7eb; border-radius: 4px;",
                ResultRow { label: "Q", value: display.q_ls, unit: "L/s", primary: true }
                ResultRow { label: "Q", value: display.q_m3s, unit: "m³/s", primary: true }
                ResultRow { label: "C", value: display.input_c }
                ResultRow { label: "I", value: display.input_i, unit: "mm/h" }
                ResultRow { label: "A", value: display.input_a, unit: "ha" }
            }
        }
    }
}
