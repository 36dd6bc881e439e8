//! Uruguayan IDF curve rainfall intensity calculator
//!
//! Mounts on `#idf-root`. Which IDF endpoint the form posts to comes from
//! `data-idf-endpoint` on the mount element (`legacy` or `calculators`).
//! Reference P3,10 values per station are offered as one-click suggestions.

use dioxus::prelude::*;
use hcalc_core::api::Backend;
use hcalc_core::calculators::{IdfCalculator, CUSTOM_RETURN_PERIOD, IDF_FORM_ID};
use hcalc_core::controller::{Calculator, FormController};
use hcalc_core::form::FormState;
use hcalc_core::results::IdfDisplay;
use hcalc_ui::components::{FieldInput, ResultRow, SubmitButton, WarningsList};
use hcalc_ui::page;
use hcalc_ui::state::{submit, use_form_signals, AppState, FormSignals};

const ROOT_ID: &str = "idf-root";

/// Return periods offered as radio buttons, in years.
const RETURN_PERIODS: [&str; 6] = ["2", "5", "10", "25", "50", "100"];

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_ID))
        .launch(App);
}

fn initial_form() -> FormState {
    FormState::new().with("Tr", "10").with("d", "1")
}

#[component]
fn App() -> Element {
    let state = use_context_provider(|| AppState::new(page::client_config(ROOT_ID)));
    let calculator = {
        let config = state.config.peek();
        IdfCalculator::new(config.idf_endpoint, config.locale)
    };
    let mut controller = use_signal(|| FormController::new(calculator));
    let mut fields = use_form_signals::<IdfDisplay>(calculator.idle_label(), initial_form);

    let errors = fields.errors.read().clone();
    let control = *fields.control.read();
    let results = fields.results.read().clone();
    let custom = fields.value("Tr") == CUSTOM_RETURN_PERIOD;

    let validate = move |field_id: &'static str| {
        move |value: String| {
            let mut view = fields;
            controller.read().validate_field(field_id, &value, &mut view);
        }
    };

    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            form {
                id: IDF_FORM_ID,
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    submit(controller, fields, state.client());
                },
                onreset: move |_| {
                    let mut view = fields;
                    fields.values.set(initial_form());
                    controller.write().reset(&mut view);
                },

                FieldInput {
                    id: "P3_10",
                    label: "P3,10 (3-hour, 10-year rainfall)",
                    unit: "mm",
                    value: fields.value("P3_10"),
                    errors: errors.clone(),
                    placeholder: "50 - 100",
                    oninput: move |v| fields.set_value("P3_10", v),
                    onblur: validate("P3_10"),
                }
                StationSuggestions { fields }

                ReturnPeriodPicker { fields, custom }
                if custom {
                    FieldInput {
                        id: "Tr-custom",
                        label: "Custom return period",
                        unit: "years",
                        value: fields.value("Tr-custom"),
                        errors: errors.clone(),
                        oninput: move |v| fields.set_value("Tr-custom", v),
                        onblur: validate("Tr-custom"),
                    }
                }

                FieldInput {
                    id: "d",
                    label: "Duration d",
                    unit: "h",
                    value: fields.value("d"),
                    errors: errors.clone(),
                    oninput: move |v| fields.set_value("d", v),
                    onblur: validate("d"),
                }
                FieldInput {
                    id: "Ac",
                    label: "Catchment area Ac",
                    unit: "km²",
                    value: fields.value("Ac"),
                    errors: errors.clone(),
                    placeholder: "Optional",
                    help: "Leave empty for a point intensity.",
                    oninput: move |v| fields.set_value("Ac", v),
                    onblur: validate("Ac"),
                }

                SubmitButton { control }
            }

            if let Some(display) = results {
                IdfResults { display }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct FieldsProps {
    fields: FormSignals<IdfDisplay>,
}

/// Reference P3,10 per station; picking one fills the input.
#[component]
fn StationSuggestions(props: FieldsProps) -> Element {
    let state = use_context::<AppState>();
    let mut fields = props.fields;
    let mut stations: Signal<Vec<(String, f64)>> = use_signal(Vec::new);

    use_effect(move || {
        let client = state.client();
        spawn(async move {
            match client.p3_10_values().await {
                Ok(values) => stations.set(values.into_iter().collect()),
                Err(e) => log::warn!("[HidroCalc] no P3,10 reference values: {}", e),
            }
        });
    });

    if stations.read().is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 6px; margin: -4px 0 12px 0; font-size: 12px;",
            span { style: "color: #666;", "Reference values:" }
            for (station, value) in stations.read().iter().cloned() {
                button {
                    r#type: "button",
                    class: "btn btn-chip",
                    style: "padding: 2px 8px; border: 1px solid #ddd; border-radius: 12px; background: white;",
                    onclick: move |_| fields.set_value("P3_10", value.to_string()),
                    "{station}: {value} mm"
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ReturnPeriodProps {
    fields: FormSignals<IdfDisplay>,
    custom: bool,
}

#[component]
fn ReturnPeriodPicker(props: ReturnPeriodProps) -> Element {
    let mut fields = props.fields;
    let selected = fields.value("Tr");

    let mut choose = move |value: String| {
        if value != CUSTOM_RETURN_PERIOD {
            fields.set_value("Tr-custom", String::new());
        }
        fields.set_value("Tr", value);
    };

    rsx! {
        fieldset {
            style: "border: none; padding: 0; margin: 0 0 12px 0;",
            legend { style: "font-weight: bold; margin-bottom: 4px;", "Return period Tr (years)" }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 12px;",
                for period in RETURN_PERIODS {
                    label {
                        input {
                            r#type: "radio",
                            name: "Tr",
                            value: period,
                            checked: selected == period,
                            onchange: move |_| choose(period.to_string()),
                        }
                        " {period}"
                    }
                }
                label {
                    input {
                        r#type: "radio",
                        name: "Tr",
                        value: CUSTOM_RETURN_PERIOD,
                        checked: props.custom,
                        onchange: move |_| choose(CUSTOM_RETURN_PERIOD.to_string()),
                    }
                    " Other"
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct IdfResultsProps {
    display: IdfDisplay,
}

#[component]
fn IdfResults(props: IdfResultsProps) -> Element {
    let d = props.display;

    rsx! {
        div {
            id: "results",
            class: "results-card",
            style: "margin-top: 16px; padding: 12px 16px; border: 1px solid #e5e7eb; border-radius: 4px;",
            h3 { style: "margin-top: 0;", "Design rainfall" }
            ResultRow { label: "Intensity I", value: d.i_mmh, unit: "mm/h", primary: true }
            ResultRow { label: "Depth P", value: d.p_mm, unit: "mm", primary: true }

            h4 { "Correction factors" }
            ResultRow { label: "CT (return period)", value: d.ct }
            ResultRow { label: "CD (duration)", value: d.cd }
            ResultRow { label: "CA (area)", value: d.ca }

            h4 { "Input data" }
            ResultRow { label: "P3,10", value: d.p3_10, unit: "mm" }
            ResultRow { label: "Tr", value: d.tr, unit: "years" }
            ResultRow { label: "d", value: d.d_hours, unit: "h" }
            ResultRow { label: "Ac", value: d.ac }

            WarningsList { warnings: d.warnings.unwrap_or_default() }
        }
    }
}
