//! Labelled form input with its inline error node.

use dioxus::prelude::*;
use hcalc_core::presenter::{error_node_id, FieldErrors};

#[derive(Props, Clone, PartialEq)]
pub struct FieldInputProps {
    /// Field id; also names the `error-<id>` node
    pub id: String,
    pub label: String,
    pub value: String,
    /// Errors of the whole form; this field picks its own
    pub errors: FieldErrors,
    pub oninput: EventHandler<String>,
    /// Called with the current value when the input loses focus
    #[props(default)]
    pub onblur: Option<EventHandler<String>>,
    #[props(default = "number".to_string())]
    pub input_type: String,
    #[props(default = String::new())]
    pub placeholder: String,
    /// Unit shown after the label, e.g. "mm/h"
    #[props(default = String::new())]
    pub unit: String,
    #[props(default = String::new())]
    pub help: String,
}

#[component]
pub fn FieldInput(props: FieldInputProps) -> Element {
    let id = props.id.clone();
    let error_id = error_node_id(&id);
    let input_class = props.errors.input_class(&id);
    let error_class = props.errors.error_class(&id);
    let message = props.errors.message(&id).unwrap_or_default().to_string();
    let blur_value = props.value.clone();
    let oninput = props.oninput;
    let onblur = props.onblur;

    rsx! {
        div {
            class: "form-group",
            style: "margin-bottom: 12px;",
            label {
                r#for: "{id}",
                class: "form-label",
                style: "display: block; font-weight: bold; margin-bottom: 4px;",
                "{props.label}"
                if !props.unit.is_empty() {
                    span { style: "font-weight: normal; color: #666;", " ({props.unit})" }
                }
            }
            input {
                id: "{id}",
                name: "{id}",
                r#type: "{props.input_type}",
                step: "any",
                class: "{input_class}",
                value: "{props.value}",
                placeholder: "{props.placeholder}",
                oninput: move |evt: Event<FormData>| oninput.call(evt.value()),
                onblur: move |_| {
                    if let Some(handler) = onblur {
                        handler.call(blur_value.clone());
                    }
                },
            }
            if !props.help.is_empty() {
                small { style: "display: block; color: #888; font-size: 11px;", "{props.help}" }
            }
            div {
                id: "{error_id}",
                class: "{error_class}",
                "{message}"
            }
        }
    }
}
