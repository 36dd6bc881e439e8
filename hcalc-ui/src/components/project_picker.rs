//! Project and watershed selects that prefill the calculator form.
//!
//! Needs `AppState` and `BrowserSignals` in context. The browser itself is
//! kept in a local signal; async steps run on a copy that replaces it when
//! they finish, so the last selection wins.

use crate::state::{AppState, BrowserSignals};
use dioxus::prelude::*;
use hcalc_core::browser::{ProjectBrowser, SelectOption};

#[derive(Props, Clone, PartialEq)]
struct SelectProps {
    id: String,
    label: String,
    options: Vec<SelectOption>,
    #[props(default = false)]
    disabled: bool,
    onchange: EventHandler<String>,
}

fn option_parts(option: &SelectOption) -> (String, String, &'static str) {
    let weight = if option.emphasized { "bold" } else { "normal" };
    (option.value.clone(), option.label.clone(), weight)
}

#[component]
fn OptionSelect(props: SelectProps) -> Element {
    let onchange = props.onchange;

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "{props.id}",
                style: "font-weight: bold; margin-right: 8px;",
                "{props.label}"
            }
            select {
                id: "{props.id}",
                disabled: props.disabled,
                onchange: move |evt: Event<FormData>| onchange.call(evt.value()),
                for (value, label, weight) in props.options.iter().map(option_parts) {
                    option {
                        value: "{value}",
                        style: "font-weight: {weight};",
                        "{label}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProjectPicker() -> Element {
    let state = use_context::<AppState>();
    let signals = use_context::<BrowserSignals>();
    let mut browser = use_signal(ProjectBrowser::new);

    // Load projects once on mount
    use_effect(move || {
        let client = state.client();
        spawn(async move {
            let mut view = signals;
            let mut current = browser.peek().clone();
            current.load_projects(&client, &mut view).await;
            browser.set(current);
        });
    });

    let on_project = move |value: String| {
        let client = state.client();
        spawn(async move {
            let mut view = signals;
            let mut current = browser.peek().clone();
            current.select_project(&value, &client, &mut view).await;
            browser.set(current);
        });
    };

    let on_watershed = move |value: String| {
        let mut view = signals;
        browser.write().select_watershed(&value, &mut view);
    };

    let info = signals.watershed_info.read().clone();
    let watershed_disabled = !(signals.watershed_enabled)();

    rsx! {
        div {
            class: "project-picker",
            style: "padding: 8px 12px; margin-bottom: 12px; background: #f9fafb; border: 1px solid #e5e7eb; border-radius: 4px;",
            OptionSelect {
                id: "projectSelect".to_string(),
                label: "Project: ".to_string(),
                options: signals.project_options.read().clone(),
                onchange: on_project,
            }
            OptionSelect {
                id: "watershedSelect".to_string(),
                label: "Watershed: ".to_string(),
                options: signals.watershed_options.read().clone(),
                disabled: watershed_disabled,
                onchange: on_watershed,
            }
            if let Some(info) = info {
                div {
                    id: "watershedInfo",
                    class: "info-box",
                    h4 { style: "margin: 8px 0 4px 0;", "Watershed information" }
                    div {
                        class: "info-grid",
                        for row in info.rows.iter() {
                            div {
                                class: "info-item",
                                span { class: "info-label", style: "color: #555;", "{row.label}: " }
                                span { class: "info-value", style: "font-weight: bold;", "{row.value}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
