//! Runoff coefficient reference table, loaded the first time it is opened.

use crate::state::AppState;
use dioxus::prelude::*;
use hcalc_core::calculators::load_coefficients;
use hcalc_core::results::CoefficientRow;

#[derive(Props, Clone, PartialEq)]
pub struct CoefficientTableProps {
    /// Called with the typical value when a row is picked
    #[props(default)]
    pub on_pick: Option<EventHandler<String>>,
}

#[component]
pub fn CoefficientTable(props: CoefficientTableProps) -> Element {
    let state = use_context::<AppState>();
    let mut open = use_signal(|| false);
    let mut rows: Signal<Vec<CoefficientRow>> = use_signal(Vec::new);
    let on_pick = props.on_pick;

    let toggle = move |_| {
        let opening = !open();
        open.set(opening);
        if opening && rows.peek().is_empty() {
            let client = state.client();
            spawn(async move {
                rows.set(load_coefficients(&client).await);
            });
        }
    };

    let row_style = if on_pick.is_some() { "cursor: pointer;" } else { "" };
    let label = if open() {
        "Hide coefficient table"
    } else {
        "Show typical coefficients"
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            button {
                r#type: "button",
                class: "btn btn-link",
                onclick: toggle,
                "{label}"
            }
            if open() {
                table {
                    class: "coefficients-table",
                    style: "width: 100%; border-collapse: collapse; font-size: 13px; margin-top: 6px;",
                    thead {
                        tr {
                            th { style: "text-align: left;", "Surface" }
                            th { "Min" }
                            th { "Typical" }
                            th { "Max" }
                        }
                    }
                    tbody {
                        for (row, typical) in rows.read().iter().map(|r| (r.clone(), r.typical.clone())) {
                            tr {
                                key: "{row.key}",
                                style: "{row_style}",
                                onclick: move |_| {
                                    if let Some(handler) = on_pick {
                                        handler.call(typical.clone());
                                    }
                                },
                                td { "{row.description}" }
                                td { style: "text-align: center;", "{row.min}" }
                                td { style: "text-align: center;", strong { "{row.typical}" } }
                                td { style: "text-align: center;", "{row.max}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
