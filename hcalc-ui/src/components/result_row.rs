//! One labelled value in a results panel.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ResultRowProps {
    pub label: String,
    pub value: String,
    #[props(default = String::new())]
    pub unit: String,
    /// Larger type for the headline values
    #[props(default = false)]
    pub primary: bool,
}

#[component]
pub fn ResultRow(props: ResultRowProps) -> Element {
    let size = if props.primary { "20px" } else { "14px" };

    rsx! {
        div {
            class: "result-item",
            style: "display: flex; justify-content: space-between; padding: 4px 0; border-bottom: 1px solid #f0f0f0;",
            span { class: "result-label", style: "color: #555;", "{props.label}" }
            span {
                class: "result-value",
                style: "font-weight: bold; font-size: {size};",
                "{props.value}"
                if !props.unit.is_empty() {
                    span { style: "font-weight: normal; font-size: 12px; color: #666;", " {props.unit}" }
                }
            }
        }
    }
}
