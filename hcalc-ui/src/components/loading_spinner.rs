//! Inline busy indicator.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = "Loading...".to_string())]
    pub label: String,
}

#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            class: "loading",
            role: "status",
            style: "display: flex; align-items: center; justify-content: center; gap: 8px; padding: 32px; color: #6b7280;",
            span {
                class: "spinner",
                style: "width: 14px; height: 14px; border: 2px solid #d1d5db; border-top-color: #2563eb; border-radius: 50%;",
            }
            "{props.label}"
        }
    }
}
