//! Advisory warnings returned by the backend.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct WarningsListProps {
    pub warnings: Vec<String>,
}

/// Renders nothing for an empty list.
#[component]
pub fn WarningsList(props: WarningsListProps) -> Element {
    if props.warnings.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "warnings",
            style: "padding: 8px 12px; margin: 8px 0; background: #FFF8E1; border: 1px solid #FFE082; border-radius: 4px;",
            strong { "Warnings" }
            ul {
                style: "margin: 4px 0 0 0; padding-left: 20px;",
                for warning in props.warnings.iter() {
                    li { "{warning}" }
                }
            }
        }
    }
}
