//! Page-level error banner.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Shows a close button when set
    #[props(default)]
    pub on_dismiss: Option<EventHandler<()>>,
}

#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let on_dismiss = props.on_dismiss;

    rsx! {
        div {
            class: "alert alert-error",
            role: "alert",
            style: "display: flex; justify-content: space-between; align-items: flex-start; padding: 10px 14px; margin: 8px 0; background: #fef2f2; color: #b91c1c; border-left: 4px solid #ef4444; border-radius: 4px;",
            span { "{props.message}" }
            if let Some(handler) = on_dismiss {
                button {
                    r#type: "button",
                    "aria-label": "Close",
                    style: "border: none; background: none; color: inherit; cursor: pointer; font-size: 16px;",
                    onclick: move |_| handler.call(()),
                    "×"
                }
            }
        }
    }
}
