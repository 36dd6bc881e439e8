//! Submit button driven by the controller's `SubmitControl`.

use dioxus::prelude::*;
use hcalc_core::presenter::SubmitControl;

#[derive(Props, Clone, PartialEq)]
pub struct SubmitButtonProps {
    pub control: SubmitControl,
    /// Also render a reset button next to it
    #[props(default = true)]
    pub with_reset: bool,
}

#[component]
pub fn SubmitButton(props: SubmitButtonProps) -> Element {
    let opacity = if props.control.disabled { "0.6" } else { "1" };

    rsx! {
        div {
            style: "display: flex; gap: 8px; margin-top: 12px;",
            button {
                r#type: "submit",
                class: "btn btn-primary",
                disabled: props.control.disabled,
                style: "padding: 8px 16px; background: #2563eb; color: white; border: none; border-radius: 4px; opacity: {opacity};",
                "{props.control.label}"
            }
            if props.with_reset {
                button {
                    r#type: "reset",
                    class: "btn btn-secondary",
                    style: "padding: 8px 16px; border: 1px solid #ccc; border-radius: 4px; background: white;",
                    "Clear"
                }
            }
        }
    }
}
