//! Toasts raised by the project browser.

use crate::state::AppState;
use dioxus::prelude::*;
use hcalc_core::browser::NotificationKind;

fn background(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "#4caf50",
        NotificationKind::Error => "#f44336",
        NotificationKind::Info => "#2196f3",
    }
}

/// Fixed stack in the top-right corner; click a toast to dismiss it.
#[component]
pub fn Notifications() -> Element {
    let mut state = use_context::<AppState>();
    let shown: Vec<(String, &'static str, &'static str)> = state
        .notifications
        .read()
        .iter()
        .map(|n| (n.message.clone(), n.kind.class(), background(n.kind)))
        .collect();

    rsx! {
        div {
            style: "position: fixed; top: 20px; right: 20px; z-index: 10000; display: flex; flex-direction: column; gap: 8px;",
            for (index, (message, class, color)) in shown.into_iter().enumerate() {
                div {
                    class: "{class}",
                    style: "padding: 15px 20px; border-radius: 5px; color: white; font-weight: 500; box-shadow: 0 2px 5px rgba(0,0,0,0.2); cursor: pointer; background: {color};",
                    onclick: move |_| {
                        let mut list = state.notifications.write();
                        if index < list.len() {
                            list.remove(index);
                        }
                    },
                    "{message}"
                }
            }
        }
    }
}
