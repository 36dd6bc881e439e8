//! Mount point for one Plotly chart.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id Plotly draws into; `js_bridge::render_chart` targets it
    pub id: String,
    #[props(default = false)]
    pub loading: bool,
    /// Shown instead of the chart when the series is empty
    #[props(default = false)]
    pub empty: bool,
    #[props(default = 400)]
    pub min_height: u32,
}

#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let frame = format!(
        "position: relative; width: 100%; min-height: {}px; border: 1px solid #e5e7eb; border-radius: 4px; margin-bottom: 16px;",
        props.min_height
    );
    let overlay = if props.loading {
        Some("Rendering chart...")
    } else if props.empty {
        Some("No data for this chart.")
    } else {
        None
    };

    rsx! {
        div {
            class: "chart-container",
            style: "{frame}",
            if let Some(text) = overlay {
                div {
                    style: "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; color: #888; font-size: 13px;",
                    "{text}"
                }
            }
            div { id: "{props.id}", style: "width: 100%; height: {props.min_height}px;" }
        }
    }
}
