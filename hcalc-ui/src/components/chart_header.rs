//! Title block above a chart.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    /// Axis units, e.g. "Discharge (m³/s) by method"
    #[props(default = String::new())]
    pub description: String,
    /// Flags series that are demo stand-ins
    #[props(default = false)]
    pub demo: bool,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        header {
            style: "display: flex; align-items: baseline; gap: 8px; flex-wrap: wrap; margin-bottom: 6px;",
            h3 { style: "margin: 0; font-size: 16px; color: #1f2937;", "{props.title}" }
            if props.demo {
                span {
                    class: "badge badge-demo",
                    style: "font-size: 11px; color: #b45309; background: #fffbeb; border: 1px solid #fcd34d; border-radius: 10px; padding: 0 6px;",
                    "demo data"
                }
            }
            if !props.description.is_empty() {
                span { style: "flex-basis: 100%; font-size: 12px; color: #6b7280;", "{props.description}" }
            }
        }
    }
}
