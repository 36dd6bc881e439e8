//! Hyetograph and hydrograph comparison charts
//!
//! Mounts on `#dashboard-root`. The server template may define
//! `window.hyetographData` (`{time_steps, intensity, title?}`),
//! `window.hydrographsData` (`[{name, time_steps, discharge}]`) and
//! `window.hydrographsTitle`; whatever is missing is replaced by demo
//! series so the page never renders empty.
//!
//! With `data-design-storm="<id>"` on the mount element each hydrograph
//! gets a button that stores it under that design storm.

use dioxus::prelude::*;
use hcalc_core::browser::ProjectBrowser;
use hcalc_core::charts::{
    hydrograph_comparison, hydrographs_or_sample, hyetograph, storm_or_sample, HydrographSeries,
    HyetographData, COMPARISON_TITLE, HYETOGRAPH_TITLE,
};
use hcalc_core::models::{DesignStormId, NewHydrograph};
use hcalc_ui::components::{ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, Notifications};
use hcalc_ui::js_bridge;
use hcalc_ui::page;
use hcalc_ui::state::{AppState, BrowserSignals};

const ROOT_ID: &str = "dashboard-root";

/// DOM ids for the Plotly chart container divs.
const HYETOGRAPH_ID: &str = "hyetograph-chart";
const HYDROGRAPHS_ID: &str = "hydrographs-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_ID))
        .launch(App);
}

/// Everything the charts need, resolved once on mount.
#[derive(Clone, PartialEq, Default)]
struct DashboardData {
    storm: HyetographData,
    hydrographs: Vec<HydrographSeries>,
    comparison_title: Option<String>,
    /// The hyetograph is the demo storm
    storm_sample: bool,
    /// The hydrographs are the demo set
    hydrographs_sample: bool,
}

impl DashboardData {
    fn storm_empty(&self) -> bool {
        self.storm.time_steps.is_empty()
    }

    /// True when no series has a single point to draw.
    fn hydrographs_empty(&self) -> bool {
        self.hydrographs.iter().all(|s| s.time_steps.is_empty())
    }
}

fn load_page_data() -> DashboardData {
    let (storm, storm_sample) = storm_or_sample(page::window_json("hyetographData"));
    let (hydrographs, hydrographs_sample) =
        hydrographs_or_sample(page::window_json("hydrographsData"));

    DashboardData {
        storm,
        hydrographs,
        comparison_title: page::window_json::<String>("hydrographsTitle"),
        storm_sample,
        hydrographs_sample,
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(|| AppState::new(page::client_config(ROOT_ID)));
    let mut data: Signal<DashboardData> = use_signal(DashboardData::default);

    // ─── Effect 1: read page globals once on mount ───
    use_effect(move || {
        let loaded = load_page_data();
        if loaded.storm_sample {
            log::info!("[HidroCalc] showing the demo hyetograph");
        }
        if loaded.hydrographs_sample {
            log::info!("[HidroCalc] showing demo hydrographs");
        }
        data.set(loaded);
        state.loading.set(false);
    });

    // ─── Effect 2: render both charts whenever the data changes ───
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        let current = data.read().clone();
        if current.storm_empty() && current.hydrographs_empty() {
            state
                .error_msg
                .set(Some("No rainfall or discharge data to chart.".to_string()));
            js_bridge::destroy_chart(HYETOGRAPH_ID);
            js_bridge::destroy_chart(HYDROGRAPHS_ID);
            return;
        }
        if state.error_msg.peek().is_some() {
            state.error_msg.set(None);
        }

        if current.storm_empty() {
            js_bridge::destroy_chart(HYETOGRAPH_ID);
        } else {
            let storm_spec = hyetograph(
                &current.storm.time_steps,
                &current.storm.intensity,
                current.storm.title.as_deref(),
            );
            js_bridge::render_chart(HYETOGRAPH_ID, &storm_spec);
        }

        if current.hydrographs_empty() {
            js_bridge::destroy_chart(HYDROGRAPHS_ID);
        } else {
            let comparison_spec =
                hydrograph_comparison(&current.hydrographs, current.comparison_title.as_deref());
            js_bridge::render_chart(HYDROGRAPHS_ID, &comparison_spec);
        }
    });

    let design_storm: Option<DesignStormId> = use_hook(|| {
        let mut browser = ProjectBrowser::new();
        browser.select_design_storm(
            &page::attribute(ROOT_ID, "data-design-storm").unwrap_or_default(),
        );
        browser.selection().design_storm
    });
    let current = data.read().clone();
    let error = state.error_msg.read().clone();

    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            Notifications {}

            if let Some(message) = error {
                ErrorDisplay {
                    message,
                    on_dismiss: move |_| state.error_msg.set(None),
                }
            }

            if *state.loading.read() {
                LoadingSpinner { label: "Loading charts..." }
            } else {
                ChartHeader {
                    title: current.storm.title.clone().unwrap_or_else(|| HYETOGRAPH_TITLE.to_string()),
                    description: "Rainfall intensity (mm/h) per time step",
                    demo: current.storm_sample,
                }
                ChartContainer {
                    id: HYETOGRAPH_ID.to_string(),
                    empty: current.storm_empty(),
                    min_height: 400,
                }

                ChartHeader {
                    title: current.comparison_title.clone().unwrap_or_else(|| COMPARISON_TITLE.to_string()),
                    description: "Discharge (m³/s) by method",
                    demo: current.hydrographs_sample,
                }
                ChartContainer {
                    id: HYDROGRAPHS_ID.to_string(),
                    empty: current.hydrographs_empty(),
                    min_height: 450,
                }

                if let Some(design_storm_id) = design_storm {
                    SaveHydrographs { design_storm_id, hydrographs: current.hydrographs.clone() }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SaveHydrographsProps {
    design_storm_id: DesignStormId,
    hydrographs: Vec<HydrographSeries>,
}

/// One save button per series.
#[component]
fn SaveHydrographs(props: SaveHydrographsProps) -> Element {
    let state = use_context::<AppState>();
    let form = use_signal(Default::default);
    let signals = use_hook(|| BrowserSignals::new(form, state.notifications));
    let design_storm_id = props.design_storm_id;

    rsx! {
        div {
            style: "margin-top: 12px; padding-top: 8px; border-top: 1px solid #e0e0e0; display: flex; gap: 8px; flex-wrap: wrap;",
            for (label, series) in props.hydrographs.iter().map(|s| (s.name.clone(), s.clone())) {
                button {
                    r#type: "button",
                    class: "btn btn-secondary",
                    onclick: move |_| {
                        let client = state.client();
                        let hydrograph = NewHydrograph {
                            name: Some(series.name.clone()),
                            ..NewHydrograph::from_series(&series.name, &series.time_steps, &series.discharge)
                        };
                        spawn(async move {
                            let mut view = signals;
                            let saved = ProjectBrowser::new()
                                .save_hydrograph(design_storm_id, &hydrograph, &client, &mut view)
                                .await;
                            if let Err(e) = saved {
                                log::warn!("[HidroCalc] hydrograph not saved: {}", e);
                            }
                        });
                    },
                    "Save {label}"
                }
            }
        }
    }
}
