//! Plotly chart specifications for hyetographs and hydrographs.
//!
//! Builders only describe the chart (`data`, `layout`, `config` in Plotly's
//! JSON shape); drawing is left to Plotly in the browser.

use serde::{Deserialize, Serialize};

pub const PRIMARY: &str = "#2563eb";
/// Series colors, assigned by index and cycled.
pub const PALETTE: [&str; 6] = [
    PRIMARY, "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#14b8a6",
];

pub const HYETOGRAPH_TITLE: &str = "Hyetograph - Rainfall Distribution";
pub const HYDROGRAPH_TITLE: &str = "Discharge Hydrograph";
pub const COMPARISON_TITLE: &str = "Hydrograph Comparison";

/// Most intervals a demo series may be split into.
pub const MAX_SAMPLE_STEPS: usize = 10_000;

const TIME_AXIS: &str = "Time (minutes)";
const DISCHARGE_AXIS: &str = "Discharge (m³/s)";
const GRID: &str = "#e5e7eb";

/// Color for the series at `index`.
pub fn series_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub data: Vec<Trace>,
    pub layout: Layout,
    pub config: PlotConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fillcolor: Option<String>,
    pub hovertemplate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub color: String,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    pub size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub x: f64,
    pub y: f64,
    pub bgcolor: String,
    pub bordercolor: String,
    pub borderwidth: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xanchor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: String,
    pub gridcolor: String,
    pub zeroline: bool,
}

impl Axis {
    fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            gridcolor: GRID.to_string(),
            zeroline: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub plot_bgcolor: String,
    pub paper_bgcolor: String,
    pub font: Font,
    pub margin: Margin,
    pub hovermode: String,
    pub showlegend: bool,
    pub legend: Legend,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            plot_bgcolor: "#f9fafb".to_string(),
            paper_bgcolor: "white".to_string(),
            font: Font {
                family: Some("system-ui, -apple-system, sans-serif".to_string()),
                size: 12,
                color: Some("#374151".to_string()),
                weight: None,
            },
            margin: Margin {
                l: 60,
                r: 40,
                t: 60,
                b: 60,
            },
            hovermode: "closest".to_string(),
            showlegend: true,
            legend: Legend {
                x: 1.0,
                y: 1.0,
                bgcolor: "rgba(255,255,255,0.8)".to_string(),
                bordercolor: GRID.to_string(),
                borderwidth: 1,
                orientation: None,
                xanchor: None,
            },
            title: None,
            xaxis: None,
            yaxis: None,
        }
    }
}

impl Layout {
    fn titled(title: &str, y_axis: &str) -> Self {
        Self {
            title: Some(Title {
                text: title.to_string(),
                font: Font {
                    family: None,
                    size: 16,
                    color: None,
                    weight: Some(600),
                },
            }),
            xaxis: Some(Axis::new(TIME_AXIS)),
            yaxis: Some(Axis::new(y_axis)),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotConfig {
    pub responsive: bool,
    pub display_mode_bar: bool,
    pub displaylogo: bool,
    pub mode_bar_buttons_to_remove: Vec<String>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            responsive: true,
            display_mode_bar: true,
            displaylogo: false,
            mode_bar_buttons_to_remove: vec!["lasso2d".to_string(), "select2d".to_string()],
        }
    }
}

/// Rainfall series, as the dashboard page embeds it in `window.hyetographData`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HyetographData {
    pub time_steps: Vec<f64>,
    pub intensity: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// One named discharge series (`window.hydrographsData` entries).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HydrographSeries {
    pub name: String,
    pub time_steps: Vec<f64>,
    pub discharge: Vec<f64>,
}

/// Bar chart of rainfall intensity over time.
pub fn hyetograph(time_steps: &[f64], intensity: &[f64], title: Option<&str>) -> ChartSpec {
    let trace = Trace {
        x: time_steps.to_vec(),
        y: intensity.to_vec(),
        kind: "bar".to_string(),
        mode: None,
        name: "Intensity".to_string(),
        marker: Some(Marker {
            color: PRIMARY.to_string(),
            line: Some(Line {
                color: "#1e40af".to_string(),
                width: 1.0,
            }),
        }),
        line: None,
        fill: None,
        fillcolor: None,
        hovertemplate: "<b>Time:</b> %{x} min<br><b>Intensity:</b> %{y:.2f} mm/h<br><extra></extra>"
            .to_string(),
    };
    ChartSpec {
        data: vec![trace],
        layout: Layout::titled(title.unwrap_or(HYETOGRAPH_TITLE), "Intensity (mm/h)"),
        config: PlotConfig::default(),
    }
}

/// Filled line of a single method's discharge.
pub fn hydrograph(
    time_steps: &[f64],
    discharge: &[f64],
    method: Option<&str>,
    title: Option<&str>,
) -> ChartSpec {
    let trace = Trace {
        x: time_steps.to_vec(),
        y: discharge.to_vec(),
        kind: "scatter".to_string(),
        mode: Some("lines".to_string()),
        name: method.unwrap_or("Hydrograph").to_string(),
        marker: None,
        line: Some(Line {
            color: PRIMARY.to_string(),
            width: 3.0,
        }),
        fill: Some("tozeroy".to_string()),
        fillcolor: Some("rgba(37, 99, 235, 0.1)".to_string()),
        hovertemplate: "<b>Time:</b> %{x} min<br><b>Discharge:</b> %{y:.2f} m³/s<br><extra></extra>"
            .to_string(),
    };
    ChartSpec {
        data: vec![trace],
        layout: Layout::titled(title.unwrap_or(HYDROGRAPH_TITLE), DISCHARGE_AXIS),
        config: PlotConfig::default(),
    }
}

/// One line per method with a shared hover and the legend under the plot.
pub fn hydrograph_comparison(series: &[HydrographSeries], title: Option<&str>) -> ChartSpec {
    let data = series
        .iter()
        .enumerate()
        .map(|(index, s)| Trace {
            x: s.time_steps.clone(),
            y: s.discharge.clone(),
            kind: "scatter".to_string(),
            mode: Some("lines".to_string()),
            name: s.name.clone(),
            marker: None,
            line: Some(Line {
                color: series_color(index).to_string(),
                width: 2.5,
            }),
            fill: None,
            fillcolor: None,
            hovertemplate: format!(
                "<b>{}</b><br>Time: %{{x}} min<br>Discharge: %{{y:.2f}} m³/s<br><extra></extra>",
                s.name
            ),
        })
        .collect();

    let mut layout = Layout::titled(title.unwrap_or(COMPARISON_TITLE), DISCHARGE_AXIS);
    layout.hovermode = "x unified".to_string();
    layout.legend.orientation = Some("h".to_string());
    layout.legend.x = 0.5;
    layout.legend.y = -0.2;
    layout.legend.xanchor = Some("center".to_string());

    ChartSpec {
        data,
        layout,
        config: PlotConfig::default(),
    }
}

/// Whole `interval`s in `span`, or `None` when that is not a finite count
/// or exceeds [`MAX_SAMPLE_STEPS`].
pub fn sample_steps(span: f64, interval: f64) -> Option<usize> {
    let steps = (span / interval).floor();
    if steps >= 0.0 && steps <= MAX_SAMPLE_STEPS as f64 {
        Some(steps as usize)
    } else {
        None
    }
}

/// Demo storm: constant-step blocks peaking in the middle.
///
/// `duration_h` hours split into `interval_min` steps; intensity is
/// `total_mm / duration_h` scaled between 1x and 2x by distance to the peak.
pub fn sample_hyetograph(duration_h: f64, total_mm: f64, interval_min: f64) -> HyetographData {
    if duration_h <= 0.0 || interval_min <= 0.0 {
        return HyetographData::default();
    }
    let Some(steps) = sample_steps(duration_h * 60.0, interval_min) else {
        return HyetographData::default();
    };
    let peak = steps / 2;
    let base = total_mm / duration_h;

    let (time_steps, intensity) = (0..steps)
        .map(|i| {
            let distance = i.abs_diff(peak) as f64;
            let relative = 1.0 - distance / steps as f64;
            (i as f64 * interval_min, base * (1.0 + relative))
        })
        .unzip();

    HyetographData {
        time_steps,
        intensity,
        title: None,
    }
}

/// Demo triangular hydrograph from 0 to `base_time`, never below zero.
pub fn sample_hydrograph(
    peak_discharge: f64,
    time_to_peak: f64,
    base_time: f64,
    interval: f64,
) -> HydrographSeries {
    let empty = || HydrographSeries {
        name: "Sample".to_string(),
        ..HydrographSeries::default()
    };
    if interval <= 0.0 || base_time < 0.0 {
        return empty();
    }
    let Some(steps) = sample_steps(base_time, interval) else {
        return empty();
    };
    let falling = base_time - time_to_peak;

    let (time_steps, discharge) = (0..=steps)
        .map(|i| {
            let t = i as f64 * interval;
            let q = if t <= time_to_peak {
                if time_to_peak > 0.0 {
                    peak_discharge * t / time_to_peak
                } else {
                    peak_discharge
                }
            } else {
                peak_discharge * (1.0 - (t - time_to_peak) / falling)
            };
            (t, q.max(0.0))
        })
        .unzip();

    HydrographSeries {
        name: "Sample".to_string(),
        time_steps,
        discharge,
    }
}

/// The three demo hydrographs shown when a page embeds none.
pub fn sample_comparison() -> Vec<HydrographSeries> {
    [
        ("Rational method", 15.0, 45.0, 180.0),
        ("SCS unit hydrograph", 12.5, 60.0, 210.0),
        ("Clark", 10.0, 75.0, 240.0),
    ]
    .into_iter()
    .map(|(name, peak, time_to_peak, base_time)| HydrographSeries {
        name: name.to_string(),
        ..sample_hydrograph(peak, time_to_peak, base_time, 5.0)
    })
    .collect()
}

/// A page's storm, or the demo storm when it has no points.
/// The flag is true for the demo.
pub fn storm_or_sample(storm: Option<HyetographData>) -> (HyetographData, bool) {
    match storm {
        Some(storm) if !storm.time_steps.is_empty() => (storm, false),
        _ => (sample_hyetograph(2.0, 85.0, 5.0), true),
    }
}

/// A page's hydrographs, or [`sample_comparison`] when there are none.
pub fn hydrographs_or_sample(
    series: Option<Vec<HydrographSeries>>,
) -> (Vec<HydrographSeries>, bool) {
    match series {
        Some(series) if !series.is_empty() => (series, false),
        _ => (sample_comparison(), true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn series(name: &str) -> HydrographSeries {
        HydrographSeries {
            name: name.to_string(),
            time_steps: vec![0.0, 5.0],
            discharge: vec![0.0, 1.0],
        }
    }

    #[test]
    fn comparison_colors_cycle_through_palette() {
        let many: Vec<HydrographSeries> = (0..8).map(|i| series(&format!("m{}", i))).collect();
        let spec = hydrograph_comparison(&many, None);

        let colors: Vec<&str> = spec
            .data
            .iter()
            .map(|t| t.line.as_ref().unwrap().color.as_str())
            .collect();
        assert_eq!(colors[0], "#2563eb");
        assert_eq!(colors[5], "#14b8a6");
        assert_eq!(colors[6], colors[0]);
        assert_eq!(colors[7], colors[1]);
    }

    #[test]
    fn comparison_layout_is_unified_with_bottom_legend() {
        let spec = hydrograph_comparison(&[series("SCS"), series("Rational")], None);

        assert_eq!(spec.layout.hovermode, "x unified");
        assert_eq!(spec.layout.legend.orientation.as_deref(), Some("h"));
        assert_eq!(spec.layout.legend.y, -0.2);
        assert_eq!(spec.layout.title.as_ref().unwrap().text, COMPARISON_TITLE);
        assert!(spec.data[0].hovertemplate.starts_with("<b>SCS</b>"));
    }

    #[test]
    fn hyetograph_is_a_bar_series() {
        let spec = hyetograph(&[0.0, 5.0], &[10.0, 20.0], Some("Storm A"));
        let value = serde_json::to_value(&spec).unwrap();

        assert_eq!(value["data"][0]["type"], json!("bar"));
        assert_eq!(value["data"][0]["marker"]["color"], json!(PRIMARY));
        assert_eq!(value["layout"]["title"]["text"], json!("Storm A"));
        assert_eq!(value["layout"]["hovermode"], json!("closest"));
        assert_eq!(value["config"]["displayModeBar"], json!(true));
        assert_eq!(
            value["config"]["modeBarButtonsToRemove"],
            json!(["lasso2d", "select2d"])
        );
        assert!(value["data"][0].get("fill").is_none());
    }

    #[test]
    fn hydrograph_is_filled_to_zero() {
        let spec = hydrograph(&[0.0, 5.0], &[0.0, 3.0], Some("SCS"), None);

        assert_eq!(spec.data[0].name, "SCS");
        assert_eq!(spec.data[0].fill.as_deref(), Some("tozeroy"));
        assert_eq!(spec.layout.yaxis.as_ref().unwrap().title, DISCHARGE_AXIS);
    }

    #[test]
    fn sample_hyetograph_peaks_in_the_middle() {
        let storm = sample_hyetograph(2.0, 85.0, 5.0);

        assert_eq!(storm.time_steps.len(), 24);
        assert_eq!(storm.time_steps[1], 5.0);
        let peak = storm
            .intensity
            .iter()
            .cloned()
            .fold(f64::MIN, f64::max);
        assert_eq!(storm.intensity[12], peak);
        assert_eq!(peak, 85.0);
        assert!(storm.intensity[0] < peak);
    }

    #[test]
    fn sample_hydrograph_is_triangular_and_clamped() {
        let hydro = sample_hydrograph(15.0, 45.0, 180.0, 5.0);

        assert_eq!(hydro.time_steps.len(), 37);
        assert_eq!(hydro.discharge[0], 0.0);
        assert_eq!(hydro.discharge[9], 15.0);
        assert_eq!(*hydro.discharge.last().unwrap(), 0.0);
        assert!(hydro.discharge.iter().all(|q| *q >= 0.0));
    }

    #[test]
    fn degenerate_samples_are_empty() {
        assert!(sample_hyetograph(2.0, 85.0, 0.0).time_steps.is_empty());
        assert!(sample_hydrograph(15.0, 45.0, 180.0, 0.0).discharge.is_empty());
        // 3 minutes of rain cannot hold one 5 minute block
        assert!(sample_hyetograph(0.05, 85.0, 5.0).time_steps.is_empty());
    }

    #[test]
    fn step_count_is_capped() {
        assert_eq!(sample_steps(10_000.0, 1.0), Some(10_000));
        assert_eq!(sample_steps(10_001.0, 1.0), None);
        assert_eq!(sample_steps(f64::NAN, 5.0), None);
        assert!(sample_hydrograph(15.0, 45.0, 180.0, 1e-9).time_steps.is_empty());
        assert!(sample_hyetograph(1e9, 85.0, 5.0).time_steps.is_empty());

        let longest = sample_hyetograph(1000.0, 85.0, 6.0);
        assert_eq!(longest.time_steps.len(), MAX_SAMPLE_STEPS);
    }

    #[test]
    fn only_the_missing_chart_falls_back_to_demo_data() {
        let storm = HyetographData {
            time_steps: vec![0.0, 5.0],
            intensity: vec![40.0, 60.0],
            title: Some("Tr 10".to_string()),
        };
        let (shown, demo) = storm_or_sample(Some(storm.clone()));
        assert_eq!(shown, storm);
        assert!(!demo);

        let (shown, demo) = hydrographs_or_sample(Some(Vec::new()));
        assert!(demo);
        assert_eq!(shown.len(), 3);
        assert_eq!(shown[2].name, "Clark");
    }

    #[test]
    fn storm_without_points_is_replaced() {
        let (shown, demo) = storm_or_sample(Some(HyetographData::default()));
        assert!(demo);
        assert_eq!(shown.time_steps.len(), 24);

        let (kept, demo) = hydrographs_or_sample(Some(vec![series("SCS")]));
        assert!(!demo);
        assert_eq!(kept[0].name, "SCS");
    }
}
