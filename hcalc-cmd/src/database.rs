//! Reference tables and the project / watershed / design storm store.

use crate::terminal::{notification_lines, TerminalView};
use crate::Settings;
use hcalc_core::api::Backend;
use hcalc_core::browser::ProjectBrowser;
use hcalc_core::calculators::load_coefficients;
use hcalc_core::format::{format_number, MISSING};
use hcalc_core::models::{
    DesignStorm, DesignStormId, Hydrograph, NewHydrograph, Project, ProjectId, Watershed,
    WatershedId,
};
use hcalc_core::HttpClient;
use log::info;
use serde::Deserialize;
use std::io::Read;

fn client(settings: &Settings) -> HttpClient {
    HttpClient::from_config(&settings.client_config())
}

fn or_missing(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(MISSING)
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

pub async fn run_coefficients(settings: &Settings) -> anyhow::Result<()> {
    let rows = load_coefficients(&client(settings)).await;
    if rows.is_empty() {
        anyhow::bail!("no runoff coefficients available");
    }
    println!(
        "{:<28} {:>6} {:>8} {:>6}  {}",
        "Surface", "Min", "Typical", "Max", "Description"
    );
    for row in rows {
        println!(
            "{:<28} {:>6} {:>8} {:>6}  {}",
            row.key, row.min, row.typical, row.max, row.description
        );
    }
    Ok(())
}

pub async fn run_p3_10_values(settings: &Settings) -> anyhow::Result<()> {
    let values = client(settings).p3_10_values().await?;
    info!("{} stations", values.len());
    for (station, depth) in values {
        println!(
            "{:<24} {} mm",
            station,
            format_number(Some(depth), 1, settings.locale)
        );
    }
    Ok(())
}

pub fn project_lines(projects: &[Project]) -> Vec<String> {
    projects
        .iter()
        .map(|p| {
            format!(
                "{:>5}  {:<32} {:<20} {} watersheds",
                p.id,
                p.name,
                or_missing(p.location.as_deref()),
                p.total_watersheds.unwrap_or(0)
            )
        })
        .collect()
}

pub fn watershed_lines(watersheds: &[Watershed]) -> Vec<String> {
    watersheds
        .iter()
        .map(|w| {
            let shown = |v: Option<f64>| v.map_or(MISSING.to_string(), |v| v.to_string());
            format!(
                "{:>5}  {:<32} A={} ha  tc={} h  C={}  NC={}",
                w.id,
                w.name,
                shown(w.area_ha),
                shown(w.tc_hours),
                shown(w.c_rational),
                shown(w.nc_scs)
            )
        })
        .collect()
}

pub fn design_storm_lines(storms: &[DesignStorm]) -> Vec<String> {
    storms
        .iter()
        .map(|s| {
            format!(
                "{:>5}  {:<32} Tr={} years  d={} h  P={} mm  {}",
                s.id,
                s.name,
                s.return_period_years,
                s.duration_hours,
                s.total_rainfall_mm,
                or_missing(s.distribution_type.as_deref())
            )
        })
        .collect()
}

pub async fn run_projects(settings: &Settings) -> anyhow::Result<()> {
    let projects = client(settings).projects().await?;
    if projects.is_empty() {
        println!("No projects yet.");
    }
    print_lines(&project_lines(&projects));
    Ok(())
}

pub async fn run_watersheds(settings: &Settings, project_id: ProjectId) -> anyhow::Result<()> {
    let watersheds = client(settings).watersheds(project_id).await?;
    if watersheds.is_empty() {
        println!("Project {} has no watersheds.", project_id);
    }
    print_lines(&watershed_lines(&watersheds));
    Ok(())
}

pub async fn run_design_storms(
    settings: &Settings,
    watershed_id: WatershedId,
) -> anyhow::Result<()> {
    let storms = client(settings).design_storms(watershed_id).await?;
    if storms.is_empty() {
        println!("Watershed {} has no design storms.", watershed_id);
    }
    print_lines(&design_storm_lines(&storms));
    Ok(())
}

#[derive(Debug, Deserialize)]
struct DischargeRow {
    time_min: f64,
    discharge_m3s: f64,
}

/// Read `time_min,discharge_m3s` rows (header line required).
pub fn read_hydrograph_csv<R: Read>(reader: R) -> anyhow::Result<(Vec<f64>, Vec<f64>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut time_steps = Vec::new();
    let mut discharge = Vec::new();
    for result in rdr.deserialize() {
        let row: DischargeRow = result?;
        time_steps.push(row.time_min);
        discharge.push(row.discharge_m3s);
    }
    if time_steps.is_empty() {
        anyhow::bail!("the hydrograph has no rows");
    }
    Ok((time_steps, discharge))
}

/// Post `hydrograph` under `design_storm_id`, reporting through `view`.
pub async fn save_series<B: Backend, D>(
    backend: &B,
    design_storm_id: DesignStormId,
    hydrograph: &NewHydrograph,
    view: &mut TerminalView<D>,
) -> anyhow::Result<Hydrograph> {
    let saved = ProjectBrowser::new()
        .save_hydrograph(design_storm_id, hydrograph, backend, view)
        .await?;
    Ok(saved)
}

pub async fn run_save_hydrograph(
    settings: &Settings,
    design_storm_id: DesignStormId,
    csv_path: &str,
    method: &str,
    name: Option<String>,
) -> anyhow::Result<()> {
    let file = std::fs::File::open(csv_path)
        .map_err(|e| anyhow::anyhow!("Failed to open {}: {}", csv_path, e))?;
    let (time_steps, discharge) = read_hydrograph_csv(file)?;
    let hydrograph = NewHydrograph {
        name,
        ..NewHydrograph::from_series(method, &time_steps, &discharge)
    };
    info!(
        "Saving {} points (peak {} m³/s) under design storm {}",
        hydrograph.hydrograph_data.len(),
        hydrograph.peak_discharge_m3s,
        design_storm_id
    );

    let mut view: TerminalView<()> = TerminalView::new(settings.confirm());
    let result = save_series(&client(settings), design_storm_id, &hydrograph, &mut view).await;
    print_lines(&notification_lines(&view.notifications));
    let saved = result?;
    println!("Hydrograph id: {}", saved.id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::Confirm;
    use hcalc_core::browser::NotificationKind;
    use hcalc_core::http::RequestOptions;
    use hcalc_core::ApiError;
    use serde_json::{json, Value};
    use std::cell::RefCell;

    /// Answers every request with one canned reply.
    struct StubBackend {
        reply: hcalc_core::Result<Value>,
        sent: RefCell<Vec<(String, Option<Value>)>>,
    }

    impl StubBackend {
        fn new(reply: hcalc_core::Result<Value>) -> Self {
            Self {
                reply,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl Backend for StubBackend {
        async fn request(&self, path: &str, options: RequestOptions) -> hcalc_core::Result<Value> {
            self.sent
                .borrow_mut()
                .push((path.to_string(), options.body));
            self.reply.clone()
        }
    }

    #[test]
    fn reads_hydrograph_rows() {
        let data = "time_min, discharge_m3s\n0,0\n30, 12.5\n60,4\n";
        let (time_steps, discharge) = read_hydrograph_csv(data.as_bytes()).unwrap();
        assert_eq!(time_steps, vec![0.0, 30.0, 60.0]);
        assert_eq!(discharge, vec![0.0, 12.5, 4.0]);
    }

    #[test]
    fn header_only_file_is_rejected() {
        assert!(read_hydrograph_csv("time_min,discharge_m3s\n".as_bytes()).is_err());
        assert!(read_hydrograph_csv("time_min,discharge_m3s\n0,abc\n".as_bytes()).is_err());
    }

    #[tokio::test]
    async fn saved_hydrograph_posts_under_the_storm() {
        let backend = StubBackend::new(Ok(json!({
            "id": 9,
            "method": "Rational method",
            "peak_discharge_m3s": 12.5
        })));
        let hydrograph = NewHydrograph::from_series("Rational method", &[0.0, 30.0], &[0.0, 12.5]);
        let mut view: TerminalView<()> = TerminalView::new(Confirm::Never);

        let saved = save_series(&backend, 4, &hydrograph, &mut view).await.unwrap();
        assert_eq!(saved.id, 9);

        let sent = backend.sent.borrow();
        assert_eq!(sent[0].0, "/api/v1/design-storms/4/hydrographs");
        let body = sent[0].1.as_ref().unwrap();
        assert_eq!(body["peak_discharge_m3s"], 12.5);
        assert_eq!(body["time_to_peak_minutes"], 30.0);
        assert_eq!(view.notifications[0].kind, NotificationKind::Success);
    }

    #[tokio::test]
    async fn failed_save_is_reported_and_returned() {
        let backend = StubBackend::new(Err(ApiError::Server {
            status: 400,
            message: "Invalid design storm".to_string(),
        }));
        let hydrograph = NewHydrograph::from_series("Clark", &[0.0], &[1.0]);
        let mut view: TerminalView<()> = TerminalView::new(Confirm::Never);

        let err = save_series(&backend, 4, &hydrograph, &mut view).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid design storm");
        assert_eq!(
            notification_lines(&view.notifications),
            vec!["[error] Failed to save hydrograph".to_string()]
        );
    }

    #[test]
    fn listings_fill_missing_values() {
        let watershed: Watershed = serde_json::from_value(json!({
            "id": 3,
            "name": "Arroyo Carrasco",
            "area_hectareas": 120.0,
            "tc_horas": 1.5,
            "c_racional": 0.45
        }))
        .unwrap();
        let line = &watershed_lines(&[watershed])[0];
        assert!(line.contains("C=0.45"));
        assert!(line.contains("NC=-"));

        let partial: Watershed =
            serde_json::from_value(json!({"id": 4, "name": "Arroyo", "area_hectareas": 12.5}))
                .unwrap();
        let line = &watershed_lines(&[partial])[0];
        assert!(line.contains("A=12.5 ha"));
        assert!(line.contains("tc=- h"));

        let project: Project = serde_json::from_value(json!({"id": 1, "name": "Ruta 8"})).unwrap();
        let line = &project_lines(&[project])[0];
        assert!(line.contains("Ruta 8"));
        assert!(line.ends_with("0 watersheds"));
    }
}
