//! CSV and chart JSON export of the demo series.

use hcalc_core::charts::{
    hydrograph, hyetograph, sample_hydrograph, sample_hyetograph, sample_steps, ChartSpec,
    MAX_SAMPLE_STEPS,
};
use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::Write;

#[derive(Debug, Serialize)]
struct IntensityRow {
    time_min: f64,
    intensity_mmh: f64,
}

#[derive(Debug, Serialize)]
struct DischargeRow {
    time_min: f64,
    discharge_m3s: f64,
}

/// Write `time_min,intensity_mmh` rows with a header line.
pub fn write_hyetograph_csv<W: Write>(
    writer: W,
    time_steps: &[f64],
    intensity: &[f64],
) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (&time_min, &intensity_mmh) in time_steps.iter().zip(intensity) {
        wtr.serialize(IntensityRow {
            time_min,
            intensity_mmh,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `time_min,discharge_m3s` rows with a header line.
pub fn write_hydrograph_csv<W: Write>(
    writer: W,
    time_steps: &[f64],
    discharge: &[f64],
) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (&time_min, &discharge_m3s) in time_steps.iter().zip(discharge) {
        wtr.serialize(DischargeRow {
            time_min,
            discharge_m3s,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Reject a span/interval pair whose series would have no points or too many.
fn check_steps(span: f64, interval: f64, span_name: &str) -> anyhow::Result<usize> {
    if !(span > 0.0 && interval > 0.0) {
        anyhow::bail!("{} and interval must both be greater than 0", span_name);
    }
    match sample_steps(span, interval) {
        None => anyhow::bail!(
            "{} / interval gives more than {} steps; use a longer interval",
            span_name,
            MAX_SAMPLE_STEPS
        ),
        Some(steps) => Ok(steps),
    }
}

pub fn write_chart_json<W: Write>(writer: W, spec: &ChartSpec) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(writer, spec)?;
    Ok(())
}

/// Export the demo hyetograph. With no output path the CSV goes to stdout.
pub fn run_sample_hyetograph(
    duration_h: f64,
    total_mm: f64,
    interval_min: f64,
    csv_path: Option<&str>,
    chart_path: Option<&str>,
) -> anyhow::Result<()> {
    if check_steps(duration_h * 60.0, interval_min, "duration")? == 0 {
        anyhow::bail!("duration is shorter than one {} minute interval", interval_min);
    }
    let storm = sample_hyetograph(duration_h, total_mm, interval_min);
    info!("{} rainfall steps", storm.time_steps.len());

    if let Some(path) = chart_path {
        let spec = hyetograph(&storm.time_steps, &storm.intensity, storm.title.as_deref());
        write_chart_json(File::create(path)?, &spec)?;
        info!("Chart written to {}", path);
    }
    match csv_path {
        Some(path) => {
            write_hyetograph_csv(File::create(path)?, &storm.time_steps, &storm.intensity)?;
            info!("Series written to {}", path);
        }
        None if chart_path.is_none() => {
            write_hyetograph_csv(std::io::stdout().lock(), &storm.time_steps, &storm.intensity)?;
        }
        None => {}
    }
    Ok(())
}

/// Export the demo triangular hydrograph. With no output path the CSV goes to stdout.
pub fn run_sample_hydrograph(
    peak_discharge: f64,
    time_to_peak: f64,
    base_time: f64,
    interval: f64,
    csv_path: Option<&str>,
    chart_path: Option<&str>,
) -> anyhow::Result<()> {
    if time_to_peak > base_time {
        anyhow::bail!("time to peak must not exceed the base time");
    }
    check_steps(base_time, interval, "base time")?;
    let series = sample_hydrograph(peak_discharge, time_to_peak, base_time, interval);
    info!("{} discharge steps", series.time_steps.len());

    if let Some(path) = chart_path {
        let spec = hydrograph(
            &series.time_steps,
            &series.discharge,
            Some(series.name.as_str()),
            None,
        );
        write_chart_json(File::create(path)?, &spec)?;
        info!("Chart written to {}", path);
    }
    match csv_path {
        Some(path) => {
            write_hydrograph_csv(File::create(path)?, &series.time_steps, &series.discharge)?;
            info!("Series written to {}", path);
        }
        None if chart_path.is_none() => {
            write_hydrograph_csv(std::io::stdout().lock(), &series.time_steps, &series.discharge)?;
        }
        None => {}
    }
    Ok(())
}
