//! Request and response records, one per backend endpoint.
//!
//! Field names follow the backend's JSON (`Q_ls`, `area_hectareas`, ...)
//! through `serde` renames; the Rust side uses snake_case.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type ProjectId = i64;
pub type WatershedId = i64;
pub type DesignStormId = i64;

// ───────────────────── Calculators ─────────────────────

/// Body of `POST /api/calculate-rational`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuickRationalRequest {
    #[serde(rename = "C")]
    pub c: f64,
    #[serde(rename = "I_mmh")]
    pub i_mmh: f64,
    #[serde(rename = "A_ha")]
    pub a_ha: f64,
}

/// Body of `POST /api/rational`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RationalRequest {
    #[serde(rename = "C")]
    pub c: f64,
    #[serde(rename = "I_mmh")]
    pub i_mmh: f64,
    #[serde(rename = "A_ha")]
    pub a_ha: f64,
    pub description: String,
}

/// Inputs echoed back by both rational endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RationalInputs {
    #[serde(rename = "C")]
    pub c: f64,
    #[serde(rename = "I_mmh")]
    pub i_mmh: f64,
    #[serde(rename = "A_ha")]
    pub a_ha: f64,
    /// Only reported by `/api/rational`.
    #[serde(rename = "A_m2", default, skip_serializing_if = "Option::is_none")]
    pub a_m2: Option<f64>,
}

/// Response of `POST /api/calculate-rational`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickRationalResult {
    #[serde(rename = "Q_ls")]
    pub q_ls: f64,
    #[serde(rename = "Q_m3s")]
    pub q_m3s: f64,
    pub inputs: RationalInputs,
}

/// Response of `POST /api/rational`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RationalResult {
    #[serde(rename = "Q_ls")]
    pub q_ls: f64,
    #[serde(rename = "Q_m3s")]
    pub q_m3s: f64,
    #[serde(rename = "Q_m3h")]
    pub q_m3h: f64,
    pub inputs: RationalInputs,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of both IDF endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdfRequest {
    #[serde(rename = "P3_10")]
    pub p3_10: f64,
    #[serde(rename = "Tr")]
    pub tr: f64,
    pub d: f64,
    /// Catchment area in km²; omitted for a point intensity.
    #[serde(rename = "Ac", default, skip_serializing_if = "Option::is_none")]
    pub ac: Option<f64>,
}

/// Response of both IDF endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdfResult {
    #[serde(rename = "I_mmh")]
    pub i_mmh: f64,
    #[serde(rename = "P_mm")]
    pub p_mm: f64,
    #[serde(rename = "CT")]
    pub ct: f64,
    #[serde(rename = "CD")]
    pub cd: f64,
    #[serde(rename = "CA")]
    pub ca: f64,
    #[serde(rename = "P3_10")]
    pub p3_10: f64,
    #[serde(rename = "Tr")]
    pub tr: f64,
    pub d_hours: f64,
    #[serde(rename = "Ac_km2", default)]
    pub ac_km2: Option<f64>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// One entry of the runoff coefficient reference table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunoffCoefficient {
    #[serde(rename = "descripcion")]
    pub description: String,
    pub min: f64,
    #[serde(rename = "tipico")]
    pub typical: f64,
    pub max: f64,
}

/// Response of `GET /api/runoff-coefficients`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RunoffCoefficients {
    pub coefficients: BTreeMap<String, RunoffCoefficient>,
}

// ───────────────────── Persistence API ─────────────────────

/// Body of a list endpoint: a bare array, or one paginated page
/// (`{"count", "next", "previous", "results"}`). Only `results` is read.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Page { results: Vec<T> },
    Plain(Vec<T>),
}

impl<T> Listing<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Listing::Page { results } => results,
            Listing::Plain(items) => items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub total_watersheds: Option<u32>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /api/v1/projects`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewProject {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Watershed {
    pub id: WatershedId,
    #[serde(default)]
    pub project: Option<ProjectId>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "area_hectareas", default)]
    pub area_ha: Option<f64>,
    #[serde(rename = "tc_horas", default)]
    pub tc_hours: Option<f64>,
    /// SCS curve number.
    #[serde(default)]
    pub nc_scs: Option<f64>,
    /// Rational-method runoff coefficient.
    #[serde(rename = "c_racional", default)]
    pub c_rational: Option<f64>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub elevation_m: Option<f64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of `POST /api/v1/projects/{id}/watersheds`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWatershed {
    pub name: String,
    #[serde(rename = "area_hectareas")]
    pub area_ha: f64,
    #[serde(rename = "tc_horas")]
    pub tc_hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nc_scs: Option<f64>,
    #[serde(rename = "c_racional", default, skip_serializing_if = "Option::is_none")]
    pub c_rational: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignStorm {
    pub id: DesignStormId,
    #[serde(default)]
    pub watershed: Option<WatershedId>,
    pub name: String,
    pub return_period_years: u32,
    pub duration_hours: f64,
    pub total_rainfall_mm: f64,
    #[serde(default)]
    pub distribution_type: Option<String>,
    #[serde(default)]
    pub time_step_minutes: Option<u32>,
    #[serde(default)]
    pub average_intensity_mm_h: Option<f64>,
}

/// Body of `POST /api/v1/watersheds/{id}/design-storms`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDesignStorm {
    pub name: String,
    pub return_period_years: u32,
    pub duration_hours: f64,
    pub total_rainfall_mm: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_step_minutes: Option<u32>,
}

/// One point of a stored hydrograph series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HydrographPoint {
    pub time_min: f64,
    pub discharge_m3s: f64,
}

/// Body of `POST /api/v1/design-storms/{id}/hydrographs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewHydrograph {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub method: String,
    pub peak_discharge_m3s: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_to_peak_minutes: Option<f64>,
    pub hydrograph_data: Vec<HydrographPoint>,
}

impl NewHydrograph {
    /// Build from parallel time/discharge series; the peak is derived.
    pub fn from_series(method: &str, time_steps: &[f64], discharge: &[f64]) -> Self {
        let hydrograph_data: Vec<HydrographPoint> = time_steps
            .iter()
            .zip(discharge)
            .map(|(&time_min, &discharge_m3s)| HydrographPoint {
                time_min,
                discharge_m3s,
            })
            .collect();
        let peak = hydrograph_data
            .iter()
            .copied()
            .fold(None::<HydrographPoint>, |best, p| match best {
                Some(b) if b.discharge_m3s >= p.discharge_m3s => Some(b),
                _ => Some(p),
            });
        Self {
            name: None,
            method: method.to_string(),
            peak_discharge_m3s: peak.map_or(0.0, |p| p.discharge_m3s),
            time_to_peak_minutes: peak.map(|p| p.time_min),
            hydrograph_data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hydrograph {
    pub id: i64,
    #[serde(default)]
    pub design_storm: Option<DesignStormId>,
    #[serde(default)]
    pub name: Option<String>,
    pub method: String,
    pub peak_discharge_m3s: f64,
    #[serde(default)]
    pub time_to_peak_minutes: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rational_request_uses_backend_names() {
        let req = RationalRequest {
            c: 0.9,
            i_mmh: 50.0,
            a_ha: 10.0,
            description: String::new(),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"C": 0.9, "I_mmh": 50.0, "A_ha": 10.0, "description": ""})
        );
    }

    #[test]
    fn idf_request_omits_missing_area() {
        let req = IdfRequest {
            p3_10: 75.0,
            tr: 10.0,
            d: 1.0,
            ac: None,
        };
        let value = serde_json::to_value(req).unwrap();
        assert_eq!(value, json!({"P3_10": 75.0, "Tr": 10.0, "d": 1.0}));
    }

    #[test]
    fn rational_result_tolerates_missing_warnings() {
        let result: RationalResult = serde_json::from_value(json!({
            "Q_ls": 12.5, "Q_m3s": 0.0125, "Q_m3h": 45,
            "inputs": {"C": 0.9, "I_mmh": 50, "A_ha": 10}
        }))
        .unwrap();
        assert!(result.warnings.is_empty());
        assert_eq!(result.description, None);
        assert_eq!(result.inputs.a_m2, None);
    }

    #[test]
    fn idf_result_accepts_null_area() {
        let result: IdfResult = serde_json::from_value(json!({
            "I_mmh": 36.34, "P_mm": 36.34, "CT": 0.8456, "CD": 0.5184, "CA": 1.0,
            "P3_10": 75, "Tr": 5, "d_hours": 1, "Ac_km2": null, "warnings": []
        }))
        .unwrap();
        assert_eq!(result.ac_km2, None);
        assert_eq!(result.tr, 5.0);
    }

    #[test]
    fn watershed_reads_spanish_field_names() {
        let ws: Watershed = serde_json::from_value(json!({
            "id": 3, "project": 1, "name": "Arroyo Carrasco",
            "area_hectareas": 120.5, "tc_horas": 1.5, "nc_scs": null,
            "c_racional": 0.45, "created_at": "2025-03-01T12:00:00Z"
        }))
        .unwrap();
        assert_eq!(ws.area_ha, Some(120.5));
        assert_eq!(ws.c_rational, Some(0.45));
        assert_eq!(ws.nc_scs, None);
        assert!(ws.created_at.is_some());
    }

    #[test]
    fn watershed_list_tolerates_missing_attributes() {
        let list: Vec<Watershed> = serde_json::from_str(
            r#"[{"id":1,"name":"Arroyo","area_hectareas":12.5,"c_racional":0.6}]"#,
        )
        .unwrap();
        assert_eq!(list[0].area_ha, Some(12.5));
        assert_eq!(list[0].tc_hours, None);
    }

    #[test]
    fn runoff_coefficients_map_spanish_keys() {
        let table: RunoffCoefficients = serde_json::from_value(json!({
            "coefficients": {
                "techos": {"descripcion": "Techos", "min": 0.75, "tipico": 0.85, "max": 0.95}
            }
        }))
        .unwrap();
        assert_eq!(table.coefficients["techos"].typical, 0.85);
    }

    #[test]
    fn new_hydrograph_derives_peak() {
        let h = NewHydrograph::from_series("Racional", &[0.0, 5.0, 10.0], &[0.0, 3.5, 1.0]);
        assert_eq!(h.peak_discharge_m3s, 3.5);
        assert_eq!(h.time_to_peak_minutes, Some(5.0));
        assert_eq!(h.hydrograph_data.len(), 3);
    }
}
