//! Display records built from calculation results.
//!
//! Renderers are pure: they borrow the result, never modify it, and return
//! the strings a view writes into its result slots.

use crate::format::{format_number, NumberLocale};
use crate::models::{
    IdfResult, QuickRationalResult, RationalResult, RunoffCoefficient, RunoffCoefficients,
};

/// Label shown when the IDF result has no areal correction.
pub const POINT_INTENSITY: &str = "No areal correction (point value)";

/// Echo an input the way it was sent: `50`, `0.9`, `120.5`.
fn echo(value: f64) -> String {
    format!("{}", value)
}

/// Warnings list, or `None` when there is nothing to show.
fn visible_warnings(warnings: &[String]) -> Option<Vec<String>> {
    if warnings.is_empty() {
        None
    } else {
        Some(warnings.to_vec())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RationalDisplay {
    pub q_ls: String,
    pub q_m3s: String,
    pub q_m3h: String,
    pub input_c: String,
    pub input_i: String,
    pub input_a_ha: String,
    pub input_a_m2: String,
    pub warnings: Option<Vec<String>>,
    pub description: Option<String>,
}

pub fn render_rational(result: &RationalResult, locale: NumberLocale) -> RationalDisplay {
    let inputs = &result.inputs;
    RationalDisplay {
        q_ls: format_number(Some(result.q_ls), 2, locale),
        q_m3s: format_number(Some(result.q_m3s), 4, locale),
        q_m3h: format_number(Some(result.q_m3h), 2, locale),
        input_c: echo(inputs.c),
        input_i: format!("{} mm/h", echo(inputs.i_mmh)),
        input_a_ha: format!("{} ha", echo(inputs.a_ha)),
        input_a_m2: format_number(inputs.a_m2, 0, locale),
        warnings: visible_warnings(&result.warnings),
        description: result
            .description
            .as_ref()
            .filter(|d| !d.trim().is_empty())
            .cloned(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuickRationalDisplay {
    pub q_ls: String,
    pub q_m3s: String,
    pub input_c: String,
    pub input_i: String,
    pub input_a: String,
}

pub fn render_quick_rational(
    result: &QuickRationalResult,
    locale: NumberLocale,
) -> QuickRationalDisplay {
    QuickRationalDisplay {
        q_ls: format_number(Some(result.q_ls), 2, locale),
        q_m3s: format_number(Some(result.q_m3s), 4, locale),
        input_c: echo(result.inputs.c),
        input_i: echo(result.inputs.i_mmh),
        input_a: echo(result.inputs.a_ha),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IdfDisplay {
    pub i_mmh: String,
    pub p_mm: String,
    pub ct: String,
    pub cd: String,
    pub ca: String,
    pub p3_10: String,
    pub tr: String,
    pub d_hours: String,
    pub ac: String,
    pub warnings: Option<Vec<String>>,
}

pub fn render_idf(result: &IdfResult, locale: NumberLocale) -> IdfDisplay {
    IdfDisplay {
        i_mmh: format_number(Some(result.i_mmh), 2, locale),
        p_mm: format_number(Some(result.p_mm), 2, locale),
        ct: format_number(Some(result.ct), 4, locale),
        cd: format_number(Some(result.cd), 4, locale),
        ca: format_number(Some(result.ca), 4, locale),
        p3_10: echo(result.p3_10),
        tr: echo(result.tr),
        d_hours: echo(result.d_hours),
        ac: match result.ac_km2 {
            Some(ac) => format!("{} km²", echo(ac)),
            None => POINT_INTENSITY.to_string(),
        },
        warnings: visible_warnings(&result.warnings),
    }
}

/// One row of the runoff coefficient reference table.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientRow {
    pub key: String,
    pub description: String,
    pub min: String,
    pub typical: String,
    pub max: String,
}

impl CoefficientRow {
    fn new(key: &str, entry: &RunoffCoefficient) -> Self {
        Self {
            key: key.to_string(),
            description: entry.description.clone(),
            min: echo(entry.min),
            typical: echo(entry.typical),
            max: echo(entry.max),
        }
    }
}

pub fn coefficient_rows(table: &RunoffCoefficients) -> Vec<CoefficientRow> {
    table
        .coefficients
        .iter()
        .map(|(key, entry)| CoefficientRow::new(key, entry))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RationalInputs;
    use std::collections::BTreeMap;

    fn rational(warnings: Vec<String>, description: Option<&str>) -> RationalResult {
        RationalResult {
            q_ls: 12.5,
            q_m3s: 0.0125,
            q_m3h: 45.0,
            inputs: RationalInputs {
                c: 0.9,
                i_mmh: 50.0,
                a_ha: 10.0,
                a_m2: Some(100000.0),
            },
            warnings,
            description: description.map(str::to_string),
        }
    }

    #[test]
    fn rational_fields_use_fixed_precision() {
        let display = render_rational(&rational(vec![], None), NumberLocale::DEFAULT);
        assert_eq!(display.q_ls, "12.50");
        assert_eq!(display.q_m3s, "0.0125");
        assert_eq!(display.q_m3h, "45.00");
        assert_eq!(display.input_c, "0.9");
        assert_eq!(display.input_i, "50 mm/h");
        assert_eq!(display.input_a_ha, "10 ha");
        assert_eq!(display.input_a_m2, "100,000");
    }

    #[test]
    fn warnings_only_when_present() {
        let none = render_rational(&rational(vec![], None), NumberLocale::DEFAULT);
        assert_eq!(none.warnings, None);
        let some = render_rational(
            &rational(vec!["Area above recommended range".into()], None),
            NumberLocale::DEFAULT,
        );
        assert_eq!(
            some.warnings,
            Some(vec!["Area above recommended range".to_string()])
        );
    }

    #[test]
    fn blank_description_is_hidden() {
        let blank = render_rational(&rational(vec![], Some("   ")), NumberLocale::DEFAULT);
        assert_eq!(blank.description, None);
        let text = render_rational(&rational(vec![], Some("Lote 4")), NumberLocale::DEFAULT);
        assert_eq!(text.description.as_deref(), Some("Lote 4"));
    }

    #[test]
    fn renderer_leaves_result_untouched() {
        let result = rational(vec!["w".into()], Some("d"));
        let before = result.clone();
        let _ = render_rational(&result, NumberLocale::ES_UY);
        assert_eq!(result, before);
    }

    #[test]
    fn idf_without_area_is_point_value() {
        let result = IdfResult {
            i_mmh: 36.344,
            p_mm: 36.344,
            ct: 0.84561,
            cd: 0.51842,
            ca: 1.0,
            p3_10: 75.0,
            tr: 5.0,
            d_hours: 1.0,
            ac_km2: None,
            warnings: vec![],
        };
        let display = render_idf(&result, NumberLocale::DEFAULT);
        assert_eq!(display.i_mmh, "36.34");
        assert_eq!(display.ct, "0.8456");
        assert_eq!(display.ca, "1.0000");
        assert_eq!(display.ac, POINT_INTENSITY);
        assert_eq!(display.tr, "5");

        let with_area = IdfResult {
            ac_km2: Some(30.0),
            ..result
        };
        assert_eq!(render_idf(&with_area, NumberLocale::DEFAULT).ac, "30 km²");
    }

    #[test]
    fn every_calculator_groups_thousands_in_the_chosen_locale() {
        let quick = QuickRationalResult {
            q_ls: 12345.678,
            q_m3s: 12.345678,
            inputs: RationalInputs {
                c: 0.9,
                i_mmh: 200.0,
                a_ha: 250.0,
                a_m2: None,
            },
        };
        let display = render_quick_rational(&quick, NumberLocale::DEFAULT);
        assert_eq!(display.q_ls, "12,345.68");
        assert_eq!(display.q_m3s, "12.3457");
        assert_eq!(
            render_quick_rational(&quick, NumberLocale::ES_UY).q_ls,
            "12.345,68"
        );

        let idf = IdfResult {
            i_mmh: 1520.0,
            p_mm: 1520.0,
            ct: 1.0,
            cd: 1.0,
            ca: 1.0,
            p3_10: 78.0,
            tr: 10.0,
            d_hours: 1.0,
            ac_km2: None,
            warnings: vec![],
        };
        assert_eq!(render_idf(&idf, NumberLocale::DEFAULT).p_mm, "1,520.00");
    }

    #[test]
    fn coefficient_rows_follow_table_order() {
        let mut coefficients = BTreeMap::new();
        coefficients.insert(
            "techos".to_string(),
            RunoffCoefficient {
                description: "Techos".into(),
                min: 0.75,
                typical: 0.85,
                max: 0.95,
            },
        );
        coefficients.insert(
            "cesped".to_string(),
            RunoffCoefficient {
                description: "Césped".into(),
                min: 0.05,
                typical: 0.1,
                max: 0.35,
            },
        );
        let rows = coefficient_rows(&RunoffCoefficients { coefficients });
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].key, "cesped");
        assert_eq!(rows[1].typical, "0.85");
    }
}
