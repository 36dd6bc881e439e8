use crate::api::Backend;
use crate::controller::Calculator;
use crate::error::Result;
use crate::form::FormState;
use crate::format::NumberLocale;
use crate::models::{RationalRequest, RationalResult};
use crate::results::{coefficient_rows, render_rational, CoefficientRow, RationalDisplay};
use crate::validate::FieldRule;

pub const RATIONAL_FORM_ID: &str = "rationalForm";

pub static RATIONAL_RULES: [FieldRule; 3] = [
    FieldRule::range("C", "Coefficient C", 0.0, 1.0),
    FieldRule::range("I_mmh", "Intensity I", 0.0, 1000.0),
    FieldRule::range("A_ha", "Area A", 0.0, 100000.0),
];

/// Rational method form posting to `/api/rational`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RationalCalculator {
    pub locale: NumberLocale,
}

impl RationalCalculator {
    pub fn new(locale: NumberLocale) -> Self {
        Self { locale }
    }
}

impl Calculator for RationalCalculator {
    type Request = RationalRequest;
    type Response = RationalResult;
    type Display = RationalDisplay;

    fn field_rules(&self) -> &'static [FieldRule] {
        &RATIONAL_RULES
    }

    fn idle_label(&self) -> &'static str {
        "Calculate"
    }

    fn build_request(&self, form: &FormState) -> Option<RationalRequest> {
        Some(RationalRequest {
            c: form.number("C")?,
            i_mmh: form.number("I_mmh")?,
            a_ha: form.number("A_ha")?,
            description: form.get("description").to_string(),
        })
    }

    async fn send<B: Backend>(&self, backend: &B, request: &RationalRequest) -> Result<RationalResult> {
        log::info!("sending rational calculation: {:?}", request);
        backend.calculate_rational(request).await
    }

    fn render(&self, response: &RationalResult) -> RationalDisplay {
        render_rational(response, self.locale)
    }
}

/// Reference coefficient table; a failed load is logged and yields no rows.
pub async fn load_coefficients<B: Backend>(backend: &B) -> Vec<CoefficientRow> {
    match backend.runoff_coefficients().await {
        Ok(table) => coefficient_rows(&table),
        Err(e) => {
            log::error!("failed to load runoff coefficients: {}", e);
            Vec::new()
        }
    }
}
