use crate::api::Backend;
use crate::config::IdfEndpoint;
use crate::controller::Calculator;
use crate::error::Result;
use crate::form::FormState;
use crate::format::NumberLocale;
use crate::models::{IdfRequest, IdfResult};
use crate::results::{render_idf, IdfDisplay};
use crate::validate::{FieldRule, SoftLimit};

pub const IDF_FORM_ID: &str = "idf-form";

/// Value of the return-period radio that enables the free-text input.
pub const CUSTOM_RETURN_PERIOD: &str = "custom";
const CUSTOM_FIELD: &str = "Tr-custom";

pub static IDF_RULES: [FieldRule; 5] = [
    FieldRule::range("P3_10", "P3,10", 50.0, 100.0),
    FieldRule::at_least("Tr", "Return period", 2.0),
    FieldRule::at_least(CUSTOM_FIELD, "Custom return period", 2.0),
    FieldRule::above("d", "Duration", 0.0),
    FieldRule::at_least("Ac", "Catchment area", 0.0).optional(),
];

const TR_PROMPT: &str = "Return period is very high (>100 years). \
                         The equations were calibrated up to Tr=100. Continue anyway?";

/// IDF intensity form. Posts to either IDF endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IdfCalculator {
    pub endpoint: IdfEndpoint,
    pub locale: NumberLocale,
}

impl IdfCalculator {
    pub fn new(endpoint: IdfEndpoint, locale: NumberLocale) -> Self {
        Self { endpoint, locale }
    }

    /// Field holding the return period: the radio, or the custom input.
    fn return_period_field(form: &FormState) -> &'static str {
        if form.get("Tr") == CUSTOM_RETURN_PERIOD {
            CUSTOM_FIELD
        } else {
            "Tr"
        }
    }
}

impl Calculator for IdfCalculator {
    type Request = IdfRequest;
    type Response = IdfResult;
    type Display = IdfDisplay;

    fn field_rules(&self) -> &'static [FieldRule] {
        &IDF_RULES
    }

    fn rules_for(&self, form: &FormState) -> Vec<FieldRule> {
        let skip = if Self::return_period_field(form) == CUSTOM_FIELD {
            "Tr"
        } else {
            CUSTOM_FIELD
        };
        IDF_RULES.iter().filter(|r| r.id != skip).copied().collect()
    }

    fn soft_limits_for(&self, form: &FormState) -> Vec<SoftLimit> {
        vec![
            SoftLimit {
                id: Self::return_period_field(form),
                above: 100.0,
                prompt: TR_PROMPT,
            },
            SoftLimit {
                id: "d",
                above: 24.0,
                prompt: "Duration is longer than 24 hours. Continue?",
            },
            SoftLimit {
                id: "Ac",
                above: 300.0,
                prompt: "Catchment area is very large (>300 km²). Continue?",
            },
        ]
    }

    fn idle_label(&self) -> &'static str {
        "Calculate Intensity"
    }

    fn build_request(&self, form: &FormState) -> Option<IdfRequest> {
        Some(IdfRequest {
            p3_10: form.number("P3_10")?,
            tr: form.number(Self::return_period_field(form))?,
            d: form.number("d")?,
            ac: form.optional_number("Ac"),
        })
    }

    async fn send<B: Backend>(&self, backend: &B, request: &IdfRequest) -> Result<IdfResult> {
        backend.calculate_idf(self.endpoint, request).await
    }

    fn render(&self, response: &IdfResult) -> IdfDisplay {
        render_idf(response, self.locale)
    }
}
