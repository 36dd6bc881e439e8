use crate::api::Backend;
use crate::controller::Calculator;
use crate::error::Result;
use crate::form::FormState;
use crate::format::NumberLocale;
use crate::models::{QuickRationalRequest, QuickRationalResult};
use crate::results::{render_quick_rational, QuickRationalDisplay};
use crate::validate::{FieldRule, SoftLimit};

pub const QUICK_RATIONAL_FORM_ID: &str = "rational-form";

pub static QUICK_RATIONAL_RULES: [FieldRule; 3] = [
    FieldRule::range("C", "Coefficient C", 0.0, 1.0),
    FieldRule::above("I", "Intensity", 0.0),
    FieldRule::above("A", "Area", 0.0),
];

static HIGH_INTENSITY: SoftLimit = SoftLimit {
    id: "I",
    above: 500.0,
    prompt: "The intensity looks very high (>500 mm/h). Continue?",
};

/// Single-card rational form posting to `/api/calculate-rational`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QuickRationalCalculator {
    pub locale: NumberLocale,
}

impl QuickRationalCalculator {
    pub fn new(locale: NumberLocale) -> Self {
        Self { locale }
    }
}

impl Calculator for QuickRationalCalculator {
    type Request = QuickRationalRequest;
    type Response = QuickRationalResult;
    type Display = QuickRationalDisplay;

    fn field_rules(&self) -> &'static [FieldRule] {
        &QUICK_RATIONAL_RULES
    }

    fn soft_limits_for(&self, _form: &FormState) -> Vec<SoftLimit> {
        vec![HIGH_INTENSITY]
    }

    fn idle_label(&self) -> &'static str {
        "Calculate Discharge"
    }

    fn build_request(&self, form: &FormState) -> Option<QuickRationalRequest> {
        Some(QuickRationalRequest {
            c: form.number("C")?,
            i_mmh: form.number("I")?,
            a_ha: form.number("A")?,
        })
    }

    async fn send<B: Backend>(
        &self,
        backend: &B,
        request: &QuickRationalRequest,
    ) -> Result<QuickRationalResult> {
        backend.calculate_quick_rational(request).await
    }

    fn render(&self, response: &QuickRationalResult) -> QuickRationalDisplay {
        render_quick_rational(response, self.locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{FormController, SubmitOutcome};
    use crate::testing::{MockBackend, RecordingView};
    use serde_json::json;

    const PATH: &str = "/api/calculate-rational";

    fn backend() -> MockBackend {
        let backend = MockBackend::new();
        backend.reply(
            PATH,
            json!({"Q_ls": 1250.0, "Q_m3s": 1.25, "inputs": {"C": 0.9, "I_mmh": 600, "A_ha": 8.33}}),
        );
        backend
    }

    fn form(intensity: &str) -> FormState {
        FormState::new()
            .with("C", "0.9")
            .with("I", intensity)
            .with("A", "8.33")
    }

    #[tokio::test]
    async fn zero_intensity_is_rejected() {
        let backend = backend();
        let mut view = RecordingView::new();
        let mut controller = FormController::new(QuickRationalCalculator::default());

        let outcome = controller.submit(&form("0"), &mut view, &backend).await;

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert_eq!(
            view.errors.message("I"),
            Some("Intensity must be greater than 0")
        );
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn declined_high_intensity_cancels() {
        let backend = backend();
        let mut view = RecordingView::declining();
        let mut controller = FormController::new(QuickRationalCalculator::default());

        let outcome = controller.submit(&form("600"), &mut view, &backend).await;

        assert_eq!(outcome, SubmitOutcome::Cancelled);
        assert_eq!(view.prompts.len(), 1);
        assert!(backend.calls().is_empty());
        assert!(!controller.is_submitting());
    }

    #[tokio::test]
    async fn accepted_high_intensity_proceeds() {
        let backend = backend();
        let mut view = RecordingView::new();
        let mut controller = FormController::new(QuickRationalCalculator::default());

        let outcome = controller.submit(&form("600"), &mut view, &backend).await;

        assert_eq!(outcome, SubmitOutcome::Rendered);
        assert_eq!(view.prompts.len(), 1);
        let display = view.results.unwrap();
        assert_eq!(display.q_ls, "1,250.00");
        assert_eq!(display.q_m3s, "1.2500");
        assert_eq!(display.input_a, "8.33");
        assert_eq!(
            backend.calls()[0].options.body,
            Some(json!({"C": 0.9, "I_mmh": 600.0, "A_ha": 8.33}))
        );
    }

    #[tokio::test]
    async fn normal_intensity_needs_no_prompt() {
        let backend = backend();
        let mut view = RecordingView::new();
        let mut controller = FormController::new(QuickRationalCalculator::default());

        controller.submit(&form("80"), &mut view, &backend).await;

        assert!(view.prompts.is_empty());
        assert!(view.results_visible);
    }
}
