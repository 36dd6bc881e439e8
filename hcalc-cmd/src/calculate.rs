//! Calculator subcommands.
//!
//! Arguments are loaded into a `FormState` exactly as the web forms hold
//! them, so the CLI gets the same validation messages and soft-limit
//! prompts before anything is sent.

use crate::terminal::{outcome_lines, Report, TerminalView};
use crate::Settings;
use hcalc_core::calculators::{IdfCalculator, QuickRationalCalculator, RationalCalculator};
use hcalc_core::controller::{Calculator, FormController};
use hcalc_core::form::FormState;
use hcalc_core::HttpClient;
use log::info;

pub fn rational_form(
    coefficient: &str,
    intensity: &str,
    area: &str,
    tc: Option<&str>,
    description: Option<&str>,
) -> FormState {
    FormState::new()
        .with("C", coefficient)
        .with("I_mmh", intensity)
        .with("A_ha", area)
        .with("tc_horas", tc.unwrap_or_default())
        .with("description", description.unwrap_or_default())
}

pub fn quick_rational_form(coefficient: &str, intensity: &str, area: &str) -> FormState {
    FormState::new()
        .with("C", coefficient)
        .with("I", intensity)
        .with("A", area)
}

pub fn idf_form(p3_10: &str, return_period: &str, duration: &str, area: Option<&str>) -> FormState {
    FormState::new()
        .with("P3_10", p3_10)
        .with("Tr", return_period)
        .with("d", duration)
        .with("Ac", area.unwrap_or_default())
}

/// Validate, confirm, send and print one calculation.
async fn run_calculation<C>(settings: &Settings, calculator: C, form: FormState) -> anyhow::Result<()>
where
    C: Calculator,
    C::Display: Report,
{
    let config = settings.client_config();
    let client = HttpClient::from_config(&config);
    info!("{} against {}", calculator.idle_label(), client.base_url());

    let mut controller = FormController::new(calculator);
    let mut view = TerminalView::new(settings.confirm());
    let outcome = controller.submit(&form, &mut view, &client).await;

    for line in outcome_lines(outcome, &view)? {
        println!("{}", line);
    }
    Ok(())
}

pub async fn run_rational(settings: &Settings, form: FormState) -> anyhow::Result<()> {
    run_calculation(settings, RationalCalculator::new(settings.locale), form).await
}

pub async fn run_quick_rational(settings: &Settings, form: FormState) -> anyhow::Result<()> {
    run_calculation(settings, QuickRationalCalculator::new(settings.locale), form).await
}

pub async fn run_idf(settings: &Settings, form: FormState) -> anyhow::Result<()> {
    let calculator = IdfCalculator::new(settings.idf_endpoint, settings.locale);
    run_calculation(settings, calculator, form).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::Confirm;
    use hcalc_core::controller::Begin;
    use hcalc_core::results::IdfDisplay;

    #[test]
    fn blank_optional_arguments_stay_blank() {
        let form = rational_form("0.5", "90", "1", None, None);
        assert_eq!(form.get("description"), "");
        assert_eq!(form.get("tc_horas"), "");

        let form = idf_form("78", "10", "1", None);
        assert_eq!(form.optional_number("Ac"), None);
    }

    #[test]
    fn rational_arguments_are_validated_like_the_form() {
        let mut controller = FormController::new(QuickRationalCalculator::default());
        let mut view = TerminalView::new(Confirm::Never);
        let form = quick_rational_form("1.5", "abc", "2");

        let begin = controller.begin(&form, &mut view);
        assert!(matches!(begin, Begin::Invalid));
        assert!(view.errors.is_active("C"));
        assert!(view.errors.is_active("I"));
        assert!(!view.errors.is_active("A"));
    }

    #[test]
    fn long_storm_is_declined_without_a_terminal() {
        let mut controller = FormController::new(IdfCalculator::default());
        let mut view: TerminalView<IdfDisplay> = TerminalView::new(Confirm::Never);
        let form = idf_form("78", "10", "36", None);

        assert!(matches!(controller.begin(&form, &mut view), Begin::Cancelled));
        assert!(!controller.is_submitting());
    }

    #[test]
    fn yes_accepts_soft_limits() {
        let mut controller = FormController::new(IdfCalculator::default());
        let mut view: TerminalView<IdfDisplay> = TerminalView::new(Confirm::Always);
        let form = idf_form("78", "200", "36", Some("500"));

        match controller.begin(&form, &mut view) {
            Begin::Ready(request) => {
                assert_eq!(request.tr, 200.0);
                assert_eq!(request.ac, Some(500.0));
            }
            other => panic!("expected a request, got {:?}", other),
        }
    }
}
