//! Terminal rendition of the form and browser views.

use hcalc_core::browser::{BrowserView, Notification, NotificationKind, SelectOption, WatershedInfo};
use hcalc_core::controller::SubmitOutcome;
use hcalc_core::presenter::{FieldErrors, FormView, SubmitControl};
use hcalc_core::results::{IdfDisplay, QuickRationalDisplay, RationalDisplay};
use std::io::{BufRead, Write};

/// How confirmation prompts are answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirm {
    /// `--yes`
    Always,
    /// stdin is not interactive
    Never,
    /// Ask on stdin
    Ask,
}

/// Collects what a controller shows so the command can print it afterwards.
#[derive(Debug)]
pub struct TerminalView<D> {
    confirm: Confirm,
    pub errors: FieldErrors,
    pub results: Option<D>,
    pub alerts: Vec<String>,
    pub notifications: Vec<Notification>,
}

impl<D> TerminalView<D> {
    pub fn new(confirm: Confirm) -> Self {
        Self {
            confirm,
            errors: FieldErrors::new(),
            results: None,
            alerts: Vec::new(),
            notifications: Vec::new(),
        }
    }

    /// `field: message` for every error still shown.
    pub fn error_lines(&self) -> Vec<String> {
        self.errors
            .fields()
            .filter_map(|field| {
                self.errors
                    .message(field)
                    .map(|message| format!("{}: {}", field, message))
            })
            .collect()
    }
}

/// Whether a typed answer accepts the prompt.
pub fn accepts(answer: &str) -> bool {
    matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "s" | "si" | "sí"
    )
}

fn ask(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    if std::io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    match std::io::stdin().lock().read_line(&mut answer) {
        Ok(_) => accepts(&answer),
        Err(e) => {
            log::warn!("could not read answer: {}", e);
            false
        }
    }
}

impl<D: Clone> FormView<D> for TerminalView<D> {
    fn show_error(&mut self, field_id: &str, message: &str) {
        self.errors.show_error(field_id, message);
    }

    fn clear_field_error(&mut self, field_id: &str) {
        self.errors.clear_field(field_id);
    }

    fn clear_errors(&mut self) {
        self.errors.clear_errors();
    }

    fn set_submit_control(&mut self, control: SubmitControl) {
        log::debug!("{}", control.label);
    }

    fn show_results(&mut self, display: &D) {
        self.results = Some(display.clone());
    }

    fn hide_results(&mut self) {
        self.results = None;
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        match self.confirm {
            Confirm::Always => {
                log::info!("accepted: {}", message);
                true
            }
            Confirm::Never => {
                log::warn!("declined (not interactive, pass --yes): {}", message);
                false
            }
            Confirm::Ask => ask(message),
        }
    }
}

impl<D> BrowserView for TerminalView<D> {
    fn set_project_options(&mut self, options: Vec<SelectOption>) {
        log::debug!("{} project options", options.len());
    }

    fn set_watershed_options(&mut self, options: Vec<SelectOption>, enabled: bool) {
        log::debug!("{} watershed options (enabled: {})", options.len(), enabled);
    }

    fn show_watershed_info(&mut self, info: &WatershedInfo) {
        log::debug!("watershed info: {} rows", info.rows.len());
    }

    fn clear_watershed_info(&mut self) {}

    fn prefill(&mut self, field_id: &str, value: &str) {
        log::debug!("prefill {} = {}", field_id, value);
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

/// Printable lines for a rendered display record.
pub trait Report {
    fn lines(&self) -> Vec<String>;
}

fn row(label: &str, value: &str, unit: &str) -> String {
    format!("{:<22} {} {}", label, value, unit).trim_end().to_string()
}

fn warning_lines(warnings: &Option<Vec<String>>) -> Vec<String> {
    warnings
        .iter()
        .flatten()
        .map(|warning| format!("warning: {}", warning))
        .collect()
}

impl Report for RationalDisplay {
    fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            row("Q", &self.q_ls, "L/s"),
            row("Q", &self.q_m3s, "m³/s"),
            row("Q", &self.q_m3h, "m³/h"),
            row("C", &self.input_c, ""),
            row("I", &self.input_i, ""),
            row("A", &self.input_a_ha, ""),
            row("A", &self.input_a_m2, "m²"),
        ];
        lines.extend(warning_lines(&self.warnings));
        if let Some(description) = &self.description {
            lines.push(row("Description", description, ""));
        }
        lines
    }
}

impl Report for QuickRationalDisplay {
    fn lines(&self) -> Vec<String> {
        vec![
            row("Q", &self.q_ls, "L/s"),
            row("Q", &self.q_m3s, "m³/s"),
            row("C", &self.input_c, ""),
            row("I", &self.input_i, "mm/h"),
            row("A", &self.input_a, "ha"),
        ]
    }
}

impl Report for IdfDisplay {
    fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            row("Intensity I", &self.i_mmh, "mm/h"),
            row("Depth P", &self.p_mm, "mm"),
            row("CT (return period)", &self.ct, ""),
            row("CD (duration)", &self.cd, ""),
            row("CA (area)", &self.ca, ""),
            row("P3,10", &self.p3_10, "mm"),
            row("Tr", &self.tr, "years"),
            row("d", &self.d_hours, "h"),
            row("Ac", &self.ac, ""),
        ];
        lines.extend(warning_lines(&self.warnings));
        lines
    }
}

/// Turn a finished submission into output lines, or the error to exit with.
pub fn outcome_lines<D: Report>(
    outcome: SubmitOutcome,
    view: &TerminalView<D>,
) -> anyhow::Result<Vec<String>> {
    match outcome {
        SubmitOutcome::Rendered => Ok(view
            .results
            .as_ref()
            .map(Report::lines)
            .unwrap_or_default()),
        SubmitOutcome::Cancelled => Ok(vec!["Calculation cancelled.".to_string()]),
        SubmitOutcome::Invalid => {
            anyhow::bail!("invalid input:\n  {}", view.error_lines().join("\n  "))
        }
        SubmitOutcome::Failed(message) => anyhow::bail!("calculation failed: {}", message),
        SubmitOutcome::Busy => anyhow::bail!("a calculation is already running"),
    }
}

/// Notification lines tagged `[ok]`, `[error]` or `[info]`.
pub fn notification_lines(notifications: &[Notification]) -> Vec<String> {
    notifications
        .iter()
        .map(|n| match n.kind {
            NotificationKind::Success => format!("[ok] {}", n.message),
            NotificationKind::Error => format!("[error] {}", n.message),
            NotificationKind::Info => format!("[info] {}", n.message),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_answers() {
        assert!(accepts("y\n"));
        assert!(accepts(" YES "));
        assert!(accepts("si"));
        assert!(!accepts(""));
        assert!(!accepts("n"));
    }

    #[test]
    fn non_interactive_prompts_are_declined() {
        let mut always: TerminalView<()> = TerminalView::new(Confirm::Always);
        let mut never: TerminalView<()> = TerminalView::new(Confirm::Never);
        assert!(FormView::<()>::confirm(&mut always, "Continue?"));
        assert!(!FormView::<()>::confirm(&mut never, "Continue?"));
    }

    #[test]
    fn invalid_outcome_lists_field_errors() {
        let mut view: TerminalView<QuickRationalDisplay> = TerminalView::new(Confirm::Never);
        view.show_error("C", "C must be a valid number");
        view.show_error("A", "A must be greater than 0");

        let err = outcome_lines(SubmitOutcome::Invalid, &view).unwrap_err();
        let text = err.to_string();
        assert!(text.contains("A: A must be greater than 0"));
        assert!(text.contains("C: C must be a valid number"));
    }

    #[test]
    fn rendered_outcome_prints_results() {
        let mut view: TerminalView<QuickRationalDisplay> = TerminalView::new(Confirm::Never);
        view.show_results(&QuickRationalDisplay {
            q_ls: "12.50".to_string(),
            q_m3s: "0.013".to_string(),
            input_c: "0.5".to_string(),
            input_i: "90".to_string(),
            input_a: "1".to_string(),
        });

        let lines = outcome_lines(SubmitOutcome::Rendered, &view).unwrap();
        assert_eq!(lines[0], format!("{:<22} 12.50 L/s", "Q"));
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn cancelled_is_not_an_error() {
        let view: TerminalView<QuickRationalDisplay> = TerminalView::new(Confirm::Never);
        let lines = outcome_lines(SubmitOutcome::Cancelled, &view).unwrap();
        assert_eq!(lines, vec!["Calculation cancelled.".to_string()]);
        assert!(outcome_lines(SubmitOutcome::Failed("Boom".into()), &view).is_err());
    }

    #[test]
    fn warnings_and_description_follow_the_rows() {
        let display = RationalDisplay {
            q_ls: "1".into(),
            q_m3s: "2".into(),
            q_m3h: "3".into(),
            input_c: "0.5".into(),
            input_i: "90 mm/h".into(),
            input_a_ha: "1 ha".into(),
            input_a_m2: "10000".into(),
            warnings: Some(vec!["Area exceeds the recommended limit".into()]),
            description: Some("Lot 4".into()),
        };
        let lines = display.lines();
        assert_eq!(lines[7], "warning: Area exceeds the recommended limit");
        assert!(lines[8].ends_with("Lot 4"));
    }

    #[test]
    fn notifications_are_tagged() {
        let lines = notification_lines(&[
            Notification::success("Hydrograph saved to the database"),
            Notification::error("Failed to save hydrograph"),
            Notification::info("This project has no watersheds yet"),
        ]);
        assert_eq!(lines[0], "[ok] Hydrograph saved to the database");
        assert_eq!(lines[1], "[error] Failed to save hydrograph");
        assert_eq!(lines[2], "[info] This project has no watersheds yet");
    }
}
