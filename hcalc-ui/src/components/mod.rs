//! Reusable Dioxus RSX components for HidroCalc apps.

mod chart_container;
mod chart_header;
mod coefficient_table;
mod error_display;
mod field_input;
mod loading_spinner;
mod notifications;
mod project_picker;
mod result_row;
mod submit_button;
mod warnings_list;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use coefficient_table::CoefficientTable;
pub use error_display::ErrorDisplay;
pub use field_input::FieldInput;
pub use loading_spinner::LoadingSpinner;
pub use notifications::Notifications;
pub use project_picker::ProjectPicker;
pub use result_row::ResultRow;
pub use submit_button::SubmitButton;
pub use warnings_list::WarningsList;
