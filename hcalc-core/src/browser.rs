//! Cascading project / watershed selection backed by the persistence API.
//!
//! `ProjectBrowser` owns the current selection and the watersheds of the
//! selected project, so picking a watershed needs no second request.

use crate::api::Backend;
use crate::error::Result;
use crate::models::{
    DesignStorm, DesignStormId, Hydrograph, NewDesignStorm, NewHydrograph, NewProject,
    NewWatershed, Project, ProjectId, Watershed, WatershedId,
};

/// Option value that stands for "create a new one".
pub const NEW_OPTION: &str = "new";

pub const PROJECT_PLACEHOLDER: &str = "-- Select an existing project --";
pub const WATERSHED_PLACEHOLDER: &str = "-- Select a watershed --";
pub const NEW_PROJECT_LABEL: &str = "+ Create new project";
pub const NEW_WATERSHED_LABEL: &str = "+ Create new watershed";

pub const NO_WATERSHEDS: &str = "This project has no watersheds yet";

/// Form fields a selected watershed fills in.
pub const AREA_FIELD: &str = "A_ha";
pub const COEFFICIENT_FIELD: &str = "C";
pub const TC_FIELD: &str = "tc_horas";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    /// Rendered bold; used for the "new" entry.
    pub emphasized: bool,
}

impl SelectOption {
    fn placeholder(label: &str) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
            emphasized: false,
        }
    }

    fn create_new(label: &str) -> Self {
        Self {
            value: NEW_OPTION.to_string(),
            label: label.to_string(),
            emphasized: true,
        }
    }

    fn item(id: i64, label: String) -> Self {
        Self {
            value: id.to_string(),
            label,
            emphasized: false,
        }
    }
}

/// A select's value, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    None,
    New,
    Id(i64),
}

impl Choice {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "" => Choice::None,
            NEW_OPTION => Choice::New,
            other => match other.parse() {
                Ok(id) => Choice::Id(id),
                Err(_) => {
                    log::warn!("unrecognised selection value {:?}", other);
                    Choice::None
                }
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "notification notification-success",
            NotificationKind::Error => "notification notification-error",
            NotificationKind::Info => "notification notification-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: &str) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.to_string(),
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.to_string(),
        }
    }

    pub fn info(message: &str) -> Self {
        Self {
            kind: NotificationKind::Info,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InfoRow {
    pub label: &'static str,
    pub value: String,
}

/// Contents of the watershed info panel.
#[derive(Debug, Clone, PartialEq)]
pub struct WatershedInfo {
    pub rows: Vec<InfoRow>,
}

impl WatershedInfo {
    pub fn from_watershed(watershed: &Watershed) -> Self {
        let mut rows = vec![InfoRow {
            label: "Name",
            value: watershed.name.clone(),
        }];
        if let Some(area) = watershed.area_ha {
            rows.push(InfoRow {
                label: "Area",
                value: format!("{} ha", area),
            });
        }
        if let Some(tc) = watershed.tc_hours {
            rows.push(InfoRow {
                label: "Concentration time",
                value: format!("{} hours", tc),
            });
        }
        if let Some(nc) = watershed.nc_scs {
            rows.push(InfoRow {
                label: "Curve number (NC)",
                value: nc.to_string(),
            });
        }
        if let Some(c) = watershed.c_rational {
            rows.push(InfoRow {
                label: "Runoff coefficient (C)",
                value: c.to_string(),
            });
        }
        Self { rows }
    }

    pub fn row(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.label == label)
            .map(|row| row.value.as_str())
    }
}

/// The last selection made in each select. Later selections overwrite.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub project: Option<ProjectId>,
    pub watershed: Option<Watershed>,
    /// Where hydrographs are saved.
    pub design_storm: Option<DesignStormId>,
}

/// What the browser needs from the page.
pub trait BrowserView {
    fn set_project_options(&mut self, options: Vec<SelectOption>);

    fn set_watershed_options(&mut self, options: Vec<SelectOption>, enabled: bool);

    fn show_watershed_info(&mut self, info: &WatershedInfo);

    fn clear_watershed_info(&mut self);

    /// Overwrite a calculator input with a stored value.
    fn prefill(&mut self, field_id: &str, value: &str);

    fn notify(&mut self, notification: Notification);

    fn alert(&mut self, message: &str);
}

#[derive(Debug, Clone, Default)]
pub struct ProjectBrowser {
    selection: Selection,
    watersheds: Vec<Watershed>,
}

impl ProjectBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn watersheds(&self) -> &[Watershed] {
        &self.watersheds
    }

    /// Fill the project select. A failed load leaves only the fixed entries.
    pub async fn load_projects<B: Backend, V: BrowserView>(
        &mut self,
        backend: &B,
        view: &mut V,
    ) -> Vec<Project> {
        let projects = match backend.projects().await {
            Ok(projects) => {
                log::info!("loaded {} projects", projects.len());
                projects
            }
            Err(e) => {
                log::error!("failed to load projects: {}", e);
                view.notify(Notification::error("Failed to load projects"));
                Vec::new()
            }
        };

        let mut options = vec![SelectOption::placeholder(PROJECT_PLACEHOLDER)];
        options.extend(
            projects
                .iter()
                .map(|p| SelectOption::item(p.id, p.name.clone())),
        );
        options.push(SelectOption::create_new(NEW_PROJECT_LABEL));
        view.set_project_options(options);
        projects
    }

    pub async fn select_project<B: Backend, V: BrowserView>(
        &mut self,
        value: &str,
        backend: &B,
        view: &mut V,
    ) {
        let choice = Choice::parse(value);
        self.selection.project = match choice {
            Choice::Id(id) => Some(id),
            _ => None,
        };
        self.selection.watershed = None;
        self.selection.design_storm = None;
        self.watersheds.clear();
        view.clear_watershed_info();

        let placeholder = vec![SelectOption::placeholder(WATERSHED_PLACEHOLDER)];
        match choice {
            Choice::Id(project_id) => {
                self.watersheds = self.load_watersheds(project_id, backend, view).await;
                let mut options = placeholder;
                options.extend(
                    self.watersheds
                        .iter()
                        .map(|w| SelectOption::item(w.id, watershed_label(w))),
                );
                options.push(SelectOption::create_new(NEW_WATERSHED_LABEL));
                view.set_watershed_options(options, true);
            }
            Choice::New => {
                view.set_watershed_options(placeholder, false);
                view.alert("Creating a new project is not available yet");
            }
            Choice::None => view.set_watershed_options(placeholder, false),
        }
    }

    async fn load_watersheds<B: Backend, V: BrowserView>(
        &self,
        project_id: ProjectId,
        backend: &B,
        view: &mut V,
    ) -> Vec<Watershed> {
        match backend.watersheds(project_id).await {
            Ok(watersheds) => {
                if watersheds.is_empty() {
                    view.notify(Notification::info(NO_WATERSHEDS));
                }
                watersheds
            }
            Err(e) => {
                log::error!("failed to load watersheds of project {}: {}", project_id, e);
                view.notify(Notification::error("Failed to load watersheds"));
                Vec::new()
            }
        }
    }

    /// Pick a watershed from the loaded list and copy its attributes into
    /// the calculator form.
    pub fn select_watershed<V: BrowserView>(&mut self, value: &str, view: &mut V) {
        match Choice::parse(value) {
            Choice::New => view.alert("Creating a new watershed is not available yet"),
            Choice::None => {
                self.selection.watershed = None;
                view.clear_watershed_info();
            }
            Choice::Id(id) => match self.watersheds.iter().find(|w| w.id == id).cloned() {
                Some(watershed) => {
                    self.prefill_from(&watershed, view);
                    self.selection.watershed = Some(watershed);
                }
                None => {
                    log::warn!("watershed {} is not in the loaded list", id);
                    self.selection.watershed = None;
                    view.clear_watershed_info();
                }
            },
        }
    }

    fn prefill_from<V: BrowserView>(&self, watershed: &Watershed, view: &mut V) {
        let stored = [
            (AREA_FIELD, watershed.area_ha),
            (COEFFICIENT_FIELD, watershed.c_rational),
            (TC_FIELD, watershed.tc_hours),
        ];
        for (field_id, value) in stored {
            if let Some(value) = value {
                view.prefill(field_id, &value.to_string());
            }
        }
        view.show_watershed_info(&WatershedInfo::from_watershed(watershed));
    }

    /// Record a design storm choice. `new` and unparsable values clear it.
    pub fn select_design_storm(&mut self, value: &str) {
        self.selection.design_storm = match Choice::parse(value) {
            Choice::Id(id) => Some(id),
            _ => None,
        };
    }

    /// Design storms of the selected watershed; empty when none is selected.
    pub async fn load_design_storms<B: Backend, V: BrowserView>(
        &self,
        backend: &B,
        view: &mut V,
    ) -> Vec<DesignStorm> {
        let Some(watershed_id) = self.selection.watershed.as_ref().map(|w| w.id) else {
            return Vec::new();
        };
        match backend.design_storms(watershed_id).await {
            Ok(storms) => storms,
            Err(e) => {
                log::error!("failed to load design storms of watershed {}: {}", watershed_id, e);
                view.notify(Notification::error("Failed to load design storms"));
                Vec::new()
            }
        }
    }

    pub async fn create_project<B: Backend, V: BrowserView>(
        &self,
        project: &NewProject,
        backend: &B,
        view: &mut V,
    ) -> Result<Project> {
        let result = backend.create_project(project).await;
        report(view, &result, "Project created", "Failed to create project");
        result
    }

    pub async fn create_watershed<B: Backend, V: BrowserView>(
        &self,
        project_id: ProjectId,
        watershed: &NewWatershed,
        backend: &B,
        view: &mut V,
    ) -> Result<Watershed> {
        let result = backend.create_watershed(project_id, watershed).await;
        report(view, &result, "Watershed created", "Failed to create watershed");
        result
    }

    pub async fn create_design_storm<B: Backend, V: BrowserView>(
        &self,
        watershed_id: WatershedId,
        storm: &NewDesignStorm,
        backend: &B,
        view: &mut V,
    ) -> Result<DesignStorm> {
        let result = backend.create_design_storm(watershed_id, storm).await;
        report(
            view,
            &result,
            "Design storm created",
            "Failed to create design storm",
        );
        result
    }

    pub async fn save_hydrograph<B: Backend, V: BrowserView>(
        &self,
        design_storm_id: DesignStormId,
        hydrograph: &NewHydrograph,
        backend: &B,
        view: &mut V,
    ) -> Result<Hydrograph> {
        let result = backend.save_hydrograph(design_storm_id, hydrograph).await;
        report(
            view,
            &result,
            "Hydrograph saved to the database",
            "Failed to save hydrograph",
        );
        result
    }
}

/// `"<name> (<area> ha)"`, or just the name when the area is unknown.
fn watershed_label(watershed: &Watershed) -> String {
    match watershed.area_ha {
        Some(area) => format!("{} ({} ha)", watershed.name, area),
        None => watershed.name.clone(),
    }
}

fn report<T, V: BrowserView>(view: &mut V, result: &Result<T>, ok: &str, failed: &str) {
    match result {
        Ok(_) => {
            log::info!("{}", ok);
            view.notify(Notification::success(ok));
        }
        Err(e) => {
            log::error!("{}: {}", failed, e);
            view.notify(Notification::error(failed));
        }
    }
}
