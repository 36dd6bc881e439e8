//! Typed access to the HidroCalc backend.
//!
//! [`Backend`] has a single required method, the raw JSON `request`. The
//! endpoint helpers are provided methods on top of it, so [`HttpClient`]
//! and test doubles share the same paths and (de)serialization.

use crate::config::IdfEndpoint;
use crate::error::Result;
use crate::http::{HttpClient, RequestOptions};
use crate::models::{
    DesignStorm, DesignStormId, Hydrograph, IdfRequest, IdfResult, Listing, NewDesignStorm,
    NewHydrograph, NewProject, NewWatershed, Project, ProjectId, QuickRationalRequest,
    QuickRationalResult, RationalRequest, RationalResult, RunoffCoefficients, Watershed,
    WatershedId,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

pub const QUICK_RATIONAL_PATH: &str = "/api/calculate-rational";
pub const RATIONAL_PATH: &str = "/api/rational";
pub const RUNOFF_COEFFICIENTS_PATH: &str = "/api/runoff-coefficients";
pub const P3_10_VALUES_PATH: &str = "/calculators/api/p3-10-values";
pub const PROJECTS_PATH: &str = "/api/v1/projects";

pub fn watersheds_path(project_id: ProjectId) -> String {
    format!("/api/v1/projects/{}/watersheds", project_id)
}

pub fn design_storms_path(watershed_id: WatershedId) -> String {
    format!("/api/v1/watersheds/{}/design-storms", watershed_id)
}

pub fn hydrographs_path(design_storm_id: DesignStormId) -> String {
    format!("/api/v1/design-storms/{}/hydrographs", design_storm_id)
}

// Futures stay !Send: under wasm32 they wrap JS promises.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// Send one request and return the JSON body.
    async fn request(&self, path: &str, options: RequestOptions) -> Result<Value>;

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.request(path, RequestOptions::get()).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// GET a list endpoint, paginated or not.
    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let listing: Listing<T> = self.get_json(path).await?;
        Ok(listing.into_vec())
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let body = serde_json::to_value(body)?;
        let reply = self.request(path, RequestOptions::post(body)).await?;
        Ok(serde_json::from_value(reply)?)
    }

    async fn calculate_quick_rational(
        &self,
        req: &QuickRationalRequest,
    ) -> Result<QuickRationalResult> {
        self.post_json(QUICK_RATIONAL_PATH, req).await
    }

    async fn calculate_rational(&self, req: &RationalRequest) -> Result<RationalResult> {
        self.post_json(RATIONAL_PATH, req).await
    }

    async fn calculate_idf(&self, endpoint: IdfEndpoint, req: &IdfRequest) -> Result<IdfResult> {
        self.post_json(endpoint.path(), req).await
    }

    async fn runoff_coefficients(&self) -> Result<RunoffCoefficients> {
        self.get_json(RUNOFF_COEFFICIENTS_PATH).await
    }

    /// Reference P3,10 depths by station name.
    async fn p3_10_values(&self) -> Result<BTreeMap<String, f64>> {
        self.get_json(P3_10_VALUES_PATH).await
    }

    async fn projects(&self) -> Result<Vec<Project>> {
        self.get_list(PROJECTS_PATH).await
    }

    async fn create_project(&self, project: &NewProject) -> Result<Project> {
        self.post_json(PROJECTS_PATH, project).await
    }

    async fn watersheds(&self, project_id: ProjectId) -> Result<Vec<Watershed>> {
        self.get_list(&watersheds_path(project_id)).await
    }

    async fn create_watershed(
        &self,
        project_id: ProjectId,
        watershed: &NewWatershed,
    ) -> Result<Watershed> {
        self.post_json(&watersheds_path(project_id), watershed).await
    }

    async fn design_storms(&self, watershed_id: WatershedId) -> Result<Vec<DesignStorm>> {
        self.get_list(&design_storms_path(watershed_id)).await
    }

    async fn create_design_storm(
        &self,
        watershed_id: WatershedId,
        storm: &NewDesignStorm,
    ) -> Result<DesignStorm> {
        self.post_json(&design_storms_path(watershed_id), storm).await
    }

    async fn save_hydrograph(
        &self,
        design_storm_id: DesignStormId,
        hydrograph: &NewHydrograph,
    ) -> Result<Hydrograph> {
        self.post_json(&hydrographs_path(design_storm_id), hydrograph)
            .await
    }
}

impl Backend for HttpClient {
    async fn request(&self, path: &str, options: RequestOptions) -> Result<Value> {
        HttpClient::request(self, path, options).await
    }
}
