//! Core of the HidroCalc client.
//!
//! Everything that does not touch the browser lives here so the Dioxus apps
//! and the CLI share one implementation:
//!
//! - `http` / `api`: JSON request wrapper over `reqwest` and typed endpoints
//! - `validate` / `form` / `presenter`: field checks and inline error state
//! - `controller` / `calculators`: the idle/submitting submit cycle
//! - `results` / `format`: display records built from API responses
//! - `browser`: cascading project/watershed selection
//! - `charts`: Plotly chart specifications and demo series
//!
//! # Usage
//!
//! ```rust
//! use hcalc_core::validate::validate_number;
//!
//! assert_eq!(validate_number("0.5", Some(0.0), Some(1.0), "C"), None);
//! assert_eq!(
//!     validate_number("abc", Some(0.0), Some(1.0), "X").as_deref(),
//!     Some("X must be a valid number")
//! );
//! ```

pub mod api;
pub mod browser;
pub mod calculators;
pub mod charts;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod format;
pub mod http;
pub mod models;
pub mod presenter;
pub mod results;
pub mod validate;

pub use api::Backend;
pub use config::ClientConfig;
pub use error::{ApiError, Result};
pub use http::HttpClient;

#[cfg(test)]
pub(crate) mod testing;
