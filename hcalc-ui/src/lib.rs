//! Shared Dioxus components and Plotly bridge for HidroCalc apps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers that hand chart specs to Plotly via `js_sys::eval()`
//! - `page`: access to the host page (origin, mount attributes, alert/confirm)
//! - `state`: signal-backed implementations of the core view traits
//! - `components`: Reusable RSX components (fields, results, pickers, charts)

pub mod components;
pub mod js_bridge;
pub mod page;
pub mod state;
