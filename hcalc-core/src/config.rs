//! Client configuration shared by the web apps and the CLI.

use crate::format::NumberLocale;
use std::fmt;
use std::str::FromStr;

/// Backend used when nothing else is configured (the Django dev server).
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Which of the two IDF calculation endpoints a form posts to.
///
/// Both exist on the backend with identical request and response shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdfEndpoint {
    /// `POST /api/calculate-idf`
    Legacy,
    /// `POST /calculators/api/idf/calculate`
    #[default]
    Calculators,
}

impl IdfEndpoint {
    pub fn path(&self) -> &'static str {
        match self {
            IdfEndpoint::Legacy => "/api/calculate-idf",
            IdfEndpoint::Calculators => "/calculators/api/idf/calculate",
        }
    }
}

impl fmt::Display for IdfEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdfEndpoint::Legacy => f.write_str("legacy"),
            IdfEndpoint::Calculators => f.write_str("calculators"),
        }
    }
}

impl FromStr for IdfEndpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(IdfEndpoint::Legacy),
            "" | "calculators" => Ok(IdfEndpoint::Calculators),
            other => Err(format!("unknown IDF endpoint: {}", other)),
        }
    }
}

/// Settings for talking to the backend and displaying results.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Scheme and authority that endpoint paths are appended to.
    pub base_url: String,
    pub locale: NumberLocale,
    pub idf_endpoint: IdfEndpoint,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_locale(mut self, locale: NumberLocale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_idf_endpoint(mut self, endpoint: IdfEndpoint) -> Self {
        self.idf_endpoint = endpoint;
        self
    }

    /// Build from what a page exposes: its origin and the mount element's
    /// `data-locale` / `data-idf-endpoint` attributes. Unparseable
    /// attributes are logged and fall back to the defaults.
    pub fn from_page(
        origin: Option<&str>,
        locale: Option<&str>,
        idf_endpoint: Option<&str>,
    ) -> Self {
        let mut config = match origin.map(str::trim) {
            Some(origin) if !origin.is_empty() && origin != "null" => ClientConfig::new(origin),
            _ => ClientConfig::default(),
        };
        if let Some(tag) = locale {
            match tag.parse() {
                Ok(locale) => config.locale = locale,
                Err(e) => log::warn!("ignoring data-locale: {}", e),
            }
        }
        if let Some(name) = idf_endpoint {
            match name.parse() {
                Ok(endpoint) => config.idf_endpoint = endpoint,
                Err(e) => log::warn!("ignoring data-idf-endpoint: {}", e),
            }
        }
        config
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            locale: NumberLocale::default(),
            idf_endpoint: IdfEndpoint::default(),
        }
    }
}
