//! Thin JSON request wrapper over `reqwest`.
//!
//! Every request carries `Content-Type: application/json`, merged with any
//! caller headers. Error bodies are expected to be JSON with a `message`,
//! `detail` or `error` string; the first one present becomes the error
//! message. `reqwest` runs on both native targets and `wasm32` (via
//! `fetch`), so the CLI and the web apps share this client.

use crate::config::ClientConfig;
use crate::error::{ApiError, Result, GENERIC_FAILURE};
use serde_json::Value;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const JSON_MIME: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
}

/// Per-request overrides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post(body: Value) -> Self {
        Self {
            method: Method::Post,
            body: Some(body),
            headers: Vec::new(),
        }
    }
}

/// The JSON content type followed by the caller's headers.
///
/// A caller header with the same (case-insensitive) name replaces the default.
pub fn merged_headers(custom: &[(String, String)]) -> Vec<(String, String)> {
    let mut headers = vec![(CONTENT_TYPE.to_string(), JSON_MIME.to_string())];
    for (name, value) in custom {
        match headers
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
        {
            Some(slot) => slot.1 = value.clone(),
            None => headers.push((name.clone(), value.clone())),
        }
    }
    headers
}

/// Message reported by an error body. Empty strings are skipped.
pub fn error_message(body: &Value) -> String {
    ["message", "detail", "error"]
        .iter()
        .find_map(|key| {
            body.get(key)
                .and_then(Value::as_str)
                .filter(|msg| !msg.is_empty())
        })
        .unwrap_or(GENERIC_FAILURE)
        .to_string()
}

/// Interpret a response status and raw body.
pub fn response_body(status: u16, text: &str) -> Result<Value> {
    let body: Value = serde_json::from_str(text)?;
    if (200..300).contains(&status) {
        Ok(body)
    } else {
        Err(ApiError::Server {
            status,
            message: error_message(&body),
        })
    }
}

/// Append `path` to `base_url` with exactly one slash between them.
pub fn join_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// HTTP client bound to one backend.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a request and return the parsed JSON body. Failures are logged.
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<Value> {
        let url = join_url(&self.base_url, path);
        let result = self.send(&url, options).await;
        if let Err(e) = &result {
            log::error!("[HidroCalc] request to {} failed: {}", url, e);
        }
        result
    }

    async fn send(&self, url: &str, options: RequestOptions) -> Result<Value> {
        let mut builder = match options.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        };
        for (name, value) in merged_headers(&options.headers) {
            builder = builder.header(name, value);
        }
        if let Some(body) = options.body {
            builder = builder.body(body.to_string());
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        response_body(status, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn content_type_is_always_present() {
        let headers = merged_headers(&[]);
        assert_eq!(
            headers,
            vec![("Content-Type".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn caller_headers_are_merged_not_replacing() {
        let custom = vec![("X-CSRFToken".to_string(), "abc".to_string())];
        let headers = merged_headers(&custom);
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[0].1, "application/json");
        assert_eq!(headers[1], ("X-CSRFToken".to_string(), "abc".to_string()));
    }

    #[test]
    fn caller_can_override_content_type() {
        let custom = vec![("content-type".to_string(), "text/plain".to_string())];
        let headers = merged_headers(&custom);
        assert_eq!(headers.len(), 1);
        assert_eq!(headers[0].1, "text/plain");
    }

    #[test]
    fn success_returns_body() {
        let body = response_body(200, r#"{"Q_ls": 12.5}"#).unwrap();
        assert_eq!(body["Q_ls"], json!(12.5));
    }

    #[test]
    fn error_prefers_message_then_detail_then_error() {
        let err = response_body(400, r#"{"message": "m", "detail": "d"}"#).unwrap_err();
        assert_eq!(err.to_string(), "m");
        let err = response_body(500, r#"{"detail": "boom"}"#).unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 500,
                message: "boom".to_string()
            }
        );
        let err = response_body(400, r#"{"error": "P3_10 out of range"}"#).unwrap_err();
        assert_eq!(err.to_string(), "P3_10 out of range");
    }

    #[test]
    fn empty_message_falls_through_to_detail() {
        let err = response_body(400, r#"{"message": "", "detail": "Tr must be positive"}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "Tr must be positive");
        let err = response_body(400, r#"{"message": "", "error": ""}"#).unwrap_err();
        assert_eq!(err.to_string(), GENERIC_FAILURE);
    }

    #[test]
    fn error_without_known_field_is_generic() {
        let err = response_body(404, r#"{"code": 7}"#).unwrap_err();
        assert_eq!(err.to_string(), GENERIC_FAILURE);
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn non_json_body_is_a_parse_error() {
        let err = response_body(502, "<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
        let err = response_body(200, "").unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[test]
    fn joins_urls() {
        assert_eq!(
            join_url("http://localhost:8000/", "/api/rational"),
            "http://localhost:8000/api/rational"
        );
        assert_eq!(
            join_url("http://localhost:8000", "api/v1/projects"),
            "http://localhost:8000/api/v1/projects"
        );
        assert_eq!(join_url("http://a", "https://b/api"), "https://b/api");
    }
}
