//! The host page: origin, mount-element attributes and blocking dialogs.

use hcalc_core::ClientConfig;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;

/// Attribute on an element by id, if both exist.
pub fn attribute(element_id: &str, name: &str) -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(element_id)?
        .get_attribute(name)
}

pub fn origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

/// Client config for an app mounted at `root_id`.
pub fn client_config(root_id: &str) -> ClientConfig {
    let config = ClientConfig::from_page(
        origin().as_deref(),
        attribute(root_id, "data-locale").as_deref(),
        attribute(root_id, "data-idf-endpoint").as_deref(),
    );
    log::info!(
        "[HidroCalc] backend {} (locale {}, IDF endpoint {})",
        config.base_url,
        config.locale,
        config.idf_endpoint
    );
    config
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("[HidroCalc] alert failed: {:?}", e);
        }
    }
}

/// `window.confirm`; anything but an explicit OK counts as declined.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Read a global the server template set on `window`, e.g. `hyetographData`.
pub fn window_json<T: DeserializeOwned>(name: &str) -> Option<T> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(name)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    let json: String = js_sys::JSON::stringify(&value).ok()?.into();
    match serde_json::from_str(&json) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            log::warn!("[HidroCalc] window.{} has an unexpected shape: {}", name, e);
            None
        }
    }
}
