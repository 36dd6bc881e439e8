//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Plotly.js is loaded by the host page with a plain `<script>` tag and is
//! reached through the `Plotly` global. Chart specs are serialized with
//! serde and embedded in the evaluated snippet as an object literal.

use hcalc_core::charts::ChartSpec;

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('[HidroCalc] JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a string as a JS string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "''".to_string())
}

/// Draw `spec` into the element with id `container_id`.
///
/// Uses a polling loop to wait for Plotly to load and the container DOM
/// element to exist before rendering. Replaces any chart already there.
pub fn render_chart(container_id: &str, spec: &ChartSpec) {
    let spec_json = match serde_json::to_string(spec) {
        Ok(json) => json,
        Err(e) => {
            log::error!("[HidroCalc] failed to serialize chart for {}: {}", container_id, e);
            return;
        }
    };
    let id = js_string(container_id);
    call_js(&format!(
        r#"
        (function() {{
            var spec = {spec_json};
            var poll = setInterval(function() {{
                if (typeof Plotly !== 'undefined' && document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        Plotly.newPlot({id}, spec.data, spec.layout, spec.config);
                    }} catch(e) {{ console.error('[HidroCalc] Plotly.newPlot error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    let id = js_string(container_id);
    call_js(&format!(
        "var el = document.getElementById({id}); \
         if (el) {{ if (typeof Plotly !== 'undefined') Plotly.purge(el); el.innerHTML = ''; }}",
    ));
}
