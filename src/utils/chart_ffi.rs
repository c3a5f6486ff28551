// ============================================================================
// CHART FFI - Chart.js through assets/js/bridge.js
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_name = renderLineChart)]
    fn render_line_chart_js(canvas_id: &str, config_json: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_name = destroyChart)]
    fn destroy_chart_js(canvas_id: &str) -> Result<(), JsValue>;
}

/// Builds a fresh chart on the canvas. The bridge destroys any previous
/// instance on the same canvas first.
pub fn render_line_chart(canvas_id: &str, config_json: &str) {
    if let Err(e) = render_line_chart_js(canvas_id, config_json) {
        log::error!("❌ renderLineChart failed: {:?}", e);
    }
}

pub fn destroy_chart(canvas_id: &str) {
    if let Err(e) = destroy_chart_js(canvas_id) {
        log::warn!("⚠️ destroyChart failed: {:?}", e);
    }
}
