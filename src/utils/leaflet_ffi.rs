// ============================================================================
// LEAFLET FFI - Foreign Function Interface to assets/js/bridge.js
// ============================================================================
// Only wrappers around the JS functions. No state, no logic.
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_name = initWorldMap)]
    fn init_world_map_js(container_id: &str, settings_json: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_name = setMapMarkers)]
    fn set_map_markers_js(container_id: &str, markers_json: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_name = refreshMapSize)]
    fn refresh_map_size_js(container_id: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_name = destroyWorldMap)]
    fn destroy_world_map_js(container_id: &str) -> Result<(), JsValue>;
}

/// Creates the Leaflet map with its tile layer (no-op if it already exists)
pub fn init_world_map(container_id: &str, settings_json: &str) {
    if let Err(e) = init_world_map_js(container_id, settings_json) {
        log::error!("❌ initWorldMap failed: {:?}", e);
    }
}

/// Replaces every marker on the map
pub fn set_map_markers(container_id: &str, markers_json: &str) {
    if let Err(e) = set_map_markers_js(container_id, markers_json) {
        log::error!("❌ setMapMarkers failed: {:?}", e);
    }
}

pub fn refresh_map_size(container_id: &str) {
    if let Err(e) = refresh_map_size_js(container_id) {
        log::warn!("⚠️ refreshMapSize failed: {:?}", e);
    }
}

pub fn destroy_world_map(container_id: &str) {
    if let Err(e) = destroy_world_map_js(container_id) {
        log::warn!("⚠️ destroyWorldMap failed: {:?}", e);
    }
}
