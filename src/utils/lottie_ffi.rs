// ============================================================================
// LOTTIE FFI - lottie-web through assets/js/bridge.js
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_name = playLottie)]
    fn play_lottie_js(container_id: &str, animation_url: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_name = destroyLottie)]
    fn destroy_lottie_js(container_id: &str) -> Result<(), JsValue>;
}

/// Starts a looping animation inside the container. The fallback content
/// stays visible until the animation file has loaded.
pub fn play_lottie(container_id: &str, animation_url: &str) {
    if let Err(e) = play_lottie_js(container_id, animation_url) {
        log::warn!("⚠️ playLottie failed for {}: {:?}", animation_url, e);
    }
}

pub fn destroy_lottie(container_id: &str) {
    if let Err(e) = destroy_lottie_js(container_id) {
        log::warn!("⚠️ destroyLottie failed: {:?}", e);
    }
}
