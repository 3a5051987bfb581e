use std::time::Duration;
use wasm_bindgen::JsValue;
use web_sys as web;

#[inline]
pub fn supports_vibration(navigator: &web::Navigator) -> bool {
    js_sys::Reflect::has(navigator, &JsValue::from_str("vibrate")).unwrap_or(false)
}

// Best-effort pulse; silently skipped where the Vibration API is missing.
pub fn vibrate(duration: Duration) {
    let Some(window) = web::window() else {
        return;
    };
    let navigator = window.navigator();
    if !supports_vibration(&navigator) {
        return;
    }
    let ms = duration.as_millis().min(u32::MAX as u128) as u32;
    if !navigator.vibrate_with_duration(ms) {
        log::debug!("[haptics] vibrate({}) rejected", ms);
    }
}
