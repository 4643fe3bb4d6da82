// Utility helpers shared by the UI components

use wasm_bindgen::JsValue;

/// Formats an epoch-milliseconds timestamp as local wall-clock "H:MM".
pub fn format_clock(epoch_ms: f64) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(epoch_ms));
    format!("{}:{:02}", date.get_hours() as u32, date.get_minutes() as u32)
}

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}
